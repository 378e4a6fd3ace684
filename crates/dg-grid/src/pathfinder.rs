//! Pathfinding trait and default A* implementation.
//!
//! # Pluggability
//!
//! Behaviours call pathfinding via the [`PathFinder`] trait, so applications
//! can swap in custom implementations (jump-point search, flow fields,
//! precomputed distance maps) without touching the framework core.  The
//! default [`AStarPathFinder`] is sufficient for dungeon-scale grids.
//!
//! # Cost units
//!
//! All costs are in **milli-cells** (u32) internally: one orthogonal step
//! costs 1000.  Scaling to integers keeps the frontier ordering exact and
//! deterministic (no float comparisons in the heap) while leaving headroom
//! to express fractional heuristic values.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use dg_core::{GridPoint, TileId};

use crate::graph::DungeonGraph;
use crate::GridError;

/// Cost of moving onto an adjacent dungeon tile, in milli-cells.
const STEP_COST: u32 = 1_000;

/// Default cap on A* expansions.  Generously above anything a dungeon-scale
/// grid can produce; exists so a pathological graph cannot stall a tick.
pub const DEFAULT_MAX_EXPANSIONS: usize = 100_000;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a pathfinding query: the full tile sequence from start to
/// goal, inclusive of both.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Tiles to visit in order.  `tiles[0]` is the start, `tiles.last()` the
    /// goal.
    pub tiles: Vec<TileId>,
}

impl Path {
    /// Number of moves needed to walk the path (tiles minus one).
    #[inline]
    pub fn steps(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }

    /// `true` if the start and goal are the same tile.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.steps() == 0
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable pathfinding engine over the dungeon graph.
///
/// Implementations must be pure: no query may mutate the graph or retain
/// state between calls, so repeated identical queries return identical
/// results and the graph can be lent freely during a tick.
pub trait PathFinder: Send + Sync {
    /// Compute a full shortest path from `from` to `to`.
    ///
    /// `from == to` yields a trivial single-tile path.  Unreachable goals
    /// (disconnected components, non-dungeon goal) yield
    /// [`GridError::NoPath`].
    fn find_path(
        &self,
        graph: &DungeonGraph,
        from: TileId,
        to: TileId,
    ) -> Result<Path, GridError>;

    /// The single next tile to step onto along a shortest path toward `to`.
    ///
    /// Edge cases are pinned down precisely:
    /// - `from == to` → [`GridError::NoPath`] (there is no step to take);
    /// - `from` adjacent to `to` → `Ok(to)`.
    fn next_step(
        &self,
        graph: &DungeonGraph,
        from: TileId,
        to: TileId,
    ) -> Result<TileId, GridError> {
        if from == to {
            return Err(GridError::NoPath { from, to });
        }
        let path = self.find_path(graph, from, to)?;
        path.tiles
            .get(1)
            .copied()
            .ok_or(GridError::NoPath { from, to })
    }
}

// ── Heuristic ─────────────────────────────────────────────────────────────────

/// Distance estimate used to order the A* frontier.
///
/// Movement is 4-connected with unit step cost, so Manhattan distance is the
/// exact unobstructed path length — admissible and the tightest bound, hence
/// the default.  Euclidean distance matches the behaviour of engines that
/// measure straight-line tile distance; it is a strict lower bound of
/// Manhattan and therefore also admissible here, just less informed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    /// Estimated remaining cost in milli-cells.  Euclidean truncates toward
    /// zero so rounding can never turn the estimate into an overestimate.
    #[inline]
    fn millis(self, from: GridPoint, to: GridPoint) -> u32 {
        match self {
            Heuristic::Manhattan => from.manhattan_distance(to).saturating_mul(STEP_COST),
            Heuristic::Euclidean => (from.euclidean_distance(to) * STEP_COST as f32) as u32,
        }
    }
}

// ── AStarPathFinder ───────────────────────────────────────────────────────────

/// Standard A* over the dungeon tile arena.
///
/// Unit edge cost; only dungeon tiles are ever expanded.  The frontier is a
/// binary min-heap with **lazy deletion**: re-discovering a tile at a lower
/// cost pushes a fresh entry, and stale entries are skipped when dequeued
/// rather than updated in place.
#[derive(Copy, Clone, Debug)]
pub struct AStarPathFinder {
    pub heuristic: Heuristic,
    /// Abort the search after this many expansions with
    /// [`GridError::ExpansionLimit`].  Callers treat the abort like no-path.
    pub max_expansions: usize,
}

impl AStarPathFinder {
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

impl Default for AStarPathFinder {
    fn default() -> Self {
        Self::new(Heuristic::default())
    }
}

impl PathFinder for AStarPathFinder {
    fn find_path(
        &self,
        graph: &DungeonGraph,
        from: TileId,
        to: TileId,
    ) -> Result<Path, GridError> {
        astar(graph, from, to, self.heuristic, self.max_expansions)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar(
    graph: &DungeonGraph,
    from: TileId,
    to: TileId,
    heuristic: Heuristic,
    max_expansions: usize,
) -> Result<Path, GridError> {
    if !graph.contains(from) {
        return Err(GridError::TileNotFound(from));
    }
    if !graph.contains(to) {
        return Err(GridError::TileNotFound(to));
    }
    if from == to {
        return Ok(Path { tiles: vec![from] });
    }

    let goal_pos = graph.pos(to);
    let n = graph.tile_count();
    // dist[t] = best known cost (milli-cells) to reach t.
    let mut dist = vec![u32::MAX; n];
    // prev[t] = tile we reached t from; TileId::INVALID for unreached tiles.
    let mut prev = vec![TileId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap keyed by f = g + h.  Reverse makes BinaryHeap (max) behave as
    // a min-heap; the secondary TileId key gives deterministic tie-breaking.
    let mut frontier: BinaryHeap<Reverse<(u32, TileId)>> = BinaryHeap::new();
    frontier.push(Reverse((heuristic.millis(graph.pos(from), goal_pos), from)));

    let mut expansions = 0usize;

    while let Some(Reverse((f, tile))) = frontier.pop() {
        if tile == to {
            return Ok(reconstruct(prev, from, to));
        }

        // Lazy deletion: skip entries whose recorded f no longer matches the
        // best known cost for this tile.
        let g = dist[tile.index()];
        if f > g.saturating_add(heuristic.millis(graph.pos(tile), goal_pos)) {
            continue;
        }

        expansions += 1;
        if expansions > max_expansions {
            return Err(GridError::ExpansionLimit {
                limit: max_expansions,
            });
        }

        // Non-dungeon neighbours are pruned here and never enqueued.
        for neighbor in graph.dungeon_neighbors(tile) {
            let new_g = g.saturating_add(STEP_COST);
            if new_g < dist[neighbor.index()] {
                dist[neighbor.index()] = new_g;
                prev[neighbor.index()] = tile;
                let h = heuristic.millis(graph.pos(neighbor), goal_pos);
                frontier.push(Reverse((new_g.saturating_add(h), neighbor)));
            }
        }
    }

    Err(GridError::NoPath { from, to })
}

/// Walk the came-from back-pointers from goal to start and reverse.
fn reconstruct(prev: Vec<TileId>, from: TileId, to: TileId) -> Path {
    let mut tiles = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        tiles.push(cur);
    }
    tiles.reverse();
    Path { tiles }
}
