//! Dungeon graph representation and builder.
//!
//! # Data layout
//!
//! The graph is an **arena**: tiles are addressed by stable `TileId` indices,
//! and every per-tile attribute lives in a flat `Vec` indexed by that ID.
//! Adjacency is a fixed `[TileId; 4]` array per tile, one slot per
//! [`Direction`], with `TileId::INVALID` marking an absent neighbour
//! (out-of-bounds or never added).  No tile owns another; there are no
//! reference cycles to manage and the whole structure is trivially
//! serializable.
//!
//! # Indices
//!
//! Two lookup structures sit beside the arena:
//!
//! - an exact `GridPoint → TileId` map (`rustc-hash`) for "which tile is the
//!   agent standing on" coordinate lookups, and
//! - an R-tree (via `rstar`) over the world positions of **dungeon** tiles,
//!   used to snap arbitrary world-space points (spawn locations) to the
//!   nearest walkable tile.
//!
//! # Mutability
//!
//! The graph is built once and read-mostly thereafter.  The only sanctioned
//! runtime mutation is the treasure index (`place_treasure`/`take_treasure`),
//! which the simulation applies between ticks — never during the decision
//! phase.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use dg_core::{Direction, GridPoint, TileId, WorldPoint};

// ── R-tree tile entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a tile's world-space centre with
/// the associated `TileId`.  Only dungeon tiles are indexed.
#[derive(Clone)]
struct TileEntry {
    point: [f32; 2], // world-space [x, y]
    id: TileId,
}

impl RTreeObject for TileEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for TileEntry {
    /// Squared Euclidean distance in world space.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── DungeonGraph ──────────────────────────────────────────────────────────────

/// The full set of dungeon tiles, their adjacency, and derived indices.
///
/// Arena fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`DungeonGraphBuilder`].
pub struct DungeonGraph {
    // ── Tile arena ────────────────────────────────────────────────────────
    /// Grid coordinate of each tile.  Indexed by `TileId`.
    pub tile_pos: Vec<GridPoint>,

    /// Dungeon-membership flag.  Tiles with `false` exist in the arena (a
    /// generator may register wall tiles) but are never walkable and never
    /// expanded by the pathfinder.
    pub tile_dungeon: Vec<bool>,

    /// Neighbour array per tile, indexed by `Direction as usize`.
    /// `TileId::INVALID` marks an absent neighbour.
    pub tile_neighbors: Vec<[TileId; 4]>,

    // ── Derived indices ───────────────────────────────────────────────────
    /// Exact coordinate lookup.
    by_pos: FxHashMap<GridPoint, TileId>,

    /// Treasure index in insertion order: `(tile, value)`.
    ///
    /// Insertion order is the documented tie-break for nearest-treasure
    /// selection, so this stays a `Vec` rather than a hash map.
    treasure: Vec<(TileId, u32)>,

    /// Spatial index over dungeon-tile world centres.
    spatial_idx: RTree<TileEntry>,

    // ── World mapping ─────────────────────────────────────────────────────
    /// World-space position of the grid origin cell's corner.
    origin: WorldPoint,
    /// Edge length of one tile in world units.
    cell_size: f32,
}

impl DungeonGraph {
    /// Construct an empty graph with no tiles.
    ///
    /// Useful as a placeholder in tests; any lookup returns `None` and any
    /// pathfinding request fails with [`GridError::TileNotFound`]
    /// [`GridError::TileNotFound`]: crate::GridError::TileNotFound
    pub fn empty() -> Self {
        DungeonGraphBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn tile_count(&self) -> usize {
        self.tile_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_pos.is_empty()
    }

    /// `true` if `tile` is a registered arena index.
    #[inline]
    pub fn contains(&self, tile: TileId) -> bool {
        tile.index() < self.tile_pos.len()
    }

    // ── Per-tile attributes ───────────────────────────────────────────────

    /// Grid coordinate of `tile`.
    ///
    /// # Panics
    /// Panics if `tile` is not registered in this graph.
    #[inline]
    pub fn pos(&self, tile: TileId) -> GridPoint {
        self.tile_pos[tile.index()]
    }

    /// Dungeon-membership flag.  Out-of-range IDs read as `false`, so
    /// defensive callers can treat "unknown tile" and "wall" uniformly.
    #[inline]
    pub fn is_dungeon(&self, tile: TileId) -> bool {
        self.tile_dungeon.get(tile.index()).copied().unwrap_or(false)
    }

    /// The neighbour of `tile` in `dir`, if one was linked at build time.
    #[inline]
    pub fn neighbor(&self, tile: TileId, dir: Direction) -> Option<TileId> {
        let id = self.tile_neighbors[tile.index()][dir as usize];
        (id != TileId::INVALID).then_some(id)
    }

    /// Iterator over the present neighbours of `tile`, in `Direction::ALL`
    /// order.  No heap allocation.
    #[inline]
    pub fn neighbors(&self, tile: TileId) -> impl Iterator<Item = TileId> + '_ {
        self.tile_neighbors[tile.index()]
            .into_iter()
            .filter(|&id| id != TileId::INVALID)
    }

    /// Present neighbours that are also dungeon tiles — the expandable set
    /// for pathfinding and wandering.
    #[inline]
    pub fn dungeon_neighbors(&self, tile: TileId) -> impl Iterator<Item = TileId> + '_ {
        self.neighbors(tile).filter(|&id| self.is_dungeon(id))
    }

    // ── Coordinate lookups ────────────────────────────────────────────────

    /// Exact lookup: the tile registered at grid coordinate `pos`.
    #[inline]
    pub fn tile_at(&self, pos: GridPoint) -> Option<TileId> {
        self.by_pos.get(&pos).copied()
    }

    /// World-space centre of `tile`'s cell.
    ///
    /// # Panics
    /// Panics if `tile` is not registered in this graph.
    pub fn world_pos(&self, tile: TileId) -> WorldPoint {
        let p = self.pos(tile);
        WorldPoint::new(
            self.origin.x + (p.x as f32 + 0.5) * self.cell_size,
            self.origin.y + (p.y as f32 + 0.5) * self.cell_size,
        )
    }

    /// The tile whose cell contains the world-space point, if any.
    ///
    /// This is the coordinate lookup that maps an agent's transform position
    /// to its current tile.
    pub fn tile_at_world(&self, world: WorldPoint) -> Option<TileId> {
        let gx = ((world.x - self.origin.x) / self.cell_size).floor() as i32;
        let gy = ((world.y - self.origin.y) / self.cell_size).floor() as i32;
        self.tile_at(GridPoint::new(gx, gy))
    }

    /// The nearest **dungeon** tile to a world-space point.
    ///
    /// Returns `None` only if the graph has no dungeon tiles.  Used to snap
    /// spawn locations onto the walkable grid.
    pub fn snap_to_dungeon(&self, world: WorldPoint) -> Option<TileId> {
        self.spatial_idx
            .nearest_neighbor(&[world.x, world.y])
            .map(|e| e.id)
    }

    // ── Treasure index ────────────────────────────────────────────────────

    /// All treasure entries in insertion order: `(tile, value)`.
    ///
    /// Entries are guaranteed registered at placement time, but callers
    /// should still skip non-dungeon tiles defensively — an external
    /// collaborator may have mutated flags since.
    #[inline]
    pub fn treasure_tiles(&self) -> &[(TileId, u32)] {
        &self.treasure
    }

    /// Number of treasures still in the dungeon.
    #[inline]
    pub fn treasure_count(&self) -> usize {
        self.treasure.len()
    }

    /// `true` if `tile` currently holds a treasure.
    pub fn has_treasure(&self, tile: TileId) -> bool {
        self.treasure.iter().any(|&(t, _)| t == tile)
    }

    /// Place a treasure worth `value` on `tile`.
    ///
    /// Unregistered tiles are ignored (the index must only ever reference
    /// live tiles).  Placing on a tile that already holds treasure replaces
    /// its value in place, keeping the original insertion rank.
    pub fn place_treasure(&mut self, tile: TileId, value: u32) {
        if !self.contains(tile) {
            return;
        }
        match self.treasure.iter_mut().find(|(t, _)| *t == tile) {
            Some(entry) => entry.1 = value,
            None => self.treasure.push((tile, value)),
        }
    }

    /// Remove and return the treasure on `tile` (pickup).
    ///
    /// Preserves the insertion order of the remaining entries.
    pub fn take_treasure(&mut self, tile: TileId) -> Option<u32> {
        let i = self.treasure.iter().position(|&(t, _)| t == tile)?;
        Some(self.treasure.remove(i).1)
    }
}

// ── DungeonGraphBuilder ───────────────────────────────────────────────────────

/// Construct a [`DungeonGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts tiles in any order.  `build()` links the symmetric
/// neighbour arrays from the coordinate map and bulk-loads the R-tree, so
/// adjacency is always consistent with the registered coordinates.
///
/// # Example
///
/// ```
/// use dg_core::GridPoint;
/// use dg_grid::DungeonGraphBuilder;
///
/// let mut b = DungeonGraphBuilder::new();
/// let a = b.add_tile(GridPoint::new(0, 0), true);
/// let c = b.add_tile(GridPoint::new(1, 0), true);
/// let graph = b.build();
/// assert_eq!(graph.tile_count(), 2);
/// assert!(graph.neighbors(a).any(|t| t == c));
/// assert!(graph.neighbors(c).any(|t| t == a));
/// ```
pub struct DungeonGraphBuilder {
    tiles:     Vec<(GridPoint, bool)>,
    by_pos:    FxHashMap<GridPoint, TileId>,
    treasure:  Vec<(TileId, u32)>,
    origin:    WorldPoint,
    cell_size: f32,
}

impl DungeonGraphBuilder {
    pub fn new() -> Self {
        Self {
            tiles:     Vec::new(),
            by_pos:    FxHashMap::default(),
            treasure:  Vec::new(),
            origin:    WorldPoint::new(0.0, 0.0),
            cell_size: 1.0,
        }
    }

    /// Pre-allocate for the expected tile count to reduce reallocations when
    /// bulk-loading a generated dungeon.
    pub fn with_capacity(tiles: usize) -> Self {
        let mut b = Self::new();
        b.tiles = Vec::with_capacity(tiles);
        b.by_pos.reserve(tiles);
        b
    }

    /// Set the grid→world mapping: `origin` is the world-space corner of
    /// cell (0, 0) and `cell_size` the edge length of one tile.
    pub fn world_mapping(mut self, origin: WorldPoint, cell_size: f32) -> Self {
        self.origin = origin;
        self.cell_size = cell_size;
        self
    }

    /// Add a tile at `pos` and return its `TileId` (sequential from 0).
    ///
    /// Adding a second tile at an already-registered coordinate does not
    /// create a duplicate: the existing tile's dungeon flag is updated and
    /// its ID returned.
    pub fn add_tile(&mut self, pos: GridPoint, is_dungeon: bool) -> TileId {
        if let Some(&id) = self.by_pos.get(&pos) {
            self.tiles[id.index()].1 = is_dungeon;
            return id;
        }
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push((pos, is_dungeon));
        self.by_pos.insert(pos, id);
        id
    }

    /// Place a treasure worth `value` on a previously added tile.
    ///
    /// Unregistered IDs are dropped silently, mirroring
    /// [`DungeonGraph::place_treasure`].
    pub fn place_treasure(&mut self, tile: TileId, value: u32) {
        if tile.index() < self.tiles.len() && !self.treasure.iter().any(|&(t, _)| t == tile) {
            self.treasure.push((tile, value));
        }
    }

    /// Look up the ID of a tile added earlier.
    pub fn tile_at(&self, pos: GridPoint) -> Option<TileId> {
        self.by_pos.get(&pos).copied()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Consume the builder and produce a [`DungeonGraph`].
    ///
    /// Time complexity: O(T) neighbour linking (four hash lookups per tile)
    /// + O(D log D) R-tree bulk load, where T = tiles, D = dungeon tiles.
    pub fn build(self) -> DungeonGraph {
        let tile_pos: Vec<GridPoint> = self.tiles.iter().map(|&(p, _)| p).collect();
        let tile_dungeon: Vec<bool> = self.tiles.iter().map(|&(_, d)| d).collect();

        // Link neighbour arrays from the coordinate map.  Symmetry falls out
        // of the construction: if a is north of b, b is south of a.
        let tile_neighbors: Vec<[TileId; 4]> = tile_pos
            .iter()
            .map(|&pos| {
                let mut slots = [TileId::INVALID; 4];
                for dir in Direction::ALL {
                    if let Some(&id) = self.by_pos.get(&pos.step(dir)) {
                        slots[dir as usize] = id;
                    }
                }
                slots
            })
            .collect();

        // Bulk-load the R-tree over dungeon tiles only (faster than D inserts).
        let origin = self.origin;
        let cell_size = self.cell_size;
        let entries: Vec<TileEntry> = tile_pos
            .iter()
            .zip(&tile_dungeon)
            .enumerate()
            .filter(|&(_, (_, &d))| d)
            .map(|(i, (&p, _))| TileEntry {
                point: [
                    origin.x + (p.x as f32 + 0.5) * cell_size,
                    origin.y + (p.y as f32 + 0.5) * cell_size,
                ],
                id: TileId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        DungeonGraph {
            tile_pos,
            tile_dungeon,
            tile_neighbors,
            by_pos: self.by_pos,
            treasure: self.treasure,
            spatial_idx,
            origin,
            cell_size,
        }
    }
}

impl Default for DungeonGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
