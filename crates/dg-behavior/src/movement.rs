//! Movement behaviours: the `MovePolicy` trait and the `MoveBehaviour`
//! adapter that turns a target-selection policy into a pathfinding behaviour.

use dg_core::{AgentId, AgentRng, TileId};
use dg_grid::{AStarPathFinder, PathFinder};

use crate::{Behaviour, Command, TickContext};

// ── MovePolicy ────────────────────────────────────────────────────────────────

/// Chooses *where* a moving agent wants to go; [`MoveBehaviour`] handles
/// *how* to get there.
///
/// Policies answer two questions per tick: should the agent move at all, and
/// toward which tile.  Both must be pure reads of the context.
pub trait MovePolicy: Send + Sync {
    /// The movement gate — becomes the behaviour's condition.
    fn should_move(&self, agent: AgentId, ctx: &TickContext<'_>) -> bool;

    /// The tile the agent ultimately wants to reach.
    ///
    /// `None` means "no target available right now"; the move degrades to a
    /// silent no-op rather than an error, even if `should_move` just
    /// returned `true` (the world may be inconsistent mid-frame).
    fn target_tile(&self, agent: AgentId, ctx: &TickContext<'_>) -> Option<TileId>;
}

// ── MoveBehaviour ─────────────────────────────────────────────────────────────

/// A behaviour that walks the agent one step per activation toward the tile
/// chosen by its policy.
///
/// Each activation resolves the agent's current tile, asks the policy for a
/// target, and takes the pathfinder's next step toward it.  Any failure
/// along the way — agent off-grid, no target, no path, search budget
/// exhausted, destination not a dungeon tile — results in `None`: the agent
/// simply stays put this tick.
pub struct MoveBehaviour<P: MovePolicy, F: PathFinder = AStarPathFinder> {
    policy:      P,
    pathfinder:  F,
    delay_ticks: u64,
}

impl<P: MovePolicy> MoveBehaviour<P> {
    /// Wrap `policy` with the default A* pathfinder and a 1-tick cooldown.
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            pathfinder: AStarPathFinder::default(),
            delay_ticks: 1,
        }
    }
}

impl<P: MovePolicy, F: PathFinder> MoveBehaviour<P, F> {
    /// Swap in a custom pathfinder implementation.
    pub fn with_pathfinder<G: PathFinder>(self, pathfinder: G) -> MoveBehaviour<P, G> {
        MoveBehaviour {
            policy: self.policy,
            pathfinder,
            delay_ticks: self.delay_ticks,
        }
    }

    /// Set the cooldown between moves — this is how an agent's speed is
    /// expressed (a slower agent moves every N ticks).
    pub fn with_delay_ticks(mut self, delay_ticks: u64) -> Self {
        self.delay_ticks = delay_ticks;
        self
    }
}

impl<P: MovePolicy, F: PathFinder> Behaviour for MoveBehaviour<P, F> {
    fn condition(&self, agent: AgentId, ctx: &TickContext<'_>) -> bool {
        self.policy.should_move(agent, ctx)
    }

    fn delay_ticks(&self) -> u64 {
        self.delay_ticks
    }

    fn perform(
        &self,
        agent: AgentId,
        ctx:   &TickContext<'_>,
        _rng:  &mut AgentRng,
    ) -> Option<Command> {
        let current = ctx.current_tile(agent)?;
        let target = self.policy.target_tile(agent, ctx)?;

        // No path (including target == current) means stay put, not fail.
        let dest = self.pathfinder.next_step(ctx.graph, current, target).ok()?;

        if !ctx.graph.is_dungeon(dest) {
            return None;
        }
        Some(Command::MoveTo { tile: dest })
    }
}
