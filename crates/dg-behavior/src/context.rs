//! Read-only simulation state passed to every behaviour callback.

use dg_agent::AgentStore;
use dg_core::{AgentId, Tick, TileId};
use dg_grid::DungeonGraph;

/// A read-only snapshot of the simulation state passed to every
/// [`Behaviour`][crate::Behaviour] callback.
///
/// `TickContext` is built once per tick by dg-sim and shared (immutably)
/// across all agents during the decide phase.  No heap allocation happens
/// between ticks.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's decide phase.  dg-sim
/// never allows mutable access to the graph or the store while a
/// `TickContext` is live.
pub struct TickContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// How many wall-clock seconds one tick represents.
    pub tick_duration_secs: f32,

    /// The dungeon graph, read-only for the whole decide phase.
    pub graph: &'a DungeonGraph,

    /// Read-only view of every agent's position.
    pub agents: &'a AgentStore,
}

impl<'a> TickContext<'a> {
    /// Build a new context for a single tick.
    #[inline]
    pub fn new(
        tick:               Tick,
        tick_duration_secs: f32,
        graph:              &'a DungeonGraph,
        agents:             &'a AgentStore,
    ) -> Self {
        Self { tick, tick_duration_secs, graph, agents }
    }

    /// The tile the agent is currently standing on, by coordinate lookup of
    /// its world position.  `None` if the agent is off the grid.
    #[inline]
    pub fn current_tile(&self, agent: AgentId) -> Option<TileId> {
        self.graph.tile_at_world(self.agents.position(agent))
    }
}
