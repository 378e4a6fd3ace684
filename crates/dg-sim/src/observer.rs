//! Observer hooks for instrumenting a simulation run.

use dg_agent::AgentStore;
use dg_core::{AgentId, Tick, TileId};
use dg_grid::DungeonGraph;

/// Callbacks fired by [`Sim`][crate::Sim] at well-defined points of the tick
/// loop.
///
/// Every method has a no-op default, so implementors override only what they
/// need.  Hooks receive shared borrows; an observer can record state but
/// never steer the simulation.
pub trait SimObserver {
    /// Called at the top of every tick, before any decisions are made.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick completes.  `acted` is the number of agents
    /// whose selector produced a command this tick.
    fn on_tick_end(&mut self, _tick: Tick, _acted: usize) {}

    /// An agent moved to `tile` during the apply phase.
    fn on_move(&mut self, _agent: AgentId, _tile: TileId, _tick: Tick) {}

    /// An agent picked up the treasure on `tile`.
    fn on_pickup(&mut self, _agent: AgentId, _tile: TileId, _value: u32, _tick: Tick) {}

    /// Periodic state snapshot, fired every `snapshot_interval_ticks` ticks.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore, _graph: &DungeonGraph) {}

    /// Called once after the final tick has run.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// An observer that does nothing.  Useful when you just want the end state.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
