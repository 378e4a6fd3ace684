//! Random-walk fallback behaviour.

use dg_core::{AgentId, AgentRng, TileId};

use crate::{Behaviour, Command, TickContext};

/// Steps onto a uniformly random adjacent dungeon tile.
///
/// Useful as the low-priority tail of a selector list: whenever every goal
/// behaviour declines, the agent shuffles around instead of freezing.  Draws
/// from the agent's own deterministic RNG, so a given seed always produces
/// the same walk regardless of how many agents share the dungeon.
pub struct Wander {
    delay_ticks: u64,
}

impl Wander {
    pub fn new() -> Self {
        Self { delay_ticks: 1 }
    }

    /// Set the cooldown between steps.
    pub fn with_delay_ticks(mut self, delay_ticks: u64) -> Self {
        self.delay_ticks = delay_ticks;
        self
    }
}

impl Default for Wander {
    fn default() -> Self {
        Self::new()
    }
}

impl Behaviour for Wander {
    /// Always willing to act; whether a step is possible is resolved in
    /// `perform`.
    fn condition(&self, _agent: AgentId, _ctx: &TickContext<'_>) -> bool {
        true
    }

    fn delay_ticks(&self) -> u64 {
        self.delay_ticks
    }

    fn perform(
        &self,
        agent: AgentId,
        ctx:   &TickContext<'_>,
        rng:   &mut AgentRng,
    ) -> Option<Command> {
        let current = ctx.current_tile(agent)?;
        let options: Vec<TileId> = ctx.graph.dungeon_neighbors(current).collect();
        rng.choose(&options).map(|&tile| Command::MoveTo { tile })
    }
}
