//! A no-op behaviour — always selectable, never acts.

use dg_core::{AgentId, AgentRng};

use crate::{Behaviour, Command, TickContext};

/// A [`Behaviour`] whose condition always holds and whose effect is nothing.
///
/// Useful as an explicit idle tail for a selector list (the agent "chooses"
/// to do nothing rather than falling off the end) and as a placeholder in
/// tests.
pub struct NoopBehaviour;

impl Behaviour for NoopBehaviour {
    fn condition(&self, _agent: AgentId, _ctx: &TickContext<'_>) -> bool {
        true
    }

    fn perform(
        &self,
        _agent: AgentId,
        _ctx:   &TickContext<'_>,
        _rng:   &mut AgentRng,
    ) -> Option<Command> {
        None
    }
}
