//! The `Behaviour` trait — the main extension point for user code.

use dg_core::{AgentId, AgentRng};

use crate::{Command, TickContext};

/// One candidate action an agent may take on a tick.
///
/// A behaviour couples a *condition* (may this action run?) with an *effect*
/// (what happens when it runs) and a declarative cooldown.  Behaviours are
/// constructed once at agent-setup time and queried every tick by the
/// [`BehaviourSelector`][crate::BehaviourSelector]; they hold no per-tick
/// path state — destinations are recomputed on every invocation, trading a
/// little CPU for immunity to stale plans.
///
/// # Contract
///
/// - [`condition`][Self::condition] must be a pure predicate: no state
///   mutation, cheap enough to evaluate every tick.
/// - [`perform`][Self::perform] is invoked only when `condition` returned
///   `true` for this tick's selection.  Returning `None` is a deliberate
///   no-op (e.g. no valid destination) and must not be treated as an error.
/// - [`delay_ticks`][Self::delay_ticks] is declarative; enforcement is the
///   selector's job, not the behaviour's.
///
/// # Thread safety
///
/// `Send + Sync` so selectors can be moved into whatever drives the tick
/// loop; all mutable per-agent state lives in the store, not the behaviour.
pub trait Behaviour: Send + Sync {
    /// `true` if this behaviour may act for `agent` this tick.
    fn condition(&self, agent: AgentId, ctx: &TickContext<'_>) -> bool;

    /// Cooldown in ticks before this behaviour may be selected again for the
    /// same agent.  Defaults to 1 (eligible every tick).
    fn delay_ticks(&self) -> u64 {
        1
    }

    /// Execute the behaviour, returning the command to apply — or `None` for
    /// a silent no-op when the resolved destination turns out invalid.
    fn perform(
        &self,
        agent: AgentId,
        ctx:   &TickContext<'_>,
        rng:   &mut AgentRng,
    ) -> Option<Command>;
}
