//! Priority-ordered behaviour selection with cooldown enforcement.

use dg_core::{AgentId, AgentRng, Tick};

use crate::{Behaviour, Command, TickContext};

/// One slot in the priority list: the behaviour plus the earliest tick at
/// which it may be selected again.
struct Entry {
    behaviour:  Box<dyn Behaviour>,
    next_ready: Tick,
}

/// Evaluates a prioritized list of behaviours and executes at most one per
/// tick.
///
/// The list is walked in push order (highest priority first).  An entry is
/// skipped while its cooldown is running or its condition is false; the
/// first eligible entry is *selected*: its cooldown is charged and its
/// `perform` executed.  Selection consumes the tick even when `perform`
/// returns `None` — a behaviour that chose to act but found no valid
/// destination has still taken its turn.
///
/// One selector instance belongs to one agent and lives for the agent's
/// lifetime; the behaviours inside are constructed once at setup.
pub struct BehaviourSelector {
    entries: Vec<Entry>,
}

impl BehaviourSelector {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append `behaviour` at the lowest priority so far.
    pub fn push(&mut self, behaviour: Box<dyn Behaviour>) {
        self.entries.push(Entry {
            behaviour,
            next_ready: Tick::ZERO,
        });
    }

    /// Fluent variant of [`push`](Self::push) for building literal lists.
    pub fn with(mut self, behaviour: Box<dyn Behaviour>) -> Self {
        self.push(behaviour);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one round of selection for `agent`.
    ///
    /// Returns the selected behaviour's command, or `None` when nothing was
    /// eligible or the selected behaviour no-opped.
    pub fn select(
        &mut self,
        agent: AgentId,
        ctx:   &TickContext<'_>,
        rng:   &mut AgentRng,
    ) -> Option<Command> {
        for entry in &mut self.entries {
            if ctx.tick < entry.next_ready {
                continue;
            }
            if !entry.behaviour.condition(agent, ctx) {
                continue;
            }
            // Charge the cooldown before performing; a zero delay still
            // yields at least one tick so a behaviour cannot run twice in
            // the same tick.
            entry.next_ready = ctx.tick + entry.behaviour.delay_ticks().max(1);
            return entry.behaviour.perform(agent, ctx, rng);
        }
        None
    }
}

impl Default for BehaviourSelector {
    fn default() -> Self {
        Self::new()
    }
}
