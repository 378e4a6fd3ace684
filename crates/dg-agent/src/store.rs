//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The decision phase of the tick loop needs `&mut AgentRngs` (exclusive
//! mutable access to each agent's RNG) and `&AgentStore` (shared read access
//! to positions) simultaneously.  Rust's borrow checker forbids this if both
//! live inside a single struct.  Keeping RNGs in a separate `AgentRngs`
//! struct resolves the conflict cleanly with plain disjoint field borrows.

use dg_core::{AgentId, AgentRng, WorldPoint};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&AgentStore` borrows during the decision
/// phase.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state the core cares about.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.world_pos[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Positions are written only by the simulation's apply phase (the position
/// sink); behaviours read them through a shared borrow.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current world-space position of each agent.  The agent's tile is
    /// derived from this by coordinate lookup on the dungeon graph.
    pub world_pos: Vec<WorldPoint>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Current world position of one agent.
    #[inline]
    pub fn position(&self, agent: AgentId) -> WorldPoint {
        self.world_pos[agent.index()]
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(count: usize) -> Self {
        Self {
            count,
            world_pos: vec![WorldPoint::default(); count],
        }
    }
}
