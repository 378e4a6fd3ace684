//! Builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use dg_agent::AgentStoreBuilder;
//!
//! let (store, rngs) = AgentStoreBuilder::new(8, /*seed=*/ 42).build();
//!
//! assert_eq!(store.count, 8);
//! assert_eq!(rngs.len(),  8);
//!
//! // Fill in actual spawn positions after building.
//! // (All positions start at the WorldPoint default.)
//! ```

use crate::{AgentRngs, AgentStore};

/// Builder for [`AgentStore`] + [`AgentRngs`].
///
/// All arrays are pre-allocated at construction time so later position writes
/// (from the simulation builder's spawn list) are simple indexed assignments,
/// not pushes.
pub struct AgentStoreBuilder {
    count: usize,
    seed: u64,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    /// Construct `AgentStore` and `AgentRngs`.
    ///
    /// All SoA arrays are allocated and filled with default values.
    /// Applications write actual spawn positions directly to the `pub`
    /// fields of the returned `AgentStore`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let store = AgentStore::new(self.count);
        let rngs = AgentRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
