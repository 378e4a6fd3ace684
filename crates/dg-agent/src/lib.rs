//! `dg-agent` — agent storage for the rust_dg framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA positions), `AgentRngs`        |
//! | [`builder`] | `AgentStoreBuilder`                              |
//!
//! Agent state is deliberately minimal: the core only ever needs an agent's
//! world-space position (its current tile is derived by coordinate lookup on
//! the dungeon graph).  Anything engine-side — sprites, health, inventory —
//! stays on the engine side of the boundary.

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use store::{AgentRngs, AgentStore};
