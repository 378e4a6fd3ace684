//! `dg-core` — foundational types for the `rust_dg` dungeon simulation
//! framework.
//!
//! This crate is a dependency of every other `dg-*` crate.  It intentionally
//! has no `dg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `TileId`                                   |
//! | [`grid`]    | `GridPoint`, `WorldPoint`, `Direction`                |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]   | `DgError`, `DgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DgError, DgResult};
pub use grid::{Direction, GridPoint, WorldPoint};
pub use ids::{AgentId, TileId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
