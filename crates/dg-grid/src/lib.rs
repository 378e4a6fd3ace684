//! `dg-grid` — dungeon tile graph, spatial indexing, and pathfinding.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`graph`]      | `DungeonGraph` (arena + R-tree), `DungeonGraphBuilder`    |
//! | [`pathfinder`] | `PathFinder` trait, `Path`, `AStarPathFinder`             |
//! | [`error`]      | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on plain data types.     |

pub mod error;
pub mod graph;
pub mod pathfinder;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use graph::{DungeonGraph, DungeonGraphBuilder};
pub use pathfinder::{AStarPathFinder, Heuristic, Path, PathFinder};
