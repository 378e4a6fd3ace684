//! Error types for simulation construction and execution.

use dg_core::{AgentId, TileId};
use thiserror::Error;

/// Errors produced by [`SimBuilder`][crate::SimBuilder] and
/// [`Sim`][crate::Sim].
#[derive(Error, Debug)]
pub enum SimError {
    /// A configuration value was invalid or inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A spawn tile was not a walkable dungeon tile.
    #[error("agent {agent} cannot spawn on tile {tile}: not a dungeon tile")]
    InvalidSpawn { agent: AgentId, tile: TileId },
}

pub type SimResult<T> = Result<T, SimError>;
