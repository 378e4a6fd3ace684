//! Grid-subsystem error type.

use thiserror::Error;

use dg_core::TileId;

/// Errors produced by `dg-grid`.
///
/// All variants are recoverable: a failed pathfinding query means "stay put
/// this tick", never a fatal condition.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("no path from {from} to {to}")]
    NoPath { from: TileId, to: TileId },

    #[error("tile {0} not found in graph")]
    TileNotFound(TileId),

    #[error("search expansion limit of {limit} reached")]
    ExpansionLimit { limit: usize },
}

pub type GridResult<T> = Result<T, GridError>;
