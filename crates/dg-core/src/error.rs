//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into `DgError`
//! via `From` impls, or keep them separate and wrap `DgError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{AgentId, TileId};

/// The top-level error type for `dg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DgError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("tile {0} not found")]
    TileNotFound(TileId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `dg-*` crates.
pub type DgResult<T> = Result<T, DgError>;
