//! Commands — the effects a behaviour can request for the current tick.

use dg_core::TileId;

/// An effect requested by a behaviour during the decide phase.
///
/// Commands are produced by [`Behaviour::perform`][crate::Behaviour::perform]
/// and consumed by the simulation loop (dg-sim), which forwards them to the
/// engine-side position sink.  The sink is assumed to always succeed; no
/// error channel crosses that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Relocate the agent to the world-space position of `tile`.
    ///
    /// The tile has already been validated as a dungeon tile by the issuing
    /// behaviour; the apply phase re-checks defensively before writing.
    MoveTo { tile: TileId },
}
