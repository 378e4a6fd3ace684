//! Nearest-treasure movement policy.

use dg_core::{AgentId, TileId};

use crate::{MovePolicy, TickContext};

/// Targets the treasure tile closest to the agent by straight-line grid
/// distance.
///
/// Ties are broken by insertion order of the treasure index: the first
/// treasure placed wins.  Entries whose tile is no longer a dungeon tile are
/// skipped — an inconsistent index must degrade gracefully, never fault.
///
/// Combine with [`MoveBehaviour`][crate::MoveBehaviour]:
///
/// ```rust,ignore
/// let chase = MoveBehaviour::new(NearestTreasure).with_delay_ticks(2);
/// ```
pub struct NearestTreasure;

impl MovePolicy for NearestTreasure {
    /// Move while there is at least one live treasure left to pick up.
    fn should_move(&self, _agent: AgentId, ctx: &TickContext<'_>) -> bool {
        ctx.graph
            .treasure_tiles()
            .iter()
            .any(|&(tile, _)| ctx.graph.is_dungeon(tile))
    }

    fn target_tile(&self, agent: AgentId, ctx: &TickContext<'_>) -> Option<TileId> {
        let current = ctx.current_tile(agent)?;
        let here = ctx.graph.pos(current);

        let mut best: Option<(TileId, f32)> = None;
        for &(tile, _value) in ctx.graph.treasure_tiles() {
            if !ctx.graph.is_dungeon(tile) {
                continue;
            }
            let d = ctx.graph.pos(tile).euclidean_distance(here);
            // Strict < keeps the earliest-placed treasure on exact ties.
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((tile, d));
            }
        }
        best.map(|(tile, _)| tile)
    }
}
