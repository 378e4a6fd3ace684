//! Builder for assembling a ready-to-run [`Sim`].

use dg_agent::AgentStoreBuilder;
use dg_behavior::BehaviourSelector;
use dg_core::{AgentId, SimConfig, TileId};
use dg_grid::DungeonGraph;

use crate::{Sim, SimError, SimResult};

/// Assembles a [`Sim`] from a config, a dungeon graph, and a spawn list.
///
/// Each [`spawn`](Self::spawn) call adds one agent: the tile it starts on
/// and the behaviour selector that will drive it.  Agents receive ascending
/// `AgentId`s in spawn order.
///
/// # Usage
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, graph)
///     .spawn(entrance, thief_selector)
///     .spawn(entrance, guard_selector)
///     .build()?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    graph:  DungeonGraph,
    spawns: Vec<(TileId, BehaviourSelector)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, graph: DungeonGraph) -> Self {
        Self {
            config,
            graph,
            spawns: Vec::new(),
        }
    }

    /// Add one agent spawning on `tile`, driven by `selector`.
    pub fn spawn(mut self, tile: TileId, selector: BehaviourSelector) -> Self {
        self.spawns.push((tile, selector));
        self
    }

    /// Validate the spawn list and construct the simulation.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidSpawn`] if any spawn tile is unknown to the graph
    /// or is not walkable dungeon.
    pub fn build(self) -> SimResult<Sim> {
        for (i, (tile, _)) in self.spawns.iter().enumerate() {
            if !self.graph.contains(*tile) || !self.graph.is_dungeon(*tile) {
                return Err(SimError::InvalidSpawn {
                    agent: AgentId(i as u32),
                    tile:  *tile,
                });
            }
        }

        let count = self.spawns.len();
        let (mut agents, rngs) = AgentStoreBuilder::new(count, self.config.seed).build();

        let mut selectors = Vec::with_capacity(count);
        for (i, (tile, selector)) in self.spawns.into_iter().enumerate() {
            agents.world_pos[i] = self.graph.world_pos(tile);
            selectors.push(selector);
        }

        let clock = self.config.make_clock();
        Ok(Sim {
            config: self.config,
            clock,
            graph: self.graph,
            agents,
            rngs,
            selectors,
        })
    }
}
