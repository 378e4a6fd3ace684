//! The `Sim` struct and its tick loop.

use dg_agent::{AgentRngs, AgentStore};
use dg_behavior::{BehaviourSelector, Command, TickContext};
use dg_core::{AgentId, SimClock, SimConfig, Tick};
use dg_grid::DungeonGraph;

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim` owns all simulation state and drives the three-phase tick loop
/// described at the crate root.  The dungeon graph is lent read-only to
/// every behaviour during the decide phase and mutated (treasure removal)
/// only in the pickup phase between decisions.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// The dungeon graph.  Read-only during decision, treasure index mutated
    /// between ticks.
    pub graph: DungeonGraph,

    /// Agent positions (SoA).  Written only by the apply phase.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// One behaviour selector per agent, indexed by `AgentId`.
    pub selectors: Vec<BehaviourSelector>,
}

impl std::fmt::Debug for Sim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.tick_once(now, observer);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.tick_once(now, observer);
            self.clock.advance();
        }
        Ok(())
    }

    fn tick_once<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        observer.on_tick_start(now);
        let acted = self.process_tick(now, observer);
        observer.on_tick_end(now, acted);
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents, &self.graph);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Returns the number of agents that produced a command this tick.
    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        // ── Phase 1: decide ───────────────────────────────────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access:
        // the context reads graph + agents while selectors and RNGs are
        // borrowed mutably.
        let graph     = &self.graph;
        let agents    = &self.agents;
        let selectors = &mut self.selectors;
        let rngs      = &mut self.rngs;
        let tick_dur  = self.config.tick_duration_secs;

        let ctx = TickContext::new(now, tick_dur, graph, agents);

        let commands: Vec<(AgentId, Command)> = selectors
            .iter_mut()
            .enumerate()
            .filter_map(|(i, selector)| {
                let agent = AgentId(i as u32);
                selector
                    .select(agent, &ctx, rngs.get_mut(agent))
                    .map(|cmd| (agent, cmd))
            })
            .collect();
        let acted = commands.len();

        // ── Phase 2: apply (position sink) ────────────────────────────────
        //
        // Commands arrive in ascending AgentId order; sequential application
        // keeps runs deterministic.
        for (agent, cmd) in commands {
            match cmd {
                Command::MoveTo { tile } => {
                    // Behaviours already validated the tile; re-check here so
                    // a buggy behaviour can strand a move but never the sim.
                    if !self.graph.is_dungeon(tile) {
                        continue;
                    }
                    self.agents.world_pos[agent.index()] = self.graph.world_pos(tile);
                    observer.on_move(agent, tile, now);
                }
            }
        }

        // ── Phase 3: pickups (between-tick graph mutation) ────────────────
        for i in 0..self.agents.count {
            let agent = AgentId(i as u32);
            let Some(tile) = self.graph.tile_at_world(self.agents.position(agent)) else {
                continue;
            };
            if let Some(value) = self.graph.take_treasure(tile) {
                observer.on_pickup(agent, tile, value, now);
            }
        }

        acted
    }
}
