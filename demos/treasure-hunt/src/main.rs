//! treasure-hunt — smallest example for the rust_dg dungeon framework.
//!
//! Two thieves race through a 12×7 walled dungeon, each chasing the nearest
//! remaining treasure and wandering once everything has been looted.  Scale
//! comment: the grid and agent count are deliberately tiny; the same loop
//! drives procedurally generated dungeons with thousands of tiles.

use std::time::Instant;

use anyhow::{Context, Result};

use dg_behavior::{BehaviourSelector, MoveBehaviour, NearestTreasure, Wander};
use dg_core::{AgentId, GridPoint, SimConfig, Tick, TileId};
use dg_grid::{DungeonGraph, DungeonGraphBuilder};
use dg_sim::{Sim, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const TOTAL_TICKS: u64 = 40;

// ── Dungeon map ───────────────────────────────────────────────────────────────

// `#` wall, `.` floor, `1`-`9` treasure of that value, `@` spawn point.
// Rows are listed top to bottom; row 0 of the string is the highest y.
const MAP: &str = "\
############\n\
#@....#...5#\n\
#.###.#.##.#\n\
#.#3..#..#.#\n\
#.#.####.#.#\n\
#@...7...#9#\n\
############\n\
";

/// Parse the ASCII map into a graph plus spawn tiles.
fn build_dungeon() -> Result<(DungeonGraph, Vec<TileId>)> {
    let rows: Vec<&str> = MAP.lines().collect();
    let height = rows.len() as i32;

    let mut b = DungeonGraphBuilder::new();
    let mut spawns = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            // Flip rows so y grows upward, matching grid convention.
            let pos = GridPoint::new(col as i32, height - 1 - row as i32);
            match ch {
                '#' => {
                    b.add_tile(pos, false);
                }
                '.' => {
                    b.add_tile(pos, true);
                }
                '@' => {
                    spawns.push(b.add_tile(pos, true));
                }
                d @ '1'..='9' => {
                    let tile = b.add_tile(pos, true);
                    let value = d.to_digit(10).context("digit tile")?;
                    b.place_treasure(tile, value);
                }
                other => anyhow::bail!("unexpected map character {other:?}"),
            }
        }
    }
    Ok((b.build(), spawns))
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints pickups as they happen and tallies the loot per agent.
#[derive(Default)]
struct LootLogger {
    loot:    Vec<u32>,
    pickups: usize,
}

impl LootLogger {
    fn new(agents: usize) -> Self {
        Self { loot: vec![0; agents], pickups: 0 }
    }
}

impl SimObserver for LootLogger {
    fn on_pickup(&mut self, agent: AgentId, tile: TileId, value: u32, tick: Tick) {
        println!("  {tick}: agent {agent} grabs treasure worth {value} on tile {tile}");
        self.loot[agent.index()] += value;
        self.pickups += 1;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== treasure-hunt — rust_dg dungeon sim ===");
    println!("Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Build the dungeon from the embedded map.
    let (graph, spawns) = build_dungeon()?;
    println!(
        "Dungeon: {} tiles ({} walkable), {} treasures",
        graph.tile_count(),
        graph.tile_dungeon.iter().filter(|&&d| d).count(),
        graph.treasure_count()
    );
    let total_value: u32 = graph.treasure_tiles().iter().map(|&(_, v)| v).sum();
    let total_treasures = graph.treasure_count();

    // 2. Sim config.
    let config = SimConfig {
        total_ticks: TOTAL_TICKS,
        seed:        SEED,
        ..SimConfig::default()
    };

    // 3. One selector per thief: chase treasure, wander when there is none.
    let mut builder = SimBuilder::new(config, graph);
    for &spawn in &spawns {
        let selector = BehaviourSelector::new()
            .with(Box::new(MoveBehaviour::new(NearestTreasure)))
            .with(Box::new(Wander::new()));
        builder = builder.spawn(spawn, selector);
    }
    let mut sim = builder.build()?;
    println!("Thieves: {}", sim.agents.count);
    println!();

    // 4. Run.
    let mut logger = LootLogger::new(sim.agents.count);
    let t0 = Instant::now();
    sim.run(&mut logger)?;
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!(
        "Treasures collected: {} of {} (value {} of {})",
        logger.pickups,
        total_treasures,
        logger.loot.iter().sum::<u32>(),
        total_value
    );
    println!();

    // 6. Final positions table.
    println!("{:<8} {:<12} {:<8}", "Thief", "Tile", "Loot");
    println!("{}", "-".repeat(30));
    for agent in sim.agents.agent_ids() {
        let tile = current_tile(&sim, agent);
        println!(
            "{:<8} {:<12} {:<8}",
            agent.index(),
            tile.map(|t| format!("{}", sim.graph.pos(t))).unwrap_or_else(|| "?".into()),
            logger.loot[agent.index()],
        );
    }

    Ok(())
}

fn current_tile(sim: &Sim, agent: AgentId) -> Option<TileId> {
    sim.graph.tile_at_world(sim.agents.position(agent))
}
