//! `dg-sim` — tick loop orchestrator for the rust_dg framework.
//!
//! # Three-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Decide  — build a read-only TickContext; each agent's selector picks
//!               at most one behaviour and collects its Command.
//!   ② Apply   — sequentially, in ascending AgentId order, forward each
//!               MoveTo to the position sink (validate tile, write world_pos).
//!   ③ Pickups — any agent standing on a treasure tile takes it.  This is
//!               the only graph mutation, and it happens strictly between
//!               decision phases.
//! ```
//!
//! The loop is deliberately single-threaded and cooperative: nothing
//! suspends mid-computation, and every pathfinding query runs to completion
//! inside the tick that issued it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dg_behavior::{BehaviourSelector, MoveBehaviour, NearestTreasure};
//! use dg_core::SimConfig;
//! use dg_sim::{NoopObserver, SimBuilder};
//!
//! let selector = BehaviourSelector::new()
//!     .with(Box::new(MoveBehaviour::new(NearestTreasure)));
//! let mut sim = SimBuilder::new(config, graph)
//!     .spawn(start_tile, selector)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
