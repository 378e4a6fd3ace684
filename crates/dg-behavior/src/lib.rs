//! `dg-behavior` — agent behaviour trait, movement policies, and the
//! priority selector.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`command`]   | `Command` enum — effects a behaviour can request               |
//! | [`context`]   | `TickContext<'a>` — read-only tick snapshot shared by all agents |
//! | [`behaviour`] | `Behaviour` trait                                              |
//! | [`movement`]  | `MovePolicy` trait, `MoveBehaviour` adapter                    |
//! | [`treasure`]  | `NearestTreasure` policy                                       |
//! | [`wander`]    | `Wander` — random-walk fallback behaviour                      |
//! | [`noop`]      | `NoopBehaviour` — explicit idle tail                           |
//! | [`selector`]  | `BehaviourSelector` — priority list + cooldown enforcement     |
//! | [`error`]     | `BehaviourError`, `BehaviourResult<T>`                         |
//!
//! # Design notes
//!
//! The tick loop in dg-sim is split in two:
//!
//! 1. **Decide phase**: for every agent, the selector walks its behaviour
//!    list in priority order and executes the first whose cooldown has
//!    expired and whose condition holds.  All reads go through
//!    `&TickContext`; the only output is an optional [`Command`].
//!
//! 2. **Apply phase** (sequential): dg-sim consumes the collected commands
//!    and forwards them to the position sink.
//!
//! This split means behaviours never hold mutable world state — a behaviour's
//! effect is a value, and the graph stays read-only for the whole decide
//! phase.

pub mod behaviour;
pub mod command;
pub mod context;
pub mod error;
pub mod movement;
pub mod noop;
pub mod selector;
pub mod treasure;
pub mod wander;


pub use behaviour::Behaviour;
pub use command::Command;
pub use context::TickContext;
pub use error::{BehaviourError, BehaviourResult};
pub use movement::{MoveBehaviour, MovePolicy};
pub use noop::NoopBehaviour;
pub use selector::BehaviourSelector;
pub use treasure::NearestTreasure;
pub use wander::Wander;
