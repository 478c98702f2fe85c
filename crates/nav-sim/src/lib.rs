//! `nav-sim` — tick-loop harness for the waypoint-relay router.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`engine`]   | `StepNavigator` — straight-line toy movement engine       |
//! | [`sim`]      | `Sim`, `SimAgent`, `Goal`, `SimConfig` — the tick loop    |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`                       |
//! | [`builder`]  | `SimBuilder` — fluent scenario construction               |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Route — for every agent with a goal, call RelayRouter::route_towards;
//!             agents reporting Arrived have their goal cleared.
//!   ② Move  — every StepNavigator advances up to `agent_speed` blocks
//!             toward its current destination.
//! ```
//!
//! The harness stands in for the host game's behavior-update pass: one
//! routing call per agent per tick, sessions exclusively owned, registry read
//! only during the routing phase.

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use engine::StepNavigator;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Goal, Sim, SimAgent, SimConfig};
