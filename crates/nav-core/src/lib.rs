//! `nav-core` — foundational types for the waypoint-relay navigation
//! workspace.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`pos`]   | `Coord`, exact squared distance           |
//! | [`ids`]   | `AgentId`, `LandmarkId`                   |
//! | [`time`]  | `Tick`                                    |
//! | [`error`] | `NavError`, `NavResult`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod pos;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult};
pub use ids::{AgentId, LandmarkId};
pub use pos::Coord;
pub use time::Tick;
