//! `nav-router` — waypoint-relay routing for agents in a world where
//! long-distance pathfinding is too expensive to run directly.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`navigator`] | `Navigator` trait — seam to the low-level movement engine |
//! | [`router`]    | `RelayRouter` session, `RouteSignal`, `RouteContext`      |
//! | `selector`    | Greedy nearest-landmark queue builder (internal)          |
//! | `shaft`       | Vertical-shaft override for shaft workers (internal)      |
//!
//! # How routing works
//!
//! Each agent owns one [`RelayRouter`] per travel goal.  Once per tick the
//! agent's behavior update calls [`RelayRouter::route_towards`]:
//!
//! 1. Within [`DIRECT_PATH_DIST_SQ`] of the target, the session clears itself
//!    and hands the target straight to the movement engine.
//! 2. Otherwise the session walks the agent landmark-to-landmark: a greedy
//!    selector pre-computes the whole hop chain when the queue is empty, and
//!    each hop is swapped in once the agent comes within
//!    [`PROXY_SWITCH_DIST_SQ`] of the current one.
//! 3. Shaft workers get a corrected chain whenever agent and target sit on
//!    opposite sides of their shaft's depth threshold, because the surface
//!    landmark graph knows nothing about verticality.
//!
//! The two thresholds are deliberately far apart: hop switches happen
//! close-up (5 blocks) to avoid path recomputation thrash, while the
//! direct-vs-relay decision is made far out (20 blocks).

pub mod navigator;
pub mod router;

mod selector;
mod shaft;


pub use navigator::Navigator;
pub use router::{RelayRouter, RouteContext, RouteSignal};

/// Squared distance below which the target is handed directly to the
/// movement engine (20 blocks).
pub const DIRECT_PATH_DIST_SQ: i64 = 400;

/// Squared distance below which the current waypoint counts as reached and
/// the next one is promoted (5 blocks).  Also the minimum useful hop length:
/// landmarks closer than this to the running origin are never selected.
pub const PROXY_SWITCH_DIST_SQ: i64 = 25;
