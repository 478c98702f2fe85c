//! The `Navigator` trait — the router's seam to the low-level movement engine.
//!
//! The router never computes paths itself; it only decides *which* nearby
//! point the movement engine should path to next.  Implementations wrap
//! whatever pathfinder the host world provides (`nav-sim` ships a straight-
//! line toy implementation for tests and demos).

use nav_core::Coord;

/// Movement-engine capabilities consumed by [`RelayRouter`][crate::RelayRouter].
pub trait Navigator {
    /// Arrival check that also drives movement: when the agent is not within
    /// `range` blocks of `target`, issue or refresh a move order toward it
    /// and return `false`.  Returns `true` once within range.
    fn is_at_site_with_move(&mut self, target: Coord, range: i32) -> bool;

    /// Pure arrival check — never issues a move order.
    fn is_at_site(&self, target: Coord, range: i32) -> bool;

    /// The agent's current position.
    fn position(&self) -> Coord;

    /// Cancel any in-flight path computation.  Called when the router swaps
    /// waypoints so the engine does not finish walking to a stale one.
    fn halt(&mut self);
}
