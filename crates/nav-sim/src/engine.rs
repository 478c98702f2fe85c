//! `StepNavigator` — a deliberately simple movement engine.
//!
//! Real hosts plug a pathfinder into the [`Navigator`] seam; the harness uses
//! straight-line integer stepping instead.  That is enough to exercise every
//! router behavior (move orders, arrival predicates, halting) because the
//! router never looks at *how* the engine moves, only *whether* it has
//! arrived.

use nav_core::Coord;
use nav_router::Navigator;

/// Toy movement engine: holds a position and at most one destination, and
/// walks toward it one block at a time along the largest remaining axis.
#[derive(Debug, Clone)]
pub struct StepNavigator {
    position: Coord,
    destination: Option<Coord>,
}

impl StepNavigator {
    pub fn new(position: Coord) -> Self {
        Self { position, destination: None }
    }

    #[inline]
    pub fn destination(&self) -> Option<Coord> {
        self.destination
    }

    /// `true` while a move order is in flight.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.destination.is_some()
    }

    /// Advance up to `speed` blocks toward the current destination.  Clears
    /// the destination on reaching it exactly.  No-op while idle.
    pub fn step(&mut self, speed: i32) {
        let Some(dest) = self.destination else {
            return;
        };

        for _ in 0..speed.max(0) {
            if self.position == dest {
                break;
            }
            self.position = step_toward(self.position, dest);
        }

        if self.position == dest {
            self.destination = None;
        }
    }
}

impl Navigator for StepNavigator {
    fn is_at_site_with_move(&mut self, target: Coord, range: i32) -> bool {
        if self.is_at_site(target, range) {
            return true;
        }
        if self.destination != Some(target) {
            self.destination = Some(target);
        }
        false
    }

    fn is_at_site(&self, target: Coord, range: i32) -> bool {
        self.position.dist_sq(target) <= (range as i64) * (range as i64)
    }

    fn position(&self) -> Coord {
        self.position
    }

    fn halt(&mut self) {
        self.destination = None;
    }
}

/// One block toward `dest`, reducing the largest remaining axis delta.
fn step_toward(from: Coord, dest: Coord) -> Coord {
    let dx = dest.x - from.x;
    let dy = dest.y - from.y;
    let dz = dest.z - from.z;

    let (ax, ay, az) = (dx.abs(), dy.abs(), dz.abs());
    if ax >= ay && ax >= az {
        Coord::new(from.x + dx.signum(), from.y, from.z)
    } else if ay >= az {
        Coord::new(from.x, from.y + dy.signum(), from.z)
    } else {
        Coord::new(from.x, from.y, from.z + dz.signum())
    }
}
