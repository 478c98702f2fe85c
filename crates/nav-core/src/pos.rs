//! Integer block coordinates and exact distance helpers.
//!
//! `Coord` is a plain `i32` triple.  All distance comparisons in the routing
//! code use **squared** Euclidean distance computed in `i64`: exact integer
//! arithmetic means candidate ordering can never be perturbed by rounding,
//! and skipping the square root is free performance on a hot path that only
//! ever compares distances against each other or against squared thresholds.

/// An integer position in the 3D block grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Widened to `i64` before subtracting.  Exact for any coordinates with
    /// magnitude below 2^29 per axis, orders of magnitude beyond the playable
    /// world bound.
    #[inline]
    pub fn dist_sq(self, other: Coord) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        let dz = self.z as i64 - other.z as i64;
        dx * dx + dy * dy + dz * dz
    }

    /// The same position with its Y replaced — used to drop a waypoint onto a
    /// ladder column at a specific depth.
    #[inline]
    pub fn with_y(self, y: i32) -> Coord {
        Coord { y, ..self }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
