//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  The router itself is
//! tick-agnostic (each call is a fresh decision over current state); the tick
//! exists for the harness loop and for observer timestamps.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at one tick per game step a `u64`
/// outlasts any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Advance in place by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
