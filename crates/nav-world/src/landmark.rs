//! Landmark records.

use nav_core::{Coord, LandmarkId};

/// Coarse classification of a landmark.
///
/// The router treats all kinds identically (eligibility is purely geometric);
/// the kind exists for scenario construction and diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LandmarkKind {
    Workshop,
    Storehouse,
    /// Surface building at the top of a vertical shaft.
    ShaftHead,
    Waystation,
}

/// A fixed-position structure usable as a routing waypoint candidate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Landmark {
    pub id: LandmarkId,
    pub pos: Coord,
    pub kind: LandmarkKind,
}
