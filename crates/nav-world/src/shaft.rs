//! Vertical-shaft work structures.
//!
//! A shaft worker's site is a surface head building, a ladder column running
//! down the shaft, and a stack of excavated levels.  The router only reads
//! three things from it: the head position, the ladder column, and the depth
//! of the level currently being worked.

use nav_core::Coord;

/// One excavated level of a shaft.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShaftLevel {
    /// Y coordinate of the level floor.
    pub depth: i32,
}

/// A vertical shaft: surface head building, ladder column, and levels.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShaftSite {
    /// Position of the surface head building.
    pub head: Coord,
    /// Position of the ladder column (Y is the surface entry; the working
    /// depth comes from the current level).
    pub ladder: Coord,
    levels: Vec<ShaftLevel>,
    current: Option<usize>,
}

impl ShaftSite {
    pub fn new(head: Coord, ladder: Coord) -> Self {
        Self { head, ladder, levels: Vec::new(), current: None }
    }

    /// Add an excavated level and make it current.
    pub fn push_level(&mut self, depth: i32) {
        self.levels.push(ShaftLevel { depth });
        self.current = Some(self.levels.len() - 1);
    }

    /// Select which level is being worked.  Out-of-range indices clear the
    /// current level (freshly-dug shafts have none).
    pub fn set_current(&mut self, index: usize) {
        self.current = (index < self.levels.len()).then_some(index);
    }

    /// The level currently being worked, if any.
    #[inline]
    pub fn current_level(&self) -> Option<ShaftLevel> {
        self.current.map(|i| self.levels[i])
    }

    /// The ladder column at the current level's depth — the waypoint used to
    /// enter or leave the shaft.  `None` while no level is worked.
    pub fn descent_point(&self) -> Option<Coord> {
        self.current_level()
            .map(|level| self.ladder.with_y(level.depth))
    }
}
