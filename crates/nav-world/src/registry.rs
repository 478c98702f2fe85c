//! The `LandmarkRegistry` — the settlement's set of known landmark positions.
//!
//! Positions are unique keys (inserting at an occupied coordinate replaces
//! the previous landmark, mirroring a building rebuilt in place).  Iteration
//! follows insertion order, which keeps the selector's first-seen tie-break
//! deterministic across runs.

use nav_core::{Coord, LandmarkId, NavError, NavResult};
use rustc_hash::FxHashMap;

use crate::{Landmark, LandmarkKind};

/// Coordinate-keyed landmark set with deterministic iteration order.
///
/// Storage is a dense `Vec<Landmark>` plus an `FxHashMap` from coordinate to
/// slot index.  Removal is swap-remove with index fix-up, so `remove` is O(1)
/// at the cost of perturbing iteration order for the swapped tail element.
#[derive(Default)]
pub struct LandmarkRegistry {
    slots: Vec<Landmark>,
    by_pos: FxHashMap<Coord, usize>,
    next_id: u32,
}

impl LandmarkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a landmark at `pos`, replacing any landmark already there.
    /// Returns the assigned ID.
    pub fn insert(&mut self, pos: Coord, kind: LandmarkKind) -> LandmarkId {
        let id = LandmarkId(self.next_id);
        self.next_id += 1;

        let landmark = Landmark { id, pos, kind };
        match self.by_pos.get(&pos) {
            Some(&slot) => self.slots[slot] = landmark,
            None => {
                self.by_pos.insert(pos, self.slots.len());
                self.slots.push(landmark);
            }
        }
        id
    }

    /// Remove the landmark at `pos`.  Returns it if one was registered.
    pub fn remove(&mut self, pos: Coord) -> Option<Landmark> {
        let slot = self.by_pos.remove(&pos)?;
        let removed = self.slots.swap_remove(slot);
        if let Some(moved) = self.slots.get(slot) {
            self.by_pos.insert(moved.pos, slot);
        }
        Some(removed)
    }

    pub fn get(&self, pos: Coord) -> Option<&Landmark> {
        self.by_pos.get(&pos).map(|&slot| &self.slots[slot])
    }

    /// Like [`get`][Self::get], but a missing landmark is an error.  For
    /// callers that treat the position as a known building site.
    pub fn require(&self, pos: Coord) -> NavResult<&Landmark> {
        self.get(pos).ok_or(NavError::NoLandmarkAt(pos))
    }

    #[inline]
    pub fn contains(&self, pos: Coord) -> bool {
        self.by_pos.contains_key(&pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All landmark positions, in deterministic order.
    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.slots.iter().map(|l| l.pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> + '_ {
        self.slots.iter()
    }
}
