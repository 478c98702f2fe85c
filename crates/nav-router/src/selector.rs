//! Greedy nearest-landmark waypoint selection.
//!
//! The whole multi-hop chain is pre-computed before the agent starts moving:
//! starting from the agent's position, the nearest eligible landmark is
//! pushed onto the queue and becomes the origin for the next round, until no
//! eligible landmark remains.  Every hop is judged against the *original*
//! total distance to the target, not the remaining sub-distance — a hop is
//! worth taking as long as it is closer than the whole remaining trip.
//!
//! Termination is structural: the registry is finite, queued landmarks are
//! never reselected, and each round demands strict improvement over the best
//! seen so far.

use std::collections::VecDeque;

use nav_core::Coord;
use nav_world::LandmarkRegistry;

use crate::PROXY_SWITCH_DIST_SQ;

/// Build a waypoint chain from `origin` toward `target`, appending hops to
/// `pending`, and return the immediate next waypoint (popped back off the
/// queue, since it becomes the active proxy rather than a pending hop).
///
/// With no registry, an empty registry, or no eligible landmark at the first
/// round, the queue is left untouched and `target` itself is returned: the
/// trip is routed directly after all.
pub(crate) fn select_route(
    pending: &mut VecDeque<Coord>,
    landmarks: Option<&LandmarkRegistry>,
    origin: Coord,
    target: Coord,
    total_dist_sq: i64,
) -> Coord {
    extend_queue(pending, landmarks, origin, target, total_dist_sq);
    pending.pop_front().unwrap_or(target)
}

/// Append greedy hops to `pending` until no eligible landmark remains.
///
/// Also the entry point for the shaft override, which seeds or finishes the
/// queue itself and therefore must not have the front popped out from under
/// it.
pub(crate) fn extend_queue(
    pending: &mut VecDeque<Coord>,
    landmarks: Option<&LandmarkRegistry>,
    origin: Coord,
    target: Coord,
    total_dist_sq: i64,
) {
    let Some(registry) = landmarks else {
        return;
    };

    let mut origin = origin;
    while let Some(hop) = next_hop(pending, registry, origin, target, total_dist_sq) {
        pending.push_back(hop);
        origin = hop;
    }
}

/// One round of the greedy scan: the landmark nearest to `origin` among all
/// that pass the eligibility predicates, or `None` when none does.
///
/// Eligibility for a candidate `lm`:
/// - strictly nearer to `origin` than the best found so far (first seen wins
///   ties, and registry iteration order is deterministic),
/// - nearer to the target than the whole remaining trip,
/// - farther from `origin` than the switch radius (too-close hops are
///   useless, and this naturally excludes a landmark under the agent's feet),
/// - not farther from `origin` than the whole remaining trip,
/// - not already queued this session.
fn next_hop(
    pending: &VecDeque<Coord>,
    registry: &LandmarkRegistry,
    origin: Coord,
    target: Coord,
    total_dist_sq: i64,
) -> Option<Coord> {
    let mut best: Option<Coord> = None;
    let mut best_dist_sq = i64::MAX;

    for lm in registry.positions() {
        let origin_dist_sq = origin.dist_sq(lm);
        if origin_dist_sq < best_dist_sq
            && lm.dist_sq(target) < total_dist_sq
            && origin_dist_sq > PROXY_SWITCH_DIST_SQ
            && origin_dist_sq < total_dist_sq
            && !pending.contains(&lm)
        {
            best = Some(lm);
            best_dist_sq = origin_dist_sq;
        }
    }

    best
}
