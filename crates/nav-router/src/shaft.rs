//! Vertical-shaft override for shaft workers.
//!
//! The landmark graph is built from surface building positions and knows
//! nothing about verticality.  Left alone, it would route a worker deep in a
//! shaft through surface buildings with no way back down, or ask the
//! pathfinder for an illegal long-distance route through solid rock.  This
//! override corrects the queue whenever the agent and its target sit on
//! opposite sides of the shaft's depth threshold, and otherwise defers to the
//! general selector.

use std::collections::VecDeque;

use nav_core::Coord;
use nav_world::{LandmarkRegistry, ShaftSite};

use crate::selector;

/// Build a waypoint chain for a shaft worker and return the active proxy.
///
/// The threshold is the current level's depth plus two blocks of headroom;
/// anything at or below it counts as "inside the shaft".
///
/// - Agent inside, target above: the ladder column at working depth is
///   queued first, then the surface chain toward the target.  (From the
///   ladder, the shaft head building is the natural first surface hop.)
/// - Agent above, target inside: the surface chain runs to the shaft head
///   building, then the ladder column at working depth is appended as the
///   final hop, so the agent descends before any direct underground approach.
/// - Both inside: no relay at all — the pathfinder handles same-level moves.
///
/// Workers without an assigned site or a current working level fall through
/// to the general selector; that is a normal state, never an error.
pub(crate) fn shaft_route(
    pending: &mut VecDeque<Coord>,
    shaft: Option<&ShaftSite>,
    landmarks: Option<&LandmarkRegistry>,
    position: Coord,
    target: Coord,
    total_dist_sq: i64,
) -> Coord {
    let Some(site) = shaft else {
        return selector::select_route(pending, landmarks, position, target, total_dist_sq);
    };
    let Some(descent) = site.descent_point() else {
        return selector::select_route(pending, landmarks, position, target, total_dist_sq);
    };

    let threshold = descent.y + 2;

    if position.y <= threshold && target.y > threshold {
        tracing::debug!(%descent, "shaft exit: ascending via ladder");
        pending.push_back(descent);
        selector::extend_queue(pending, landmarks, position, target, total_dist_sq);
    } else if target.y <= threshold && position.y > threshold {
        tracing::debug!(%descent, head = %site.head, "shaft entry: descending via ladder");
        let head_dist_sq = position.dist_sq(site.head);
        selector::extend_queue(pending, landmarks, position, site.head, head_dist_sq);
        pending.push_back(descent);
    } else if target.y <= threshold {
        // Agent and target share the shaft interior; relaying through the
        // surface graph could only make things worse.
        return target;
    } else {
        return selector::select_route(pending, landmarks, position, target, total_dist_sq);
    }

    // Both crossing branches queued at least the descent point.
    pending.pop_front().unwrap_or(target)
}
