//! The per-agent routing session.

use std::collections::VecDeque;

use nav_core::Coord;
use nav_world::{LandmarkRegistry, Role, ShaftSite};

use crate::{DIRECT_PATH_DIST_SQ, Navigator, PROXY_SWITCH_DIST_SQ, selector, shaft};

// ── RouteSignal ───────────────────────────────────────────────────────────────

/// Outcome of one routing call.
///
/// Callers get an explicit three-way answer rather than a single boolean
/// conflating "arrived" with "keep going".  Most only care about
/// [`RouteSignal::is_arrived`]; the `KeepWaiting` / `IssueDirectMove` split
/// exists for diagnostics and for callers that track whether the movement
/// engine was handed the final target this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RouteSignal {
    /// The agent is within the acceptance range of the target.  The session
    /// has been cleared; the goal is complete.
    Arrived,
    /// A waypoint move is in flight; call again next tick.
    KeepWaiting,
    /// The session decided on direct movement and issued a move order toward
    /// the final target this tick.
    IssueDirectMove,
}

impl RouteSignal {
    #[inline]
    pub fn is_arrived(self) -> bool {
        matches!(self, RouteSignal::Arrived)
    }
}

// ── RouteContext ──────────────────────────────────────────────────────────────

/// Per-call view of the agent and its world, assembled by the caller each
/// tick.  The router owns none of this: the navigator belongs to the
/// movement engine, the registry to the settlement, and the role/shaft to
/// whatever job system the host runs.
pub struct RouteContext<'a, N: Navigator> {
    pub navigator: &'a mut N,
    pub role: Option<Role>,
    pub shaft: Option<&'a ShaftSite>,
    pub landmarks: Option<&'a LandmarkRegistry>,
}

impl<'a, N: Navigator> RouteContext<'a, N> {
    /// Context for an agent with no role and no settlement — routes directly.
    pub fn bare(navigator: &'a mut N) -> Self {
        Self { navigator, role: None, shaft: None, landmarks: None }
    }
}

// ── RelayRouter ───────────────────────────────────────────────────────────────

/// A per-agent routing session: the current intermediate waypoint plus the
/// pending hops behind it.
///
/// Sessions are cheap, in-memory only, and self-resetting: coming within
/// [`DIRECT_PATH_DIST_SQ`] of the target (including after an external goal
/// change) clears all state, and an empty queue is lazily rebuilt on the
/// next call that needs one.
#[derive(Debug, Default)]
pub struct RelayRouter {
    current_proxy: Option<Coord>,
    pending: VecDeque<Coord>,
}

impl RelayRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The waypoint the agent is currently walking toward, if any.
    #[inline]
    pub fn current_proxy(&self) -> Option<Coord> {
        self.current_proxy
    }

    /// Hops remaining after the current waypoint, front first.
    #[inline]
    pub fn pending(&self) -> impl Iterator<Item = Coord> + '_ {
        self.pending.iter().copied()
    }

    /// Drive the agent one tick toward `target`, relaying through landmark
    /// waypoints when the trip is too long for a direct path.
    ///
    /// `range` is the acceptance radius in blocks.  `already_moving` marks
    /// calls made while the agent is mid-walk; those accept arrival with two
    /// extra blocks of slack so an agent passing close by does not stutter.
    pub fn route_towards<N: Navigator>(
        &mut self,
        ctx: &mut RouteContext<'_, N>,
        target: Coord,
        range: i32,
        already_moving: bool,
    ) -> RouteSignal {
        let position = ctx.navigator.position();
        let total_dist_sq = position.dist_sq(target);

        // Close enough for the movement engine to handle alone.
        if total_dist_sq <= DIRECT_PATH_DIST_SQ {
            self.current_proxy = None;
            self.pending.clear();
            return direct_path(ctx, target, range, already_moving);
        }

        let mut proxy = match self.current_proxy {
            Some(p) => p,
            None => {
                let p = self.rebuild(ctx, target, total_dist_sq);
                self.current_proxy = Some(p);
                p
            }
        };

        // Within the switch radius of the current waypoint: promote the next
        // hop, or fall back to direct movement when none remain.
        if position.dist_sq(proxy) < PROXY_SWITCH_DIST_SQ {
            match self.pending.pop_front() {
                None => {
                    tracing::debug!(%proxy, %target, "waypoint queue exhausted, going direct");
                    // Dropping the stale proxy here keeps the agent from ever
                    // being routed back to it; the next call rebuilds lazily.
                    self.current_proxy = None;
                    return direct_path(ctx, target, range, already_moving);
                }
                Some(next) => {
                    tracing::debug!(from = %proxy, to = %next, "switching waypoint");
                    ctx.navigator.halt();
                    self.current_proxy = Some(next);
                    proxy = next;
                }
            }
        }

        // Keep the waypoint move in flight.  Even when the engine reports the
        // waypoint reached (its acceptance is looser than the switch radius),
        // the session holds until the gap above closes on a later tick.
        let at_proxy = ctx.navigator.is_at_site_with_move(proxy, range);

        // Exception: a proxy that *is* the target (the selector found no
        // useful landmark).  An acceptance range wider than the direct-path
        // threshold can then be satisfied while the trip still looks "too
        // long", and the engine's arrival check is the only evidence.
        if at_proxy && proxy == target {
            self.current_proxy = None;
            self.pending.clear();
            return RouteSignal::Arrived;
        }
        RouteSignal::KeepWaiting
    }

    /// Rebuild the waypoint queue and return the new active proxy.
    ///
    /// Shaft workers with an assigned site route through the shaft override;
    /// everyone else goes straight to the general selector.  Either way the
    /// front of the freshly built queue is promoted out of it.
    fn rebuild<N: Navigator>(
        &mut self,
        ctx: &mut RouteContext<'_, N>,
        target: Coord,
        total_dist_sq: i64,
    ) -> Coord {
        let position = ctx.navigator.position();

        let first = if ctx.role == Some(Role::ShaftWorker) {
            shaft::shaft_route(
                &mut self.pending,
                ctx.shaft,
                ctx.landmarks,
                position,
                target,
                total_dist_sq,
            )
        } else {
            selector::select_route(
                &mut self.pending,
                ctx.landmarks,
                position,
                target,
                total_dist_sq,
            )
        };

        tracing::debug!(
            hops = self.pending.len() + 1,
            first = %first,
            "relay route built"
        );
        first
    }
}

/// Hand the target straight to the movement engine.
///
/// The engine is always driven from here (a move order goes out whenever the
/// agent is not yet in range); the returned signal tells the caller which of
/// the two happened.  Mid-walk calls get two extra blocks of acceptance slack
/// so an agent passing close by does not stutter to a halt.
fn direct_path<N: Navigator>(
    ctx: &mut RouteContext<'_, N>,
    target: Coord,
    range: i32,
    already_moving: bool,
) -> RouteSignal {
    let mut arrived = ctx.navigator.is_at_site_with_move(target, range);
    if already_moving && !arrived {
        arrived = ctx.navigator.is_at_site(target, range + 2);
    }

    if arrived {
        RouteSignal::Arrived
    } else {
        RouteSignal::IssueDirectMove
    }
}
