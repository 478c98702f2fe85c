//! The `Sim` struct and its tick loop.

use nav_core::{AgentId, Coord, NavError, Tick};
use nav_world::{LandmarkRegistry, Role, ShaftSite};
use nav_router::{RelayRouter, RouteContext};

use crate::{SimObserver, SimResult, StepNavigator};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Harness configuration.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Blocks an agent covers per tick.
    pub agent_speed: i32,
    /// Upper bound for [`Sim::run`]; a liveness backstop, not a deadline.
    pub max_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { agent_speed: 2, max_ticks: 10_000 }
    }
}

// ── Agents and goals ──────────────────────────────────────────────────────────

/// An active travel goal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Goal {
    pub target: Coord,
    /// Acceptance radius in blocks.
    pub range: i32,
}

/// One simulated agent: its movement engine, routing session, and job state.
pub struct SimAgent {
    pub id: AgentId,
    pub role: Option<Role>,
    pub shaft: Option<ShaftSite>,
    pub navigator: StepNavigator,
    pub router: RelayRouter,
    pub goal: Option<Goal>,
}

impl SimAgent {
    #[inline]
    pub fn position(&self) -> Coord {
        use nav_router::Navigator;
        self.navigator.position()
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The harness runner.
///
/// Each tick mirrors the host game's behavior-update pass: every goal-holding
/// agent gets exactly one routing call against the shared read-only landmark
/// registry, then every movement engine advances.  Sessions are owned by
/// their agents and never shared, so the whole loop is single-threaded by
/// construction.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,
    pub tick: Tick,
    pub landmarks: LandmarkRegistry,
    pub agents: Vec<SimAgent>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Set a new travel goal for `agent`, replacing any current one.
    ///
    /// The routing session is rebuilt from scratch: a changed goal
    /// invalidates every queued waypoint.
    pub fn send_to(&mut self, agent: AgentId, target: Coord, range: i32) -> SimResult<()> {
        let agent = self.agent_mut(agent)?;
        agent.goal = Some(Goal { target, range });
        agent.router = RelayRouter::new();
        Ok(())
    }

    /// Run until every agent is idle or `config.max_ticks` elapse.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        for _ in 0..self.config.max_ticks {
            if self.idle() {
                break;
            }
            self.tick_once(observer);
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick_once(observer);
        }
    }

    /// `true` when no agent holds a goal.
    pub fn idle(&self) -> bool {
        self.agents.iter().all(|a| a.goal.is_none())
    }

    pub fn agent(&self, id: AgentId) -> SimResult<&SimAgent> {
        Ok(self
            .agents
            .get(id.index())
            .ok_or(NavError::AgentNotFound(id))?)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> SimResult<&mut SimAgent> {
        Ok(self
            .agents
            .get_mut(id.index())
            .ok_or(NavError::AgentNotFound(id))?)
    }

    // ── Tick internals ────────────────────────────────────────────────────

    fn tick_once<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.tick;
        observer.on_tick_start(now);

        // ① Route.  Field-level split borrow: registry shared, agents mutable.
        let landmarks = &self.landmarks;
        let mut travelling = 0;
        for agent in &mut self.agents {
            let Some(goal) = agent.goal else {
                continue;
            };

            let already_moving = agent.navigator.is_moving();
            let mut ctx = RouteContext {
                navigator: &mut agent.navigator,
                role: agent.role,
                shaft: agent.shaft.as_ref(),
                landmarks: Some(landmarks),
            };
            let signal = agent
                .router
                .route_towards(&mut ctx, goal.target, goal.range, already_moving);

            if signal.is_arrived() {
                tracing::debug!(agent = %agent.id, target = %goal.target, "goal reached");
                agent.goal = None;
                observer.on_arrived(now, agent.id, goal.target);
            } else {
                travelling += 1;
            }
        }

        // ② Move.
        for agent in &mut self.agents {
            agent.navigator.step(self.config.agent_speed);
        }

        observer.on_tick_end(now, travelling);
        self.tick.advance();
    }
}
