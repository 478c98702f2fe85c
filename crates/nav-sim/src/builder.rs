//! Fluent builder for constructing a [`Sim`].

use nav_core::{AgentId, Coord, Tick};
use nav_world::{LandmarkKind, LandmarkRegistry, Role, ShaftSite};
use nav_router::RelayRouter;

use crate::{Sim, SimAgent, SimConfig, SimError, SimResult, StepNavigator};

/// Fluent builder for [`Sim`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .landmark(Coord::new(40, 64, 0), LandmarkKind::Waystation)
///     .agent(Coord::new(0, 64, 0), Some(Role::Courier))
///     .shaft_worker(Coord::new(5, 50, 5), shaft_site)
///     .build()?;
/// sim.send_to(AgentId(0), Coord::new(100, 64, 0), 2)?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    landmarks: LandmarkRegistry,
    agents: Vec<SimAgent>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            landmarks: LandmarkRegistry::new(),
            agents: Vec::new(),
        }
    }

    /// Register a landmark.
    pub fn landmark(mut self, pos: Coord, kind: LandmarkKind) -> Self {
        self.landmarks.insert(pos, kind);
        self
    }

    /// Add an agent at `position`.  IDs are assigned in call order, starting
    /// at zero.
    pub fn agent(mut self, position: Coord, role: Option<Role>) -> Self {
        self.push_agent(position, role, None);
        self
    }

    /// Add a shaft worker with its assigned site.  The site's head building
    /// is registered as a landmark if nothing occupies its position yet.
    pub fn shaft_worker(mut self, position: Coord, site: ShaftSite) -> Self {
        if !self.landmarks.contains(site.head) {
            self.landmarks.insert(site.head, LandmarkKind::ShaftHead);
        }
        self.push_agent(position, Some(Role::ShaftWorker), Some(site));
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.config.agent_speed < 1 {
            return Err(SimError::Config(format!(
                "agent_speed must be at least 1, got {}",
                self.config.agent_speed
            )));
        }

        Ok(Sim {
            config: self.config,
            tick: Tick::ZERO,
            landmarks: self.landmarks,
            agents: self.agents,
        })
    }

    fn push_agent(&mut self, position: Coord, role: Option<Role>, shaft: Option<ShaftSite>) {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(SimAgent {
            id,
            role,
            shaft,
            navigator: StepNavigator::new(position),
            router: RelayRouter::new(),
            goal: None,
        });
    }
}
