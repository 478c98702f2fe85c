//! relay-walk — smallest demo for the waypoint-relay router.
//!
//! A settlement of five surface landmarks and one mine shaft.  A courier
//! crosses the whole map by relaying through waystations; a shaft worker
//! climbs out of the mine, visits the far storehouse, and descends again.
//!
//! Run with `RUST_LOG=debug` to watch waypoint switches as they happen.

use anyhow::Result;

use nav_core::{AgentId, Coord, Tick};
use nav_sim::{SimBuilder, SimConfig, SimObserver};
use nav_world::{LandmarkKind, Role, ShaftSite};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_SPEED: i32 = 2;
const MAX_TICKS: u64 = 2_000;
const ACCEPT_RANGE: i32 = 2;

const COURIER: AgentId = AgentId(0);
const SHAFT_WORKER: AgentId = AgentId(1);

const STOREHOUSE: Coord = Coord::new(210, 70, 15);
const MINE_LEVEL_FLOOR: Coord = Coord::new(60, 40, 105);

// ── Observer ──────────────────────────────────────────────────────────────────

struct ArrivalPrinter;

impl SimObserver for ArrivalPrinter {
    fn on_arrived(&mut self, tick: Tick, agent: AgentId, target: Coord) {
        println!("{tick}: {agent} arrived at {target}");
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!("done after {final_tick}");
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Mine shaft: head building on the surface, ladder beside it, one
    // excavated level at Y=40.
    let mut shaft = ShaftSite::new(Coord::new(60, 70, 100), Coord::new(63, 70, 100));
    shaft.push_level(40);

    let config = SimConfig { agent_speed: AGENT_SPEED, max_ticks: MAX_TICKS };
    let mut sim = SimBuilder::new(config)
        .landmark(Coord::new(40, 70, 10), LandmarkKind::Workshop)
        .landmark(Coord::new(90, 70, 30), LandmarkKind::Waystation)
        .landmark(Coord::new(140, 70, 40), LandmarkKind::Waystation)
        .landmark(Coord::new(180, 70, 20), LandmarkKind::Waystation)
        .landmark(STOREHOUSE, LandmarkKind::Storehouse)
        .agent(Coord::new(5, 70, 5), Some(Role::Courier))
        .shaft_worker(Coord::new(62, 40, 102), shaft)
        .build()?;

    // Deliveries go to a registered building.
    let depot = sim.landmarks.require(STOREHOUSE)?;
    println!("deliveries bound for {:?} at {}", depot.kind, depot.pos);

    // The courier hauls across the whole settlement; the worker climbs out
    // of the mine and heads for the storehouse.
    sim.send_to(COURIER, STOREHOUSE, ACCEPT_RANGE)?;
    sim.send_to(SHAFT_WORKER, STOREHOUSE, ACCEPT_RANGE)?;
    sim.run(&mut ArrivalPrinter)?;

    // Send the worker back down to the level floor.
    sim.send_to(SHAFT_WORKER, MINE_LEVEL_FLOOR, ACCEPT_RANGE)?;
    sim.run(&mut ArrivalPrinter)?;

    let worker = sim.agent(SHAFT_WORKER)?;
    println!("worker ended at {}", worker.position());

    Ok(())
}
