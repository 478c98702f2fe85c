//! Simulation observer trait for progress reporting and diagnostics.

use nav_core::{AgentId, Coord, Tick};

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl SimObserver for ArrivalPrinter {
///     fn on_arrived(&mut self, tick: Tick, agent: AgentId, target: Coord) {
///         println!("{tick}: {agent} reached {target}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any routing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `travelling` is the number of agents
    /// that still hold an active goal.
    fn on_tick_end(&mut self, _tick: Tick, _travelling: usize) {}

    /// Called when an agent comes within acceptance range of its goal.
    fn on_arrived(&mut self, _tick: Tick, _agent: AgentId, _target: Coord) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call the run
/// methods but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
