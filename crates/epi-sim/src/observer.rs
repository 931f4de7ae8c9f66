//! Run observer trait for progress reporting, rendering, and data collection.

use epi_agent::Population;
use epi_core::{StateCounts, Tick};

/// Callbacks invoked by [`SimulationRun`][crate::SimulationRun] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observer failures are the observer's
/// concern — nothing an observer does can fail the simulation, and a slow
/// observer should buffer or drop rather than stall the next tick.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl RunObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, counts: &StateCounts) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {:?}", counts.as_array());
///         }
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once when `run()` starts, before the first tick.
    fn on_run_start(&mut self, _population: &Population) {}

    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Frame event: read-only access to every agent's position and reported
    /// compartment, for rendering/recording collaborators.  Fired every
    /// `frame_interval_ticks` ticks (never, if configured to 0).
    fn on_frame(&mut self, _tick: Tick, _population: &Population) {}

    /// Called at the end of each tick with the counts recorded for it.
    fn on_tick_end(&mut self, _tick: Tick, _counts: &StateCounts) {}

    /// Called exactly once when the run terminates, with the final tick and
    /// the frozen results series.
    fn on_run_end(&mut self, _final_tick: Tick, _results: &[StateCounts]) {}

    /// External stop signal, polled at tick boundaries only — a mid-tick stop
    /// is never honored.
    fn stop_requested(&mut self) -> bool {
        false
    }
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
