//! The `SimulationRun` struct and its tick loop.

use epi_agent::{AgentRngs, Population};
use epi_core::{EpiConfig, SimRng, StateCounts, Tick, Torus};
use epi_spatial::AxisIndex;

use crate::exposure::exposure_pass;
use crate::observer::RunObserver;
use crate::vaccination::VaccinationScheduler;

// ── Status & outcome ──────────────────────────────────────────────────────────

/// Lifecycle state of a run.  Terminated is absorbing — a finished run never
/// processes another tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunStatus {
    Running,
    Terminated,
}

/// How [`SimulationRun::run`] ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunOutcome {
    /// No agent is Exposed or Infected anymore — the epidemic burned out (or
    /// never took hold beyond initial seeding).
    BurnedOut,
    /// The observer's stop signal was honored at a tick boundary.
    Stopped,
    /// The configured `max_ticks` safety cap was reached.
    TickCapReached,
}

// ── SimulationRun ─────────────────────────────────────────────────────────────

/// All run-wide state: population, tick counter, RNG streams, vaccination
/// campaign, and the growing results series.
///
/// Nothing here is ambient or static — multiple independent runs can coexist
/// in one process, and tests drive a run tick by tick via
/// [`step`][Self::step].
///
/// Create via [`RunBuilder`][crate::RunBuilder].
pub struct SimulationRun {
    /// Global configuration, validated at build time.
    pub config: EpiConfig,

    /// World geometry (derived from the config at build time).
    pub world: Torus,

    /// The current tick.  Advances only when a tick fully processes.
    pub tick: Tick,

    /// All agent state (SoA arrays).
    pub population: Population,

    /// Per-agent deterministic RNGs for the motion pass.
    pub rngs: AgentRngs,

    /// Global RNG stream for exposure flips (and spawning, at build time).
    pub rng: SimRng,

    /// The vaccination campaign controller.
    pub scheduler: VaccinationScheduler,

    /// One entry per processed tick: the compartment counts recorded at that
    /// tick's snapshot.  Frozen once the run terminates.
    pub results: Vec<StateCounts>,

    /// Running or Terminated.
    pub status: RunStatus,
}

impl SimulationRun {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick until the epidemic burns out, the observer
    /// requests a stop, or the `max_ticks` cap is hit.
    ///
    /// Calls observer hooks throughout; `on_run_end` fires exactly once.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> RunOutcome {
        observer.on_run_start(&self.population);

        loop {
            if observer.stop_requested() {
                self.finish(observer);
                return RunOutcome::Stopped;
            }
            if self.config.max_ticks > 0 && self.tick.0 >= self.config.max_ticks {
                self.finish(observer);
                return RunOutcome::TickCapReached;
            }
            if !self.step(observer) {
                return RunOutcome::BurnedOut;
            }
        }
    }

    /// Process one tick.  Returns `false` once the run has terminated (the
    /// terminal census is recorded before returning).
    ///
    /// Useful for tests and incremental stepping; `run` adds the stop-signal
    /// and tick-cap checks around this.
    pub fn step<O: RunObserver>(&mut self, observer: &mut O) -> bool {
        if self.status == RunStatus::Terminated {
            return false;
        }

        observer.on_tick_start(self.tick);

        // ── Census & termination check ────────────────────────────────────
        let counts = self.population.census();
        self.results.push(counts);

        if !self.population.epidemic_active() {
            self.finish(observer);
            return false;
        }

        // ── Infectious snapshot ───────────────────────────────────────────
        //
        // Sources for this tick's exposure pass.  Taken before the countdown
        // pass: an agent removed this tick still transmits this tick, and a
        // newly infectious agent does not.
        let infectious = self.population.infectious();

        // ── Motion + countdown pass ───────────────────────────────────────
        self.population.advance_motion(
            &mut self.rngs,
            &self.world,
            self.config.agent_speed,
            self.config.max_wiggle_angle,
        );
        self.population.advance_disease();

        // ── Vaccination ───────────────────────────────────────────────────
        self.scheduler
            .advance(&mut self.population, &self.config, infectious.len());

        // ── Exposure pass over post-motion positions ──────────────────────
        let index = AxisIndex::build(&self.population.pos_x, &self.population.pos_y);
        exposure_pass(
            &mut self.population,
            &index,
            &self.config,
            &mut self.rng,
            &infectious,
        );

        // ── Emit ──────────────────────────────────────────────────────────
        if self.config.frame_interval_ticks > 0
            && self.tick.0.is_multiple_of(self.config.frame_interval_ticks)
        {
            observer.on_frame(self.tick, &self.population);
        }
        observer.on_tick_end(self.tick, &counts);

        self.tick = self.tick + 1;
        true
    }

    /// The recorded results series (one entry per processed tick).
    pub fn results(&self) -> &[StateCounts] {
        &self.results
    }

    // ── Internal ──────────────────────────────────────────────────────────

    fn finish<O: RunObserver>(&mut self, observer: &mut O) {
        if self.status == RunStatus::Terminated {
            return;
        }
        self.status = RunStatus::Terminated;
        observer.on_run_end(self.tick, &self.results);
    }
}
