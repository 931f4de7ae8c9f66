//! Top-level simulation configuration.
//!
//! `EpiConfig` is a plain struct, typically loaded from a TOML/JSON file by
//! the application crate (enable the `serde` feature) and passed to the run
//! builder.  [`EpiConfig::validate`] fails fast before any tick runs — no
//! partially configured run is ever started.

use crate::error::{EpiError, EpiResult};
use crate::world::Torus;

/// All parameters of one simulation run.
///
/// Probabilities and rates are expressed as percentages in `[0, 100]`,
/// matching the way the epidemiological inputs are usually quoted.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpiConfig {
    // ── World ─────────────────────────────────────────────────────────────
    /// World width in patches.
    pub width: f32,
    /// World height in patches.
    pub height: f32,

    // ── Population ────────────────────────────────────────────────────────
    /// Number of agents (fixed for the run's lifetime).
    pub population: u32,
    /// Agents seeded Infected at world creation.
    pub initial_infected: u32,
    /// Movement per tick, in patches.  Identical for all agents.
    pub agent_speed: f32,
    /// Maximum heading perturbation per tick, in radians.
    pub max_wiggle_angle: f32,

    // ── Infection process ─────────────────────────────────────────────────
    /// Maximum distance at which exposure can occur, in patches.
    pub infection_radius: f32,
    /// Per-neighbor exposure probability, in percent.
    pub infection_prob_pct: f64,
    /// Per-tick probability that an infected agent attempts transmission at
    /// all, in percent.
    pub infectious_tick_prob_pct: f64,
    /// Ticks an exposed agent incubates before becoming infectious.
    pub incubation_ticks: u32,
    /// Ticks an infected agent stays infectious before removal.
    pub infection_ticks: u32,

    // ── Vaccination campaign ──────────────────────────────────────────────
    /// Campaign activates once the infectious share of the population
    /// exceeds this percentage.  Never deactivates.
    pub vaccination_start_pct: f64,
    /// Vaccination quota accumulated per tick, in agents (fractional).
    pub vaccinations_per_tick: f64,
    /// Share of vaccinated agents that actually become immune, in percent.
    pub vaccination_effectiveness_pct: f64,
    /// Share of the population willing to be vaccinated, in percent.
    pub vaccination_readiness_pct: f64,

    // ── Run control ───────────────────────────────────────────────────────
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
    /// Safety cap on tick count; 0 = uncapped.  Guards against configurations
    /// where the epidemic never burns out.
    pub max_ticks: u64,
    /// Emit a frame event every N ticks; 0 = never, 1 = every tick.
    pub frame_interval_ticks: u64,
}

impl Default for EpiConfig {
    /// Reference scenario: a 10×10-patch world with 10,000 slow-moving agents
    /// and a disease with a 50-tick incubation and 200-tick infectious period.
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            population: 10_000,
            initial_infected: 40,
            agent_speed: 0.01,
            max_wiggle_angle: std::f32::consts::PI,
            infection_radius: 0.1,
            infection_prob_pct: 5.0,
            infectious_tick_prob_pct: 5.0,
            incubation_ticks: 50,
            infection_ticks: 200,
            vaccination_start_pct: 0.0,
            vaccinations_per_tick: 1.25,
            vaccination_effectiveness_pct: 95.0,
            vaccination_readiness_pct: 60.0,
            seed: 42,
            max_ticks: 0,
            frame_interval_ticks: 1,
        }
    }
}

impl EpiConfig {
    /// Check every parameter; the first violation aborts with
    /// [`EpiError::Config`].
    pub fn validate(&self) -> EpiResult<()> {
        fn fail(msg: String) -> EpiResult<()> {
            Err(EpiError::Config(msg))
        }

        if self.population == 0 {
            return fail("population must be > 0".into());
        }
        if !(self.width > 0.0 && self.width.is_finite()) {
            return fail(format!("world width must be finite and > 0, got {}", self.width));
        }
        if !(self.height > 0.0 && self.height.is_finite()) {
            return fail(format!("world height must be finite and > 0, got {}", self.height));
        }
        if !(self.infection_radius > 0.0 && self.infection_radius.is_finite()) {
            return fail(format!(
                "infection radius must be finite and > 0, got {}",
                self.infection_radius
            ));
        }
        if !(self.agent_speed >= 0.0 && self.agent_speed.is_finite()) {
            return fail(format!("agent speed must be finite and >= 0, got {}", self.agent_speed));
        }
        if !(self.max_wiggle_angle >= 0.0 && self.max_wiggle_angle.is_finite()) {
            return fail(format!(
                "wiggle angle must be finite and >= 0, got {}",
                self.max_wiggle_angle
            ));
        }
        if self.initial_infected > self.population {
            return fail(format!(
                "initial infected count {} exceeds population {}",
                self.initial_infected, self.population
            ));
        }
        if self.incubation_ticks == 0 {
            return fail("incubation period must be >= 1 tick".into());
        }
        if self.infection_ticks == 0 {
            return fail("infection duration must be >= 1 tick".into());
        }
        if !(self.vaccinations_per_tick >= 0.0 && self.vaccinations_per_tick.is_finite()) {
            return fail(format!(
                "vaccinations per tick must be finite and >= 0, got {}",
                self.vaccinations_per_tick
            ));
        }

        for (name, pct) in [
            ("infection probability", self.infection_prob_pct),
            ("infectious-tick probability", self.infectious_tick_prob_pct),
            ("vaccination start threshold", self.vaccination_start_pct),
            ("vaccination effectiveness", self.vaccination_effectiveness_pct),
            ("vaccination readiness", self.vaccination_readiness_pct),
        ] {
            if !(0.0..=100.0).contains(&pct) {
                return fail(format!("{name} must be in [0, 100] percent, got {pct}"));
            }
        }

        Ok(())
    }

    /// The world geometry described by this configuration.
    #[inline]
    pub fn torus(&self) -> Torus {
        Torus::new(self.width, self.height)
    }
}
