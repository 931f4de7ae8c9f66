//! The population-level vaccination scheduler.

use epi_agent::Population;
use epi_core::{AgentId, DiseaseState, EpiConfig};

/// Decides, each tick, whether the vaccination campaign is active and how
/// many eligible agents to vaccinate.
///
/// The campaign activates permanently once the infectious share of the
/// population exceeds the configured start threshold; it never deactivates.
/// While active, a fractional per-tick quota accumulates in `credit`; each
/// tick the integer part is spent on vaccinations and only the fractional
/// remainder carries over — including when fewer eligible agents were
/// available than the quota allowed (the unspent integer part is discarded,
/// not banked).
#[derive(Debug, Default)]
pub struct VaccinationScheduler {
    active: bool,
    credit: f64,
}

impl VaccinationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once the campaign has started.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The fractional quota carried into the next tick.
    pub fn credit(&self) -> f64 {
        self.credit
    }

    /// One tick of the scheduler.
    ///
    /// `infectious_now` is the infectious count from this tick's snapshot.
    /// On the activation tick itself no one is vaccinated yet; vaccinations
    /// begin the following tick.
    ///
    /// Selection is ascending agent id over eligible Susceptible agents —
    /// arbitrary but deterministic, as reproducibility requires.
    pub fn advance(&mut self, pop: &mut Population, cfg: &EpiConfig, infectious_now: usize) {
        if !self.active {
            let infected_pct = infectious_now as f64 / pop.count as f64 * 100.0;
            if infected_pct > cfg.vaccination_start_pct {
                self.active = true;
            }
            return;
        }

        self.credit += cfg.vaccinations_per_tick;
        let mut quota = self.credit as usize;

        for i in 0..pop.count {
            if quota == 0 {
                break;
            }
            if pop.disease[i] == DiseaseState::Susceptible
                && !pop.vaccinated[i]
                && pop.vaccination_eligible[i]
            {
                pop.vaccinate(AgentId(i as u32));
                quota -= 1;
            }
        }

        self.credit = self.credit.fract();
    }
}
