//! Randomized initial population.

use epi_core::{DiseaseState, EpiConfig, SimRng};

use crate::Population;

/// Spawn the initial population described by `cfg`, drawing every randomized
/// attribute from `rng` in ascending agent order.
///
/// - Positions uniform over the world, headings uniform over `[0, 2π)`.
/// - The first `initial_infected` agents start Infected; the rest Susceptible.
/// - Eligibility and responsiveness are drawn from the configured percentages.
/// - Each initially infected agent's removal countdown is re-drawn uniformly
///   in `[0, infection_ticks)` so the seed infections do not all recover on
///   the same tick.
///
/// `cfg` is assumed validated; the run builder checks before calling.
pub fn spawn_population(cfg: &EpiConfig, rng: &mut SimRng) -> Population {
    let count = cfg.population as usize;
    let mut pop = Population::blank(count);

    for i in 0..count {
        pop.pos_x[i] = rng.gen_range(0.0..cfg.width);
        pop.pos_y[i] = rng.gen_range(0.0..cfg.height);
        pop.heading[i] = rng.gen_range(0.0..std::f32::consts::TAU);
        pop.disease[i] = if (i as u32) < cfg.initial_infected {
            DiseaseState::Infected
        } else {
            DiseaseState::Susceptible
        };
        pop.vaccination_eligible[i] = rng.percent(cfg.vaccination_readiness_pct);
        pop.vaccine_responsive[i] = rng.percent(cfg.vaccination_effectiveness_pct);
        pop.incubation_left[i] = cfg.incubation_ticks as i32;
        pop.removal_left[i] = cfg.infection_ticks as i32;
    }

    // Desynchronize the seed infections' recoveries.
    for i in 0..count {
        if pop.disease[i] == DiseaseState::Infected {
            pop.removal_left[i] = rng.gen_range(0..cfg.infection_ticks) as i32;
        }
    }

    pop
}
