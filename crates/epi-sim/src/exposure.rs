//! The per-tick exposure pass.

use epi_agent::Population;
use epi_core::{AgentId, EpiConfig, SimRng};
use epi_spatial::AxisIndex;

/// Attempt transmission for every agent in `infectious` (the set snapshotted
/// at the start of the tick, in ascending id order).
///
/// For each source: one infectious-tick coin flip gates the whole tick — an
/// infected agent that fails it is skipped entirely, neighbor query included.
/// Otherwise the index is queried at the infection radius and each neighbor
/// that is a legal exposure target gets an independent infection coin flip.
/// A success exposes the target with a fresh incubation countdown.
///
/// Multiple sources may reach the same target in one tick; the first
/// successful flip wins — once the target leaves Susceptible, later sources
/// no longer see it as a target and draw nothing for it.  Sources and
/// targets are both visited in ascending id order, pinning the draw sequence
/// (and therefore the outcome) to the seed.
pub fn exposure_pass(
    pop: &mut Population,
    index: &AxisIndex,
    cfg: &EpiConfig,
    rng: &mut SimRng,
    infectious: &[AgentId],
) {
    let mut neighbors: Vec<AgentId> = Vec::new();

    for &source in infectious {
        if !rng.percent(cfg.infectious_tick_prob_pct) {
            continue;
        }

        index.query_into(source, cfg.infection_radius, &mut neighbors);

        for &target in &neighbors {
            if !pop.is_exposure_target(target) {
                continue;
            }
            if rng.percent(cfg.infection_prob_pct) {
                pop.expose(target, cfg.incubation_ticks);
            }
        }
    }
}
