//! Unit tests for population storage, spawning, and per-tick updates.

use epi_core::{AgentId, Compartment, DiseaseState, EpiConfig, SimRng, Torus};

use crate::{AgentRngs, Population, spawn_population};

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn blank_population_is_all_susceptible() {
        let pop = Population::blank(5);
        assert_eq!(pop.count, 5);
        assert!(pop.disease.iter().all(|&d| d == DiseaseState::Susceptible));
        assert!(!pop.epidemic_active());
        assert_eq!(pop.census().as_array(), [5, 0, 0, 0, 0]);
    }

    #[test]
    fn census_counts_every_agent_once() {
        let mut pop = Population::blank(6);
        pop.disease[0] = DiseaseState::Exposed;
        pop.disease[1] = DiseaseState::Infected;
        pop.disease[2] = DiseaseState::Removed;
        pop.vaccinated[3] = true;
        let counts = pop.census();
        assert_eq!(counts.as_array(), [2, 1, 1, 1, 1]);
        assert_eq!(counts.total() as usize, pop.count);
    }

    #[test]
    fn vaccinated_label_shadows_disease_course() {
        let mut pop = Population::blank(1);
        pop.vaccinated[0] = true;
        pop.disease[0] = DiseaseState::Infected;
        assert_eq!(pop.compartment(AgentId(0)), Compartment::Vaccinated);
        // The hidden course still keeps the epidemic alive.
        assert!(pop.epidemic_active());
        assert_eq!(pop.infectious(), vec![AgentId(0)]);
    }

    #[test]
    fn exposure_targeting_rules() {
        let mut pop = Population::blank(4);
        // 0: plain susceptible — target.
        // 1: vaccinated responder — not a target.
        pop.vaccinated[1] = true;
        // 2: vaccinated non-responder — target (vaccine failure).
        pop.vaccinated[2] = true;
        pop.vaccine_responsive[2] = false;
        // 3: already exposed — not a target.
        pop.disease[3] = DiseaseState::Exposed;

        assert!(pop.is_exposure_target(AgentId(0)));
        assert!(!pop.is_exposure_target(AgentId(1)));
        assert!(pop.is_exposure_target(AgentId(2)));
        assert!(!pop.is_exposure_target(AgentId(3)));
    }

    #[test]
    fn expose_is_first_flip_wins() {
        let mut pop = Population::blank(1);
        pop.expose(AgentId(0), 7);
        assert_eq!(pop.disease[0], DiseaseState::Exposed);
        assert_eq!(pop.incubation_left[0], 7);

        // A second exposure attempt must not reset the countdown.
        pop.incubation_left[0] = 3;
        pop.expose(AgentId(0), 7);
        assert_eq!(pop.incubation_left[0], 3);
    }

    #[test]
    fn expose_never_touches_non_susceptible() {
        let mut pop = Population::blank(2);
        pop.disease[0] = DiseaseState::Removed;
        pop.expose(AgentId(0), 5);
        assert_eq!(pop.disease[0], DiseaseState::Removed);

        pop.disease[1] = DiseaseState::Infected;
        pop.expose(AgentId(1), 5);
        assert_eq!(pop.disease[1], DiseaseState::Infected);
    }
}

#[cfg(test)]
mod spawn {
    use super::*;

    #[test]
    fn spawn_matches_config() {
        let cfg = EpiConfig {
            population: 200,
            initial_infected: 10,
            ..Default::default()
        };
        let mut rng = SimRng::new(cfg.seed);
        let pop = spawn_population(&cfg, &mut rng);

        assert_eq!(pop.count, 200);
        assert_eq!(pop.infectious().len(), 10);
        let torus = cfg.torus();
        for a in pop.agent_ids() {
            assert!(torus.contains(pop.pos_x[a.index()], pop.pos_y[a.index()]));
            assert!((0.0..std::f32::consts::TAU).contains(&pop.heading[a.index()]));
        }
    }

    #[test]
    fn seed_infections_have_staggered_removal() {
        let cfg = EpiConfig {
            population: 100,
            initial_infected: 100,
            ..Default::default()
        };
        let mut rng = SimRng::new(7);
        let pop = spawn_population(&cfg, &mut rng);

        let max = cfg.infection_ticks as i32;
        assert!(pop.removal_left.iter().all(|&t| (0..max).contains(&t)));
        // 100 draws from [0, 200) landing on one value is (1/200)^99 — if they
        // are all equal the offsets were not applied.
        assert!(pop.removal_left.iter().any(|&t| t != pop.removal_left[0]));
    }

    #[test]
    fn spawn_is_deterministic_per_seed() {
        let cfg = EpiConfig { population: 50, ..Default::default() };
        let a = spawn_population(&cfg, &mut SimRng::new(99));
        let b = spawn_population(&cfg, &mut SimRng::new(99));
        assert_eq!(a.pos_x, b.pos_x);
        assert_eq!(a.pos_y, b.pos_y);
        assert_eq!(a.heading, b.heading);
        assert_eq!(a.vaccination_eligible, b.vaccination_eligible);
        assert_eq!(a.vaccine_responsive, b.vaccine_responsive);
        assert_eq!(a.removal_left, b.removal_left);
    }
}

#[cfg(test)]
mod update {
    use super::*;

    #[test]
    fn motion_wraps_at_right_edge() {
        let world = Torus::new(10.0, 10.0);
        let mut pop = Population::blank(1);
        pop.pos_x[0] = 10.0 - 1e-3;
        pop.pos_y[0] = 5.0;
        pop.heading[0] = 0.0; // due east
        let mut rngs = AgentRngs::new(1, 1);

        // Zero wiggle keeps the heading at exactly 0.
        pop.advance_motion(&mut rngs, &world, 0.01, 0.0);

        assert!(
            (0.0..0.01).contains(&pop.pos_x[0]),
            "expected wrap to ~0, got {}",
            pop.pos_x[0]
        );
        assert!((pop.pos_y[0] - 5.0).abs() < 1e-4);
    }

    #[test]
    fn motion_stays_inside_world() {
        let world = Torus::new(10.0, 10.0);
        let cfg = EpiConfig { population: 64, ..Default::default() };
        let mut rng = SimRng::new(3);
        let mut pop = spawn_population(&cfg, &mut rng);
        let mut rngs = AgentRngs::new(pop.count, 3);

        for _ in 0..500 {
            pop.advance_motion(&mut rngs, &world, 0.5, std::f32::consts::PI);
        }
        for a in pop.agent_ids() {
            assert!(world.contains(pop.pos_x[a.index()], pop.pos_y[a.index()]));
            assert!((0.0..std::f32::consts::TAU).contains(&pop.heading[a.index()]));
        }
    }

    #[test]
    fn incubation_counts_down_then_transitions() {
        let mut pop = Population::blank(1);
        pop.disease[0] = DiseaseState::Exposed;
        pop.incubation_left[0] = 3;

        let mut seen = vec![];
        for _ in 0..3 {
            pop.advance_disease();
            seen.push(pop.incubation_left[0]);
        }
        // Strictly decreasing while Exposed.
        assert_eq!(seen, vec![2, 1, 0]);
        assert_eq!(pop.disease[0], DiseaseState::Infected);
    }

    #[test]
    fn removal_counts_down_then_transitions() {
        let mut pop = Population::blank(1);
        pop.disease[0] = DiseaseState::Infected;
        pop.removal_left[0] = 2;

        pop.advance_disease();
        assert_eq!(pop.disease[0], DiseaseState::Infected);
        pop.advance_disease();
        assert_eq!(pop.disease[0], DiseaseState::Removed);
    }

    #[test]
    fn newly_infected_does_not_lose_a_removal_tick() {
        // E with countdown 1 becomes I this tick; its removal countdown must
        // not be touched until the next tick (the checks are exclusive).
        let mut pop = Population::blank(1);
        pop.disease[0] = DiseaseState::Exposed;
        pop.incubation_left[0] = 1;
        pop.removal_left[0] = 5;

        pop.advance_disease();
        assert_eq!(pop.disease[0], DiseaseState::Infected);
        assert_eq!(pop.removal_left[0], 5);
    }

    #[test]
    fn susceptible_and_removed_are_untouched() {
        let mut pop = Population::blank(2);
        pop.disease[1] = DiseaseState::Removed;
        pop.incubation_left[0] = 9;
        pop.removal_left[1] = 9;

        pop.advance_disease();
        assert_eq!(pop.disease[0], DiseaseState::Susceptible);
        assert_eq!(pop.disease[1], DiseaseState::Removed);
        assert_eq!(pop.incubation_left[0], 9);
        assert_eq!(pop.removal_left[1], 9);
    }
}
