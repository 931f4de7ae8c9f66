//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod world {
    use crate::Torus;
    use crate::world::wrap_angle;

    #[test]
    fn wrap_stays_in_half_open_interval() {
        let t = Torus::new(10.0, 10.0);
        assert_eq!(t.wrap_x(3.5), 3.5);
        assert_eq!(t.wrap_x(10.0), 0.0);
        assert_eq!(t.wrap_x(12.5), 2.5);
        assert_eq!(t.wrap_y(-0.5), 9.5);
        assert!(t.contains(t.wrap_x(-1e-7), t.wrap_y(-1e-7)));
    }

    #[test]
    fn exiting_right_edge_reappears_left() {
        let t = Torus::new(10.0, 10.0);
        let eps = 1e-3_f32;
        let x = t.wrap_x((10.0 - eps) + 0.01);
        assert!((0.0..0.01).contains(&x), "got {x}");
    }

    #[test]
    fn angle_wraps_into_tau() {
        use std::f32::consts::TAU;
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-6);
        let w = wrap_angle(-0.5);
        assert!((0.0..TAU).contains(&w));
        assert!((w - (TAU - 0.5)).abs() < 1e-5);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn percent_extremes() {
        let mut rng = SimRng::new(0);
        for _ in 0..100 {
            assert!(!rng.percent(0.0));
            assert!(rng.percent(100.0));
        }
    }
}

#[cfg(test)]
mod health {
    use crate::{Compartment, DiseaseState, StateCounts};

    #[test]
    fn vaccinated_label_wins() {
        assert_eq!(
            Compartment::of(DiseaseState::Infected, true),
            Compartment::Vaccinated
        );
        assert_eq!(
            Compartment::of(DiseaseState::Infected, false),
            Compartment::Infected
        );
    }

    #[test]
    fn active_states() {
        assert!(DiseaseState::Exposed.is_active());
        assert!(DiseaseState::Infected.is_active());
        assert!(!DiseaseState::Susceptible.is_active());
        assert!(!DiseaseState::Removed.is_active());
    }

    #[test]
    fn counts_record_and_total() {
        let mut c = StateCounts::default();
        c.record(Compartment::Susceptible);
        c.record(Compartment::Susceptible);
        c.record(Compartment::Infected);
        c.record(Compartment::Vaccinated);
        assert_eq!(c.as_array(), [2, 0, 1, 1, 0]);
        assert_eq!(c.total(), 4);
    }
}

#[cfg(test)]
mod config {
    use crate::EpiConfig;

    #[test]
    fn default_is_valid() {
        assert!(EpiConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_population_rejected() {
        let cfg = EpiConfig { population: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn nonpositive_world_rejected() {
        let cfg = EpiConfig { width: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = EpiConfig { height: -1.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_radius_rejected() {
        let cfg = EpiConfig { infection_radius: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn out_of_range_percentage_rejected() {
        let cfg = EpiConfig { infection_prob_pct: 101.0, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = EpiConfig { vaccination_readiness_pct: -0.1, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn excess_initial_infected_rejected() {
        let cfg = EpiConfig {
            population: 10,
            initial_infected: 11,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn torus_matches_dimensions() {
        let cfg = EpiConfig::default();
        let t = cfg.torus();
        assert_eq!(t.width, cfg.width);
        assert_eq!(t.height, cfg.height);
    }
}
