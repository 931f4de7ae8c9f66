//! Per-tick agent updates: the motion pass and the disease-countdown pass.
//!
//! Both passes run strictly before any cross-agent exposure logic for the
//! tick, so an agent cannot gain and lose infectious status within the same
//! tick's exposure pass.
//!
//! The motion pass is read-own-write-own per agent — with the `parallel`
//! feature it runs on Rayon's thread pool, and because each agent draws only
//! from its own RNG the results are byte-identical to the sequential pass.
//! The countdown pass is cheap and stays sequential.

use epi_core::{AgentRng, DiseaseState, Torus};
use epi_core::world::wrap_angle;

use crate::{AgentRngs, Population};

impl Population {
    /// Advance every agent's heading and position by one tick.
    ///
    /// The heading is perturbed by adding and subtracting independent uniform
    /// offsets scaled by `max_wiggle`, then wrapped into `[0, 2π)`; the
    /// position advances by `speed` along the new heading and wraps on the
    /// torus.
    pub fn advance_motion(
        &mut self,
        rngs: &mut AgentRngs,
        world: &Torus,
        speed: f32,
        max_wiggle: f32,
    ) {
        debug_assert_eq!(self.count, rngs.len());

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.pos_x
                .par_iter_mut()
                .zip(self.pos_y.par_iter_mut())
                .zip(self.heading.par_iter_mut())
                .zip(rngs.inner.par_iter_mut())
                .for_each(|(((x, y), heading), rng)| {
                    step_agent(x, y, heading, rng, world, speed, max_wiggle);
                });
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.pos_x
                .iter_mut()
                .zip(self.pos_y.iter_mut())
                .zip(self.heading.iter_mut())
                .zip(rngs.inner.iter_mut())
                .for_each(|(((x, y), heading), rng)| {
                    step_agent(x, y, heading, rng, world, speed, max_wiggle);
                });
        }
    }

    /// Advance incubation and removal countdowns by one tick.
    ///
    /// Exposed agents whose countdown reaches ≤ 0 become Infected; Infected
    /// agents whose countdown reaches ≤ 0 become Removed.  The two checks are
    /// mutually exclusive per agent per tick — the state at entry decides
    /// which one applies.
    pub fn advance_disease(&mut self) {
        for i in 0..self.count {
            match self.disease[i] {
                DiseaseState::Exposed => {
                    self.incubation_left[i] -= 1;
                    if self.incubation_left[i] <= 0 {
                        self.disease[i] = DiseaseState::Infected;
                    }
                }
                DiseaseState::Infected => {
                    self.removal_left[i] -= 1;
                    if self.removal_left[i] <= 0 {
                        self.disease[i] = DiseaseState::Removed;
                    }
                }
                DiseaseState::Susceptible | DiseaseState::Removed => {}
            }
        }
    }
}

/// One agent's wiggle-and-step, operating only on its own state.
#[inline]
fn step_agent(
    x: &mut f32,
    y: &mut f32,
    heading: &mut f32,
    rng: &mut AgentRng,
    world: &Torus,
    speed: f32,
    max_wiggle: f32,
) {
    *heading += max_wiggle * rng.random::<f32>();
    *heading -= max_wiggle * rng.random::<f32>();
    *heading = wrap_angle(*heading);

    *x = world.wrap_x(*x + heading.cos() * speed);
    *y = world.wrap_y(*y + heading.sin() * speed);
}
