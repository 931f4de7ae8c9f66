//! Fluent builder for constructing a [`SimulationRun`].

use epi_agent::{AgentRngs, Population, spawn_population};
use epi_core::{EpiConfig, SimRng, Tick};

use crate::run::{RunStatus, SimulationRun};
use crate::vaccination::VaccinationScheduler;
use crate::{SimError, SimResult};

/// Fluent builder for [`SimulationRun`].
///
/// Validates the configuration before anything else — an invalid configuration
/// never produces a run.  By default the population is spawned from the
/// config's seed; tests and scripted scenarios can supply an explicit
/// population instead.
///
/// # Example
///
/// ```rust,ignore
/// let mut run = RunBuilder::new(EpiConfig::default()).build()?;
/// let outcome = run.run(&mut NoopObserver);
/// ```
pub struct RunBuilder {
    config: EpiConfig,
    population: Option<Population>,
}

impl RunBuilder {
    pub fn new(config: EpiConfig) -> Self {
        Self {
            config,
            population: None,
        }
    }

    /// Supply a pre-built population (must match `config.population` in size)
    /// instead of spawning one from the seed.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Validate the configuration, spawn (or adopt) the population, and return
    /// a ready-to-run [`SimulationRun`].
    pub fn build(self) -> SimResult<SimulationRun> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);

        let population = match self.population {
            Some(pop) => {
                if pop.count != self.config.population as usize {
                    return Err(SimError::PopulationMismatch {
                        expected: self.config.population as usize,
                        got: pop.count,
                    });
                }
                pop
            }
            None => spawn_population(&self.config, &mut rng),
        };

        let rngs = AgentRngs::new(population.count, self.config.seed);
        let world = self.config.torus();

        Ok(SimulationRun {
            config: self.config,
            world,
            tick: Tick::ZERO,
            population,
            rngs,
            rng,
            scheduler: VaccinationScheduler::new(),
            results: Vec::new(),
            status: RunStatus::Running,
        })
    }
}
