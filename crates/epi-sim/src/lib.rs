//! `epi-sim` — tick loop orchestrator for the epiwalk epidemic simulator.
//!
//! # Tick loop
//!
//! ```text
//! loop:
//!   ① Census     — tally reported compartments; append to the results series.
//!   ② Terminate? — no agent's disease course is Exposed/Infected → Terminated
//!                  (the terminal census stays recorded).
//!   ③ Snapshot   — collect the infectious set (sources for this tick).
//!   ④ Update     — motion pass (parallel with the `parallel` feature) and
//!                  countdown pass for every agent.
//!   ⑤ Vaccinate  — campaign activation check / quota-driven vaccinations.
//!   ⑥ Exposure   — rebuild the AxisIndex; each snapshot-infectious agent
//!                  attempts transmission on its post-motion neighbors.
//!   ⑦ Emit       — frame event and tick-end callback to the observer.
//! ```
//!
//! The infectious set is snapshotted *before* the countdown pass, so an agent
//! whose removal countdown expires this tick still transmits this tick, and
//! an agent that only became infectious this tick does not.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the motion pass on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::EpiConfig;
//! use epi_sim::{NoopObserver, RunBuilder};
//!
//! let mut run = RunBuilder::new(EpiConfig::default()).build()?;
//! let outcome = run.run(&mut NoopObserver);
//! println!("{outcome:?} after {} ticks", run.results().len());
//! ```

pub mod builder;
pub mod error;
pub mod exposure;
pub mod observer;
pub mod run;
pub mod vaccination;


pub use builder::RunBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use run::{RunOutcome, RunStatus, SimulationRun};
pub use vaccination::VaccinationScheduler;
