//! `epi-agent` — Structure-of-Arrays population storage for `epiwalk`.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`store`]  | `Population` (SoA arrays), `AgentRngs` (per-agent RNG)    |
//! | [`spawn`]  | Randomized initial population from an `EpiConfig`         |
//! | [`update`] | Per-tick motion and disease-countdown passes              |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs the motion pass on Rayon's thread pool.              |

pub mod spawn;
pub mod store;
pub mod update;

#[cfg(test)]
mod tests;

pub use spawn::spawn_population;
pub use store::{AgentRngs, Population};
