//! `epi-core` — foundational types for the `epiwalk` epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                             |
//! | [`world`]   | `Torus` (wrapped 2D plane), angle wrapping            |
//! | [`time`]    | `Tick`                                                |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`health`]  | `DiseaseState`, `Compartment`, `StateCounts`          |
//! | [`config`]  | `EpiConfig` + fail-fast validation                    |
//! | [`error`]   | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod health;
pub mod ids;
pub mod rng;
pub mod time;
pub mod world;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EpiConfig;
pub use error::{EpiError, EpiResult};
pub use health::{Compartment, DiseaseState, StateCounts};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
pub use world::Torus;
