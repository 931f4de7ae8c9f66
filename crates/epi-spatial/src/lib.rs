//! `epi-spatial` — per-tick neighbor discovery for `epiwalk`.
//!
//! One type lives here: [`AxisIndex`], a transient structure rebuilt from the
//! population's positions every tick and queried once per infectious agent.

pub mod index;


pub use index::AxisIndex;
