//! Plain data row types written by output backends.

use epi_core::{Compartment, StateCounts, Tick};

/// One agent's position and reported compartment at a frame tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRow {
    pub agent_id:    u32,
    pub tick:        u64,
    pub x:           f32,
    pub y:           f32,
    pub compartment: Compartment,
}

/// Per-compartment counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickCountsRow {
    pub tick:        u64,
    pub susceptible: u32,
    pub exposed:     u32,
    pub infected:    u32,
    pub vaccinated:  u32,
    pub removed:     u32,
}

impl TickCountsRow {
    /// Build a row from the counts recorded at `tick`.
    pub fn from_counts(tick: Tick, counts: &StateCounts) -> Self {
        Self {
            tick:        tick.0,
            susceptible: counts.susceptible,
            exposed:     counts.exposed,
            infected:    counts.infected,
            vaccinated:  counts.vaccinated,
            removed:     counts.removed,
        }
    }
}
