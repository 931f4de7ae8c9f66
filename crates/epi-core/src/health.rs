//! Epidemiological state types and aggregate counts.
//!
//! # Disease course vs. reported compartment
//!
//! Two views of an agent's health are kept deliberately separate:
//!
//! - [`DiseaseState`] is the *course*: Susceptible → Exposed → Infected →
//!   Removed, driven by exposure flips and countdowns.
//! - [`Compartment`] is the *reported* five-way tag used for frames and the
//!   results series.  It equals the disease state unless the agent carries the
//!   vaccination label, in which case it is `Vaccinated` — permanently.
//!
//! The split exists because a vaccinated non-responder can still catch the
//! disease (vaccine failure) and progress through the full course, including
//! transmitting while infectious, yet it is tallied as Vaccinated throughout.
//! Reported compartments therefore never transition out of Vaccinated or
//! Removed, which is the invariant consumers of the results series rely on.

use std::fmt;

// ── DiseaseState ──────────────────────────────────────────────────────────────

/// One agent's position in the SEIR disease course.
///
/// Transitions are monotonic: Susceptible → Exposed → Infected → Removed.
/// Vaccination is *not* part of the course — it is a separate label (see the
/// module docs).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiseaseState {
    #[default]
    Susceptible,
    Exposed,
    Infected,
    Removed,
}

impl DiseaseState {
    /// `true` while the agent still participates in the epidemic (will become
    /// or currently is infectious).
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, DiseaseState::Exposed | DiseaseState::Infected)
    }
}

// ── Compartment ───────────────────────────────────────────────────────────────

/// The five-way population compartment reported to collaborators.
///
/// Presentation (colors, plot series) is keyed by this tag and belongs
/// entirely to rendering collaborators.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compartment {
    Susceptible,
    Exposed,
    Infected,
    Vaccinated,
    Removed,
}

impl Compartment {
    /// Reported compartment for a given disease course and vaccination label.
    #[inline]
    pub fn of(disease: DiseaseState, vaccinated: bool) -> Compartment {
        if vaccinated {
            return Compartment::Vaccinated;
        }
        match disease {
            DiseaseState::Susceptible => Compartment::Susceptible,
            DiseaseState::Exposed => Compartment::Exposed,
            DiseaseState::Infected => Compartment::Infected,
            DiseaseState::Removed => Compartment::Removed,
        }
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Compartment::Susceptible => "susceptible",
            Compartment::Exposed => "exposed",
            Compartment::Infected => "infected",
            Compartment::Vaccinated => "vaccinated",
            Compartment::Removed => "removed",
        };
        f.write_str(s)
    }
}

// ── StateCounts ───────────────────────────────────────────────────────────────

/// Per-tick aggregate compartment counts.
///
/// Invariant: the five fields sum to the population size at every recorded
/// tick (each agent is tallied exactly once).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts {
    pub susceptible: u32,
    pub exposed: u32,
    pub infected: u32,
    pub vaccinated: u32,
    pub removed: u32,
}

impl StateCounts {
    /// Tally one agent.
    #[inline]
    pub fn record(&mut self, c: Compartment) {
        match c {
            Compartment::Susceptible => self.susceptible += 1,
            Compartment::Exposed => self.exposed += 1,
            Compartment::Infected => self.infected += 1,
            Compartment::Vaccinated => self.vaccinated += 1,
            Compartment::Removed => self.removed += 1,
        }
    }

    /// Sum of all five compartments — equals the population size.
    #[inline]
    pub fn total(&self) -> u32 {
        self.susceptible + self.exposed + self.infected + self.vaccinated + self.removed
    }

    /// The counts in compartment order `[S, E, I, V, R]`.
    #[inline]
    pub fn as_array(&self) -> [u32; 5] {
        [
            self.susceptible,
            self.exposed,
            self.infected,
            self.vaccinated,
            self.removed,
        ]
    }
}
