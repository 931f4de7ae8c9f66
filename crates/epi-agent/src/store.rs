//! Core population storage: `Population` (SoA data) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The motion pass needs `&mut` access to an agent's kinematic state *and* its
//! RNG at the same time.  Keeping the RNGs in a separate `AgentRngs` struct
//! lets the tick loop borrow both without fighting the borrow checker, and
//! lets the pass zip the SoA slices with the RNG slice for Rayon.

use epi_core::{AgentId, Compartment, DiseaseState, StateCounts};
use epi_core::AgentRng;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`Population`] so the
/// motion pass can hold `&mut AgentRngs` alongside the position arrays.
///
/// `AgentRngs` is `Send` (the inner `SmallRng` is `Send`) but intentionally
/// not `Sync` — per-agent RNG state must never be shared between threads.
/// Rayon's `par_iter_mut()` handles the exclusive-per-thread access pattern.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let x = pop.pos_x[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Agents are never created or destroyed mid-run — "removed" is a disease
/// state, not deallocation — so `count` is invariant for the run's lifetime.
///
/// The countdown arrays are meaningful only while the agent is in the
/// corresponding disease state; stale values are never read after the agent
/// moves on.
pub struct Population {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematic state ───────────────────────────────────────────────────
    /// x-coordinate in `[0, width)`, torus-wrapped.
    pub pos_x: Vec<f32>,
    /// y-coordinate in `[0, height)`, torus-wrapped.
    pub pos_y: Vec<f32>,
    /// Heading in `[0, 2π)` radians.
    pub heading: Vec<f32>,

    // ── Epidemiological state ─────────────────────────────────────────────
    /// The agent's SEIR disease course.
    pub disease: Vec<DiseaseState>,
    /// Vaccination label — set once by the scheduler, never cleared.
    pub vaccinated: Vec<bool>,
    /// Fixed at creation: willing to be vaccinated at all.
    pub vaccination_eligible: Vec<bool>,
    /// Fixed at creation: a vaccination actually confers immunity.
    pub vaccine_responsive: Vec<bool>,
    /// Ticks until an Exposed agent becomes Infected.
    pub incubation_left: Vec<i32>,
    /// Ticks until an Infected agent becomes Removed.
    pub removal_left: Vec<i32>,
}

impl Population {
    /// An all-Susceptible population at the origin, all-eligible and
    /// all-responsive.  Tests and spawners fill in actual values afterwards.
    pub fn blank(count: usize) -> Self {
        Self {
            count,
            pos_x: vec![0.0; count],
            pos_y: vec![0.0; count],
            heading: vec![0.0; count],
            disease: vec![DiseaseState::Susceptible; count],
            vaccinated: vec![false; count],
            vaccination_eligible: vec![true; count],
            vaccine_responsive: vec![true; count],
            incubation_left: vec![0; count],
            removal_left: vec![0; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Reporting ─────────────────────────────────────────────────────────

    /// The reported compartment tag for one agent.
    #[inline]
    pub fn compartment(&self, agent: AgentId) -> Compartment {
        Compartment::of(self.disease[agent.index()], self.vaccinated[agent.index()])
    }

    /// Tally the whole population into per-compartment counts.
    pub fn census(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for agent in self.agent_ids() {
            counts.record(self.compartment(agent));
        }
        counts
    }

    /// `true` while any agent's disease course is Exposed or Infected.
    ///
    /// Uses the internal course rather than reported compartments, so hidden
    /// breakthrough infections in vaccinated non-responders keep the run
    /// alive until they resolve.
    pub fn epidemic_active(&self) -> bool {
        self.disease.iter().any(|d| d.is_active())
    }

    /// All currently infectious agents, in ascending id order.
    pub fn infectious(&self) -> Vec<AgentId> {
        self.agent_ids()
            .filter(|a| self.disease[a.index()] == DiseaseState::Infected)
            .collect()
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// `true` if `agent` can be the target of an exposure attempt: its disease
    /// course is Susceptible and it is either unvaccinated or a vaccinated
    /// non-responder (vaccine failure).
    #[inline]
    pub fn is_exposure_target(&self, agent: AgentId) -> bool {
        let i = agent.index();
        self.disease[i] == DiseaseState::Susceptible
            && (!self.vaccinated[i] || !self.vaccine_responsive[i])
    }

    /// Expose `agent` with a fresh incubation countdown.
    ///
    /// A no-op unless the agent's disease course is Susceptible, so racing
    /// exposure attempts in one tick resolve to first-flip-wins.
    pub fn expose(&mut self, agent: AgentId, incubation_ticks: u32) {
        let i = agent.index();
        if self.disease[i] == DiseaseState::Susceptible {
            self.disease[i] = DiseaseState::Exposed;
            self.incubation_left[i] = incubation_ticks as i32;
        }
    }

    /// Set the vaccination label.  The disease course is untouched:
    /// responsiveness only affects exposure targeting, not the label.
    pub fn vaccinate(&mut self, agent: AgentId) {
        self.vaccinated[agent.index()] = true;
    }
}
