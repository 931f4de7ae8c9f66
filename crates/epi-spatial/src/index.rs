//! The sorted-axis neighbor index.
//!
//! # Algorithm
//!
//! Build (O(N log N), once per tick): sort agent ids by x-coordinate and by
//! y-coordinate, and record each agent's rank in both orderings so a query
//! locates itself in O(1).
//!
//! Query (O(local density)): from the query agent's rank, walk outward in the
//! x-ordering in both directions until the x-distance exceeds the radius,
//! collecting candidate ids; do the same in the y-ordering.  The 1D windows
//! are a pre-filter, not an exact test — their *set intersection* (computed
//! here as a sorted merge, O(|X|+|Y|)) is a superset of the true neighbors,
//! and each survivor is checked against the exact Euclidean distance.
//!
//! # Wraparound caveat
//!
//! Neither the axis windows nor the distance test account for toroidal
//! wraparound: a pair whose shortest path crosses a world edge is treated as
//! far apart and missed.  This is an accepted approximation — it only affects
//! agents within one infection radius of the rim, which is negligible at the
//! intended radius-to-world ratios.

use epi_core::AgentId;

/// Per-tick transient neighbor index over a fixed snapshot of positions.
///
/// Rebuilt fresh every tick rather than incrementally maintained — at this
/// population scale the O(N log N) rebuild is cheaper than keeping a mutable
/// structure consistent with every agent moving every tick.
pub struct AxisIndex {
    /// Position snapshot, indexed by agent id.
    xs: Vec<f32>,
    ys: Vec<f32>,
    /// Agent ids sorted by x / by y.
    by_x: Vec<AgentId>,
    by_y: Vec<AgentId>,
    /// Inverse permutations: agent id → rank in `by_x` / `by_y`.
    rank_x: Vec<u32>,
    rank_y: Vec<u32>,
}

impl AxisIndex {
    /// Build the index over a position snapshot.  `xs` and `ys` must have the
    /// same length; index `i` is agent `AgentId(i)`.
    pub fn build(xs: &[f32], ys: &[f32]) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        let n = xs.len();

        let mut by_x: Vec<AgentId> = (0..n as u32).map(AgentId).collect();
        by_x.sort_unstable_by(|a, b| xs[a.index()].total_cmp(&xs[b.index()]));

        let mut by_y: Vec<AgentId> = (0..n as u32).map(AgentId).collect();
        by_y.sort_unstable_by(|a, b| ys[a.index()].total_cmp(&ys[b.index()]));

        let mut rank_x = vec![0u32; n];
        for (rank, id) in by_x.iter().enumerate() {
            rank_x[id.index()] = rank as u32;
        }
        let mut rank_y = vec![0u32; n];
        for (rank, id) in by_y.iter().enumerate() {
            rank_y[id.index()] = rank as u32;
        }

        Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            by_x,
            by_y,
            rank_x,
            rank_y,
        }
    }

    /// Number of indexed agents.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// All agents within exact Euclidean distance ≤ `radius` of `agent`,
    /// excluding `agent` itself, in ascending id order (subject to the
    /// wraparound caveat in the module docs).
    pub fn query(&self, agent: AgentId, radius: f32) -> Vec<AgentId> {
        let mut out = Vec::new();
        self.query_into(agent, radius, &mut out);
        out
    }

    /// As [`query`](Self::query), reusing `out` as the result buffer.
    pub fn query_into(&self, agent: AgentId, radius: f32, out: &mut Vec<AgentId>) {
        out.clear();

        let cx = self.xs[agent.index()];
        let cy = self.ys[agent.index()];

        let mut x_candidates =
            axis_window(&self.by_x, &self.xs, self.rank_x[agent.index()] as usize, cx, radius);
        let mut y_candidates =
            axis_window(&self.by_y, &self.ys, self.rank_y[agent.index()] as usize, cy, radius);

        // Window walks emit ids in coordinate order; sort by id so the
        // intersection is a linear merge and the result is id-ordered.
        x_candidates.sort_unstable();
        y_candidates.sort_unstable();

        let r2 = radius * radius;
        let (mut i, mut j) = (0, 0);
        while i < x_candidates.len() && j < y_candidates.len() {
            match x_candidates[i].cmp(&y_candidates[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    let id = x_candidates[i];
                    let dx = self.xs[id.index()] - cx;
                    let dy = self.ys[id.index()] - cy;
                    if dx * dx + dy * dy <= r2 {
                        out.push(id);
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
    }
}

/// Walk outward from rank `at` in one sorted ordering, collecting every id
/// whose 1D coordinate lies within `radius` of `center`.  The agent at `at`
/// itself is skipped.
fn axis_window(
    order: &[AgentId],
    coords: &[f32],
    at: usize,
    center: f32,
    radius: f32,
) -> Vec<AgentId> {
    let mut out = Vec::new();

    let mut i = at;
    while i > 0 {
        i -= 1;
        let id = order[i];
        if (coords[id.index()] - center).abs() > radius {
            break;
        }
        out.push(id);
    }

    for &id in &order[at + 1..] {
        if (coords[id.index()] - center).abs() > radius {
            break;
        }
        out.push(id);
    }

    out
}
