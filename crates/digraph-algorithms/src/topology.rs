//! Graph topology analysis algorithms
//!
//! Kahn's topological sort over a working indegree array.

use super::common::GraphView;
use tracing::debug;

/// Kahn's algorithm, processed in rounds.
///
/// Each round scans vertices in index order and places every unplaced vertex
/// whose remaining indegree is zero, decrementing its successors immediately,
/// so a vertex freed earlier in the same scan is placed in that same round.
/// Ties between simultaneously free vertices therefore resolve by index.
///
/// Returns `None` when a round places nothing, i.e. the remaining vertices
/// all lie on or behind a directed cycle.
pub fn topological_sort(view: &GraphView) -> Option<Vec<usize>> {
    let n = view.node_count;
    let mut indegree: Vec<usize> = (0..n).map(|v| view.in_degree(v)).collect();
    let mut placed = vec![false; n];
    let mut order = Vec::with_capacity(n);

    while order.len() < n {
        let before = order.len();
        for v in 0..n {
            if placed[v] || indegree[v] != 0 {
                continue;
            }
            placed[v] = true;
            order.push(v);
            for &next in view.successors(v) {
                indegree[next] -= 1;
            }
        }

        if order.len() == before {
            debug!(placed = before, remaining = n - before, "cycle detected during topological sort");
            return None;
        }
    }

    Some(order)
}

/// Whether the view contains no directed cycle.
pub fn is_acyclic(view: &GraphView) -> bool {
    topological_sort(view).is_some()
}
