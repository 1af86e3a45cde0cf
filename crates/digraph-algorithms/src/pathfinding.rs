//! Pathfinding algorithms
//!
//! Single-source shortest paths by priority-frontier expansion (Dijkstra).

use super::common::{AlgorithmError, AlgorithmResult, GraphView, Weight};
use super::frontier::MinFrontier;
use tracing::trace;

/// Result of a point-to-point pathfinding query
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: usize,
    pub target: usize,
    pub path: Vec<usize>,
    pub cost: Weight,
}

/// Shortest-path tree rooted at `source`.
///
/// `distance[v]` and `predecessor[v]` are `None` for vertices the expansion
/// never settled (unreachable from the source). The source itself has
/// distance 0 and no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPathTree {
    pub source: usize,
    pub distance: Vec<Option<Weight>>,
    pub predecessor: Vec<Option<usize>>,
    /// Vertices in the order they were settled (non-decreasing distance)
    pub settled: Vec<usize>,
}

impl ShortestPathTree {
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance.get(target).is_some_and(|d| d.is_some())
    }

    /// Walk predecessors back from `target` to the source.
    pub fn path_to(&self, target: usize) -> Option<PathResult> {
        let cost = (*self.distance.get(target)?)?;

        let mut path = vec![target];
        let mut curr = target;
        while let Some(parent) = self.predecessor[curr] {
            path.push(parent);
            curr = parent;
        }
        path.reverse();

        Some(PathResult {
            source: self.source,
            target,
            path,
            cost,
        })
    }
}

/// Dijkstra's Algorithm from `source` to every reachable vertex.
///
/// Each extracted vertex is settled at its final distance. Unsettled
/// successors are offered `distance[current] + weight`; the frontier only ever
/// lowers a queued distance, and a lowered distance re-points the successor's
/// predecessor at `current`. Ties settle in first-discovery order.
///
/// Every outgoing edge of every settled vertex is validated, so any negative
/// weight reachable from the source fails the whole expansion.
pub fn shortest_paths(view: &GraphView, source: usize) -> AlgorithmResult<ShortestPathTree> {
    view.check_start(source)?;

    let n = view.node_count;
    let mut distance: Vec<Option<Weight>> = vec![None; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut is_settled = vec![false; n];
    let mut settled = Vec::new();
    let mut frontier = MinFrontier::with_capacity(n.min(1024));

    frontier.add_or_update(source, 0);

    while let Some((current, cost)) = frontier.remove_min() {
        is_settled[current] = true;
        distance[current] = Some(cost);
        settled.push(current);

        for (next, weight) in view.weighted_successors(current) {
            // every edge is validated, including edges into settled vertices
            if weight < 0 {
                return Err(AlgorithmError::NegativeWeight {
                    from: current,
                    to: next,
                    weight,
                });
            }
            if is_settled[next] {
                continue;
            }
            let next_cost = cost
                .checked_add(weight)
                .ok_or(AlgorithmError::WeightOverflow { from: current, to: next })?;

            if frontier.add_or_update(next, next_cost) {
                predecessor[next] = Some(current);
            }
        }
    }

    trace!(source, settled = settled.len(), "shortest path expansion finished");
    Ok(ShortestPathTree {
        source,
        distance,
        predecessor,
        settled,
    })
}

/// Dijkstra's Algorithm (Weighted Shortest Path) between two vertices.
///
/// Returns `Ok(None)` when `target` is unreachable or out of bounds.
pub fn dijkstra(view: &GraphView, source: usize, target: usize) -> AlgorithmResult<Option<PathResult>> {
    Ok(shortest_paths(view, source)?.path_to(target))
}
