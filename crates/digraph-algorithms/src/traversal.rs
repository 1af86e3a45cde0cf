//! Structural traversals
//!
//! Breadth-first and depth-first walks over successor lists. Neighbors are
//! always visited in the order the view stores them.

use super::common::{AlgorithmResult, GraphView};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Which sequence a depth-first walk reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalOrder {
    /// Order in which vertices are first discovered (pre-order).
    Visitation,
    /// Order in which vertices are finished, after all successors (post-order).
    Settlement,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::Visitation => write!(f, "visitation"),
            TraversalOrder::Settlement => write!(f, "settlement"),
        }
    }
}

/// Returned when a traversal order name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown traversal order '{0}' (expected 'visit' or 'settlement')")]
pub struct ParseOrderError(pub String);

impl FromStr for TraversalOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "visit" | "visitation" => Ok(TraversalOrder::Visitation),
            "settle" | "settlement" => Ok(TraversalOrder::Settlement),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

/// Breadth-First Search settlement order from `start`.
///
/// The start vertex is settled first; vertices unreachable from it are absent.
pub fn bfs(view: &GraphView, start: usize) -> AlgorithmResult<Vec<usize>> {
    view.check_start(start)?;

    let mut discovered = vec![false; view.node_count];
    let mut queue = VecDeque::new();
    let mut settled = Vec::new();

    discovered[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        settled.push(current);
        for &next in view.successors(current) {
            if !discovered[next] {
                discovered[next] = true;
                queue.push_back(next);
            }
        }
    }

    trace!(start, reached = settled.len(), "bfs finished");
    Ok(settled)
}

/// Depth-First Search from `start`, reporting the requested order.
///
/// Uses an explicit stack of `(vertex, next successor offset)` frames instead
/// of recursion.
pub fn dfs(view: &GraphView, start: usize, order: TraversalOrder) -> AlgorithmResult<Vec<usize>> {
    view.check_start(start)?;

    let mut discovered = vec![false; view.node_count];
    let mut visitation = vec![start];
    let mut settlement = Vec::new();
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    discovered[start] = true;

    while let Some(frame) = stack.last_mut() {
        let (vertex, offset) = *frame;
        let successors = view.successors(vertex);

        match successors[offset..].iter().position(|&v| !discovered[v]) {
            Some(skip) => {
                let next = successors[offset + skip];
                frame.1 = offset + skip + 1;
                discovered[next] = true;
                visitation.push(next);
                stack.push((next, 0));
            }
            None => {
                settlement.push(vertex);
                stack.pop();
            }
        }
    }

    trace!(start, reached = visitation.len(), %order, "dfs finished");
    Ok(match order {
        TraversalOrder::Visitation => visitation,
        TraversalOrder::Settlement => settlement,
    })
}
