//! Graph algorithms module
//!
//! Algorithms are implemented in the `digraph-algorithms` crate over a dense
//! [`GraphView`]. This module provides the integration/adapter layer: it
//! snapshots a [`GraphStore`] into a view whose indices are the store's
//! vertex positions, runs the algorithm, and maps positions back to labels.

mod ordering;
mod pathfinding;

use crate::graph::types::describe;
use crate::graph::{GraphError, GraphStore, VertexLabel};
use digraph_algorithms::{AlgorithmError, GraphView};
use tracing::warn;

pub use digraph_algorithms::{MinFrontier, TraversalOrder};
pub use pathfinding::{PathEntry, PathResult, ShortestPaths};

/// Build a GraphView from the store for algorithm execution
///
/// View index `i` is the vertex at store position `i`. Successor lists follow
/// each vertex's outgoing insertion order; predecessor lists follow incoming
/// insertion order.
pub fn build_view<L: VertexLabel>(store: &GraphStore<L>) -> GraphView {
    let node_count = store.vertex_count();
    let mut outgoing = Vec::with_capacity(node_count);
    let mut incoming = Vec::with_capacity(node_count);

    // Adjacency labels always resolve in a consistent store; a miss means
    // corruption, which panics in debug builds and is logged otherwise.
    let resolve = |owner: &L, neighbor: &L| {
        let pos = store.position(neighbor);
        debug_assert!(
            pos.is_some(),
            "neighbor {:?} of {:?} missing from index",
            neighbor,
            owner
        );
        if pos.is_none() {
            warn!("Skipping edge {:?} <-> {:?}: neighbor missing from index", owner, neighbor);
        }
        pos
    };

    for vertex in store.vertices() {
        outgoing.push(
            vertex
                .outgoing()
                .iter()
                .filter_map(|(target, &w)| resolve(vertex.label(), target).map(|idx| (idx, w)))
                .collect::<Vec<_>>(),
        );
        incoming.push(
            vertex
                .predecessors()
                .filter_map(|source| resolve(vertex.label(), source))
                .collect::<Vec<_>>(),
        );
    }

    GraphView::from_parts(outgoing, incoming)
}

impl<L: VertexLabel> GraphStore<L> {
    /// Position of `start`, or `VertexNotFound`
    fn start_position(&self, start: &L) -> Result<usize, GraphError> {
        self.position(start)
            .ok_or_else(|| GraphError::VertexNotFound(describe(start)))
    }

    /// Translate view positions back into labels
    fn labels_at(&self, positions: &[usize]) -> Vec<L> {
        positions
            .iter()
            .filter_map(|&pos| self.vertex_at(pos))
            .map(|v| v.label().clone())
            .collect()
    }

    /// Attach labels to an index-level algorithm failure
    fn map_algorithm_error(&self, err: AlgorithmError) -> GraphError {
        let name = |pos: usize| {
            self.vertex_at(pos)
                .map(|v| describe(v.label()))
                .unwrap_or_else(|| format!("#{}", pos))
        };
        match err {
            AlgorithmError::StartOutOfBounds { index, .. } => GraphError::VertexNotFound(name(index)),
            AlgorithmError::NegativeWeight { from, to, weight } => GraphError::NegativeWeight {
                from: name(from),
                to: name(to),
                weight,
            },
            AlgorithmError::WeightOverflow { from, to } => GraphError::WeightOverflow {
                from: name(from),
                to: name(to),
            },
        }
    }
}

impl From<digraph_algorithms::ParseOrderError> for GraphError {
    fn from(err: digraph_algorithms::ParseOrderError) -> Self {
        GraphError::UnknownTraversalOrder(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_follows_positions_and_insertion_order() {
        let mut store = GraphStore::new();
        store.add_vertex_with_edges("A", [("B", 3)], [("D", 1), ("C", 2)]).unwrap();

        // positions: A=0, B=1, D=2, C=3
        let view = build_view(&store);
        assert_eq!(view.node_count, 4);
        assert_eq!(view.edge_count(), 3);
        assert_eq!(view.successors(0), &[2, 3]);
        assert_eq!(view.weights(0), &[1, 2]);
        assert_eq!(view.successors(1), &[0]);
        assert_eq!(view.predecessors(0), &[1]);
        assert_eq!(view.in_degree(3), 1);
    }

    #[test]
    fn test_view_after_removal() {
        let mut store = GraphStore::new();
        store.add_vertex_with_edges(1u32, Vec::<(u32, i64)>::new(), [(2, 1), (3, 1)]).unwrap();
        store.remove_vertex(&1).unwrap();

        let view = build_view(&store);
        assert_eq!(view.node_count, 2);
        assert_eq!(view.edge_count(), 0);
    }

    #[test]
    fn test_unknown_order_maps_to_graph_error() {
        let err: GraphError = "sideways".parse::<TraversalOrder>().unwrap_err().into();
        assert_eq!(err, GraphError::UnknownTraversalOrder("sideways".to_string()));
    }
}
