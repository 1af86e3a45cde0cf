//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.
//! Vertices are addressed by position (`0..node_count`); callers keep their own
//! mapping from positions back to labels.

use thiserror::Error;

/// Edge weight and path distance type.
pub type Weight = i64;

/// Errors raised by index-level algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("start vertex {index} out of bounds for {node_count} vertices")]
    StartOutOfBounds { index: usize, node_count: usize },

    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: Weight },

    #[error("path distance overflowed on edge {from} -> {to}")]
    WeightOverflow { from: usize, to: usize },
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Neighbor slices keep the order in which the caller supplied them, which for
/// the graph store is adjacency insertion order.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,

    /// Edge weights: aligned with `out_targets`
    pub weights: Vec<Weight>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Get weights for outgoing edges of a node, aligned with `successors`
    pub fn weights(&self, idx: usize) -> &[Weight] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Successors paired with their edge weights
    pub fn weighted_successors(&self, idx: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.successors(idx)
            .iter()
            .copied()
            .zip(self.weights(idx).iter().copied())
    }

    /// Total number of directed edges in the view
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    pub(crate) fn check_start(&self, start: usize) -> AlgorithmResult<()> {
        if start < self.node_count {
            Ok(())
        } else {
            Err(AlgorithmError::StartOutOfBounds {
                index: start,
                node_count: self.node_count,
            })
        }
    }

    /// Build a GraphView from weighted outgoing adjacency lists.
    ///
    /// `outgoing[u]` lists `(v, weight)` pairs in the order traversals should
    /// visit them. Incoming lists are derived, ordered by source index.
    ///
    /// # Panics
    /// Panics if any target index is out of bounds.
    pub fn from_adjacency_list(outgoing: Vec<Vec<(usize, Weight)>>) -> Self {
        let node_count = outgoing.len();
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for (u, neighbors) in outgoing.iter().enumerate() {
            for &(v, _) in neighbors {
                assert!(v < node_count, "edge {u}->{v} out of bounds for n={node_count}");
                incoming[v].push(u);
            }
        }
        Self::from_parts(outgoing, incoming)
    }

    /// Build a GraphView from explicit outgoing and incoming lists.
    ///
    /// Used when the caller already tracks incoming order separately.
    pub fn from_parts(outgoing: Vec<Vec<(usize, Weight)>>, incoming: Vec<Vec<usize>>) -> Self {
        let node_count = outgoing.len();
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut weights = Vec::new();
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();

        out_offsets.push(0);
        for neighbors in outgoing {
            for (v, w) in neighbors {
                out_targets.push(v);
                weights.push(w);
            }
            out_offsets.push(out_targets.len());
        }

        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            weights,
        }
    }
}
