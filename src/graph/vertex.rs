//! Vertex implementation
//!
//! A vertex is a label with two insertion-ordered adjacency maps. Only the
//! store mutates them, which keeps every `outgoing` entry mirrored by an
//! `incoming` entry on the neighbor.

use super::types::{VertexLabel, Weight};
use indexmap::IndexMap;
use serde::Serialize;

/// A vertex in the directed graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex<L: VertexLabel> {
    /// Label, immutable once created
    pub(crate) label: L,

    /// Neighbor label -> weight for edges leaving this vertex
    pub(crate) outgoing: IndexMap<L, Weight>,

    /// Neighbor label -> weight for edges entering this vertex
    pub(crate) incoming: IndexMap<L, Weight>,
}

impl<L: VertexLabel> Vertex<L> {
    /// Create a vertex with no edges
    pub(crate) fn new(label: L) -> Self {
        Vertex {
            label,
            outgoing: IndexMap::new(),
            incoming: IndexMap::new(),
        }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Outgoing edges in insertion order
    pub fn outgoing(&self) -> &IndexMap<L, Weight> {
        &self.outgoing
    }

    /// Incoming edges in insertion order
    pub fn incoming(&self) -> &IndexMap<L, Weight> {
        &self.incoming
    }

    /// Labels this vertex has an edge to
    pub fn successors(&self) -> impl Iterator<Item = &L> + '_ {
        self.outgoing.keys()
    }

    /// Labels that have an edge to this vertex
    pub fn predecessors(&self) -> impl Iterator<Item = &L> + '_ {
        self.incoming.keys()
    }

    /// Weight of the edge `self -> neighbor`, if any
    pub fn weight_to(&self, neighbor: &L) -> Option<Weight> {
        self.outgoing.get(neighbor).copied()
    }

    /// Weight of the edge `neighbor -> self`, if any
    pub fn weight_from(&self, neighbor: &L) -> Option<Weight> {
        self.incoming.get(neighbor).copied()
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Number of edges touching this vertex in either direction
    pub fn degree(&self) -> usize {
        self.outgoing.len() + self.incoming.len()
    }

    /// No edges at all
    pub fn is_isolated(&self) -> bool {
        self.outgoing.is_empty() && self.incoming.is_empty()
    }
}
