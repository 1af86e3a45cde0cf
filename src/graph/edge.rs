//! Edge descriptor
//!
//! An `Edge` names one end of a directed edge plus its weight. The other end
//! is implied by where the edge is used: in `add_edge(source, edge)` the edge
//! runs `source -> edge.neighbor`; in the incoming list of
//! `add_vertex_with_edges(v, ..)` it runs `edge.neighbor -> v`.

use super::types::Weight;
use serde::{Deserialize, Serialize};

/// Neighbor label and weight of a directed edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<L> {
    /// Label of the vertex at the far end
    pub neighbor: L,

    /// Edge weight
    pub weight: Weight,
}

impl<L> Edge<L> {
    /// Create a new edge descriptor
    pub fn new(neighbor: L, weight: Weight) -> Self {
        Edge { neighbor, weight }
    }

    pub fn neighbor(&self) -> &L {
        &self.neighbor
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl<L> From<(L, Weight)> for Edge<L> {
    fn from((neighbor, weight): (L, Weight)) -> Self {
        Edge::new(neighbor, weight)
    }
}
