//! Core graph store
//!
//! This module implements the directed, weighted graph data model:
//! - Vertices identified by caller-chosen labels
//! - Insertion-ordered outgoing and incoming adjacency per vertex
//! - At most one edge per ordered pair, no self-loops
//! - Position-indexed storage with an O(1) label index

pub mod edge;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use store::{GraphError, GraphResult, GraphStatistics, GraphStore};
pub use types::{VertexLabel, Weight};
pub use vertex::Vertex;
