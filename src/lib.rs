//! Digraph
//!
//! A mutable, in-memory, directed and weighted graph keyed by caller-chosen
//! vertex labels, with breadth-first and depth-first traversal, Kahn's
//! topological sort and single-source shortest paths.
//!
//! # Architecture
//!
//! - [`graph`]: the [`GraphStore`] (vertex arena + label index) and its
//!   vertices, whose incoming and outgoing adjacency maps always mirror each
//!   other.
//! - [`algo`]: adapters that snapshot the store into the dense
//!   `digraph_algorithms::GraphView` and translate results back to labels.
//!
//! ## Example Usage
//!
//! ```rust
//! use digraph::{GraphStore, TraversalOrder};
//!
//! let mut store = GraphStore::new();
//!
//! // Vertex "Calc" with an incoming edge from "Trig" and an outgoing edge to "ODEs"
//! store.add_vertex_with_edges("Calc", [("Trig", 1)], [("ODEs", 2)]).unwrap();
//! store.add_vertex("Rings");
//! store.add_edge(&"Trig", ("Rings", 5)).unwrap();
//!
//! assert_eq!(store.vertex_count(), 4);
//! assert_eq!(store.edge_count(), 3);
//!
//! let order = store.topological_sort().unwrap();
//! assert_eq!(order, vec!["Trig", "Rings", "Calc", "ODEs"]);
//!
//! let walk = store.dfs_traversal(&"Trig", TraversalOrder::Visitation).unwrap();
//! assert_eq!(walk, vec!["Trig", "Calc", "ODEs", "Rings"]);
//!
//! let paths = store.shortest_path(&"Trig").unwrap();
//! assert_eq!(paths.distance(&"ODEs"), Some(3));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{Edge, GraphError, GraphResult, GraphStatistics, GraphStore, Vertex, VertexLabel, Weight};

pub use algo::{MinFrontier, PathEntry, PathResult, ShortestPaths, TraversalOrder};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
