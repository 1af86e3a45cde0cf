//! Index-level graph algorithms for the `digraph` store.
//!
//! Everything here works on a dense [`GraphView`]; the store builds one per
//! query and maps the resulting positions back to labels.

pub mod common;
pub mod frontier;
pub mod pathfinding;
pub mod topology;
pub mod traversal;

pub use common::{AlgorithmError, AlgorithmResult, GraphView, Weight};
pub use frontier::MinFrontier;
pub use pathfinding::{dijkstra, shortest_paths, PathResult, ShortestPathTree};
pub use topology::{is_acyclic, topological_sort};
pub use traversal::{bfs, dfs, ParseOrderError, TraversalOrder};
