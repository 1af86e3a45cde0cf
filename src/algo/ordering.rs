//! Traversal and ordering queries on the store
//!
//! BFS, DFS (visitation or settlement order) and Kahn's topological sort.

use crate::graph::{GraphResult, GraphStore, VertexLabel};
use digraph_algorithms::{bfs, dfs, topological_sort, TraversalOrder};
use tracing::debug;

use super::build_view;

impl<L: VertexLabel> GraphStore<L> {
    /// Breadth-first settlement order from `start`.
    ///
    /// Vertices unreachable from `start` are simply absent.
    pub fn bfs_traversal(&self, start: &L) -> GraphResult<Vec<L>> {
        let pos = self.start_position(start)?;
        let view = build_view(self);
        let order = bfs(&view, pos).map_err(|e| self.map_algorithm_error(e))?;
        Ok(self.labels_at(&order))
    }

    /// Depth-first walk from `start` in visitation or settlement order.
    pub fn dfs_traversal(&self, start: &L, order: TraversalOrder) -> GraphResult<Vec<L>> {
        let pos = self.start_position(start)?;
        let view = build_view(self);
        let walk = dfs(&view, pos, order).map_err(|e| self.map_algorithm_error(e))?;
        Ok(self.labels_at(&walk))
    }

    /// Like [`dfs_traversal`](Self::dfs_traversal) with the order given by name
    /// (`"visit"` or `"settlement"`). Unknown names are an error.
    pub fn dfs_traversal_by_name(&self, start: &L, order: &str) -> GraphResult<Vec<L>> {
        let order: TraversalOrder = order.parse()?;
        self.dfs_traversal(start, order)
    }

    /// Kahn's topological sort.
    ///
    /// Vertices that become free in the same round are emitted in positional
    /// order. Returns `None` if the graph has a directed cycle.
    pub fn topological_sort(&self) -> Option<Vec<L>> {
        let view = build_view(self);
        match topological_sort(&view) {
            Some(order) => Some(self.labels_at(&order)),
            None => {
                debug!("Graph with {} vertices is not topologically sortable", self.vertex_count());
                None
            }
        }
    }

    /// Whether the graph contains no directed cycle
    pub fn is_acyclic(&self) -> bool {
        digraph_algorithms::is_acyclic(&build_view(self))
    }
}
