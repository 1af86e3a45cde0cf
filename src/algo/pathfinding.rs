//! Shortest paths on the store
//!
//! Wraps the index-level Dijkstra expansion and re-keys its output by label.

use crate::graph::{GraphResult, GraphStore, VertexLabel, Weight};
use digraph_algorithms::shortest_paths;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use super::build_view;

/// Final distance and tree parent of one settled vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry<L> {
    pub distance: Weight,
    /// `None` only for the source
    pub predecessor: Option<L>,
}

/// A concrete path and its total cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult<L> {
    pub source: L,
    pub target: L,
    pub path: Vec<L>,
    pub cost: Weight,
}

/// Single-source shortest-path tree keyed by label.
///
/// Entries are kept in settlement order, which is non-decreasing in distance.
/// Vertices unreachable from the source have no entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths<L: VertexLabel> {
    source: L,
    entries: IndexMap<L, PathEntry<L>>,
}

impl<L: VertexLabel> ShortestPaths<L> {
    pub fn source(&self) -> &L {
        &self.source
    }

    pub fn distance(&self, label: &L) -> Option<Weight> {
        self.entries.get(label).map(|e| e.distance)
    }

    pub fn predecessor(&self, label: &L) -> Option<&L> {
        self.entries.get(label)?.predecessor.as_ref()
    }

    pub fn is_reachable(&self, label: &L) -> bool {
        self.entries.contains_key(label)
    }

    /// Follow predecessors from `target` back to the source.
    pub fn path_to(&self, target: &L) -> Option<PathResult<L>> {
        let cost = self.distance(target)?;

        let mut path = vec![target.clone()];
        let mut curr = target;
        while let Some(parent) = self.predecessor(curr) {
            path.push(parent.clone());
            curr = parent;
        }
        path.reverse();

        Some(PathResult {
            source: self.source.clone(),
            target: target.clone(),
            path,
            cost,
        })
    }

    /// Labels in the order they were settled
    pub fn settled(&self) -> impl Iterator<Item = &L> + '_ {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&L, &PathEntry<L>)> + '_ {
        self.entries.iter()
    }

    /// Number of settled vertices, including the source
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: VertexLabel> GraphStore<L> {
    /// Dijkstra expansion from `start` over cumulative distances.
    ///
    /// Fails if an explored edge has a negative weight or a distance overflows.
    pub fn shortest_path(&self, start: &L) -> GraphResult<ShortestPaths<L>> {
        let pos = self.start_position(start)?;
        let view = build_view(self);
        let tree = shortest_paths(&view, pos).map_err(|e| self.map_algorithm_error(e))?;

        let mut entries = IndexMap::with_capacity(tree.settled.len());
        for &v in &tree.settled {
            let (Some(vertex), Some(distance)) = (self.vertex_at(v), tree.distance[v]) else {
                continue;
            };
            let predecessor = tree.predecessor[v]
                .and_then(|p| self.vertex_at(p))
                .map(|p| p.label().clone());
            entries.insert(vertex.label().clone(), PathEntry { distance, predecessor });
        }

        debug!("Shortest paths from {:?}: {} vertices settled", start, entries.len());
        Ok(ShortestPaths {
            source: start.clone(),
            entries,
        })
    }

    /// Cheapest path from `source` to `target`, or `None` if unreachable.
    pub fn shortest_path_between(&self, source: &L, target: &L) -> GraphResult<Option<PathResult<L>>> {
        self.start_position(target)?;
        Ok(self.shortest_path(source)?.path_to(target))
    }
}
