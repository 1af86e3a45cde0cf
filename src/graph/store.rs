//! In-memory graph storage implementation
//!
//! Vertices live in a `Vec` addressed by position; `index` maps each label to
//! its current position. Removal fills the hole with the last vertex
//! (swap-and-pop) and repoints that vertex's index entry, so lookups stay O(1).
//! Neighbor maps are cleaned with order-preserving `shift_remove`, which makes
//! removal linear in the summed degrees of the removed vertex's neighbors.

use super::edge::Edge;
use super::types::{describe, VertexLabel, Weight};
use super::vertex::Vertex;
use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    #[error("Self-loop on vertex {0} is not supported")]
    SelfLoop(String),

    #[error("Unknown traversal order '{0}' (expected 'visit' or 'settlement')")]
    UnknownTraversalOrder(String),

    #[error("Negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: Weight,
    },

    #[error("Path distance overflowed on edge {from} -> {to}")]
    WeightOverflow { from: String, to: String },

    #[error("Graph invariant violated: {0}")]
    Corrupted(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Summary counts over the whole graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub max_out_degree: usize,
    pub max_in_degree: usize,
    /// Vertices with no incoming edges
    pub source_count: usize,
    /// Vertices with no outgoing edges
    pub sink_count: usize,
    /// Vertices with no edges at all
    pub isolated_count: usize,
}

/// In-memory directed, weighted graph
///
/// - vertices: position -> Vertex
/// - index: label -> position
/// - edge_count: number of directed edges (sum of outgoing map sizes)
///
/// No parallel edges and no self-loops.
#[derive(Debug, Clone)]
pub struct GraphStore<L: VertexLabel> {
    /// Vertex storage, unordered apart from insertion/swap history
    vertices: Vec<Vertex<L>>,

    /// Label index for O(1) lookups
    index: FxHashMap<L, usize>,

    /// Number of directed edges
    edge_count: usize,
}

impl<L: VertexLabel> GraphStore<L> {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            edge_count: 0,
        }
    }

    /// Create an empty store with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        GraphStore {
            vertices: Vec::with_capacity(capacity),
            index,
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    /// Get a vertex by label
    pub fn get_vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.index.get(label).map(|&pos| &self.vertices[pos])
    }

    /// Current position of a vertex. Positions change when other vertices are removed.
    pub fn position(&self, label: &L) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn vertex_at(&self, position: usize) -> Option<&Vertex<L>> {
        self.vertices.get(position)
    }

    /// All vertices in positional order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<L>> + '_ {
        self.vertices.iter()
    }

    /// All labels in positional order
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.vertices.iter().map(|v| &v.label)
    }

    /// Add an isolated vertex.
    ///
    /// Returns `false` and leaves the graph untouched if the label already exists.
    pub fn add_vertex(&mut self, label: L) -> bool {
        if self.index.contains_key(&label) {
            return false;
        }
        trace!("Added vertex {:?} at position {}", label, self.vertices.len());
        self.index.insert(label.clone(), self.vertices.len());
        self.vertices.push(Vertex::new(label));
        true
    }

    /// Add a vertex together with incoming and outgoing edges.
    ///
    /// Missing neighbors are created. An edge is skipped, keeping its current
    /// weight, when the neighbor's opposite map already records it
    /// (`neighbor.outgoing` for incoming entries, `neighbor.incoming` for
    /// outgoing ones). If the vertex already exists its edges are still merged.
    ///
    /// An entry naming `label` itself is rejected with [`GraphError::SelfLoop`]
    /// before anything is modified.
    pub fn add_vertex_with_edges<I, O, E, F>(&mut self, label: L, incoming: I, outgoing: O) -> GraphResult<()>
    where
        I: IntoIterator<Item = E>,
        O: IntoIterator<Item = F>,
        E: Into<Edge<L>>,
        F: Into<Edge<L>>,
    {
        let incoming: Vec<Edge<L>> = incoming.into_iter().map(Into::into).collect();
        let outgoing: Vec<Edge<L>> = outgoing.into_iter().map(Into::into).collect();

        if incoming.iter().chain(outgoing.iter()).any(|e| e.neighbor == label) {
            return Err(GraphError::SelfLoop(describe(&label)));
        }

        self.add_vertex(label.clone());
        let pos = self.position_of(&label)?;

        for Edge { neighbor, weight } in incoming {
            self.add_vertex(neighbor.clone());
            let npos = self.position_of(&neighbor)?;
            if !self.vertices[npos].outgoing.contains_key(&label) {
                self.link(npos, pos, weight);
            }
        }

        for Edge { neighbor, weight } in outgoing {
            self.add_vertex(neighbor.clone());
            let npos = self.position_of(&neighbor)?;
            if !self.vertices[npos].incoming.contains_key(&label) {
                self.link(pos, npos, weight);
            }
        }

        Ok(())
    }

    /// Remove a vertex and every edge touching it, returning the detached vertex.
    ///
    /// The last vertex moves into the freed position.
    pub fn remove_vertex(&mut self, label: &L) -> GraphResult<Vertex<L>> {
        let pos = self
            .position(label)
            .ok_or_else(|| GraphError::VertexNotFound(describe(label)))?;

        let incoming = std::mem::take(&mut self.vertices[pos].incoming);
        let outgoing = std::mem::take(&mut self.vertices[pos].outgoing);

        for source in incoming.keys() {
            let spos = self.position_of(source)?;
            self.vertices[spos].outgoing.shift_remove(label);
            self.edge_count -= 1;
        }
        for target in outgoing.keys() {
            let tpos = self.position_of(target)?;
            self.vertices[tpos].incoming.shift_remove(label);
            self.edge_count -= 1;
        }

        let mut removed = self.vertices.swap_remove(pos);
        if let Some(moved) = self.vertices.get(pos) {
            self.index.insert(moved.label.clone(), pos);
        }
        self.index.remove(label);

        debug!(
            "Removed vertex {:?} ({} edges severed), {} vertices remain",
            label,
            incoming.len() + outgoing.len(),
            self.vertices.len()
        );

        removed.incoming = incoming;
        removed.outgoing = outgoing;
        Ok(removed)
    }

    /// Add the edge `source -> edge.neighbor`.
    ///
    /// Returns `Ok(false)` without modifying anything if the edge already exists.
    pub fn add_edge(&mut self, source: &L, edge: impl Into<Edge<L>>) -> GraphResult<bool> {
        let Edge { neighbor, weight } = edge.into();
        let spos = self
            .position(source)
            .ok_or_else(|| GraphError::VertexNotFound(describe(source)))?;
        let tpos = self
            .position(&neighbor)
            .ok_or_else(|| GraphError::VertexNotFound(describe(&neighbor)))?;
        if spos == tpos {
            return Err(GraphError::SelfLoop(describe(source)));
        }

        if self.vertices[spos].outgoing.contains_key(&neighbor) {
            return Ok(false);
        }
        self.link(spos, tpos, weight);
        Ok(true)
    }

    /// Remove the edge `source -> dest`.
    ///
    /// Returns `Ok(false)` if there was no such edge.
    pub fn remove_edge(&mut self, source: &L, dest: &L) -> GraphResult<bool> {
        let spos = self
            .position(source)
            .ok_or_else(|| GraphError::VertexNotFound(describe(source)))?;
        let dpos = self
            .position(dest)
            .ok_or_else(|| GraphError::VertexNotFound(describe(dest)))?;

        if self.vertices[spos].outgoing.shift_remove(dest).is_none() {
            return Ok(false);
        }
        self.vertices[dpos].incoming.shift_remove(source);
        self.edge_count -= 1;
        trace!("Removed edge {:?} -> {:?}", source, dest);
        Ok(true)
    }

    /// Whether `source -> dest` exists. Absent vertices simply yield `false`.
    pub fn has_edge(&self, source: &L, dest: &L) -> bool {
        self.edge_weight(source, dest).is_some()
    }

    pub fn edge_weight(&self, source: &L, dest: &L) -> Option<Weight> {
        self.get_vertex(source)?.weight_to(dest)
    }

    /// Remove all vertices and edges
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.edge_count = 0;
    }

    pub fn statistics(&self) -> GraphStatistics {
        let mut stats = GraphStatistics {
            vertex_count: self.vertices.len(),
            edge_count: self.edge_count,
            ..GraphStatistics::default()
        };
        for v in &self.vertices {
            stats.max_out_degree = stats.max_out_degree.max(v.out_degree());
            stats.max_in_degree = stats.max_in_degree.max(v.in_degree());
            if v.in_degree() == 0 {
                stats.source_count += 1;
            }
            if v.out_degree() == 0 {
                stats.sink_count += 1;
            }
            if v.is_isolated() {
                stats.isolated_count += 1;
            }
        }
        stats
    }

    /// Verify the structural invariants, reporting the first violation.
    ///
    /// Checks that the index matches positions one-to-one, that every outgoing
    /// entry is mirrored by an incoming entry of equal weight (and vice versa),
    /// that no vertex references itself, and that `edge_count` matches the
    /// outgoing maps.
    pub fn check_invariants(&self) -> GraphResult<()> {
        if self.index.len() != self.vertices.len() {
            return Err(GraphError::Corrupted(format!(
                "index has {} entries for {} vertices",
                self.index.len(),
                self.vertices.len()
            )));
        }

        let mut outgoing_total = 0;
        for (pos, vertex) in self.vertices.iter().enumerate() {
            if self.index.get(&vertex.label) != Some(&pos) {
                return Err(GraphError::Corrupted(format!(
                    "vertex {:?} at position {} is indexed at {:?}",
                    vertex.label,
                    pos,
                    self.index.get(&vertex.label)
                )));
            }
            if vertex.outgoing.contains_key(&vertex.label) || vertex.incoming.contains_key(&vertex.label) {
                return Err(GraphError::Corrupted(format!("self-loop on {:?}", vertex.label)));
            }
            for (target, &w) in &vertex.outgoing {
                let mirrored = self.get_vertex(target).and_then(|t| t.weight_from(&vertex.label));
                if mirrored != Some(w) {
                    return Err(GraphError::Corrupted(format!(
                        "edge {:?} -> {:?} (weight {}) mirrored as {:?}",
                        vertex.label, target, w, mirrored
                    )));
                }
            }
            for (source, &w) in &vertex.incoming {
                let mirrored = self.get_vertex(source).and_then(|s| s.weight_to(&vertex.label));
                if mirrored != Some(w) {
                    return Err(GraphError::Corrupted(format!(
                        "edge {:?} -> {:?} (weight {}) mirrored as {:?}",
                        source, vertex.label, w, mirrored
                    )));
                }
            }
            outgoing_total += vertex.outgoing.len();
        }

        if outgoing_total != self.edge_count {
            return Err(GraphError::Corrupted(format!(
                "edge_count is {} but outgoing maps hold {}",
                self.edge_count, outgoing_total
            )));
        }
        Ok(())
    }

    fn position_of(&self, label: &L) -> GraphResult<usize> {
        self.position(label)
            .ok_or_else(|| GraphError::Corrupted(format!("neighbor {:?} missing from index", label)))
    }

    /// Record `from -> to` in both adjacency maps
    fn link(&mut self, from: usize, to: usize, weight: Weight) {
        let from_label = self.vertices[from].label.clone();
        let to_label = self.vertices[to].label.clone();
        trace!("Added edge {:?} -> {:?} (weight {})", from_label, to_label, weight);
        self.vertices[from].outgoing.insert(to_label, weight);
        self.vertices[to].incoming.insert(from_label, weight);
        self.edge_count += 1;
    }
}

impl<L: VertexLabel> Default for GraphStore<L> {
    fn default() -> Self {
        Self::new()
    }
}
