//! Core type definitions for the graph store

use std::fmt::Debug;
use std::hash::Hash;

/// Edge weight, also used for accumulated path distance.
pub use digraph_algorithms::Weight;

/// Bound for vertex labels.
///
/// Any cloneable, hashable, equality-comparable type works (`&str`, `String`,
/// integers, caller newtypes). `Debug` is required so errors can name the
/// offending label.
pub trait VertexLabel: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexLabel for T {}

/// Render a label for error messages.
pub(crate) fn describe<L: Debug>(label: &L) -> String {
    format!("{:?}", label)
}
