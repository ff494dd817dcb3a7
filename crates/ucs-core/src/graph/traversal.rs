use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::graph::types::Edge;

/// Trait for providing graph adjacency to the search engine.
///
/// A node with no entry has no outgoing edges: implementations return an
/// empty slice rather than failing.
pub trait GraphProvider<N> {
    fn outbound_edges(&self, node: &N) -> &[Edge<N>];
}

impl<N: Eq + Hash> GraphProvider<N> for HashMap<N, Vec<Edge<N>>> {
    fn outbound_edges(&self, node: &N) -> &[Edge<N>] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<N: Ord> GraphProvider<N> for BTreeMap<N, Vec<Edge<N>>> {
    fn outbound_edges(&self, node: &N) -> &[Edge<N>] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}
