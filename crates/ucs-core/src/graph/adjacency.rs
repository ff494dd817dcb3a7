//! In-memory adjacency mapping

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Cost, Edge};

/// Directed graph stored as node -> ordered edge list.
///
/// Nodes are remembered in first-seen order, whether they appear as a source
/// or only as an edge target, so listings are deterministic.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    edges: HashMap<N, Vec<Edge<N>>>,
    nodes: Vec<N>,
    known: HashSet<N>,
}

impl<N: Clone + Eq + Hash> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
            nodes: Vec::new(),
            known: HashSet::new(),
        }
    }

    /// Build a graph from `(node, [(target, cost), ...])` entries
    pub fn from_adjacency<I, E, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, C)>,
        C: Into<Cost>,
    {
        let mut graph = Self::new();
        for (from, targets) in entries {
            graph.add_node(from.clone());
            for (to, cost) in targets {
                graph.add_edge(from.clone(), to, cost);
            }
        }
        graph
    }

    /// Register a node without edges; a no-op for known nodes
    pub fn add_node(&mut self, node: N) {
        if self.known.insert(node.clone()) {
            self.nodes.push(node);
        }
    }

    /// Append an edge to the end of `from`'s edge list
    pub fn add_edge(&mut self, from: N, to: N, cost: impl Into<Cost>) {
        self.add_node(from.clone());
        self.add_node(to.clone());
        self.edges.entry(from).or_default().push(Edge::new(to, cost));
    }

    /// Whether the node appears anywhere in the graph
    pub fn contains(&self, node: &N) -> bool {
        self.known.contains(node)
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// All edges as `(from, edge)`, grouped by source in node order
    pub fn edges(&self) -> impl Iterator<Item = (&N, &Edge<N>)> + '_ {
        self.nodes.iter().flat_map(move |from| {
            self.outbound_edges(from)
                .iter()
                .map(move |edge| (from, edge))
        })
    }
}

impl<N: Clone + Eq + Hash> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash> GraphProvider<N> for AdjacencyGraph<N> {
    fn outbound_edges(&self, node: &N) -> &[Edge<N>] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}
