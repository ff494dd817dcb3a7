//! Whole-graph edge cost validation
//!
//! The search itself only checks edges it actually expands. These helpers
//! check every edge up front, for callers that want to reject a graph before
//! searching it.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, UcsError};
use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::types::Edge;

/// Every edge whose cost is negative or not finite, in graph order
pub fn invalid_edges<N: Clone + Eq + Hash>(graph: &AdjacencyGraph<N>) -> Vec<(&N, &Edge<N>)> {
    graph
        .edges()
        .filter(|(_, edge)| !edge.cost.is_valid())
        .collect()
}

/// Fail with the first invalid edge cost, if any
pub fn validate_costs<N: Clone + Eq + Hash + Debug>(graph: &AdjacencyGraph<N>) -> Result<()> {
    match graph.edges().find(|(_, edge)| !edge.cost.is_valid()) {
        Some((from, edge)) => Err(UcsError::invalid_edge_cost(
            from,
            &edge.to,
            edge.cost.value(),
        )),
        None => Ok(()),
    }
}
