//! Built-in example graphs
//!
//! `towns` is the three-town map where the direct road is not the cheapest;
//! `extended` is a ten-node map with several competing routes.

use crate::error::Result;
use crate::graph::adjacency::AdjacencyGraph;

/// Names accepted by [`by_name`]
pub const BUILTIN_NAMES: &[&str] = &["towns", "extended"];

fn labelled(entries: &[(&str, &[(&str, u32)])]) -> AdjacencyGraph<String> {
    AdjacencyGraph::from_adjacency(entries.iter().map(|(node, edges)| {
        (
            node.to_string(),
            edges.iter().map(|(to, cost)| (to.to_string(), *cost)),
        )
    }))
}

/// A -> B -> C (cost 3) beats A -> C (cost 5)
pub fn towns() -> AdjacencyGraph<String> {
    labelled(&[
        ("A", &[("B", 1), ("C", 5)]),
        ("B", &[("C", 2)]),
        ("C", &[]),
    ])
}

pub fn extended() -> AdjacencyGraph<String> {
    labelled(&[
        ("A", &[("B", 2), ("C", 1), ("D", 7)]),
        ("B", &[("E", 5), ("F", 3)]),
        ("C", &[("B", 4), ("F", 6)]),
        ("D", &[("G", 8), ("C", 2)]),
        ("E", &[("H", 3)]),
        ("F", &[("H", 2), ("I", 4)]),
        ("G", &[("J", 4)]),
        ("H", &[("I", 1), ("J", 2)]),
        ("I", &[("J", 3)]),
        ("J", &[]),
    ])
}

/// Default `(start, goal)` pair for a built-in graph
pub fn default_endpoints(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "towns" => Some(("A", "C")),
        "extended" => Some(("A", "J")),
        _ => None,
    }
}

/// Look up a built-in graph by name
pub fn by_name(name: &str) -> Result<AdjacencyGraph<String>> {
    match name {
        "towns" => Ok(towns()),
        "extended" => Ok(extended()),
        other => crate::bail_unsupported!("built-in graph", other, BUILTIN_NAMES.join(", ")),
    }
}
