//! Graph model and path-finding operations
//!
//! Provides:
//! - Uniform-cost search for minimum-cost paths
//! - Graph provider trait for pluggable adjacency sources
//! - An in-memory adjacency graph plus loaders for graph documents

pub mod adjacency;
pub mod algos;
pub mod builtin;
pub mod load;
pub mod path;
pub mod traversal;
pub mod types;
pub mod validate;

pub use adjacency::AdjacencyGraph;
pub use algos::{uniform_cost_search, uniform_cost_search_with, SearchOptions, SearchOutcome};
pub use load::{load_graph, parse_graph, GraphFormat};
pub use traversal::GraphProvider;
pub use types::{Cost, CostPolicy, Edge, PathResult, SearchStats};
pub use validate::{invalid_edges, validate_costs};
