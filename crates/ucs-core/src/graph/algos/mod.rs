//! Graph search algorithm implementations
//!
//! - `uniform_cost`: minimum-cost path between a start and a goal node

pub mod uniform_cost;

pub use uniform_cost::{
    uniform_cost_search, uniform_cost_search_with, HeapEntry, SearchOptions, SearchOutcome,
};
