//! ucs Core Library
//!
//! Minimum-cost path search over weighted, directed graphs, plus the graph
//! model, document loading, configuration, and logging used by the `ucs` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
