//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::types::CostPolicy;

/// Top-level ucs configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UcsConfig {
    /// Search behavior
    #[serde(default)]
    pub search: SearchConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for the search engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// What to do with negative or non-finite edge costs
    #[serde(default)]
    pub cost_policy: CostPolicy,

    /// Upper bound on finalized nodes per search (unbounded when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

/// Configuration for result rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}
