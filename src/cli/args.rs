//! Argument structs for ucs subcommands

use clap::Args;
use std::path::PathBuf;

use ucs_core::graph::GraphFormat;

use super::parse::{parse_builtin_name, parse_graph_format};

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Start node
    pub start: String,

    /// Goal node
    pub goal: String,

    /// Graph document (JSON, YAML, or TOML); `-` reads stdin
    #[arg(long, short)]
    pub graph: PathBuf,

    /// Graph document format (inferred from the extension by default)
    #[arg(long, value_parser = parse_graph_format)]
    pub graph_format: Option<GraphFormat>,

    /// Give up after expanding this many nodes
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Skip edge cost validation during the search
    #[arg(long)]
    pub unchecked_costs: bool,
}

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Graph document (JSON, YAML, or TOML); `-` reads stdin
    #[arg(long, short)]
    pub graph: PathBuf,

    /// Graph document format (inferred from the extension by default)
    #[arg(long, value_parser = parse_graph_format)]
    pub graph_format: Option<GraphFormat>,
}

/// Arguments for the demo command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Built-in graph to search
    #[arg(long, short, default_value = "towns", value_parser = parse_builtin_name)]
    pub graph: String,

    /// Start node (defaults to the graph's example start)
    pub start: Option<String>,

    /// Goal node (required when START is given)
    pub goal: Option<String>,
}
