//! CLI argument parsing for ucs
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CheckArgs, DemoArgs, SearchArgs};
pub use ucs_core::format::OutputFormat;
use parse::parse_output_format;

/// ucs - minimum-cost paths over weighted directed graphs
#[derive(Parser, Debug)]
#[command(name = "ucs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records (defaults to the configured format, else human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log search progress and statistics to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `ucs_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (must exist when given)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level ucs commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the cheapest path between two nodes of a graph file
    Search(SearchArgs),

    /// Validate a graph file and report invalid edge costs
    Check(CheckArgs),

    /// Run a search on a built-in example graph
    Demo(DemoArgs),
}
