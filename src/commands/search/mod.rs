//! Search command and the shared search runner used by `demo`

pub mod human;
pub mod json;
pub mod records;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::CommandContext;
use ucs_core::error::Result;
use ucs_core::graph::{
    load_graph, uniform_cost_search_with, AdjacencyGraph, Cost, CostPolicy, GraphProvider,
    SearchOptions, SearchOutcome, SearchStats,
};
use ucs_core::trace_time;

/// One edge of a reported path
#[derive(Debug, Clone, Serialize)]
pub struct PathStep {
    pub from: String,
    pub to: String,
    pub cost: Cost,
}

/// Everything a search prints, in every output format
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub path: Vec<String>,
    pub cost: Option<Cost>,
    pub hops: Option<usize>,
    pub stats: SearchStats,
    #[serde(skip)]
    pub steps: Vec<PathStep>,
}

impl SearchReport {
    pub fn new(
        graph: &AdjacencyGraph<String>,
        from: &str,
        to: &str,
        outcome: SearchOutcome<String>,
    ) -> Self {
        let SearchOutcome { result, stats } = outcome;
        match result {
            Some(result) => Self {
                from: from.to_string(),
                to: to.to_string(),
                found: true,
                steps: path_steps(graph, &result.path),
                hops: Some(result.hops()),
                cost: Some(result.cost),
                path: result.path,
                stats,
            },
            None => Self {
                from: from.to_string(),
                to: to.to_string(),
                found: false,
                path: Vec::new(),
                cost: None,
                hops: None,
                stats,
                steps: Vec::new(),
            },
        }
    }
}

/// Cheapest edge behind each consecutive pair of `path`
fn path_steps(graph: &AdjacencyGraph<String>, path: &[String]) -> Vec<PathStep> {
    path.windows(2)
        .filter_map(|pair| {
            graph
                .outbound_edges(&pair[0])
                .iter()
                .filter(|edge| edge.to == pair[1])
                .map(|edge| edge.cost)
                .min()
                .map(|cost| PathStep {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    cost,
                })
        })
        .collect()
}

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let start = Instant::now();
    let graph = load_graph(&args.graph, args.graph_format)?;
    trace_time!(start, "load_graph", nodes = graph.node_count());

    let mut opts = ctx.config.search.to_options();
    if let Some(limit) = args.max_expansions {
        opts.max_expansions = Some(limit);
    }
    if args.unchecked_costs {
        opts.cost_policy = CostPolicy::Unchecked;
    }

    run_search(ctx, &graph, &args.start, &args.goal, opts)
}

/// Search `graph` from `from` to `to` and print the report.
///
/// Ctrl-C stops the search with `Interrupted`.
pub fn run_search(
    ctx: &CommandContext,
    graph: &AdjacencyGraph<String>,
    from: &str,
    to: &str,
    opts: SearchOptions,
) -> Result<()> {
    let from_node = from.to_string();
    let to_node = to.to_string();

    for (role, node) in [("start", &from_node), ("goal", &to_node)] {
        if !graph.contains(node) {
            warn!(node = %node, role, "node does not appear in the graph");
        }
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });
    let opts = opts.with_interrupt(interrupted);

    let start = Instant::now();
    let outcome = uniform_cost_search_with(graph, &from_node, &to_node, &opts)?;
    trace_time!(start, "search", expansions = outcome.stats.expansions);

    debug!(
        expansions = outcome.stats.expansions,
        stale_discards = outcome.stats.stale_discards,
        pushes = outcome.stats.pushes,
        frontier_high_water = outcome.stats.frontier_high_water,
        "search stats"
    );

    let report = SearchReport::new(graph, from, to, outcome);
    match ctx.format {
        OutputFormat::Human => human::output_search_human(ctx.cli, &report),
        OutputFormat::Json => json::output_search_json(&report)?,
        OutputFormat::Records => records::output_search_records(&report),
    }

    trace_time!(ctx.start, "total");
    Ok(())
}
