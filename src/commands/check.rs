//! Check command: load a graph and report every invalid edge cost

use serde::Serialize;

use crate::cli::{CheckArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::records::record_value;
use ucs_core::error::{Result, UcsError};
use ucs_core::graph::{invalid_edges, load_graph, AdjacencyGraph, Cost};

#[derive(Debug, Clone, Serialize)]
pub struct InvalidEdge {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub source: String,
    pub nodes: usize,
    pub edges: usize,
    pub valid: bool,
    pub invalid_edges: Vec<InvalidEdge>,
}

impl CheckReport {
    pub fn new(source: &str, graph: &AdjacencyGraph<String>) -> Self {
        let invalid: Vec<InvalidEdge> = invalid_edges(graph)
            .into_iter()
            .map(|(from, edge)| InvalidEdge {
                from: from.clone(),
                to: edge.to.clone(),
                cost: edge.cost.value(),
            })
            .collect();

        Self {
            source: source.to_string(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            valid: invalid.is_empty(),
            invalid_edges: invalid,
        }
    }
}

fn output_check_human(quiet: bool, report: &CheckReport) {
    if !quiet {
        println!(
            "{}: {} nodes, {} edges",
            report.source, report.nodes, report.edges
        );
    }
    for edge in &report.invalid_edges {
        println!(
            "Invalid edge cost: {} -> {} ({})",
            edge.from,
            edge.to,
            Cost::new(edge.cost)
        );
    }
    if report.valid && !quiet {
        println!("All edge costs are valid");
    }
}

fn check_records(report: &CheckReport) -> Vec<String> {
    let mut lines = vec![format!(
        "H ucs=1 records=1 mode=check source={} nodes={} edges={} valid={}",
        record_value(&report.source),
        report.nodes,
        report.edges,
        report.valid
    )];
    for edge in &report.invalid_edges {
        lines.push(format!(
            "E {} {} {}",
            record_value(&edge.from),
            record_value(&edge.to),
            Cost::new(edge.cost)
        ));
    }
    lines
}

/// Execute the check command
pub fn execute(ctx: &CommandContext, args: &CheckArgs) -> Result<()> {
    let graph = load_graph(&args.graph, args.graph_format)?;
    let report = CheckReport::new(&args.graph.display().to_string(), &graph);

    match ctx.format {
        OutputFormat::Human => output_check_human(ctx.cli.quiet, &report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Records => {
            for line in check_records(&report) {
                println!("{}", line);
            }
        }
    }

    match report.invalid_edges.first() {
        Some(edge) => Err(UcsError::invalid_edge_cost(&edge.from, &edge.to, edge.cost)),
        None => Ok(()),
    }
}
