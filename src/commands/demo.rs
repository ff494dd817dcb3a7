//! Demo command: search one of the built-in graphs

use crate::cli::DemoArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::search::run_search;
use ucs_core::bail_usage;
use ucs_core::error::{Result, UcsError};
use ucs_core::graph::builtin;

/// Resolve the endpoints for a demo run
fn endpoints(args: &DemoArgs) -> Result<(String, String)> {
    match (&args.start, &args.goal) {
        (Some(start), Some(goal)) => Ok((start.clone(), goal.clone())),
        (Some(_), None) => bail_usage!("demo needs both START and GOAL, or neither"),
        (None, _) => builtin::default_endpoints(&args.graph)
            .map(|(start, goal)| (start.to_string(), goal.to_string()))
            .ok_or_else(|| {
                UcsError::unsupported(
                    "built-in graph",
                    &args.graph,
                    builtin::BUILTIN_NAMES.join(", "),
                )
            }),
    }
}

/// Execute the demo command
pub fn execute(ctx: &CommandContext, args: &DemoArgs) -> Result<()> {
    let graph = builtin::by_name(&args.graph)?;
    let (start, goal) = endpoints(args)?;
    tracing::debug!(graph = %args.graph, %start, %goal, "demo");

    run_search(ctx, &graph, &start, &goal, ctx.config.search.to_options())
}
