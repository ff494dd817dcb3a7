use super::SearchReport;
use crate::cli::Cli;

/// Output a search report in human-readable format
pub fn output_search_human(cli: &Cli, report: &SearchReport) {
    match report.cost {
        Some(cost) if report.found => {
            println!("Cheapest path: {}", report.path.join(" -> "));
            println!("Cost of cheapest path: {}", cost);
        }
        _ => {
            if !cli.quiet {
                println!("No path from {} to {}", report.from, report.to);
            }
        }
    }
}
