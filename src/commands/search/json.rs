use super::SearchReport;
use ucs_core::error::Result;

/// Output a search report as pretty-printed JSON
pub fn output_search_json(report: &SearchReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
