use super::SearchReport;
use crate::commands::records::record_value;

/// Render a search report as records lines
pub fn search_records(report: &SearchReport) -> Vec<String> {
    let cost = report
        .cost
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());
    let hops = report
        .hops
        .map(|h| h.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![format!(
        "H ucs=1 records=1 mode=search from={} to={} found={} cost={} hops={}",
        record_value(&report.from),
        record_value(&report.to),
        report.found,
        cost,
        hops
    )];

    for (index, node) in report.path.iter().enumerate() {
        lines.push(format!("N {} {}", index, record_value(node)));
    }
    for step in &report.steps {
        lines.push(format!(
            "E {} {} {}",
            record_value(&step.from),
            record_value(&step.to),
            step.cost
        ));
    }
    lines
}

/// Output a search report in records format
pub fn output_search_records(report: &SearchReport) {
    for line in search_records(report) {
        println!("{}", line);
    }
}
