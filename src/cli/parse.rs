use ucs_core::format::OutputFormat;
use ucs_core::graph::{builtin, GraphFormat};

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse graph document format from string
pub fn parse_graph_format(s: &str) -> std::result::Result<GraphFormat, String> {
    s.parse::<GraphFormat>().map_err(|e| e.to_string())
}

/// Parse a built-in graph name
pub fn parse_builtin_name(s: &str) -> std::result::Result<String, String> {
    if builtin::BUILTIN_NAMES.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "unknown built-in graph '{}' (available: {})",
            s,
            builtin::BUILTIN_NAMES.join(", ")
        ))
    }
}
