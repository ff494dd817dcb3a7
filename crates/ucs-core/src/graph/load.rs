//! Graph documents in JSON, YAML, or TOML
//!
//! A document maps each node label to its ordered edge list. An edge is
//! either a `[target, cost]` pair or a `{ to, cost }` table:
//!
//! ```json
//! { "A": [["B", 1], ["C", 5]], "B": [{ "to": "C", "cost": 2 }], "C": [] }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::bail_unsupported;
use crate::error::{Result, UcsError};
use crate::graph::adjacency::AdjacencyGraph;

const SUPPORTED_FORMATS: &str = "json, yaml, toml";

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Serialization format of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Yaml,
    Toml,
}

impl GraphFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            bail_unsupported!("graph file extension", path.display(), SUPPORTED_FORMATS);
        };
        ext.parse()
    }
}

impl FromStr for GraphFormat {
    type Err = UcsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            "toml" => Ok(GraphFormat::Toml),
            other => Err(UcsError::unsupported(
                "graph format",
                other,
                SUPPORTED_FORMATS,
            )),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Json => write!(f, "json"),
            GraphFormat::Yaml => write!(f, "yaml"),
            GraphFormat::Toml => write!(f, "toml"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EdgeSpec {
    Pair(String, f64),
    Table { to: String, cost: f64 },
}

impl EdgeSpec {
    fn into_parts(self) -> (String, f64) {
        match self {
            EdgeSpec::Pair(to, cost) | EdgeSpec::Table { to, cost } => (to, cost),
        }
    }
}

type GraphDocument = BTreeMap<String, Vec<EdgeSpec>>;

/// Parse a graph document. Nodes are added in key order; edge order is kept.
pub fn parse_graph(
    text: &str,
    format: GraphFormat,
    source_name: &str,
) -> Result<AdjacencyGraph<String>> {
    let document: GraphDocument = match format {
        GraphFormat::Json => {
            serde_json::from_str(text).map_err(|e| UcsError::invalid_graph(source_name, e))?
        }
        GraphFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|e| UcsError::invalid_graph(source_name, e))?
        }
        GraphFormat::Toml => {
            toml::from_str(text).map_err(|e| UcsError::invalid_graph(source_name, e))?
        }
    };

    let graph = AdjacencyGraph::from_adjacency(
        document
            .into_iter()
            .map(|(node, edges)| (node, edges.into_iter().map(EdgeSpec::into_parts))),
    );

    tracing::debug!(
        source = source_name,
        %format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed graph"
    );
    Ok(graph)
}

/// Load a graph document from `path`, or from stdin when `path` is `-`.
///
/// Without an explicit format the file extension decides; stdin defaults to JSON.
pub fn load_graph(path: &Path, format: Option<GraphFormat>) -> Result<AdjacencyGraph<String>> {
    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return parse_graph(&text, format.unwrap_or(GraphFormat::Json), "<stdin>");
    }

    if !path.exists() {
        return Err(UcsError::GraphNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = match format {
        Some(format) => format,
        None => GraphFormat::from_path(path)?,
    };
    let text = fs::read_to_string(path)?;
    parse_graph(&text, format, &path.display().to_string())
}
