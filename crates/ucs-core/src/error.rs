//! Error types and exit codes for ucs
//!
//! Exit codes:
//! - 0: Success (including "no path found")
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or malformed graph, invalid edge cost)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the ucs binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing graph, malformed graph, invalid cost (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ucs operations
#[derive(Error, Debug)]
pub enum UcsError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("graph not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid graph in {source_name}: {reason}")]
    InvalidGraph { source_name: String, reason: String },

    #[error("invalid edge cost {cost} on {from} -> {to} (costs must be finite and non-negative)")]
    InvalidEdgeCost {
        from: String,
        to: String,
        cost: f64,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("search interrupted")]
    Interrupted,

    #[error("search exceeded the expansion limit of {limit} nodes")]
    ExpansionLimit { limit: usize },

    #[error("{0}")]
    Other(String),
}

impl UcsError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        UcsError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        UcsError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a graph document that failed to parse
    pub fn invalid_graph(source_name: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        UcsError::InvalidGraph {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an edge whose cost breaks the non-negative precondition
    pub fn invalid_edge_cost(
        from: impl std::fmt::Debug,
        to: impl std::fmt::Debug,
        cost: f64,
    ) -> Self {
        UcsError::InvalidEdgeCost {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            cost,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            UcsError::UnknownFormat(_)
            | UcsError::DuplicateFormat
            | UcsError::UsageError(_)
            | UcsError::InvalidValue { .. }
            | UcsError::Unsupported { .. } => ExitCode::Usage,

            UcsError::GraphNotFound { .. }
            | UcsError::InvalidGraph { .. }
            | UcsError::InvalidEdgeCost { .. } => ExitCode::Data,

            UcsError::Io(_)
            | UcsError::Yaml(_)
            | UcsError::Json(_)
            | UcsError::Toml(_)
            | UcsError::Interrupted
            | UcsError::ExpansionLimit { .. }
            | UcsError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the stable error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            UcsError::UnknownFormat(_) => "unknown_format",
            UcsError::DuplicateFormat => "duplicate_format",
            UcsError::UsageError(_) => "usage_error",
            UcsError::InvalidValue { .. } => "invalid_value",
            UcsError::Unsupported { .. } => "unsupported",
            UcsError::GraphNotFound { .. } => "graph_not_found",
            UcsError::InvalidGraph { .. } => "invalid_graph",
            UcsError::InvalidEdgeCost { .. } => "invalid_edge_cost",
            UcsError::Io(_) => "io_error",
            UcsError::Yaml(_) => "yaml_error",
            UcsError::Json(_) => "json_error",
            UcsError::Toml(_) => "toml_error",
            UcsError::Interrupted => "interrupted",
            UcsError::ExpansionLimit { .. } => "expansion_limit",
            UcsError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for ucs operations
pub type Result<T> = std::result::Result<T, UcsError>;
