//! Error types and exit codes for waymark
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing data file, missing edge or coordinate entry)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the waymark binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed graph data (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading data or running searches
#[derive(Error, Debug)]
pub enum WaymarkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

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
    #[error("{path:?} is missing")]
    DataFileMissing { path: PathBuf },

    #[error("invalid data in {path:?}: {reason}")]
    InvalidData { path: PathBuf, reason: String },

    #[error("no {kind} recorded for edge {from},{to}")]
    MissingEdgeData {
        kind: &'static str,
        from: String,
        to: String,
    },

    #[error("no coordinate recorded for node {node}")]
    MissingCoordinate { node: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("reference search ({variant}) found no path from {source_id} to {target_id}")]
    ReferenceUnreachable {
        variant: String,
        source_id: String,
        target_id: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl WaymarkError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaymarkError::InvalidValue {
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
        WaymarkError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WaymarkError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a data file whose contents could not be used
    pub fn invalid_data(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        WaymarkError::InvalidData {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an adjacency entry without a matching edge attribute
    pub fn missing_edge_data(kind: &'static str, from: &str, to: &str) -> Self {
        WaymarkError::MissingEdgeData {
            kind,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaymarkError::UnknownFormat(_)
            | WaymarkError::UsageError(_)
            | WaymarkError::InvalidValue { .. }
            | WaymarkError::Unsupported { .. } => ExitCode::Usage,

            WaymarkError::DataFileMissing { .. }
            | WaymarkError::InvalidData { .. }
            | WaymarkError::MissingEdgeData { .. }
            | WaymarkError::MissingCoordinate { .. }
            | WaymarkError::NotFound { .. }
            | WaymarkError::ReferenceUnreachable { .. } => ExitCode::Data,

            WaymarkError::Io(_)
            | WaymarkError::Json(_)
            | WaymarkError::Toml(_)
            | WaymarkError::TomlSer(_)
            | WaymarkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaymarkError::UnknownFormat(_) => "unknown_format",
            WaymarkError::UsageError(_) => "usage_error",
            WaymarkError::InvalidValue { .. } => "invalid_value",
            WaymarkError::Unsupported { .. } => "unsupported",
            WaymarkError::DataFileMissing { .. } => "data_file_missing",
            WaymarkError::InvalidData { .. } => "invalid_data",
            WaymarkError::MissingEdgeData { .. } => "missing_edge_data",
            WaymarkError::MissingCoordinate { .. } => "missing_coordinate",
            WaymarkError::NotFound { .. } => "not_found",
            WaymarkError::ReferenceUnreachable { .. } => "reference_unreachable",
            WaymarkError::Io(_) => "io_error",
            WaymarkError::Json(_) => "json_error",
            WaymarkError::Toml(_) | WaymarkError::TomlSer(_) => "toml_error",
            WaymarkError::Other(_) => "other",
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

/// Result type alias for waymark operations
pub type Result<T> = std::result::Result<T, WaymarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            WaymarkError::UsageError("bad".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WaymarkError::DataFileMissing {
                path: PathBuf::from("G.json")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WaymarkError::missing_edge_data("distance", "1", "2").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WaymarkError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_missing_edge_message() {
        let err = WaymarkError::missing_edge_data("cost", "4", "7");
        assert_eq!(err.to_string(), "no cost recorded for edge 4,7");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = WaymarkError::MissingCoordinate {
            node: "12".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "missing_coordinate");
        assert_eq!(
            json["error"]["message"],
            "no coordinate recorded for node 12"
        );
    }
}
