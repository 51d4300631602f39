//! Error types and exit codes for perfindex
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed input document)
//! - 3: Input rejected by validation
//! - 4: Inference unavailable

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Exit codes for the perfindex CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input record rejected by validation (3)
    Rejected = 3,
    /// Model could not produce a prediction (4)
    Inference = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Failures of the opaque prediction step
///
/// Never mixed with validation errors: a record that reaches inference has
/// already been accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("inference unavailable: no model configured")]
    NoModel,

    #[error("inference unavailable: model artifact not found at {path:?}")]
    ArtifactMissing { path: PathBuf },

    #[error("inference unavailable: invalid model artifact {path:?}: {reason}")]
    InvalidArtifact { path: PathBuf, reason: String },

    #[error("inference unavailable: {reason}")]
    Failed { reason: String },

    #[error("inference unavailable: model returned a non-finite value")]
    NonFinite,

    #[error("inference unavailable: prediction timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),
}

impl InferenceError {
    /// Create an error for a prediction function that failed
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        InferenceError::Failed {
            reason: reason.to_string(),
        }
    }

    /// Create an error for an artifact that was read but is unusable
    pub fn invalid_artifact(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        InferenceError::InvalidArtifact {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors that can occur during perfindex operations
#[derive(Error, Debug)]
pub enum PerfIndexError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // Validation rejection (exit code 3)
    #[error("input rejected: {error_count} validation error(s)")]
    Rejected { error_count: usize },

    // Inference failures (exit code 4)
    #[error(transparent)]
    Inference(#[from] InferenceError),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("{0}")]
    Other(String),
}

impl PerfIndexError {
    /// Create an error for a malformed or unreadable config file
    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        PerfIndexError::InvalidConfig {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PerfIndexError::UnknownFormat(_)
            | PerfIndexError::UsageError(_)
            | PerfIndexError::InvalidInput { .. } => ExitCode::Usage,

            PerfIndexError::Rejected { .. } => ExitCode::Rejected,

            PerfIndexError::Inference(_) => ExitCode::Inference,

            PerfIndexError::Io(_)
            | PerfIndexError::Json(_)
            | PerfIndexError::InvalidConfig { .. }
            | PerfIndexError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PerfIndexError::UnknownFormat(_) => "unknown_format",
            PerfIndexError::UsageError(_) => "usage_error",
            PerfIndexError::InvalidInput { .. } => "invalid_input",
            PerfIndexError::Rejected { .. } => "validation_failed",
            PerfIndexError::Inference(_) => "inference_unavailable",
            PerfIndexError::Io(_) => "io_error",
            PerfIndexError::Json(_) => "json_error",
            PerfIndexError::InvalidConfig { .. } => "invalid_config",
            PerfIndexError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for perfindex operations
pub type Result<T> = std::result::Result<T, PerfIndexError>;
