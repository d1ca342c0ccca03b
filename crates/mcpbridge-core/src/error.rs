//! Error types shared across the bridge crates

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::branding;

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors surfaced to callers of the bridge.
///
/// Parse ambiguity and unreadable config files never appear here: both
/// degrade to best-effort results instead.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The executable could not be started (not found, permission denied, ...)
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited unsuccessfully
    #[error("{} exited with {}: {}", branding::CLI_PROGRAM, describe_exit(.exit_code), .stderr.trim())]
    Tool {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The request was rejected before any process was started
    #[error("invalid request: {0}")]
    Validation(String),

    /// The process did not finish within the configured limit
    #[error("`{program}` did not finish within {after:?}")]
    Timeout { program: String, after: Duration },
}

impl BridgeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Caller-facing headline, independent of the diagnostic text
    pub fn summary(&self) -> String {
        match self {
            Self::Spawn { .. } | Self::Timeout { .. } => branding::cli_spawn_headline(),
            Self::Tool { .. } => branding::cli_failure_headline(),
            Self::Validation(_) => "Invalid request".to_string(),
        }
    }

    /// Raw diagnostic text for the caller (stderr, OS error message, ...)
    pub fn details(&self) -> String {
        match self {
            Self::Spawn { source, .. } => source.to_string(),
            Self::Tool { stderr, .. } => stderr.clone(),
            Self::Validation(message) => message.clone(),
            Self::Timeout { after, .. } => format!("Timed out after {:?}", after),
        }
    }

    /// Whether a read-only caller may fall back to the config files.
    ///
    /// Validation errors describe a bad request, so no data source will help.
    pub fn is_fallback_eligible(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Uniform error body handed to the routing layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl From<&BridgeError> for ErrorResponse {
    fn from(err: &BridgeError) -> Self {
        Self {
            error: err.summary(),
            details: err.details(),
        }
    }
}
