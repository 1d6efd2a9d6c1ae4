//! Structured error types for bark-notify
//!
//! Uses thiserror for ergonomic error definitions with automatic Display
//! and Error trait implementations. Every variant is caught at the boundary
//! of the step that produced it; only `main` turns one into an exit code.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors in bark-notify
#[derive(Error, Debug)]
pub enum NotifyError {
    /// No credential source yielded a value (fatal, nothing is sent)
    #[error("Bark key is required. Provide --key, set BARK_KEY env var, or put in config.json.")]
    MissingCredential,

    /// Config file exists but could not be read or parsed (logged, never fatal)
    #[error("Failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level failure talking to the push endpoint
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Push endpoint answered with a non-success status
    #[error("HTTP Error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Payload serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Push endpoint URL failed to parse
    #[error("Invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// Native desktop notification command failed (logged, never fatal)
    #[error("{0}")]
    LocalNotification(String),

    /// Required request field missing after argument parsing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl NotifyError {
    /// Whether this error means the remote push was not delivered
    pub fn is_remote_delivery(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. } | Self::Json(_))
    }
}

/// Convenience Result type using NotifyError
pub type Result<T> = std::result::Result<T, NotifyError>;
