//! Shared error types for the application

use crate::validation::ValidationErrors;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure of a classifier backend.
///
/// The heuristic backend never produces one; the remote backend maps
/// transport and protocol failures here so callers can surface them as a
/// non-fatal notice.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassifierError {
    /// Connection or request could not be completed
    #[error("model service unreachable: {0}")]
    Transport(String),

    /// No response within the configured timeout
    #[error("model service timed out after {0:?}")]
    Timeout(Duration),

    /// Service answered with a non-success status
    #[error("model service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("invalid model response: {0}")]
    InvalidResponse(String),

    /// A classification is already in flight for this session
    #[error("a classification is already in progress")]
    Busy,
}

impl ClassifierError {
    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::InvalidResponse(_) | Self::Busy => false,
        }
    }
}

/// Main error type for potability operations
#[derive(Debug, Error)]
pub enum Error {
    /// One or more parameters outside their catalog bounds
    #[error("{} parameter(s) out of range", .0.len())]
    Validation(ValidationErrors),

    /// Malformed input (non-numeric, non-finite, unreadable JSON shape)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Classifier backend failure
    #[error("Classification failed: {0}")]
    Classifier(#[from] ClassifierError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn configuration(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
