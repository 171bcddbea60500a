//! Error types for the Latte client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared result type for the entire client core.
pub type Result<T> = std::result::Result<T, LatteError>;

/// A shared error type for the entire Latte client.
///
/// API failures are normalized into a single human-readable message before
/// they reach a caller; the raw transport error shape is never exposed.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum LatteError {
    /// Normalized API failure: a non-2xx response or a transport-level
    /// failure (timeout, connect error). `status` is `None` for transport
    /// failures.
    #[error("{message}")]
    Api { status: Option<u16>, message: String },

    /// Authorization failure (HTTP 401). The session has already been
    /// cleared and a redirect to the public landing route requested by the
    /// time a caller sees this.
    #[error("{0}")]
    Unauthorized(String),

    /// IO error (durable storage operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LatteError {
    /// Creates a normalized API error for a response with a known status.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a normalized API error for a transport-level failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Api {
            status: None,
            message: message.into(),
        }
    }

    /// Creates an Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an Unauthorized error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Check if this is a normalized API error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// The single human-readable message carried by this error.
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Unauthorized(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for LatteError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for LatteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}
