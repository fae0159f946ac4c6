//! Error types for the request gateway.

use catalog_config::CoreError;
use catalog_storage::StorageError;
use thiserror::Error;

/// Failures below the HTTP status line: nothing came back.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connection-level failure reported by a non-reqwest transport
    #[error("Connection failed: {0}")]
    Connection(String),
}

/// How a gateway call ended when it did not succeed.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No credential for a protected path; the transport was never called
    #[error("Not authenticated")]
    Unauthenticated,

    /// 401 on the first attempt and on the retry
    #[error("Session expired")]
    SessionExpired,

    /// Server answered with a non-success status
    #[error("Request failed: {status} - {message}")]
    RequestFailed { status: u16, message: String },

    /// No response at all
    #[error("Network error: {0}")]
    Network(#[from] TransportError),

    /// Session store could not be read
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Client configuration is unusable
    #[error("Config error: {0}")]
    Config(#[from] CoreError),

    /// Request body could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GatewayError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::SessionExpired => Some(401),
            _ => None,
        }
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Result type alias using GatewayError.
pub type GatewayResult<T> = Result<T, GatewayError>;
