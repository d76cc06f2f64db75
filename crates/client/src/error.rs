//! Client error types

use thiserror::Error;

/// Errors surfaced by the typed clients. Nothing is retried; callers
/// decide whether a failure is fatal or display-only.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request construction error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an unexpected error status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Credentials were rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Response body did not match the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Map an HTTP status to the matching variant, carrying the response
    /// body as the message.
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Server {
                status: status.as_u16(),
                message,
            },
        }
    }
}
