//! Client error types

use shared::HttpValidationError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required or credential rejected
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// No delivery partner can take the shipment (406 on creation)
    #[error("No fulfillment capacity available")]
    NoCapacity,

    /// Request validation failed, server detail passed through verbatim
    #[error("Validation error: {0}")]
    Validation(HttpValidationError),

    /// Internal server error
    #[error("Server error ({status}): {message}")]
    Internal { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// True for 401/403-class failures: the authoritative signal that the
    /// current credential was rejected and the local session must go.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Unauthorized | ClientError::Forbidden(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
