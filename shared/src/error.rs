//! Server validation-error payloads
//!
//! The server reports request validation failures as a structured
//! `detail` list. The client passes these through verbatim for display;
//! it never interprets them.

use serde::{Deserialize, Serialize};

/// One field-level validation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Location of the offending field (e.g. `["body", "weight"]`).
    pub loc: Vec<serde_json::Value>,
    /// Human-readable message.
    pub msg: String,
    /// Error type identifier.
    #[serde(rename = "type")]
    pub error_type: String,
}

/// 422-class response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpValidationError {
    #[serde(default)]
    pub detail: Vec<ValidationError>,
}

impl std::fmt::Display for HttpValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.detail.is_empty() {
            return write!(f, "validation failed");
        }
        let msgs: Vec<&str> = self.detail.iter().map(|e| e.msg.as_str()).collect();
        write!(f, "{}", msgs.join("; "))
    }
}
