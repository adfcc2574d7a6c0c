//! Auth API DTOs
//!
//! Login and password-reset payloads shared by the seller and delivery
//! partner account endpoints. The token endpoints take an OAuth2 password
//! grant form, urlencoded.

use serde::{Deserialize, Serialize};

/// OAuth2 password-grant login form (`POST /seller/token`, `POST /partner/token`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl LoginForm {
    /// Plain username/password form; the optional OAuth2 fields stay empty.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            grant_type: None,
            username: username.into(),
            password: password.into(),
            scope: String::new(),
            client_id: None,
            client_secret: None,
        }
    }
}

/// Token endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenData {
    pub access_token: String,
    pub token_type: String,
}

/// Reset-password form body (urlencoded).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordForm {
    pub password: String,
}
