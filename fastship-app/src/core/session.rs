//! Session persistence
//!
//! The session record survives restarts as one JSON document under the
//! injected data directory. Role and token live in the same struct, so
//! there is no state with a token but no role or the reverse.

use serde::{Deserialize, Serialize};
use shared::Role;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An authenticated session: actor role plus opaque bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub token: String,
}

impl Session {
    pub fn new(role: Role, token: impl Into<String>) -> Self {
        Self {
            role,
            token: token.into(),
        }
    }
}

/// File-backed session record: `{data_dir}/session.json`
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let path = data_dir.into().join("session.json");
        Self { path }
    }

    /// Persist the session record
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content)?;
        tracing::debug!(role = %session.role, "Session saved");
        Ok(())
    }

    /// Load the persisted record.
    ///
    /// A missing or malformed record is "no session", never an error.
    pub fn load(&self) -> Option<Session> {
        if !self.path.exists() {
            return None;
        }
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(error = %err, "Discarding malformed session record");
                None
            }
        }
    }

    /// Remove the persisted record. No-op when none exists.
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!("Session record cleared");
        }
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
