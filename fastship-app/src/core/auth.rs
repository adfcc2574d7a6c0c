//! Authorization context
//!
//! One process-wide handle through which every surface reads the current
//! session and the only two mutators change it. Clones share state; a
//! login or logout is immediately visible to every consumer, and a watch
//! channel lets mounted guards re-evaluate without a reload.

use fastship_client::{ClientError, SecuritySource};
use shared::Role;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::watch;

use super::session::{Session, SessionStore};

struct Inner {
    session: RwLock<Option<Session>>,
    store: SessionStore,
    changed: watch::Sender<Option<Session>>,
}

/// Process-wide authorization handle.
///
/// Cheap to clone; all clones observe the same session.
#[derive(Clone)]
pub struct AuthContext {
    inner: Arc<Inner>,
}

impl AuthContext {
    /// Create an empty context over the given store. Call [`restore`]
    /// before any protected view renders.
    ///
    /// [`restore`]: AuthContext::restore
    pub fn new(store: SessionStore) -> Self {
        let (changed, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                session: RwLock::new(None),
                store,
                changed,
            }),
        }
    }

    /// Rehydrate the session from the persisted record.
    ///
    /// Runs once at startup; a missing or corrupt record leaves the
    /// context empty.
    pub fn restore(&self) {
        let restored = self.inner.store.load();
        if let Some(ref session) = restored {
            tracing::info!(role = %session.role, "Session restored");
        }
        self.set(restored);
    }

    /// Adopt a fresh credential for the given role.
    ///
    /// Persistence failure is logged and does not fail the login; the
    /// in-memory state stays authoritative for the running process.
    pub fn login(&self, role: Role, token: impl Into<String>) {
        let session = Session::new(role, token);
        if let Err(err) = self.inner.store.save(&session) {
            tracing::warn!(error = %err, "Failed to persist session");
        }
        tracing::debug!(role = %role, "Logged in");
        self.set(Some(session));
    }

    /// Drop the session and its persisted record. Idempotent.
    pub fn logout(&self) {
        if let Err(err) = self.inner.store.clear() {
            tracing::warn!(error = %err, "Failed to clear persisted session");
        }
        self.set(None);
    }

    /// Current session snapshot
    pub fn session(&self) -> Option<Session> {
        self.read().clone()
    }

    /// Current bearer token, if signed in
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|session| session.token.clone())
    }

    /// Current actor role, if signed in
    pub fn role(&self) -> Option<Role> {
        self.read().as_ref().map(|session| session.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// Observe session changes; the receiver always holds the latest
    /// snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.inner.changed.subscribe()
    }

    /// Calling-layer reaction to a server-reported failure on a secured
    /// operation: a 401/403-class error invalidates the session and
    /// returns true; anything else leaves it intact.
    pub fn invalidate_if_auth_failure(&self, err: &ClientError) -> bool {
        if err.is_auth_failure() {
            tracing::info!("Credential rejected by server, clearing session");
            self.logout();
            true
        } else {
            false
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.inner
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn set(&self, session: Option<Session>) {
        {
            let mut guard = self
                .inner
                .session
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = session.clone();
        }
        self.inner.changed.send_replace(session);
    }
}

impl SecuritySource for AuthContext {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("role", &self.role())
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
