//! Route guards
//!
//! Per-view gate consumed by the presentation layer's router. Evaluated
//! against the current session, in order: no session redirects to the
//! public entry route; a valid session with the wrong role renders a
//! "not permitted" state (not a redirect loop); otherwise the view
//! renders. Guards re-evaluate on every context change, not just at
//! mount.

use serde::{Deserialize, Serialize};
use shared::Role;
use tokio::sync::watch;

use super::auth::AuthContext;
use super::session::Session;

/// What a protected view demands of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewRequirement {
    /// Any signed-in actor
    Authenticated,
    /// Signed in with this specific role
    RoleOnly(Role),
}

/// Guard decision for one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GuardOutcome {
    /// Render the view normally
    Render,
    /// No session: send the user to the public entry route
    RedirectToLogin,
    /// Session is valid but the role does not match this view
    NotPermitted,
}

impl GuardOutcome {
    pub fn allows_render(&self) -> bool {
        matches!(self, GuardOutcome::Render)
    }
}

/// Evaluate the guard rule against a session snapshot.
pub fn evaluate(requirement: ViewRequirement, session: Option<&Session>) -> GuardOutcome {
    let Some(session) = session else {
        return GuardOutcome::RedirectToLogin;
    };
    match requirement {
        ViewRequirement::Authenticated => GuardOutcome::Render,
        ViewRequirement::RoleOnly(role) if session.role == role => GuardOutcome::Render,
        ViewRequirement::RoleOnly(_) => GuardOutcome::NotPermitted,
    }
}

impl AuthContext {
    /// One-shot guard evaluation against the current session.
    pub fn guard(&self, requirement: ViewRequirement) -> GuardOutcome {
        evaluate(requirement, self.session().as_ref())
    }
}

/// A mounted view's guard: holds the view requirement and a subscription
/// to the authorization context, so a mid-session logout or role change
/// reflects immediately.
#[derive(Debug)]
pub struct RouteGuard {
    requirement: ViewRequirement,
    rx: watch::Receiver<Option<Session>>,
}

impl RouteGuard {
    pub fn new(ctx: &AuthContext, requirement: ViewRequirement) -> Self {
        Self {
            requirement,
            rx: ctx.subscribe(),
        }
    }

    /// Outcome for the session as of now.
    pub fn current(&self) -> GuardOutcome {
        evaluate(self.requirement, self.rx.borrow().as_ref())
    }

    /// Wait for the next session change and return the re-evaluated
    /// outcome. Returns `None` when the context is gone.
    pub async fn changed(&mut self) -> Option<GuardOutcome> {
        self.rx.changed().await.ok()?;
        Some(evaluate(self.requirement, self.rx.borrow_and_update().as_ref()))
    }
}
