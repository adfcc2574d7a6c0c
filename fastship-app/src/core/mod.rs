//! Session and authorization core

pub mod auth;
pub mod flows;
pub mod guard;
pub mod session;

pub use auth::AuthContext;
pub use guard::{GuardOutcome, RouteGuard, ViewRequirement};
pub use session::{Session, SessionStore};
