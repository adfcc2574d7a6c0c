//! FastShip application core
//!
//! The session and authorization core behind the FastShip dashboard:
//! a file-backed session store, the process-wide authorization context
//! that feeds the typed request client's security hook, route guard
//! evaluation, and the high-level sign-in/sign-out flows.
//!
//! Rendering, forms and navigation live in the presentation layer; this
//! crate only decides what they are allowed to show.

pub mod core;

pub use crate::core::auth::AuthContext;
pub use crate::core::flows::{self, ShipmentSubmission};
pub use crate::core::guard::{GuardOutcome, RouteGuard, ViewRequirement};
pub use crate::core::session::{Session, SessionStore};
