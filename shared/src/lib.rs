//! Shared types for the FastShip client stack
//!
//! Wire-format types for the FastShip server contract: request/response
//! DTOs, wire enums, validation-error payloads and the actor role tag.
//! These types carry no I/O; they are shared between the typed request
//! client and the application core.

pub mod auth;
pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use auth::{LoginForm, ResetPasswordForm, TokenData};
pub use error::{HttpValidationError, ValidationError};
pub use types::{Role, ShipmentStatus, TagName};
