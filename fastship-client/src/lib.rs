//! FastShip Client - typed HTTP client for the FastShip API
//!
//! Provides network-based calls against the fixed FastShip server
//! contract. Operations are grouped by resource (shipments, sellers,
//! delivery partners); each operation statically declares whether the
//! bearer credential must be attached before dispatch. The credential
//! itself is resolved through a pluggable [`SecuritySource`] hook, so the
//! client carries no session semantics of its own.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::{PartnerApi, Profile, RoleApi, SellerApi, ShipmentApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, Payload, RequestSpec, SecuritySource};

// Re-export shared types for convenience
pub use shared::{HttpValidationError, Role, TokenData, ValidationError};
