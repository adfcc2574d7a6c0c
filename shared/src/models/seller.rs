//! Seller Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Seller signup payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SellerCreate {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Seller profile as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerRead {
    pub name: String,
    pub email: String,
}
