//! Delivery Partner Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Delivery partner signup payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeliveryPartnerCreate {
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// ZIP codes this partner can deliver to
    pub serviceable_zip_codes: Vec<i64>,
    /// Maximum number of shipments handled concurrently
    pub max_handling_capacity: i64,
    pub password: String,
}

/// Delivery partner profile as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryPartnerRead {
    pub name: String,
    pub email: String,
    pub serviceable_zip_codes: Vec<i64>,
    pub max_handling_capacity: i64,
}

/// Delivery partner update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryPartnerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serviceable_zip_codes: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_handling_capacity: Option<i64>,
}
