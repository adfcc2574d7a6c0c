//! Delivery Review Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Review submission payload (urlencoded, keyed by a review link token)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewCreate {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
