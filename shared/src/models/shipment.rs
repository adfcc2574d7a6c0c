//! Shipment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::types::{ShipmentStatus, TagName};

/// Create shipment payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShipmentCreate {
    #[validate(length(max = 255))]
    pub content: String,
    /// Weight in kg, capped by the platform
    #[validate(range(max = 25.0))]
    pub weight: f64,
    /// ZIP code of the shipment destination
    pub destination: i64,
    #[validate(email)]
    pub client_contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_contact_phone: Option<String>,
}

/// Shipment entity as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRead {
    pub content: String,
    pub weight: f64,
    pub destination: i64,
    pub id: Uuid,
    pub timeline: Vec<ShipmentEvent>,
    #[serde(default)]
    pub estimated_delivery: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<TagRead>,
}

impl ShipmentRead {
    /// Status of the most recent timeline event, if any.
    pub fn latest_status(&self) -> Option<ShipmentStatus> {
        self.timeline.last().map(|event| event.status)
    }
}

/// Update shipment payload (partner status updates)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShipmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<DateTime<Utc>>,
}

/// One event in a shipment's timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentEvent {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub location: i64,
    pub status: ShipmentStatus,
    #[serde(default)]
    pub description: Option<String>,
    pub shipment_id: Uuid,
}

/// Tag with its handling instruction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRead {
    pub name: TagName,
    pub instruction: String,
}
