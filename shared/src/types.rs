//! Wire enums and the actor role tag

use serde::{Deserialize, Serialize};

/// Actor role of a signed-in user.
///
/// Exactly one of two mutually exclusive identity classes; the absent
/// state is expressed as `Option<Role>` by consumers, never a third
/// variant. The role is chosen at login time and persisted alongside the
/// bearer token. It is never inferred from the token's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Seller,
    Partner,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Seller => write!(f, "seller"),
            Role::Partner => write!(f, "partner"),
        }
    }
}

/// Shipment lifecycle status as reported in timeline events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Placed,
    InTransit,
    OutForDelivery,
    Delivered,
    Cancelled,
}

/// Handling tag attached to a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagName {
    Express,
    Standard,
    Fragile,
    Heavy,
    International,
    Domestic,
    TemperatureControlled,
    Gift,
    Return,
    Documents,
}

impl TagName {
    /// Wire spelling of the tag, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagName::Express => "express",
            TagName::Standard => "standard",
            TagName::Fragile => "fragile",
            TagName::Heavy => "heavy",
            TagName::International => "international",
            TagName::Domestic => "domestic",
            TagName::TemperatureControlled => "temperature_controlled",
            TagName::Gift => "gift",
            TagName::Return => "return",
            TagName::Documents => "documents",
        }
    }
}

impl std::fmt::Display for TagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_spelling() {
        assert_eq!(serde_json::to_string(&Role::Seller).unwrap(), "\"seller\"");
        assert_eq!(serde_json::to_string(&Role::Partner).unwrap(), "\"partner\"");
        let role: Role = serde_json::from_str("\"partner\"").unwrap();
        assert_eq!(role, Role::Partner);
    }

    #[test]
    fn tag_wire_spelling_matches_serde() {
        let tag = TagName::TemperatureControlled;
        assert_eq!(
            serde_json::to_string(&tag).unwrap(),
            format!("\"{}\"", tag.as_str())
        );
    }

    #[test]
    fn status_round_trip() {
        let status: ShipmentStatus = serde_json::from_str("\"out_for_delivery\"").unwrap();
        assert_eq!(status, ShipmentStatus::OutForDelivery);
    }
}
