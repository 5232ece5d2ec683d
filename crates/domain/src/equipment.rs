//! Equipment types for the `/equipment` resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a piece of equipment. The server owns the
/// transitions; the client only filters listings by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    /// In stock and lendable.
    Available,
    /// Currently lent out.
    Lent,
    /// Undergoing service.
    InService,
}

impl EquipmentStatus {
    /// Returns the status as its wire string, usable in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Lent => "lent",
            Self::InService => "in_service",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An equipment record as returned by the `/equipment` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Server-issued numeric id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Physical barcode number.
    pub barcode: i64,
    /// Equipment category (`type` on the wire).
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Days between mandatory services.
    pub service_interval_days: i64,
    /// Date of the last service (opaque, server-formatted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service: Option<String>,
    /// Date the next service is due (opaque, server-formatted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_service: Option<String>,
    /// Current lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EquipmentStatus>,
    /// Number of units.
    pub amount: i64,
    /// Creation timestamp (opaque, server-formatted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for `POST /equipment/` and `PUT /equipment/{id}`: an
/// [`Equipment`] without the server-owned `id` and `created_at` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDraft {
    /// Physical barcode number.
    pub barcode: i64,
    /// Equipment category (`type` on the wire).
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Days between mandatory services.
    pub service_interval_days: i64,
    /// Date of the last service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service: Option<String>,
    /// Date the next service is due.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_service: Option<String>,
    /// Requested lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EquipmentStatus>,
    /// Number of units.
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&EquipmentStatus::InService).unwrap(),
            r#""in_service""#
        );
        assert_eq!(EquipmentStatus::InService.as_str(), "in_service");
        let status: EquipmentStatus = serde_json::from_str(r#""lent""#).unwrap();
        assert_eq!(status, EquipmentStatus::Lent);
    }

    #[test]
    fn test_kind_maps_to_type_on_the_wire() {
        let equipment: Equipment = serde_json::from_str(
            r#"{"barcode":42,"type":"drill","name":"Drill","description":"",
                "service_interval_days":180,"status":"available","amount":3}"#,
        )
        .unwrap();
        assert_eq!(equipment.kind, "drill");
        assert_eq!(equipment.status, Some(EquipmentStatus::Available));

        let json = serde_json::to_string(&equipment).unwrap();
        assert!(json.contains(r#""type":"drill""#));
        assert!(!json.contains("kind"));
    }
}
