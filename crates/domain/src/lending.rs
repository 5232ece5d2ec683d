//! Lending types for the `/lending` resource.

use serde::{Deserialize, Serialize};

/// A lending record: one piece of equipment handed to one person. A record
/// without a `submit_time` is still active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lending {
    /// Server-issued numeric id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Id of the lent equipment.
    pub equipment_id: i64,
    /// Id of the borrowing person.
    pub person_id: i64,
    /// Free-form purpose description.
    pub description: String,
    /// Whether the equipment left for service rather than lending.
    pub is_service: bool,
    /// When the equipment was handed out (opaque, server-formatted).
    pub lend_time: String,
    /// When the equipment was returned; absent while active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_time: Option<String>,
    /// Creation timestamp (opaque, server-formatted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for `POST /lending/`. The borrowing person is derived from the
/// session server-side; `lend_time` defaults to now when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingCreate {
    /// Id of the equipment to lend.
    pub equipment_id: i64,
    /// Free-form purpose description.
    pub description: String,
    /// Whether the equipment leaves for service rather than lending.
    pub is_service: bool,
    /// Hand-out time override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lend_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_active_lending_has_no_submit_time() {
        let lending: Lending = serde_json::from_str(
            r#"{"id":1,"equipment_id":2,"person_id":3,"description":"site work",
                "is_service":false,"lend_time":"2025-03-01T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(lending.submit_time, None);
    }

    #[test]
    fn test_create_payload_omits_default_lend_time() {
        let create = LendingCreate {
            equipment_id: 2,
            description: "site work".to_string(),
            is_service: false,
            lend_time: None,
        };
        let json = serde_json::to_string(&create).unwrap();
        assert!(!json.contains("lend_time"));
    }
}
