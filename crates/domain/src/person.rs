//! Person types for the `/person` resource.
//!
//! A person is the lending-side identity attached to an account; admin
//! endpoints manage persons directly, regular accounts only touch their own
//! profile via `/person/me/profile`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a person within the lending system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersonRole {
    /// Regular borrower.
    #[default]
    User,
    /// Administrator with person-management access.
    Admin,
}

impl PersonRole {
    /// Returns the role as its wire string, usable in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person record as returned by the `/person` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Server-issued numeric id.
    pub id: i64,
    /// Id of the account this person belongs to.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role within the lending system.
    pub role: PersonRole,
    /// Company affiliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Name of the designated contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_name: Option<String>,
    /// Email of the designated contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_email: Option<String>,
    /// Phone of the designated contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_phone: Option<String>,
    /// Creation timestamp (opaque, server-formatted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Admin payload for `PUT /person/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersonUpdate {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role within the lending system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<PersonRole>,
    /// Company affiliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Name of the designated contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_name: Option<String>,
    /// Email of the designated contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_email: Option<String>,
    /// Phone of the designated contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_phone: Option<String>,
}

/// Self-service payload for `PUT /person/me/profile`. Role and email are
/// not editable through the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersonProfileUpdate {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company affiliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Name of the designated contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_name: Option<String>,
    /// Email of the designated contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_email: Option<String>,
    /// Phone of the designated contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_phone: Option<String>,
}
