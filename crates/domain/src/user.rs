//! Account types for the `/auth` resource.

use serde::{Deserialize, Serialize};

/// An authenticated account as returned by `/auth/me` and inside
/// [`AuthSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-issued account id (opaque string).
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account role name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Company the account belongs to.
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
    /// Last sign-in timestamp (opaque, server-formatted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sign_in_at: Option<String>,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    /// Login email.
    pub email: String,
    /// Plaintext password (TLS-protected in transit).
    pub password: String,
    /// Display name.
    pub name: String,
    /// Requested role, server default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Company the account belongs to.
    pub company: String,
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

/// Payload for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLogin {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Payload for `PUT /auth/change-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    /// The password currently on record.
    pub current_password: String,
    /// The replacement password.
    pub new_password: String,
}

/// Response body of `POST /auth/login`, `/auth/register` and
/// `/auth/refresh`: the account plus a freshly issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// The authenticated account.
    pub user: User,
    /// Opaque bearer token for subsequent requests.
    pub access_token: String,
    /// Token scheme, normally `"bearer"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_deserializes_with_sparse_fields() {
        let user: User =
            serde_json::from_str(r#"{"id":"u-1","email":"a@b.com"}"#).unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.name, None);
        assert_eq!(user.created_at, None);
    }

    #[test]
    fn test_auth_session_carries_token() {
        let session: AuthSession = serde_json::from_str(
            r#"{"user":{"id":"1","email":"a@b.com"},"access_token":"tok123","token_type":"bearer"}"#,
        )
        .unwrap();
        assert_eq!(session.access_token, "tok123");
        assert_eq!(session.token_type.as_deref(), Some("bearer"));
    }

    #[test]
    fn test_user_create_omits_absent_optionals() {
        let payload = UserCreate {
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
            name: "Alice".to_string(),
            role: None,
            company: "Acme".to_string(),
            phone: None,
            contact_person_name: None,
            contact_person_email: None,
            contact_person_phone: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("role"));
        assert!(!json.contains("phone"));
    }
}
