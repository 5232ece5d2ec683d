//! Person service for the `/person` resource.

use std::sync::Arc;

use lendhub_domain::{Person, PersonProfileUpdate, PersonRole, PersonUpdate};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Typed access to the `/person` endpoints: admin-facing person management
/// plus the current account's own profile.
pub struct PersonService {
    client: Arc<ApiClient>,
}

impl PersonService {
    /// Creates the service over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /person/` with an optional server-side role filter.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn list(&self, role: Option<PersonRole>) -> ApiResult<Vec<Person>> {
        let endpoint = role.map_or_else(
            || "/person/".to_string(),
            |role| format!("/person/?role={}", role.as_str()),
        );
        self.client.get(&endpoint).await
    }

    /// `GET /person/{id}`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn by_id(&self, id: i64) -> ApiResult<Person> {
        self.client.get(&format!("/person/{id}")).await
    }

    /// `GET /person/email/{email}`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn by_email(&self, email: &str) -> ApiResult<Person> {
        self.client.get(&format!("/person/email/{email}")).await
    }

    /// `GET /person/user/{userId}` — the person attached to an account.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn by_user_id(&self, user_id: &str) -> ApiResult<Person> {
        self.client.get(&format!("/person/user/{user_id}")).await
    }

    /// `PUT /person/{id}` — admin update of any person.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn update(&self, id: i64, update: &PersonUpdate) -> ApiResult<Person> {
        self.client.put(&format!("/person/{id}"), update).await
    }

    /// `GET /person/me/profile` — the current account's own person record.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn my_profile(&self) -> ApiResult<Person> {
        self.client.get("/person/me/profile").await
    }

    /// `PUT /person/me/profile`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn update_my_profile(&self, update: &PersonProfileUpdate) -> ApiResult<Person> {
        self.client.put("/person/me/profile", update).await
    }
}
