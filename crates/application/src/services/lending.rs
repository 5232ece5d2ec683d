//! Lending service for the `/lending` resource.

use std::sync::Arc;

use serde_json::Value;

use lendhub_domain::{Lending, LendingCreate};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Typed access to the `/lending` endpoints. Pure request forwarding; no
/// side effects beyond the calls themselves.
pub struct LendingService {
    client: Arc<ApiClient>,
}

impl LendingService {
    /// Creates the service over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /lending/`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn create(&self, lending: &LendingCreate) -> ApiResult<Lending> {
        self.client.post("/lending/", lending).await
    }

    /// `GET /lending/` — every lending record.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn list(&self) -> ApiResult<Vec<Lending>> {
        self.client.get("/lending/").await
    }

    /// `GET /lending/active` — records not yet returned.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn active(&self) -> ApiResult<Vec<Lending>> {
        self.client.get("/lending/active").await
    }

    /// `GET /lending/equipment/{id}` — history of one piece of equipment.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn by_equipment(&self, equipment_id: i64) -> ApiResult<Vec<Lending>> {
        self.client
            .get(&format!("/lending/equipment/{equipment_id}"))
            .await
    }

    /// `GET /lending/person/{id}` — history of one borrower.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn by_person(&self, person_id: i64) -> ApiResult<Vec<Lending>> {
        self.client.get(&format!("/lending/person/{person_id}")).await
    }

    /// `GET /lending/{id}`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn by_id(&self, id: i64) -> ApiResult<Lending> {
        self.client.get(&format!("/lending/{id}")).await
    }

    /// `PUT /lending/{id}`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn update(&self, id: i64, lending: &Lending) -> ApiResult<Lending> {
        self.client.put(&format!("/lending/{id}"), lending).await
    }

    /// `POST /lending/{id}/submit` — marks the record as returned. A
    /// distinct action, not an update.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn submit(&self, id: i64) -> ApiResult<Lending> {
        self.client.post_empty(&format!("/lending/{id}/submit")).await
    }

    /// `DELETE /lending/{id}`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn delete(&self, id: i64) -> ApiResult<Value> {
        self.client.delete(&format!("/lending/{id}")).await
    }
}
