//! Health service: liveness probes and the API info document.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Access to the unauthenticated health and info endpoints. The payloads
/// are schemaless status documents, passed through as raw JSON.
pub struct HealthService {
    client: Arc<ApiClient>,
}

impl HealthService {
    /// Creates the service over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /health/` — server liveness.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn health(&self) -> ApiResult<Value> {
        self.client.get("/health/").await
    }

    /// `GET /health/database` — database connectivity.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn database(&self) -> ApiResult<Value> {
        self.client.get("/health/database").await
    }

    /// `GET /` — the API's self-description document.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn api_info(&self) -> ApiResult<Value> {
        self.client.get("/").await
    }
}
