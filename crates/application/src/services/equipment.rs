//! Equipment service for the `/equipment` resource.

use std::sync::Arc;

use serde_json::Value;

use lendhub_domain::{Equipment, EquipmentDraft, EquipmentStatus};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Typed access to the `/equipment` endpoints.
///
/// Status filtering happens server-side via the `status` query parameter;
/// the convenience wrappers below never filter client-side.
pub struct EquipmentService {
    client: Arc<ApiClient>,
}

impl EquipmentService {
    /// Creates the service over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /equipment/`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn create(&self, draft: &EquipmentDraft) -> ApiResult<Equipment> {
        self.client.post("/equipment/", draft).await
    }

    /// `GET /equipment/` with an optional server-side status filter.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn list(&self, status: Option<EquipmentStatus>) -> ApiResult<Vec<Equipment>> {
        let endpoint = status.map_or_else(
            || "/equipment/".to_string(),
            |status| format!("/equipment/?status={}", status.as_str()),
        );
        self.client.get(&endpoint).await
    }

    /// `GET /equipment/{id}`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn by_id(&self, id: i64) -> ApiResult<Equipment> {
        self.client.get(&format!("/equipment/{id}")).await
    }

    /// `GET /equipment/barcode/{barcode}`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn by_barcode(&self, barcode: i64) -> ApiResult<Equipment> {
        self.client.get(&format!("/equipment/barcode/{barcode}")).await
    }

    /// `PUT /equipment/{id}`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn update(&self, id: i64, draft: &EquipmentDraft) -> ApiResult<Equipment> {
        self.client.put(&format!("/equipment/{id}"), draft).await
    }

    /// `DELETE /equipment/{id}`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn delete(&self, id: i64) -> ApiResult<Value> {
        self.client.delete(&format!("/equipment/{id}")).await
    }

    /// `GET /equipment/service/due` — equipment past its service date.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn due_for_service(&self) -> ApiResult<Vec<Equipment>> {
        self.client.get("/equipment/service/due").await
    }

    /// Listing filtered to [`EquipmentStatus::Available`].
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn available(&self) -> ApiResult<Vec<Equipment>> {
        self.list(Some(EquipmentStatus::Available)).await
    }

    /// Listing filtered to [`EquipmentStatus::Lent`].
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn lent(&self) -> ApiResult<Vec<Equipment>> {
        self.list(Some(EquipmentStatus::Lent)).await
    }

    /// Listing filtered to [`EquipmentStatus::InService`].
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn in_service(&self) -> ApiResult<Vec<Equipment>> {
        self.list(Some(EquipmentStatus::InService)).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::testutil::{MemoryTokenStorage, MockTransport};
    use pretty_assertions::assert_eq;

    fn service(transport: &Arc<MockTransport>) -> EquipmentService {
        let client = Arc::new(ApiClient::new(
            "http://localhost:8000",
            transport.clone(),
            Arc::new(MemoryTokenStorage::new()),
        ));
        EquipmentService::new(client)
    }

    #[tokio::test]
    async fn test_list_without_filter_hits_bare_endpoint() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, "[]");
        let equipment = service(&transport);

        equipment.list(None).await.unwrap();
        assert_eq!(transport.requests()[0].url, "http://localhost:8000/equipment/");
    }

    #[tokio::test]
    async fn test_available_is_a_server_side_status_filter() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            200,
            r#"[{"id":1,"barcode":42,"type":"drill","name":"Drill","description":"",
                 "service_interval_days":180,"status":"available","amount":1}]"#,
        );
        let equipment = service(&transport);

        let listed = equipment.available().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, Some(EquipmentStatus::Available));
        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:8000/equipment/?status=available"
        );
    }

    #[tokio::test]
    async fn test_in_service_uses_snake_case_wire_value() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, "[]");
        let equipment = service(&transport);

        equipment.in_service().await.unwrap();
        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:8000/equipment/?status=in_service"
        );
    }

    #[tokio::test]
    async fn test_barcode_lookup_path() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            200,
            r#"{"id":1,"barcode":42,"type":"drill","name":"Drill","description":"",
                "service_interval_days":180,"amount":1}"#,
        );
        let equipment = service(&transport);

        equipment.by_barcode(42).await.unwrap();
        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:8000/equipment/barcode/42"
        );
    }
}
