//! The API client: single point of outbound HTTP traffic and token custody.
//!
//! Every call funnels through [`ApiClient::dispatch`], which builds the URL,
//! attaches the default and bearer headers, executes via the transport port
//! and normalizes whatever comes back into an [`ApiResult`]. Nothing past
//! this module ever sees a raw HTTP response or a transport error.

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};
use crate::ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TokenStorage};

/// HTTP client for the lending API.
///
/// Owns the in-memory session token and mirrors it into durable storage so
/// a restarted process stays authenticated. The token has exactly one
/// writer: this type. Services and the auth store mutate it only through
/// [`ApiClient::set_token`].
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    storage: Arc<dyn TokenStorage>,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Creates a client against `base_url`, restoring any persisted token.
    ///
    /// A trailing slash on `base_url` is trimmed; endpoint paths always
    /// start with one. A storage read failure is logged and treated as "no
    /// stored token" rather than failing construction.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        storage: Arc<dyn TokenStorage>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let token = match storage.load() {
            Ok(token) => token,
            Err(error) => {
                tracing::warn!(%error, "could not restore session token from storage");
                None
            }
        };
        Self {
            base_url,
            transport,
            storage,
            token: RwLock::new(token),
        }
    }

    /// Replaces the session token in memory and in durable storage.
    ///
    /// `None` clears both. A storage failure is logged at `warn` and does
    /// not fail the call: token custody continues in memory for the rest of
    /// the process lifetime.
    pub fn set_token(&self, token: Option<&str>) {
        {
            let mut slot = self
                .token
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *slot = token.map(ToOwned::to_owned);
        }
        let result = match token {
            Some(token) => self.storage.store(token),
            None => self.storage.clear(),
        };
        if let Err(error) = result {
            tracing::warn!(%error, "session token storage update failed");
        }
    }

    /// Returns the current in-memory session token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Issues a GET request.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the failure taxonomy.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.dispatch(HttpMethod::Get, endpoint, None).await
    }

    /// Issues a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the failure taxonomy.
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.dispatch(HttpMethod::Post, endpoint, Some(body)).await
    }

    /// Issues a POST request without a body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the failure taxonomy.
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.dispatch(HttpMethod::Post, endpoint, None).await
    }

    /// Issues a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the failure taxonomy.
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.dispatch(HttpMethod::Put, endpoint, Some(body)).await
    }

    /// Issues a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the failure taxonomy.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.dispatch(HttpMethod::Delete, endpoint, None).await
    }

    /// Builds, executes and normalizes one request.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<String>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut headers = vec![(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )];
        if let Some(token) = self.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        tracing::debug!(method = method.as_str(), %url, "issuing request");
        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|error| ApiError::Transport {
                message: error.to_string(),
            })?;

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: error_message(&response),
            });
        }

        // An unparseable or non-JSON 2xx body still counts as success; the
        // server answers some endpoints (DELETE, logout) with no payload.
        let payload = if response.is_json() {
            serde_json::from_slice::<Value>(&response.body)
                .unwrap_or_else(|_| Value::Object(Map::new()))
        } else {
            Value::Object(Map::new())
        };
        serde_json::from_value(payload).map_err(|error| ApiError::Decode {
            message: error.to_string(),
        })
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|error| ApiError::Transport {
        message: format!("could not encode request body: {error}"),
    })
}

/// Extracts a human-readable message from a failure response body.
///
/// The body is parsed as JSON regardless of its declared content type and
/// searched for `detail`, then `message`, then `error`. When nothing
/// usable is present the generic `HTTP Error: <status>` string applies.
fn error_message(response: &HttpResponse) -> String {
    serde_json::from_slice::<Value>(&response.body)
        .ok()
        .and_then(|body| extract_error_field(&body))
        .unwrap_or_else(|| format!("HTTP Error: {}", response.status))
}

fn extract_error_field(body: &Value) -> Option<String> {
    for key in ["detail", "message", "error"] {
        match body.get(key) {
            Some(Value::String(text)) => return Some(text.clone()),
            // FastAPI validation errors carry `detail` as an array of
            // `{loc, msg, type}` objects; flatten the messages.
            Some(Value::Array(items)) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if !messages.is_empty() {
                    return Some(messages.join("; "));
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::TransportError;
    use crate::testutil::{json_response, MemoryTokenStorage, MockTransport};
    use pretty_assertions::assert_eq;

    fn client_with(
        transport: Arc<MockTransport>,
        storage: Arc<MemoryTokenStorage>,
    ) -> ApiClient {
        ApiClient::new("http://localhost:8000", transport, storage)
    }

    #[tokio::test]
    async fn test_success_json_body_is_parsed() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, r#"{"status":"ok"}"#);
        let client = client_with(transport, Arc::new(MemoryTokenStorage::new()));

        let data: Value = client.get("/health/").await.unwrap();
        assert_eq!(data, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_detail_field_wins_over_message_and_error() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            401,
            r#"{"detail":"invalid credentials","message":"m","error":"e"}"#,
        );
        let client = client_with(transport, Arc::new(MemoryTokenStorage::new()));

        let error = client.get::<Value>("/auth/me").await.unwrap_err();
        assert_eq!(
            error,
            ApiError::Status {
                status: 401,
                message: "invalid credentials".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_unrecognized_error_body_falls_back_to_generic() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(404, r#"{"unexpected":"shape"}"#);
        let client = client_with(transport, Arc::new(MemoryTokenStorage::new()));

        let error = client.get::<Value>("/equipment/99").await.unwrap_err();
        assert_eq!(error.to_string(), "HTTP Error: 404");
    }

    #[tokio::test]
    async fn test_validation_detail_array_is_flattened() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            422,
            r#"{"detail":[{"loc":["body","email"],"msg":"field required","type":"missing"},
                          {"loc":["body","password"],"msg":"too short","type":"value_error"}]}"#,
        );
        let client = client_with(transport, Arc::new(MemoryTokenStorage::new()));

        let error = client.post::<Value, _>("/auth/register", &Value::Null).await.unwrap_err();
        assert_eq!(error.to_string(), "field required; too short");
    }

    #[tokio::test]
    async fn test_non_json_success_becomes_empty_object() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(HttpResponse {
            status: 204,
            content_type: None,
            body: Vec::new(),
        });
        let client = client_with(transport, Arc::new(MemoryTokenStorage::new()));

        let data: Value = client.delete("/equipment/1").await.unwrap();
        assert_eq!(data, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_unparseable_json_success_becomes_empty_object() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, "not json at all");
        let client = client_with(transport, Arc::new(MemoryTokenStorage::new()));

        let data: Value = client.get("/").await.unwrap();
        assert_eq!(data, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported_not_raised() {
        let transport = Arc::new(MockTransport::new());
        transport.push_error(TransportError::Connection("connection refused".to_string()));
        let client = client_with(transport, Arc::new(MemoryTokenStorage::new()));

        let error = client.get::<Value>("/health/").await.unwrap_err();
        assert_eq!(
            error,
            ApiError::Transport {
                message: "connection failed: connection refused".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_bearer_header_present_iff_token_set() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, "{}");
        transport.push_json(200, "{}");
        let client = client_with(transport.clone(), Arc::new(MemoryTokenStorage::new()));

        let _: Value = client.get("/health/").await.unwrap();
        client.set_token(Some("tok123"));
        let _: Value = client.get("/health/").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].header("Authorization"), None);
        assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
        assert_eq!(requests[1].header("Authorization"), Some("Bearer tok123"));
    }

    #[tokio::test]
    async fn test_url_joins_base_and_endpoint() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, "[]");
        let client = ApiClient::new(
            "http://localhost:8000/",
            transport.clone(),
            Arc::new(MemoryTokenStorage::new()),
        );

        let _: Value = client.get("/equipment/?status=available").await.unwrap();
        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:8000/equipment/?status=available"
        );
    }

    #[test]
    fn test_token_round_trip_and_idempotent_clear() {
        let storage = Arc::new(MemoryTokenStorage::new());
        let client = client_with(Arc::new(MockTransport::new()), storage.clone());

        client.set_token(Some("tok123"));
        assert_eq!(client.token().as_deref(), Some("tok123"));
        assert_eq!(storage.current().as_deref(), Some("tok123"));

        client.set_token(None);
        client.set_token(None);
        assert_eq!(client.token(), None);
        assert_eq!(storage.current(), None);
    }

    #[test]
    fn test_token_restored_on_construction() {
        let storage = Arc::new(MemoryTokenStorage::with_token("persisted"));
        let client = client_with(Arc::new(MockTransport::new()), storage);
        assert_eq!(client.token().as_deref(), Some("persisted"));
    }
}
