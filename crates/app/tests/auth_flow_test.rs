//! End-to-end client flows through the real wiring: API client, services
//! and auth store composed the way `main` composes them, with the scripted
//! transport standing in for the network and the file-backed token store
//! standing in for the browser's localStorage.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use lendhub_application::testutil::MockTransport;
use lendhub_application::{ApiClient, AuthState, AuthStore, EquipmentService};
use lendhub_domain::UserLogin;
use lendhub_infrastructure::FileTokenStorage;

const SESSION_BODY: &str =
    r#"{"user":{"id":"1","email":"a@b.com"},"access_token":"tok123","token_type":"bearer"}"#;
const USER_BODY: &str = r#"{"id":"1","email":"a@b.com"}"#;
const PERSON_BODY: &str =
    r#"{"id":7,"user_id":"1","name":"Alice","role":"user","company":"Acme"}"#;

fn credentials() -> UserLogin {
    UserLogin {
        email: "a@b.com".to_string(),
        password: "pw".to_string(),
    }
}

#[tokio::test]
async fn test_login_persists_token_to_disk_and_logout_removes_it() {
    let dir = tempdir().unwrap();
    let token_path = dir.path().join("token");
    let transport = Arc::new(MockTransport::new());
    let client = Arc::new(ApiClient::new(
        "http://localhost:8000",
        transport.clone(),
        Arc::new(FileTokenStorage::new(&token_path)),
    ));
    let store = AuthStore::new(client.clone());

    transport.push_json(200, SESSION_BODY);
    transport.push_json(200, PERSON_BODY);
    store.login(&credentials()).await.unwrap();

    assert!(store.snapshot().is_authenticated);
    assert_eq!(std::fs::read_to_string(&token_path).unwrap(), "tok123");

    transport.push_json(200, "{}");
    store.logout().await;

    assert_eq!(store.snapshot(), AuthState::default());
    assert_eq!(client.token(), None);
    assert!(!token_path.exists());
}

#[tokio::test]
async fn test_session_restore_across_client_instances() {
    let dir = tempdir().unwrap();
    let token_path = dir.path().join("token");

    // First run: log in, which persists the token.
    {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, SESSION_BODY);
        transport.push_json(200, PERSON_BODY);
        let client = Arc::new(ApiClient::new(
            "http://localhost:8000",
            transport,
            Arc::new(FileTokenStorage::new(&token_path)),
        ));
        AuthStore::new(client).login(&credentials()).await.unwrap();
    }

    // Second run: a fresh client picks the token up from disk and init()
    // re-validates it against /auth/me.
    let transport = Arc::new(MockTransport::new());
    transport.push_json(200, USER_BODY);
    transport.push_json(200, PERSON_BODY);
    let client = Arc::new(ApiClient::new(
        "http://localhost:8000",
        transport.clone(),
        Arc::new(FileTokenStorage::new(&token_path)),
    ));
    let store = AuthStore::new(client);
    store.init().await;

    let state = store.snapshot();
    assert!(state.is_authenticated);
    assert_eq!(state.token.as_deref(), Some("tok123"));
    assert_eq!(
        transport.requests()[0].header("Authorization"),
        Some("Bearer tok123")
    );
}

#[tokio::test]
async fn test_rejected_restore_clears_the_persisted_token() {
    let dir = tempdir().unwrap();
    let token_path = dir.path().join("token");
    std::fs::write(&token_path, "expired").unwrap();

    let transport = Arc::new(MockTransport::new());
    transport.push_json(401, r#"{"detail":"token expired"}"#);
    let client = Arc::new(ApiClient::new(
        "http://localhost:8000",
        transport,
        Arc::new(FileTokenStorage::new(&token_path)),
    ));
    let store = AuthStore::new(client.clone());
    store.init().await;

    assert_eq!(store.snapshot(), AuthState::default());
    assert_eq!(client.token(), None);
    assert!(!token_path.exists());
}

#[tokio::test]
async fn test_authenticated_equipment_listing_after_login() {
    let dir = tempdir().unwrap();
    let transport = Arc::new(MockTransport::new());
    let client = Arc::new(ApiClient::new(
        "http://localhost:8000",
        transport.clone(),
        Arc::new(FileTokenStorage::new(dir.path().join("token"))),
    ));
    let store = AuthStore::new(client.clone());
    let equipment = EquipmentService::new(client);

    transport.push_json(200, SESSION_BODY);
    transport.push_json(200, PERSON_BODY);
    store.login(&credentials()).await.unwrap();

    transport.push_json(
        200,
        r#"[{"id":1,"barcode":42,"type":"drill","name":"Drill","description":"",
             "service_interval_days":180,"status":"available","amount":1}]"#,
    );
    let available = equipment.available().await.unwrap();
    assert_eq!(available.len(), 1);

    let listing = transport.requests().last().unwrap().clone();
    assert_eq!(listing.url, "http://localhost:8000/equipment/?status=available");
    assert_eq!(listing.header("Authorization"), Some("Bearer tok123"));
}
