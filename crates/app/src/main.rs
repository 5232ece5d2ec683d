//! Lendhub client - Main Entry Point
//!
//! Composition root: resolves configuration, wires the transport and token
//! storage into the API client, and restores any persisted session before
//! reporting server and authentication status.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lendhub_application::{ApiClient, AuthStore, HealthService};
use lendhub_infrastructure::{ClientConfig, FileTokenStorage, ReqwestTransport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::resolve(None);
    tracing::info!(
        base_url = %config.base_url,
        "starting lendhub client v{}",
        env!("CARGO_PKG_VERSION")
    );

    let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
    let token_path =
        FileTokenStorage::default_path().unwrap_or_else(|| PathBuf::from(".lendhub-token"));
    let storage = Arc::new(FileTokenStorage::new(token_path));
    let client = Arc::new(ApiClient::new(&config.base_url, transport, storage));

    let health = HealthService::new(client.clone());
    match health.health().await {
        Ok(status) => tracing::info!(%status, "server healthy"),
        Err(error) => tracing::warn!(%error, "health check failed"),
    }
    match health.api_info().await {
        Ok(info) => tracing::info!(%info, "api info"),
        Err(error) => tracing::warn!(%error, "api info unavailable"),
    }

    let store = AuthStore::new(client);
    store.init().await;
    let state = store.snapshot();
    if let Some(user) = state.user {
        tracing::info!(email = %user.email, "session restored");
    } else {
        tracing::info!("no active session");
    }

    Ok(())
}
