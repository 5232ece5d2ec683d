//! Client configuration: base URL resolution and request timeout.

use std::time::Duration;

/// Fallback API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "LENDHUB_API_URL";

/// Fixed per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Resolves the base URL: an explicit override wins over the
    /// `LENDHUB_API_URL` environment variable, which wins over the default.
    #[must_use]
    pub fn resolve(override_url: Option<&str>) -> Self {
        Self::resolve_from(override_url, std::env::var(BASE_URL_ENV).ok())
    }

    /// Precedence chain with the environment value passed in, so tests do
    /// not have to mutate process environment.
    fn resolve_from(override_url: Option<&str>, env_url: Option<String>) -> Self {
        let base_url = override_url
            .map(ToOwned::to_owned)
            .or_else(|| env_url.filter(|url| !url.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve_from(None, None)
    }
}
