//! Reactive authentication state.
//!
//! [`AuthStore`] is the only writer of [`AuthState`]; UI code reads a
//! [`AuthStore::snapshot`] or watches a [`AuthStore::subscribe`] receiver.
//! State is derived, never authoritative: every action recomputes it from
//! the outcome of the latest auth call.
//!
//! The person profile is an optional enrichment. Fetching it may fail
//! without failing login, registration or session restore; the `person`
//! field simply stays `None`.

use std::sync::Arc;

use tokio::sync::watch;

use lendhub_domain::{Person, User, UserCreate, UserLogin};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::services::{AuthService, PersonService};

/// Snapshot of the current authentication state.
///
/// Invariant: `is_authenticated` holds exactly when both `token` and
/// `user` are set. The default value is the unauthenticated state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    /// The authenticated account, if any.
    pub user: Option<User>,
    /// The account's person profile, when the enrichment fetch succeeded.
    pub person: Option<Person>,
    /// The bearer token backing the session.
    pub token: Option<String>,
    /// Whether a session is established.
    pub is_authenticated: bool,
}

impl AuthState {
    /// Builds the authenticated state for `user` under `token`.
    #[must_use]
    pub fn authenticated(user: User, person: Option<Person>, token: String) -> Self {
        Self {
            user: Some(user),
            person,
            token: Some(token),
            is_authenticated: true,
        }
    }
}

/// Reactive container for the authentication state, with action methods as
/// its only mutators.
pub struct AuthStore {
    client: Arc<ApiClient>,
    auth: AuthService,
    person: PersonService,
    state: watch::Sender<AuthState>,
}

impl AuthStore {
    /// Creates the store over a shared client, starting unauthenticated.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            auth: AuthService::new(client.clone()),
            person: PersonService::new(client.clone()),
            client,
            state,
        }
    }

    /// Returns the current state without subscribing.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes. The receiver immediately holds the
    /// current state; dropping it unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Restores the session persisted by an earlier run.
    ///
    /// With no stored token this is a no-op. Otherwise the token is
    /// re-validated against `/auth/me`: success establishes the session
    /// (profile enrichment best-effort); any failure, transport failures
    /// included, counts as an invalid session and clears token and state.
    pub async fn init(&self) {
        let Some(token) = self.client.token() else {
            return;
        };
        match self.auth.current_user().await {
            Ok(user) => {
                let person = self.fetch_profile().await;
                self.state
                    .send_replace(AuthState::authenticated(user, person, token));
            }
            Err(error) => {
                tracing::warn!(%error, "stored session no longer valid, clearing token");
                self.client.set_token(None);
                self.state.send_replace(AuthState::default());
            }
        }
    }

    /// Logs in and publishes the authenticated state.
    ///
    /// The token side effect happens in the auth service before the profile
    /// enrichment is fetched, so the enrichment request is already
    /// authenticated.
    ///
    /// # Errors
    ///
    /// Forwards the client error; the state is left unchanged on failure.
    pub async fn login(&self, credentials: &UserLogin) -> ApiResult<()> {
        let session = self.auth.login(credentials).await?;
        let person = self.fetch_profile().await;
        self.state.send_replace(AuthState::authenticated(
            session.user,
            person,
            session.access_token,
        ));
        Ok(())
    }

    /// Registers a new account and publishes the authenticated state.
    ///
    /// # Errors
    ///
    /// Forwards the client error; the state is left unchanged on failure.
    pub async fn register(&self, user: &UserCreate) -> ApiResult<()> {
        let session = self.auth.register(user).await?;
        let person = self.fetch_profile().await;
        self.state.send_replace(AuthState::authenticated(
            session.user,
            person,
            session.access_token,
        ));
        Ok(())
    }

    /// Ends the session: notifies the server, clears the token and resets
    /// to the unauthenticated state. A failing server call does not keep
    /// the session alive locally.
    pub async fn logout(&self) {
        if let Err(error) = self.auth.logout().await {
            tracing::debug!(%error, "server logout failed, clearing local session anyway");
        }
        self.state.send_replace(AuthState::default());
    }

    /// Deletes the account and resets to the unauthenticated state.
    ///
    /// # Errors
    ///
    /// Forwards the client error; the state is left unchanged on failure.
    pub async fn delete_account(&self) -> ApiResult<()> {
        self.auth.delete_account().await?;
        self.state.send_replace(AuthState::default());
        Ok(())
    }

    /// Refreshes only the `person` field, leaving user and token untouched.
    /// Silently a no-op when the fetch fails.
    pub async fn refresh_person_profile(&self) {
        if let Some(person) = self.fetch_profile().await {
            self.state.send_modify(|state| state.person = Some(person));
        }
    }

    /// Best-effort profile fetch; `None` on any failure.
    async fn fetch_profile(&self) -> Option<Person> {
        tracing::debug!("fetching person profile");
        match self.person.my_profile().await {
            Ok(person) => Some(person),
            Err(error) => {
                tracing::debug!(%error, "person profile unavailable");
                None
            }
        }
    }
}
