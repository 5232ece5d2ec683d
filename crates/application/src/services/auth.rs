//! Authentication service for the `/auth` resource.
//!
//! The one service with side effects: register, login and refresh store
//! the newly issued token on success; logout always clears it; account
//! deletion clears it on success only.

use std::sync::Arc;

use serde_json::Value;

use lendhub_domain::{AuthSession, PasswordChange, User, UserCreate, UserLogin};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::services::query_encode;

/// Typed access to the `/auth` endpoints plus token lifecycle handling.
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    /// Creates the service over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /auth/register` — creates an account and stores the issued
    /// token on success.
    ///
    /// # Errors
    ///
    /// Forwards the client error; the token is left untouched on failure.
    pub async fn register(&self, user: &UserCreate) -> ApiResult<AuthSession> {
        let session: AuthSession = self.client.post("/auth/register", user).await?;
        self.client.set_token(Some(&session.access_token));
        Ok(session)
    }

    /// `POST /auth/login` — authenticates and stores the issued token on
    /// success.
    ///
    /// # Errors
    ///
    /// Forwards the client error; the token is left untouched on failure.
    pub async fn login(&self, credentials: &UserLogin) -> ApiResult<AuthSession> {
        let session: AuthSession = self.client.post("/auth/login", credentials).await?;
        self.client.set_token(Some(&session.access_token));
        Ok(session)
    }

    /// `POST /auth/logout` — notifies the server, then clears the local
    /// token regardless of the server's answer.
    ///
    /// # Errors
    ///
    /// Forwards the client error. The token is cleared even then.
    pub async fn logout(&self) -> ApiResult<Value> {
        let result = self.client.post_empty("/auth/logout").await;
        self.client.set_token(None);
        result
    }

    /// `GET /auth/me` — fetches the account behind the current token.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn current_user(&self) -> ApiResult<User> {
        self.client.get("/auth/me").await
    }

    /// `PUT /auth/change-password`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn change_password(&self, change: &PasswordChange) -> ApiResult<Value> {
        self.client.put("/auth/change-password", change).await
    }

    /// `DELETE /auth/me` — deletes the account; clears the token only when
    /// the server confirmed the deletion.
    ///
    /// # Errors
    ///
    /// Forwards the client error; the token is kept on failure.
    pub async fn delete_account(&self) -> ApiResult<Value> {
        let result = self.client.delete("/auth/me").await;
        if result.is_ok() {
            self.client.set_token(None);
        }
        result
    }

    /// `POST /auth/refresh?refresh_token=` — exchanges a refresh token and
    /// stores the newly issued access token on success.
    ///
    /// # Errors
    ///
    /// Forwards the client error; the token is left untouched on failure.
    pub async fn refresh_token(&self, refresh_token: &str) -> ApiResult<AuthSession> {
        let endpoint = format!("/auth/refresh?refresh_token={}", query_encode(refresh_token));
        let session: AuthSession = self.client.post_empty(&endpoint).await?;
        self.client.set_token(Some(&session.access_token));
        Ok(session)
    }

    /// `POST /auth/confirm-email?token=`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn confirm_email(&self, token: &str) -> ApiResult<Value> {
        let endpoint = format!("/auth/confirm-email?token={}", query_encode(token));
        self.client.post_empty(&endpoint).await
    }

    /// `POST /auth/resend-confirmation?email=`.
    ///
    /// # Errors
    ///
    /// Forwards the client error.
    pub async fn resend_confirmation(&self, email: &str) -> ApiResult<Value> {
        let endpoint = format!("/auth/resend-confirmation?email={}", query_encode(email));
        self.client.post_empty(&endpoint).await
    }

    /// Pure predicate: a token is present. Says nothing about its validity.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.client.token().is_some()
    }
}
