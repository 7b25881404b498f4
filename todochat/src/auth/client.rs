//! Signup, signin and signout against the backend auth API.

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use crate::models::Session;
use crate::store::SessionStore;

/// Timeout applied to every auth request.
const AUTH_TIMEOUT: Duration = Duration::from_secs(10);

/// Shape of a successful signup/signin response. Extra user fields from
/// the backend are ignored.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    email: String,
}

/// Client for the signup/signin/signout endpoints.
///
/// Failures collapse to a single human-readable message: an auth failure is
/// terminal for the attempt and needs new user input, so there is nothing
/// for the caller to branch on.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client. `/api/v1` is appended to the base URL unless the
    /// caller already included it.
    pub fn new(base_url: &str) -> Self {
        let base_url = if base_url.contains("/api/v1") {
            base_url.to_string()
        } else {
            format!("{base_url}/api/v1")
        };
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Register a new account and sign in.
    pub async fn sign_up(
        &self,
        store: &mut dyn SessionStore,
        email: &str,
        password: &str,
    ) -> Result<Session> {
        self.authenticate(store, "/auth/signup", email, password, "Signup failed")
            .await
    }

    /// Sign in to an existing account.
    pub async fn sign_in(
        &self,
        store: &mut dyn SessionStore,
        email: &str,
        password: &str,
    ) -> Result<Session> {
        self.authenticate(store, "/auth/signin", email, password, "Sign in failed")
            .await
    }

    async fn authenticate(
        &self,
        store: &mut dyn SessionStore,
        path: &str,
        email: &str,
        password: &str,
        fallback: &str,
    ) -> Result<Session> {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .timeout(AUTH_TIMEOUT)
            .send()
            .await
            .map_err(|err| {
                tracing::debug!("auth request failed: {err}");
                anyhow!("{fallback}")
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = detail_message(&body).unwrap_or_else(|| fallback.to_string());
            bail!(message);
        }

        let auth: AuthResponse = resp
            .json()
            .await
            .with_context(|| format!("{fallback}: invalid response"))?;
        let session = Session::new(auth.user.id, auth.user.email, auth.token);
        store
            .set_session(&session)
            .context("Failed to persist session")?;
        Ok(session)
    }

    /// Revoke the current token (best effort) and clear the local session.
    ///
    /// A failed revocation never stops the local sign-out: the client must
    /// not keep looking authenticated after the user asked to leave.
    pub async fn sign_out(&self, store: &mut dyn SessionStore) -> Result<()> {
        if let Some(token) = store.token() {
            let url = format!("{}/auth/logout", self.base_url);
            let result = self
                .http
                .post(&url)
                .bearer_auth(token)
                .timeout(AUTH_TIMEOUT)
                .send()
                .await;
            match result {
                Ok(resp) if !resp.status().is_success() => {
                    tracing::warn!("logout revocation returned {}", resp.status());
                }
                Err(err) => {
                    tracing::warn!("logout revocation failed: {err}");
                }
                Ok(_) => {}
            }
        }
        store.clear_session().context("Failed to clear session")?;
        Ok(())
    }
}

/// `detail` field of an auth error body, if the body is JSON.
fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
