//! Browser client for the hosted auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session persisted in
//! `localStorage`. Server-side (SSR): stubs returning
//! [`BackendError::Unavailable`], since a session only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Everything returns `Result<_, BackendError>`; nothing here panics, so a
//! flaky backend degrades the UI instead of breaking hydration. A stored
//! session the backend rejects (401/403) is cleared and reported as "no
//! session" rather than as an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "hosted_auth_test.rs"]
mod hosted_auth_test;

use serde::{Deserialize, Serialize};
use session::{AuthBackend, AuthCallback, AuthChannel, BackendError, SessionFuture, Subscription, UserIdentity};
#[cfg(feature = "hydrate")]
use session::{AuthChange, AuthEvent};

use super::config::BackendConfig;

/// Seconds before `expires_at` at which a stored token counts as expired.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Token grant response from `POST /auth/v1/token`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: UserIdentity,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Session as persisted in `localStorage`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds.
    pub expires_at: i64,
    pub token_type: String,
    pub user: UserIdentity,
}

impl StoredSession {
    #[must_use]
    pub fn from_token(token: TokenResponse, now_secs: i64) -> Self {
        Self {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at: now_secs.saturating_add(token.expires_in),
            token_type: token.token_type,
            user: token.user,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        now_secs >= self.expires_at - EXPIRY_MARGIN_SECS
    }
}

#[must_use]
pub fn password_grant_body(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[must_use]
pub fn refresh_grant_body(refresh_token: &str) -> serde_json::Value {
    serde_json::json!({ "refresh_token": refresh_token })
}

/// `Authorization` header value: the user's token, or the anon key when signed out.
#[must_use]
pub fn bearer_header(access_token: Option<&str>, anon_key: &str) -> String {
    format!("Bearer {}", access_token.unwrap_or(anon_key))
}

/// Hosted auth client; clones share the listener registry.
#[derive(Clone)]
pub struct HostedAuth {
    config: BackendConfig,
    channel: AuthChannel,
}

impl HostedAuth {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config, channel: AuthChannel::new() }
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Access token of the persisted session, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage::load(&self.config.storage_key()).map(|stored| stored.access_token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[must_use]
    pub fn authorization(&self) -> String {
        bearer_header(self.access_token().as_deref(), &self.config.anon_key)
    }

    /// Sign in with e-mail and password, persist the session and notify listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are rejected.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<UserIdentity, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let stored = self.token_grant("password", &password_grant_body(email, password)).await?;
            storage::save(&self.config.storage_key(), &stored);
            log::info!("signed in as {}", stored.user.display_label());
            self.channel.emit(&AuthChange::signed_in(stored.user.clone()));
            Ok(stored.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(BackendError::Unavailable("not available on server"))
        }
    }

    /// Revoke the session server-side (best effort), forget it locally and notify listeners.
    pub async fn sign_out(&self) {
        #[cfg(feature = "hydrate")]
        {
            let key = self.config.storage_key();
            if let Some(stored) = storage::load(&key) {
                let result = gloo_net::http::Request::post(&self.config.auth_url("logout"))
                    .header("apikey", &self.config.anon_key)
                    .header("Authorization", &bearer_header(Some(&stored.access_token), &self.config.anon_key))
                    .send()
                    .await;
                if let Err(e) = result {
                    log::warn!("logout request failed, clearing local session anyway: {e}");
                }
            }
            storage::clear(&key);
            log::info!("signed out");
            self.channel.emit(&AuthChange::signed_out());
        }
    }

    #[cfg(feature = "hydrate")]
    async fn token_grant(&self, grant_type: &str, body: &serde_json::Value) -> Result<StoredSession, BackendError> {
        let resp = gloo_net::http::Request::post(&self.config.auth_url("token"))
            .query([("grant_type", grant_type)])
            .header("apikey", &self.config.anon_key)
            .json(body)
            .map_err(|e| BackendError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(BackendError::Status(resp.status()));
        }
        let token: TokenResponse = resp.json().await.map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(StoredSession::from_token(token, storage::now_secs()))
    }

    #[cfg(feature = "hydrate")]
    async fn fetch_user(&self, access_token: &str) -> Result<UserIdentity, BackendError> {
        let resp = gloo_net::http::Request::get(&self.config.auth_url("user"))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &bearer_header(Some(access_token), &self.config.anon_key))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(BackendError::Status(resp.status()));
        }
        resp.json::<UserIdentity>().await.map_err(|e| BackendError::Decode(e.to_string()))
    }

    /// Forget the stored tokens and broadcast `SIGNED_OUT`.
    ///
    /// A refresh earlier in the same restore has already been broadcast, and
    /// the provider ignores the initial fetch once any change was applied.
    #[cfg(feature = "hydrate")]
    fn discard_stored(&self, key: &str) {
        storage::clear(key);
        self.channel.emit(&AuthChange::signed_out());
    }

    /// Load the persisted session, refreshing an expired token and confirming
    /// the user with the backend.
    async fn restore_session(&self) -> Result<Option<UserIdentity>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let key = self.config.storage_key();
            let Some(mut stored) = storage::load(&key) else {
                return Ok(None);
            };

            if stored.is_expired(storage::now_secs()) {
                match self.token_grant("refresh_token", &refresh_grant_body(&stored.refresh_token)).await {
                    Ok(fresh) => {
                        storage::save(&key, &fresh);
                        self.channel.emit(&AuthChange::new(AuthEvent::TokenRefreshed, Some(fresh.user.clone())));
                        stored = fresh;
                    }
                    Err(BackendError::Status(status)) => {
                        log::info!("stored session refresh rejected ({status}); clearing");
                        self.discard_stored(&key);
                        return Ok(None);
                    }
                    Err(e) => return Err(e),
                }
            }

            match self.fetch_user(&stored.access_token).await {
                Ok(user) => Ok(Some(user)),
                Err(BackendError::Status(status @ (401 | 403))) => {
                    log::info!("stored session rejected ({status}); clearing");
                    self.discard_stored(&key);
                    Ok(None)
                }
                Err(e) => Err(e),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(BackendError::Unavailable("not available on server"))
        }
    }
}

impl AuthBackend for HostedAuth {
    fn get_session(&self) -> SessionFuture {
        let auth = self.clone();
        Box::pin(async move { auth.restore_session().await })
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Result<Subscription, BackendError> {
        Ok(self.channel.subscribe(callback))
    }
}

#[cfg(feature = "hydrate")]
mod storage {
    use super::StoredSession;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub(super) fn load(key: &str) -> Option<StoredSession> {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    pub(super) fn save(key: &str, session: &StoredSession) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Ok(raw) = serde_json::to_string(session) {
            let _ = storage.set_item(key, &raw);
        }
    }

    pub(super) fn clear(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn now_secs() -> i64 {
        (js_sys::Date::now() / 1000.0) as i64
    }
}
