//! Seam to the hosted auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard never authenticates anyone itself. It asks the backend for the
//! current session once and then listens for auth-state changes. Both calls go
//! through [`AuthBackend`] so the provider can be driven by the real hosted
//! client in the browser and by in-memory doubles in tests.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::fmt;
use std::sync::Arc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::identity::UserIdentity;

/// Error surfaced by backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// Transport failure before any response arrived.
    #[error("request failed: {0}")]
    Request(String),
    /// Backend answered with a non-success status.
    #[error("backend responded with status {0}")]
    Status(u16),
    /// Response body did not match the expected shape.
    #[error("invalid response payload: {0}")]
    Decode(String),
    /// The call is meaningless in this environment (e.g. during SSR).
    #[error("backend unavailable: {0}")]
    Unavailable(&'static str),
}

/// Kind of auth-state change, using the hosted provider's wire names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    PasswordRecovery,
}

impl AuthEvent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialSession => "INITIAL_SESSION",
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
            Self::UserUpdated => "USER_UPDATED",
            Self::PasswordRecovery => "PASSWORD_RECOVERY",
        }
    }
}

impl fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One auth-state-change notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthChange {
    pub event: AuthEvent,
    /// User after the change; `None` after sign-out.
    pub user: Option<UserIdentity>,
}

impl AuthChange {
    #[must_use]
    pub fn new(event: AuthEvent, user: Option<UserIdentity>) -> Self {
        Self { event, user }
    }

    #[must_use]
    pub fn signed_in(user: UserIdentity) -> Self {
        Self::new(AuthEvent::SignedIn, Some(user))
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::new(AuthEvent::SignedOut, None)
    }
}

/// Listener invoked for every auth-state change.
pub type AuthCallback = Arc<dyn Fn(AuthChange) + Send + Sync>;

/// Future returned by [`AuthBackend::get_session`].
///
/// Local (non-`Send`) because browser fetch futures are tied to the JS event loop.
pub type SessionFuture = LocalBoxFuture<'static, Result<Option<UserIdentity>, BackendError>>;

/// Auth/session surface of the hosted backend.
pub trait AuthBackend {
    /// Fetch the currently persisted session, if any.
    fn get_session(&self) -> SessionFuture;

    /// Register a standing listener for auth-state changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot accept listeners.
    fn on_auth_state_change(&self, callback: AuthCallback) -> Result<Subscription, BackendError>;
}

/// Scoped handle to an auth-state subscription.
///
/// Cancels on [`Subscription::unsubscribe`] or on drop, whichever comes
/// first; the cancel hook runs at most once.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
