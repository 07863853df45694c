//! Route-guard decisions.
//!
//! Rendering and navigation are decided separately: [`GuardView`] is a pure
//! function of the current session, while [`should_redirect_unauth`] is an
//! edge detector meant to run inside a reactive effect so the redirect is a
//! side effect of a transition and never part of the render path.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::{AuthStatus, Session};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// What a guarded route renders for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Session not settled yet.
    Placeholder,
    /// Authenticated; render the protected children.
    Children,
    /// Unauthenticated; nothing while the redirect is in flight.
    Blank,
}

impl GuardView {
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        Self::for_status(session.status())
    }

    #[must_use]
    pub fn for_status(status: AuthStatus) -> Self {
        match status {
            AuthStatus::Loading => Self::Placeholder,
            AuthStatus::Authenticated => Self::Children,
            AuthStatus::Unauthenticated => Self::Blank,
        }
    }
}

/// True exactly when the gate transitions into `Unauthenticated`.
///
/// `previous` is `None` on the first observation, so a visitor who lands on a
/// guarded route already signed out is redirected once as well.
#[must_use]
pub fn should_redirect_unauth(previous: Option<AuthStatus>, current: AuthStatus) -> bool {
    current == AuthStatus::Unauthenticated && previous != Some(AuthStatus::Unauthenticated)
}
