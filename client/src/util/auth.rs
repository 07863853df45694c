//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies identical unauthenticated redirect behavior,
//! and the login page applies the mirror image for visitors who are already
//! signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{AuthStatus, LOGIN_PATH, Session, should_redirect_unauth};

/// Where a successful sign-in lands.
pub const HOME_PATH: &str = "/employee";

/// Redirect to `/login` once per transition into the signed-out state.
///
/// Runs as an effect, so the navigation is a side effect of the session
/// settling and never happens during render.
pub fn install_unauth_redirect<F>(session: ReadSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |previous: Option<AuthStatus>| {
        let status = session.with(Session::status);
        if should_redirect_unauth(previous, status) {
            log::info!("no active session; redirecting to {LOGIN_PATH}");
            navigate(LOGIN_PATH, replace_history());
        }
        status
    });
}

/// Leave the login page once a session is present.
pub fn install_signed_in_redirect<F>(session: ReadSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |previous: Option<AuthStatus>| {
        let status = session.with(Session::status);
        if should_leave_login(previous, status) {
            navigate(HOME_PATH, replace_history());
        }
        status
    });
}

/// True exactly when the gate transitions into `Authenticated`.
#[must_use]
pub fn should_leave_login(previous: Option<AuthStatus>, current: AuthStatus) -> bool {
    current == AuthStatus::Authenticated && previous != Some(AuthStatus::Authenticated)
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
