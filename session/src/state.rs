//! Session value exposed to UI descendants.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

use crate::identity::UserIdentity;

/// Authentication state tracking the current user and loading status.
///
/// Starts as `loading = true, user = None` and settles the first time the
/// provider observes either the initial fetch or an auth-state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<UserIdentity>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl Session {
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        match (self.loading, &self.user) {
            (true, _) => AuthStatus::Loading,
            (false, Some(_)) => AuthStatus::Authenticated,
            (false, None) => AuthStatus::Unauthenticated,
        }
    }
}

/// The three states of the auth gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}
