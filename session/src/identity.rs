//! Opaque user identity issued by the hosted auth backend.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier plus claims exactly as the backend issued them.
///
/// Treated as a value: the client never validates or rewrites claims.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Backend user identifier.
    pub id: String,
    /// Every other field of the backend user object.
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

impl UserIdentity {
    /// Identity with no claims.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), claims: Map::new() }
    }

    /// Raw claim lookup.
    #[must_use]
    pub fn claim(&self, key: &str) -> Option<&Value> {
        self.claims.get(key)
    }

    /// Best label for display: the `email` claim, falling back to the id.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.claim("email")
            .and_then(Value::as_str)
            .filter(|email| !email.is_empty())
            .unwrap_or(&self.id)
    }
}
