//! Public backend settings: project URL and anonymous API key.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server reads both values from its environment and embeds them into the
//! SSR shell; the browser reads them back from the `<meta>` tags. Missing
//! values are not rejected here: calls against an unconfigured backend fail
//! downstream with a request error.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// `<meta name=...>` carrying the backend project URL.
pub const URL_META: &str = "backend-url";
/// `<meta name=...>` carrying the public anonymous key.
pub const ANON_KEY_META: &str = "backend-anon-key";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, without trailing slash.
    pub url: String,
    /// Public anonymous key, sent as the `apikey` header.
    pub anon_key: String,
}

impl BackendConfig {
    #[must_use]
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self { url: url.trim().trim_end_matches('/').to_owned(), anon_key: anon_key.trim().to_owned() }
    }

    /// Settings for the current rendering environment.
    ///
    /// Browser: the shell's `<meta>` tags. Server: the config the router put
    /// into context, or empty settings when there is none.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::from_document()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::prelude::use_context::<Self>().unwrap_or_default()
        }
    }

    #[cfg(feature = "hydrate")]
    fn from_document() -> Self {
        let read = |name: &str| -> String {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
                .unwrap_or_default()
        };
        let config = Self::new(&read(URL_META), &read(ANON_KEY_META));
        if !config.is_configured() {
            log::warn!("backend url or anon key missing from page; backend calls will fail");
        }
        config
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Auth endpoint, e.g. `auth_url("token")` -> `{url}/auth/v1/token`.
    #[must_use]
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }

    /// REST endpoint for a table.
    #[must_use]
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table.trim_start_matches('/'))
    }

    /// Project reference: the first DNS label of the project host.
    #[must_use]
    pub fn project_ref(&self) -> &str {
        let without_scheme = self.url.split_once("://").map_or(self.url.as_str(), |(_, rest)| rest);
        let host = without_scheme.split(['/', ':']).next().unwrap_or_default();
        host.split('.').next().unwrap_or_default()
    }

    /// `localStorage` key the persisted session lives under.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }
}
