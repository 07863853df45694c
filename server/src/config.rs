//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::net::config::BackendConfig;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Public settings handed to the browser bundle.
    pub backend: BackendConfig,
    /// Check backend reachability at startup.
    pub probe: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: hosted backend base URL
    /// - `BACKEND_ANON_KEY`: the backend's public API key
    /// - `BACKEND_PROBE`: default true
    ///
    /// A missing backend URL or key is not an error here; the app still
    /// renders, and every sign-in attempt fails until it is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but unparsable.
    pub fn from_env() -> Result<Self, ServerError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ServerError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let backend = BackendConfig::new(
            &std::env::var("BACKEND_URL").unwrap_or_default(),
            &std::env::var("BACKEND_ANON_KEY").unwrap_or_default(),
        );
        let probe = env_bool("BACKEND_PROBE", true);
        Ok(Self { port, backend, probe })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Boolean flag: `1/true/yes/on` and `0/false/no/off`, case-insensitive.
/// Anything else (or unset) yields `default`.
pub(crate) fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key).ok().and_then(|v| parse_bool(&v)).unwrap_or(default)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
