//! Startup reachability check against the hosted backend.
//!
//! DESIGN
//! ======
//! The probe is advisory: it runs in the background after the listener is up,
//! logs what it found, and never fails startup. The dashboard keeps rendering
//! when the backend is down; sign-in just fails until it comes back.

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

use std::time::Duration;

use client::net::config::BackendConfig;

pub const PROBE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Nothing to probe.
    Skipped(&'static str),
    Reachable,
    /// The backend answered with a non-success status.
    Unhealthy(u16),
    /// No response at all.
    Unreachable(String),
}

#[must_use]
pub fn health_url(config: &BackendConfig) -> String {
    config.auth_url("health")
}

#[must_use]
pub fn classify_status(status: u16) -> ProbeOutcome {
    if (200..300).contains(&status) { ProbeOutcome::Reachable } else { ProbeOutcome::Unhealthy(status) }
}

/// `GET {url}/auth/v1/health` with the anon key.
pub async fn probe(config: &BackendConfig) -> ProbeOutcome {
    if !config.is_configured() {
        return ProbeOutcome::Skipped("BACKEND_URL or BACKEND_ANON_KEY not set");
    }
    let http = match reqwest::Client::builder()
        .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
        .build()
    {
        Ok(http) => http,
        Err(e) => return ProbeOutcome::Unreachable(e.to_string()),
    };
    match http.get(health_url(config)).header("apikey", &config.anon_key).send().await {
        Ok(resp) => classify_status(resp.status().as_u16()),
        Err(e) => ProbeOutcome::Unreachable(e.to_string()),
    }
}

pub fn log_outcome(config: &BackendConfig, outcome: &ProbeOutcome) {
    match outcome {
        ProbeOutcome::Skipped(reason) => tracing::warn!(reason, "backend probe skipped"),
        ProbeOutcome::Reachable => tracing::info!(url = %config.url, "backend reachable"),
        ProbeOutcome::Unhealthy(status) => {
            tracing::warn!(url = %config.url, status, "backend health check returned an error status");
        }
        ProbeOutcome::Unreachable(error) => tracing::warn!(url = %config.url, %error, "backend unreachable"),
    }
}

/// Probe in the background and log the outcome.
pub fn spawn_probe(config: BackendConfig) -> tokio::task::JoinHandle<ProbeOutcome> {
    tokio::spawn(async move {
        let outcome = probe(&config).await;
        log_outcome(&config, &outcome);
        outcome
    })
}
