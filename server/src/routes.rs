//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered Leptos app, its static bundle
//! under `/pkg`, and two small JSON/health endpoints. The public backend
//! settings are put into the Leptos context on every render so the shell can
//! embed them for the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use client::net::config::BackendConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Non-Leptos endpoints.
pub fn api_routes(backend: BackendConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/config", get(api_config))
        .with_state(backend)
}

/// API routes + Leptos SSR + the `/pkg` bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(backend: BackendConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let backend = backend.clone();
                move || provide_context(backend.clone())
            },
            {
                let opts = leptos_options.clone();
                let backend = backend.clone();
                move || client::app::shell(opts.clone(), backend.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(backend)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// The same public settings the shell embeds, for tooling and debugging.
async fn api_config(State(backend): State<BackendConfig>) -> Json<BackendConfig> {
    Json(backend)
}
