//! Back-office dashboard host: server-renders the Leptos app and serves its
//! WASM bundle.

mod config;
mod error;
mod probe;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring malformed .env: {e}");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    if !config.backend.is_configured() {
        tracing::warn!("BACKEND_URL / BACKEND_ANON_KEY not set; sign-in will fail until configured");
    }

    let app = routes::app(config.backend.clone())?;
    let addr = config.bind_addr();
    let listener =
        tokio::net::TcpListener::bind(&addr).await.map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    if config.probe {
        let _probe = probe::spawn_probe(config.backend.clone());
    }

    tracing::info!(%addr, "back office listening");
    axum::serve(listener, app).await?;
    Ok(())
}
