//! Startup and serve failures returned from `main`.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `PORT` is set but is not a port number.
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// `[workspace.metadata.leptos]` could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
