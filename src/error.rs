//! Server startup and runtime errors.

use std::net::SocketAddr;

/// Invalid `HOST`/`PORT` overrides.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {0:?}")]
    InvalidHost(String),
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
