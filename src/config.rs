//! Server configuration.
//!
//! DESIGN
//! ======
//! Leptos options (site root, pkg dir, default address) come from the
//! cargo-leptos metadata via `get_configuration`. `HOST` and `PORT` override
//! the listen address so the binary can be deployed without rebuilding.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

use leptos::config::{LeptosOptions, get_configuration};

use crate::error::{ConfigError, ServerError};

pub struct ServerConfig {
    pub addr: SocketAddr,
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    /// Load Leptos options and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration cannot be loaded or an
    /// override does not parse.
    pub fn from_env() -> Result<Self, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
        let leptos = conf.leptos_options;
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        let addr = resolve_addr(leptos.site_addr, host.as_deref(), port.as_deref())?;
        Ok(Self { addr, leptos })
    }
}

/// Apply optional host/port overrides to `fallback`. Blank values are ignored.
pub(crate) fn resolve_addr(
    fallback: SocketAddr,
    host: Option<&str>,
    port: Option<&str>,
) -> Result<SocketAddr, ConfigError> {
    let mut addr = fallback;
    if let Some(raw) = host.map(str::trim).filter(|h| !h.is_empty()) {
        let ip: IpAddr = raw.parse().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))?;
        addr.set_ip(ip);
    }
    if let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) {
        let port: u16 = raw.parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?;
        addr.set_port(port);
    }
    Ok(addr)
}
