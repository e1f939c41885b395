//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `BIND_HOST`: IP address to bind; default `0.0.0.0`
//! - `PORT`: TCP port; default `3000`

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    /// `BIND_HOST` is set but is not an IP address.
    #[error("invalid BIND_HOST {value:?}: {reason}")]
    InvalidHost { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from `BIND_HOST` / `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("BIND_HOST").ok();
        let port = std::env::var("PORT").ok();
        Self::from_values(host.as_deref(), port.as_deref())
    }

    /// Parse raw values. Blank values count as unset.
    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = match non_blank(host) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::InvalidHost { value: raw.to_owned(), reason: e.to_string() })?,
            None => DEFAULT_BIND_HOST,
        };
        let port = match non_blank(port) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort { value: raw.to_owned(), reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
