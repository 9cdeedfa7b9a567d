// src/config.rs

use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const PORT_VAR: &str = "PORT";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Cloud Run default.
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key → value source; unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut cfg = Self::default();

        if let Some(port) = get(PORT_VAR) {
            cfg.port = port
                .parse()
                .with_context(|| format!("{} must be a port number, got {:?}", PORT_VAR, port))?;
        }
        if let Some(addr) = get(BIND_ADDR_VAR) {
            cfg.bind_addr = addr
                .parse()
                .with_context(|| format!("{} must be an IP address, got {:?}", BIND_ADDR_VAR, addr))?;
        }
        if let Some(level) = get(LOG_LEVEL_VAR) {
            cfg.log_level = level;
        }

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
