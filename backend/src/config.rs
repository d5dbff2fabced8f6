//! Server configuration from the environment
//!
//! `.env` is loaded by `main` through `dotenv` before this runs.

use anyhow::Context;
use std::net::SocketAddr;

/// Variable holding the bind address
pub const ADDR_VAR: &str = "CHESS_API_ADDR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var(ADDR_VAR).ok();
        Self::from_addr(raw.as_deref())
    }

    /// Parse an optional address, falling back to [`DEFAULT_ADDR`]
    pub fn from_addr(raw: Option<&str>) -> anyhow::Result<Self> {
        let raw = raw.unwrap_or(DEFAULT_ADDR);
        let addr = raw
            .parse()
            .with_context(|| format!("{ADDR_VAR}={raw:?} is not a socket address"))?;
        Ok(Self { addr })
    }
}
