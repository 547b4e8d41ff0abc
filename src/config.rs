use std::net::SocketAddr;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = env_string("PORT", "3000")
            .parse::<u16>()
            .context("PORT must be a valid TCP port number")?;

        Ok(Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
