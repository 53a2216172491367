use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the listings backend, e.g. "http://localhost:5000"
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// None means requests to the backend never time out.
    pub api_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("PROPERTY_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?;

        let max_workers = match lookup("MAX_WORKERS") {
            Some(v) => v.parse().context("MAX_WORKERS must be a positive integer")?,
            None => DEFAULT_MAX_WORKERS,
        };

        let api_timeout = match lookup("API_TIMEOUT_SECS") {
            Some(v) => Some(Duration::from_secs(
                v.parse().context("API_TIMEOUT_SECS must be a number of seconds")?,
            )),
            None => None,
        };

        Ok(Self {
            api_base_url,
            bind_addr,
            max_workers,
            api_timeout,
        })
    }
}
