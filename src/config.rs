use anyhow::{Context, Result, anyhow};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3/search";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9996";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub bind_addr: SocketAddr,
    /// `None` means requests to the search API never time out.
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get_env(&lookup, "YOUTUBE_API_KEY")?;
        let api_url = get_env_or_default(&lookup, "YOUTUBE_API_URL", DEFAULT_API_URL);
        let bind_addr = get_env_or_default(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .context("BIND_ADDR is not a valid socket address")?;
        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => Some(Duration::from_secs(
                secs.trim()
                    .parse()
                    .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            None => None,
        };

        Ok(Config {
            api_key,
            api_url,
            bind_addr,
            upstream_timeout,
        })
    }
}

fn get_env<F>(lookup: F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| anyhow!("Missing required environment variable: {key}"))
}

fn get_env_or_default<F>(lookup: F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}
