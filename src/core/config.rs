//! Environment configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Context, Result};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const DEFAULT_XMTP_ENV: &str = "dev";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Backend and logging settings. None of these are required.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_url: String,
    pub api_timeout: Duration,
    pub log_level: String,
}

impl ApiSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_timeout = match lookup("API_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("API_TIMEOUT_MS must be a number of milliseconds, got '{raw}'"))?,
            ),
            None => DEFAULT_API_TIMEOUT,
        };

        Ok(ApiSettings {
            api_url: lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_timeout,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

/// Full agent configuration. Requires `XMTP_WALLET_KEY`.
#[derive(Clone)]
pub struct Config {
    /// Hex private key the agent's address is derived from
    pub wallet_key: String,
    pub xmtp_env: String,
    pub api_url: String,
    pub api_timeout: Duration,
    pub log_level: String,
}

impl Config {
    /// Load configuration from process environment (call `dotenvy::dotenv()` first)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let wallet_key = lookup("XMTP_WALLET_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("XMTP_WALLET_KEY environment variable is required"))?;

        let api = ApiSettings::from_lookup(&lookup)?;

        Ok(Config {
            wallet_key,
            xmtp_env: lookup("XMTP_ENV").unwrap_or_else(|| DEFAULT_XMTP_ENV.to_string()),
            api_url: api.api_url,
            api_timeout: api.api_timeout,
            log_level: api.log_level,
        })
    }
}

// Keep the wallet key out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("wallet_key", &"<redacted>")
            .field("xmtp_env", &self.xmtp_env)
            .field("api_url", &self.api_url)
            .field("api_timeout", &self.api_timeout)
            .field("log_level", &self.log_level)
            .finish()
    }
}
