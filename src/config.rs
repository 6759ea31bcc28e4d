use std::time::Duration;

use crate::error::{JupiterError, Result};

pub const DEFAULT_URL: &str = "https://api.jup.ag";

pub const API_KEY_HEADER: &str = "x-api-key";

/// Default spacing between admitted calls.
pub const RATE_LIMIT_MILLISECONDS: u64 = 120;

pub const ENV_API_URL: &str = "JUPITER_API_URL";
pub const ENV_API_KEY: &str = "JUPITER_API_KEY";
pub const ENV_RATE_LIMIT_MS: &str = "JUPITER_RATE_LIMIT_MS";
pub const ENV_TIMEOUT_SECS: &str = "JUPITER_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    /// Sent as `x-api-key` when non-empty.
    pub api_key: String,
    /// Zero disables client-side rate limiting.
    pub rate_limit: Duration,
    /// Per-request transport timeout.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_URL.to_string(),
            api_key: String::new(),
            rate_limit: Duration::from_millis(RATE_LIMIT_MILLISECONDS),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `JUPITER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            config.api_url = url;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            config.api_key = key;
        }
        if let Some(ms) = lookup(ENV_RATE_LIMIT_MS) {
            config.rate_limit = Duration::from_millis(parse_number(ENV_RATE_LIMIT_MS, &ms)?);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout = Some(Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &secs)?));
        }
        Ok(config)
    }

    pub fn with_rate_limit(mut self, interval: Duration) -> Self {
        self.rate_limit = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|e| JupiterError::Config(format!("{key}={value:?}: {e}")))
}
