//! Gateway Configuration
//!
//! Defaults can be overridden through the environment.

use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:6001";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const ENV_RPC_URL: &str = "JOBQ_RPC_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "JOBQ_RPC_TIMEOUT_SECS";

/// Where and how to reach the remote RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub url: String,
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load from `JOBQ_RPC_URL` / `JOBQ_RPC_TIMEOUT_SECS`
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = lookup(ENV_RPC_URL)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let timeout_secs: u64 = lookup(ENV_REQUEST_TIMEOUT_SECS)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            url,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
