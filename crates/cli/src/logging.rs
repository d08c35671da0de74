//! Logging setup
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `warn`)
//! - `JOBQ_LOG_FORMAT`: `json` or `pretty` (default: `pretty`)

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "warn";
const ENV_LOG_FORMAT: &str = "JOBQ_LOG_FORMAT";

pub fn init() -> Result<()> {
    let log_format = std::env::var(ENV_LOG_FORMAT).unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            // Structured logging for log shippers
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install JSON log subscriber")?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }

    Ok(())
}
