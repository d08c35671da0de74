//! jobq RPC - JSON-RPC gateway adapter
//!
//! Wires the core queue registry facade to a remote jobs server over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use jobq_core::domain::CreateInfo;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to the RPC endpoint
//!     let jobs = jobq_rpc::connect("http://127.0.0.1:6001")?;
//!
//!     if !jobs.is_available().await {
//!         return Err("jobs plugin is not enabled".into());
//!     }
//!
//!     // Declare a pipeline and pause it
//!     let queue = jobs.create(&CreateInfo::new("emails", "memory")?).await?;
//!     queue.pause().await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
pub mod config;
mod error;

pub use client::HttpGateway;
pub use config::GatewayConfig;
pub use error::{to_gateway_error, Result};

use jobq_core::Jobs;
use std::sync::Arc;

/// Facade over an HTTP gateway with default settings for `url`
pub fn connect(url: impl Into<String>) -> Result<Jobs> {
    from_config(&GatewayConfig::new(url))
}

/// Facade over an HTTP gateway built from `config`
pub fn from_config(config: &GatewayConfig) -> Result<Jobs> {
    let gateway = HttpGateway::new(config)?;
    Ok(Jobs::new(Arc::new(gateway)))
}
