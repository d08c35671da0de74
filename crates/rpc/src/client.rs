//! HTTP Gateway Implementation

use crate::config::GatewayConfig;
use crate::error::{to_gateway_error, Result};
use async_trait::async_trait;
use jobq_core::port::{GatewayError, RpcGateway};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde_json::Value;
use tracing::debug;

/// JSON-RPC over HTTP gateway
///
/// A request payload is sent as the single positional parameter; methods
/// without a payload are sent with an empty parameter list.
///
/// # Example
///
/// ```no_run
/// use jobq_rpc::{GatewayConfig, HttpGateway};
/// use std::time::Duration;
///
/// let config = GatewayConfig::new("http://127.0.0.1:6001")
///     .with_request_timeout(Duration::from_secs(5));
/// let gateway = HttpGateway::new(&config)?;
/// # Ok::<(), jobq_core::port::GatewayError>(())
/// ```
pub struct HttpGateway {
    client: HttpClient,
    url: String,
}

impl HttpGateway {
    /// Build a gateway for `config.url`
    ///
    /// No request is sent; an unreachable endpoint only shows up on the
    /// first call.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = HttpClientBuilder::default()
            .request_timeout(config.request_timeout)
            .build(&config.url)
            .map_err(|e| GatewayError::Connection(format!("Failed to create client: {}", e)))?;

        debug!(
            url = %config.url,
            timeout_secs = config.request_timeout.as_secs(),
            "HTTP gateway created"
        );

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RpcGateway for HttpGateway {
    async fn call(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let params = match params {
            Some(payload) => rpc_params![payload],
            None => rpc_params![],
        };

        self.client
            .request::<Value, _>(method, params)
            .await
            .map_err(to_gateway_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_connection_error() {
        let config = GatewayConfig::new("not a url");
        let result = HttpGateway::new(&config);
        assert!(matches!(result, Err(GatewayError::Connection(_))));
    }

    #[test]
    fn test_keeps_configured_url() {
        let gateway = HttpGateway::new(&GatewayConfig::new("http://127.0.0.1:6001")).unwrap();
        assert_eq!(gateway.url(), "http://127.0.0.1:6001");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is not expected to run an HTTP server
        let gateway = HttpGateway::new(&GatewayConfig::new("http://127.0.0.1:9")).unwrap();

        let err = gateway.call("jobs.List", None).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
