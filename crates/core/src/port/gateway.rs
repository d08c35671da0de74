// RPC Gateway Port
// The only way the facade reaches the remote jobs server
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Faults raised by a gateway implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Remote error ({code}): {message}")]
    Remote { code: i32, message: String },

    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Synchronous request/response channel to the remote jobs server
///
/// Implementations:
/// - `jobq_rpc::HttpGateway`: JSON-RPC over HTTP
/// - `mocks::MockGateway`: scripted responses for tests
#[async_trait]
pub trait RpcGateway: Send + Sync {
    /// Invoke `method` and wait for its response
    ///
    /// # Arguments
    /// * `method` - Remote method name (e.g. `jobs.List`)
    /// * `params` - Request payload; `None` for methods that take no arguments
    ///
    /// # Errors
    /// Any transport, protocol or remote application failure
    async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, GatewayError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// One invocation seen by [`MockGateway`]
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub method: String,
        pub params: Option<Value>,
    }

    /// Mock RpcGateway for testing
    ///
    /// Methods without a scripted outcome answer `null`.
    #[derive(Default)]
    pub struct MockGateway {
        outcomes: Mutex<HashMap<String, Result<Value, GatewayError>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockGateway {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, method: &str, response: Value) {
            self.outcomes
                .lock()
                .unwrap()
                .insert(method.to_string(), Ok(response));
        }

        pub fn fail(&self, method: &str, error: GatewayError) {
            self.outcomes
                .lock()
                .unwrap()
                .insert(method.to_string(), Err(error));
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn calls_to(&self, method: &str) -> Vec<RecordedCall> {
            self.calls()
                .into_iter()
                .filter(|call| call.method == method)
                .collect()
        }
    }

    #[async_trait]
    impl RpcGateway for MockGateway {
        async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, GatewayError> {
            self.calls.lock().unwrap().push(RecordedCall {
                method: method.to_string(),
                params,
            });

            self.outcomes
                .lock()
                .unwrap()
                .get(method)
                .cloned()
                .unwrap_or(Ok(Value::Null))
        }
    }
}
