//! Gateway Error Mapping
//!
//! Maps jsonrpsee client failures onto the core `GatewayError` taxonomy.

use jobq_core::port::GatewayError;
use jsonrpsee::core::ClientError;

/// Gateway Result type
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Convert a jsonrpsee client error into a `GatewayError`
pub fn to_gateway_error(e: ClientError) -> GatewayError {
    match e {
        ClientError::Call(call_err) => GatewayError::Remote {
            code: call_err.code(),
            message: call_err.message().to_string(),
        },
        ClientError::Transport(e) => GatewayError::Transport(e.to_string()),
        ClientError::RequestTimeout => GatewayError::Transport("Request timed out".to_string()),
        ClientError::RestartNeeded(_) => {
            GatewayError::Connection("Connection restart needed".to_string())
        }
        ClientError::ParseError(e) => GatewayError::Protocol(format!("Parse error: {}", e)),
        _ => GatewayError::Protocol(e.to_string()),
    }
}
