// Port Layer - Interfaces for external dependencies

pub mod gateway;

// Re-exports
pub use gateway::{GatewayError, RpcGateway};
