// Central Error Type for the Queue Registry

use crate::port::GatewayError;
use thiserror::Error;

/// The single error kind raised by remote-touching facade operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobsError {
    #[error("{method} failed: {source}")]
    Gateway {
        method: &'static str,
        #[source]
        source: GatewayError,
    },

    #[error("{method} returned an unexpected response: {message}")]
    Decode {
        method: &'static str,
        message: String,
    },
}

impl JobsError {
    /// Remote method whose call failed
    pub fn method(&self) -> &'static str {
        match self {
            JobsError::Gateway { method, .. } | JobsError::Decode { method, .. } => method,
        }
    }
}

/// Result type alias using JobsError
pub type Result<T> = std::result::Result<T, JobsError>;
