// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Pipeline name must not be empty")]
    EmptyName,

    #[error("Pipeline driver must not be empty")]
    EmptyDriver,

    #[error("Invalid priority: {0} (must be a non-negative integer)")]
    InvalidPriority(i64),

    #[error("Option '{0}' is reserved and cannot be passed as a driver option")]
    ReservedOption(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
