// Domain Layer - Pipeline configuration, collections and statistics

pub mod driver;
pub mod error;
pub mod pipeline;
pub mod queue;
pub mod stat;

// Re-exports
pub use driver::{AmqpOptions, BeanstalkOptions, DriverOptions, MemoryOptions, SqsOptions};
pub use error::DomainError;
pub use pipeline::{CreateInfo, CreateInfoBuilder, Driver, Priority, RESERVED_OPTION_KEYS};
pub use queue::{PipelineCollection, PipelineName};
pub use stat::PipelineStat;
