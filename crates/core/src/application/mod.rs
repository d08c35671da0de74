// Application Layer - Registry facade and queue handles

pub mod jobs;
pub mod queue;

// Re-exports
pub use jobs::Jobs;
pub use queue::Queue;
