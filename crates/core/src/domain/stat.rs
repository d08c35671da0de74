// Pipeline Statistics Domain Model

use serde::{Deserialize, Serialize};

/// Point-in-time counters reported by the remote server for one pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStat {
    pub pipeline: String,
    #[serde(default)]
    pub driver: String,
    /// Driver-side queue/tube/topic name
    #[serde(default)]
    pub queue: String,
    #[serde(default)]
    pub priority: u64,
    #[serde(default)]
    pub active: i64,
    #[serde(default)]
    pub delayed: i64,
    #[serde(default)]
    pub reserved: i64,
    /// Whether the pipeline is consuming (false while paused)
    #[serde(default)]
    pub ready: bool,
}
