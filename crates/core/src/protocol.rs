// Wire Protocol - method names, request payloads and the strict decode step
//
// Requests are built as JSON values directly; responses are decoded into one
// typed DTO per method and never inspected as raw JSON by the facade.

use crate::domain::queue::null_as_empty;
use crate::domain::{CreateInfo, PipelineCollection, PipelineStat};
use crate::error::{JobsError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Remote method names
pub mod method {
    pub const DECLARE: &str = "jobs.Declare";
    pub const LIST: &str = "jobs.List";
    pub const RESUME: &str = "jobs.Resume";
    pub const PAUSE: &str = "jobs.Pause";
    pub const DESTROY: &str = "jobs.Destroy";
    pub const STAT: &str = "jobs.Stat";
    pub const INFORMER_LIST: &str = "informer.List";
}

/// Plugin identifier reported by `informer.List` when queue management is enabled
pub const JOBS_PLUGIN: &str = "jobs";

/// jobs.Declare - `{"pipeline": {name, driver, priority, ...options}}`
pub fn declare_request(info: &CreateInfo) -> Value {
    let pipeline: Map<String, Value> = info
        .pipeline_map()
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    let mut request = Map::new();
    request.insert("pipeline".to_string(), Value::Object(pipeline));
    Value::Object(request)
}

/// jobs.Pause / jobs.Resume / jobs.Destroy - `{"pipelines": [names...]}`
pub fn pipelines_request(pipelines: &PipelineCollection) -> Value {
    let names: Vec<Value> = pipelines.iter().cloned().map(Value::String).collect();

    let mut request = Map::new();
    request.insert("pipelines".to_string(), Value::Array(names));
    Value::Object(request)
}

/// jobs.Stat response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stats: Vec<PipelineStat>,
}

/// informer.List response
pub type PluginList = Vec<String>;

/// Decode a raw response into the shape `method` is expected to return
pub fn decode<T: DeserializeOwned>(method: &'static str, response: Value) -> Result<T> {
    serde_json::from_value(response).map_err(|e| JobsError::Decode {
        method,
        message: e.to_string(),
    })
}
