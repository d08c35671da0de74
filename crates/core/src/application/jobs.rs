// Queue Registry Facade

use crate::application::queue::Queue;
use crate::domain::{CreateInfo, PipelineCollection, PipelineStat};
use crate::error::{JobsError, Result};
use crate::port::RpcGateway;
use crate::protocol::{self, method, PluginList, StatsResponse, JOBS_PLUGIN};
use futures::stream::{self, BoxStream, StreamExt};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client-side facade over the remote pipeline registry
///
/// Every method except [`Jobs::connect`] performs exactly one gateway call.
/// Clones share the same gateway.
///
/// # Example
///
/// ```
/// use jobq_core::port::gateway::mocks::MockGateway;
/// use jobq_core::Jobs;
/// use std::sync::Arc;
///
/// let jobs = Jobs::new(Arc::new(MockGateway::new()));
/// let queue = jobs.connect("emails");
/// assert_eq!(queue.name(), "emails");
/// ```
#[derive(Clone)]
pub struct Jobs {
    gateway: Arc<dyn RpcGateway>,
}

impl Jobs {
    pub fn new(gateway: Arc<dyn RpcGateway>) -> Self {
        Self { gateway }
    }

    /// Declare a new pipeline
    ///
    /// The returned handle is bound to `info.name()`; the declare response
    /// body is not inspected.
    pub async fn create(&self, info: &CreateInfo) -> Result<Queue> {
        debug!(
            pipeline = %info.name(),
            driver = %info.driver(),
            priority = %info.priority(),
            "Declaring pipeline"
        );

        self.call(method::DECLARE, Some(protocol::declare_request(info)))
            .await?;

        Ok(self.connect(info.name()))
    }

    /// Handle for an existing pipeline. Never touches the network.
    pub fn connect(&self, name: impl Into<String>) -> Queue {
        Queue::new(name.into(), self.clone())
    }

    /// Whether the remote server has the jobs plugin enabled
    ///
    /// Never fails: a gateway fault or a response that is not a list of
    /// plugin names both count as "not available".
    pub async fn is_available(&self) -> bool {
        let response = match self
            .gateway
            .call(method::INFORMER_LIST, Some(Value::Bool(true)))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Plugin listing failed, jobs treated as unavailable");
                return false;
            }
        };

        match protocol::decode::<PluginList>(method::INFORMER_LIST, response) {
            Ok(plugins) => plugins.iter().any(|plugin| plugin == JOBS_PLUGIN),
            Err(e) => {
                warn!(error = %e, "Malformed plugin list, jobs treated as unavailable");
                false
            }
        }
    }

    /// Lazily list pipelines
    ///
    /// Nothing is fetched until the stream is first polled; each stream
    /// performs one `jobs.List` call and yields handles in response order.
    /// A failed call surfaces as a single `Err` item. Call again for a fresh
    /// snapshot.
    pub fn iterate(&self) -> BoxStream<'static, Result<Queue>> {
        let jobs = self.clone();

        stream::once(async move {
            let fetched = jobs.list_pipelines().await;
            (jobs, fetched)
        })
        .flat_map(|(jobs, fetched)| {
            let items: Vec<Result<Queue>> = match fetched {
                Ok(pipelines) => pipelines
                    .into_iter()
                    .map(|name| Ok(jobs.connect(name)))
                    .collect(),
                Err(e) => vec![Err(e)],
            };
            stream::iter(items)
        })
        .boxed()
    }

    /// Eager form of [`Jobs::iterate`]
    pub async fn queues(&self) -> Result<Vec<Queue>> {
        let pipelines = self.list_pipelines().await?;
        Ok(pipelines.into_iter().map(|name| self.connect(name)).collect())
    }

    /// Number of pipelines currently registered
    pub async fn count(&self) -> Result<usize> {
        Ok(self.list_pipelines().await?.len())
    }

    /// Resume consumption on `queues`, in the given order
    pub async fn resume(&self, queues: &[Queue]) -> Result<()> {
        self.command(method::RESUME, queues).await
    }

    /// Pause consumption on `queues`, in the given order
    pub async fn pause(&self, queues: &[Queue]) -> Result<()> {
        self.command(method::PAUSE, queues).await
    }

    /// Stop and remove `queues` from the remote registry
    pub async fn destroy(&self, queues: &[Queue]) -> Result<()> {
        self.command(method::DESTROY, queues).await
    }

    /// Counters for every registered pipeline
    pub async fn stats(&self) -> Result<Vec<PipelineStat>> {
        let response = self.call(method::STAT, None).await?;
        let stats: StatsResponse = protocol::decode(method::STAT, response)?;
        Ok(stats.stats)
    }

    // Shared by iterate/queues/count
    async fn list_pipelines(&self) -> Result<PipelineCollection> {
        let response = self.call(method::LIST, None).await?;
        let pipelines: PipelineCollection = protocol::decode(method::LIST, response)?;

        debug!(count = pipelines.len(), "Listed pipelines");
        Ok(pipelines)
    }

    async fn command(&self, method: &'static str, queues: &[Queue]) -> Result<()> {
        if queues.is_empty() {
            debug!(method, "No pipelines given, skipping call");
            return Ok(());
        }

        let pipelines: PipelineCollection =
            queues.iter().map(|queue| queue.name().to_string()).collect();

        debug!(method, pipelines = pipelines.len(), "Sending pipeline command");

        self.call(method, Some(protocol::pipelines_request(&pipelines)))
            .await?;
        Ok(())
    }

    async fn call(&self, method: &'static str, params: Option<Value>) -> Result<Value> {
        self.gateway
            .call(method, params)
            .await
            .map_err(|source| JobsError::Gateway { method, source })
    }
}

impl fmt::Debug for Jobs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jobs").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;
