// Queue Handle

use crate::application::jobs::Jobs;
use crate::domain::PipelineStat;
use crate::error::Result;
use std::fmt;

/// Unverified reference to a named pipeline
///
/// Obtained from [`Jobs::connect`], [`Jobs::create`] or a listing. Holding a
/// handle says nothing about whether the pipeline exists remotely. Two
/// handles are equal when their names are.
#[derive(Clone)]
pub struct Queue {
    name: String,
    jobs: Jobs,
}

impl Queue {
    pub(crate) fn new(name: String, jobs: Jobs) -> Self {
        Self { name, jobs }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn pause(&self) -> Result<()> {
        self.jobs.pause(std::slice::from_ref(self)).await
    }

    pub async fn resume(&self) -> Result<()> {
        self.jobs.resume(std::slice::from_ref(self)).await
    }

    pub async fn destroy(&self) -> Result<()> {
        self.jobs.destroy(std::slice::from_ref(self)).await
    }

    /// Counters for this pipeline, `None` if the server does not report it
    pub async fn stat(&self) -> Result<Option<PipelineStat>> {
        let stats = self.jobs.stats().await?;
        Ok(stats.into_iter().find(|stat| stat.pipeline == self.name))
    }
}

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Queue {}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("name", &self.name).finish()
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
