// Queue Domain Model

use serde::{Deserialize, Deserializer, Serialize};

/// Pipeline identifier
pub type PipelineName = String;

/// Ordered sequence of pipeline names.
///
/// Used both as the payload of batch commands (pause/resume/destroy) and as
/// the body of a list response. Order is preserved in both directions; a
/// missing or `null` list decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineCollection {
    #[serde(default, deserialize_with = "null_as_empty")]
    pipelines: Vec<PipelineName>,
}

impl PipelineCollection {
    pub fn new(pipelines: Vec<PipelineName>) -> Self {
        Self { pipelines }
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PipelineName> {
        self.pipelines.iter()
    }

    pub fn as_slice(&self) -> &[PipelineName] {
        &self.pipelines
    }
}

impl FromIterator<PipelineName> for PipelineCollection {
    fn from_iter<I: IntoIterator<Item = PipelineName>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for PipelineCollection {
    type Item = PipelineName;
    type IntoIter = std::vec::IntoIter<PipelineName>;

    fn into_iter(self) -> Self::IntoIter {
        self.pipelines.into_iter()
    }
}

impl<'a> IntoIterator for &'a PipelineCollection {
    type Item = &'a PipelineName;
    type IntoIter = std::slice::Iter<'a, PipelineName>;

    fn into_iter(self) -> Self::IntoIter {
        self.pipelines.iter()
    }
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
