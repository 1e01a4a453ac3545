//! Renderer-facing chart shapes. Serialized camelCase.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use benchgraph_core::types::SeriesPoint;

/// Which axis a multi-series chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Time,
    Memory,
}

/// Ordered job -> points mapping. Serializes as a JSON object whose key
/// order is the job order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobDatasets(pub Vec<(String, Vec<SeriesPoint>)>);

impl JobDatasets {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, job: &str) -> Option<&[SeriesPoint]> {
        self.0
            .iter()
            .find(|(name, _)| name == job)
            .map(|(_, points)| points.as_slice())
    }

    pub fn jobs(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for JobDatasets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (job, points) in &self.0 {
            map.serialize_entry(job, points)?;
        }
        map.end()
    }
}

/// Points plotted by one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dataset {
    /// One line: a series-by-name.
    Single(Vec<SeriesPoint>),
    /// One line per job.
    Multi(JobDatasets),
}

impl Dataset {
    /// Every point, across all lines.
    pub fn points(&self) -> Box<dyn Iterator<Item = &SeriesPoint> + '_> {
        match self {
            Self::Single(points) => Box::new(points.iter()),
            Self::Multi(jobs) => Box::new(jobs.0.iter().flat_map(|(_, points)| points.iter())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub name: String,
    pub dataset: Dataset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,
    pub image_format: String,
    pub error_bars: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
}
