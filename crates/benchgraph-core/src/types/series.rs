//! Chart-ready series: timestamp-ordered, uniquely keyed point sequences.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Commit, Measurement, MemoryUnit, TimeUnit};

/// The atomic unit of every output series: one commit, one measurement.
/// Serialized as `{commit, result}` for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub commit: Commit,
    pub result: Measurement,
}

impl SeriesPoint {
    pub fn new(commit: Commit, result: Measurement) -> Self {
        Self { commit, result }
    }
}

/// Identity of a series within one grouping pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesKey {
    /// Effective (possibly renamed) benchmark name.
    Name(String),
    /// Logical benchmark plus job qualifier.
    Job { base: String, job: String },
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Job { base, job } => write!(f, "{base}[{job}]"),
        }
    }
}

/// A timestamp-ordered sequence of points sharing one identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: SeriesKey,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(key: SeriesKey, points: Vec<SeriesPoint>) -> Self {
        Self { key, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The single time unit shared by every point, if there is one.
    pub fn time_unit(&self) -> Option<TimeUnit> {
        shared(self.points.iter().map(|p| Some(p.result.unit)))
    }

    /// The single memory unit shared by every point with memory data.
    /// `None` when no point has memory data or units disagree.
    pub fn memory_unit(&self) -> Option<MemoryUnit> {
        shared(
            self.points
                .iter()
                .filter(|p| p.result.has_memory_data())
                .map(|p| p.result.memory_unit),
        )
    }

    /// Returns true if any point carries memory data.
    pub fn has_memory_data(&self) -> bool {
        self.points.iter().any(|p| p.result.has_memory_data())
    }
}

fn shared<U: PartialEq + Copy>(mut units: impl Iterator<Item = Option<U>>) -> Option<U> {
    let first = units.next()??;
    units.all(|u| u == Some(first)).then_some(first)
}
