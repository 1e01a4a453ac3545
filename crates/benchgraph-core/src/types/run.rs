//! One submission of benchmark measurements tied to a commit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Commit, Measurement};

/// A run. Several runs may share `commit.sha`; only the first one seen is
/// authoritative after deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub commit: Commit,
    pub timestamp: DateTime<Utc>,
    pub measurements: Vec<Measurement>,
}

impl Run {
    /// Returns true if any measurement carries memory data.
    pub fn has_memory_data(&self) -> bool {
        self.measurements.iter().any(Measurement::has_memory_data)
    }
}
