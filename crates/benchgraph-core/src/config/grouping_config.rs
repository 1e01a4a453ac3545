//! Job grouping configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_JOB;

/// Configuration for the job-aware grouping view.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GroupingConfig {
    /// Job for names without a bracketed suffix. Default: "default".
    pub default_job: Option<String>,
}

impl GroupingConfig {
    /// Returns the effective default job name.
    pub fn effective_default_job(&self) -> &str {
        self.default_job.as_deref().unwrap_or(DEFAULT_JOB)
    }
}
