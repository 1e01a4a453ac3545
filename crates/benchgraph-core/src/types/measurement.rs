//! One named performance result within a run.

use serde::{Deserialize, Serialize};

use super::{MemoryUnit, TimeUnit};

/// A measurement. `value` is a time magnitude in `unit`; memory data, when
/// present, is `bytes_allocated` in `memory_unit` (null meaning bytes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub unit: TimeUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes_allocated: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_unit: Option<MemoryUnit>,
}

impl Measurement {
    /// A time-only measurement with no range and no memory data.
    pub fn new(name: impl Into<String>, value: f64, unit: TimeUnit) -> Self {
        Self {
            name: name.into(),
            value,
            unit,
            range: None,
            bytes_allocated: None,
            memory_unit: None,
        }
    }

    /// Attach an error-margin string.
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Attach memory data. `unit` of `None` means bytes.
    pub fn with_memory(mut self, bytes_allocated: f64, unit: Option<MemoryUnit>) -> Self {
        self.bytes_allocated = Some(bytes_allocated);
        self.memory_unit = unit;
        self
    }

    /// Returns true if this measurement carries memory data.
    pub fn has_memory_data(&self) -> bool {
        self.bytes_allocated.is_some()
    }
}
