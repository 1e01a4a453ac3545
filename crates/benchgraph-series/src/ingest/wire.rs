//! Serde mirror of the wire format. Units stay strings here; they are
//! checked when converted into the closed enums.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawDocument {
    Runs(Vec<RawRun>),
    Wrapped { runs: Vec<RawRun> },
    Suites { entries: BTreeMap<String, Vec<RawRun>> },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRun {
    pub commit: RawCommit,
    #[serde(default, alias = "date")]
    pub timestamp: Option<RawInstant>,
    #[serde(default, alias = "benches")]
    pub measurements: Vec<RawMeasurement>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCommit {
    #[serde(alias = "id")]
    pub sha: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<RawInstant>,
    #[serde(default)]
    pub author: RawAuthor,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawAuthor {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl RawAuthor {
    /// Forge username, falling back to the display name.
    pub fn into_username(self) -> String {
        self.username.or(self.name).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMeasurement {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub bytes_allocated: Option<f64>,
    #[serde(default)]
    pub memory_unit: Option<String>,
}

/// Epoch milliseconds or an RFC 3339 string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawInstant {
    Millis(i64),
    Text(String),
}
