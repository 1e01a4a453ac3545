//! Parsed benchmark documents and their conversion into runs.

use chrono::{DateTime, Utc};

use benchgraph_core::errors::IngestError;
use benchgraph_core::types::{Author, Commit, Measurement, MemoryUnit, Run, TimeUnit};

use super::wire::{RawCommit, RawDocument, RawInstant, RawMeasurement, RawRun};

/// Runs of one suite. `name` is `None` for unsuited layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    pub name: Option<String>,
    pub runs: Vec<Run>,
}

/// A parsed, not yet validated, benchmark document.
#[derive(Debug)]
pub struct BenchmarkDocument {
    suites: Vec<(Option<String>, Vec<RawRun>)>,
}

impl BenchmarkDocument {
    /// Parse any accepted layout.
    pub fn from_json(json: &str) -> Result<Self, IngestError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        let suites = match raw {
            RawDocument::Runs(runs) | RawDocument::Wrapped { runs } => vec![(None, runs)],
            RawDocument::Suites { entries } => entries
                .into_iter()
                .map(|(name, runs)| (Some(name), runs))
                .collect(),
        };
        Ok(Self { suites })
    }

    /// Suite names in key order. Empty for unsuited layouts.
    pub fn suite_names(&self) -> Vec<&str> {
        self.suites
            .iter()
            .filter_map(|(name, _)| name.as_deref())
            .collect()
    }

    /// Total run records across suites.
    pub fn run_count(&self) -> usize {
        self.suites.iter().map(|(_, runs)| runs.len()).sum()
    }

    /// Convert every record into a typed run, suites flattened in key order.
    pub fn into_runs(self) -> Result<Vec<Run>, IngestError> {
        let mut out = Vec::with_capacity(self.run_count());
        for (_, runs) in self.suites {
            for raw in runs {
                out.push(convert_run(raw)?);
            }
        }
        tracing::debug!(runs = out.len(), "ingested benchmark document");
        Ok(out)
    }

    /// Convert per suite, for callers that chart suites independently.
    pub fn into_suites(self) -> Result<Vec<Suite>, IngestError> {
        self.suites
            .into_iter()
            .map(|(name, runs)| {
                let runs = runs
                    .into_iter()
                    .map(convert_run)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Suite { name, runs })
            })
            .collect()
    }
}

fn convert_run(raw: RawRun) -> Result<Run, IngestError> {
    let commit = convert_commit(raw.commit, raw.timestamp.as_ref())?;
    let timestamp = match raw.timestamp {
        Some(instant) => parse_instant(&instant, &commit.sha)?,
        None => commit.timestamp,
    };
    let measurements = raw
        .measurements
        .into_iter()
        .map(|m| convert_measurement(m, &commit.sha))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Run {
        commit,
        timestamp,
        measurements,
    })
}

/// A commit without its own timestamp borrows the run's.
fn convert_commit(
    raw: RawCommit,
    run_timestamp: Option<&RawInstant>,
) -> Result<Commit, IngestError> {
    let timestamp = match raw.timestamp.as_ref().or(run_timestamp) {
        Some(instant) => parse_instant(instant, &raw.sha)?,
        None => {
            return Err(IngestError::InvalidTimestamp {
                commit: raw.sha,
                value: "<missing>".to_string(),
            })
        }
    };
    Ok(Commit {
        timestamp,
        message: raw.message,
        author: Author {
            username: raw.author.into_username(),
        },
        url: raw.url,
        sha: raw.sha,
    })
}

fn convert_measurement(raw: RawMeasurement, sha: &str) -> Result<Measurement, IngestError> {
    let invalid = |source| IngestError::InvalidUnit {
        benchmark: raw.name.clone(),
        commit: sha.to_string(),
        source,
    };
    let unit = TimeUnit::from_token(raw.unit.as_deref()).map_err(invalid)?;
    let memory_unit = raw
        .memory_unit
        .as_deref()
        .map(str::parse::<MemoryUnit>)
        .transpose()
        .map_err(invalid)?;
    Ok(Measurement {
        name: raw.name,
        value: raw.value,
        unit,
        range: raw.range,
        bytes_allocated: raw.bytes_allocated,
        memory_unit,
    })
}

fn parse_instant(instant: &RawInstant, sha: &str) -> Result<DateTime<Utc>, IngestError> {
    let parsed = match instant {
        RawInstant::Millis(ms) => DateTime::from_timestamp_millis(*ms),
        RawInstant::Text(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
    };
    parsed.ok_or_else(|| IngestError::InvalidTimestamp {
        commit: sha.to_string(),
        value: match instant {
            RawInstant::Millis(ms) => ms.to_string(),
            RawInstant::Text(text) => text.clone(),
        },
    })
}
