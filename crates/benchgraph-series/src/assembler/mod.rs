//! Series assembly by effective benchmark name.
//!
//! Buckets every measurement of every run under its name, keyed by run
//! timestamp. Two points landing on the same (name, timestamp) are a
//! collision, typically several job variants bundled under one non-unique
//! name. The later point is renamed (`Sort` -> `Sort[1]` -> `Sort[2]` ...)
//! so every point keeps its own series.
//!
//! Renaming assumes a run emits same-named measurements in the same order
//! every time, so `Sort[1]` means the same variant across commits.

pub mod occupancy;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use benchgraph_core::types::{FxHashMap, Run, Series, SeriesKey, SeriesPoint};

pub use occupancy::{split_suffix, Claim, Occupancy};

/// Output of one assembly pass.
#[derive(Debug, Clone, Default)]
pub struct AssembledSeries {
    /// One series per effective name, in order of first appearance.
    pub series: Vec<Series>,
    /// Points stored under a rewritten name.
    pub renamed_points: usize,
}

/// Groups points by effective benchmark name.
#[derive(Debug, Default)]
pub struct SeriesAssembler {
    buckets: FxHashMap<String, BTreeMap<DateTime<Utc>, SeriesPoint>>,
    order: Vec<String>,
    occupancy: Occupancy,
    renamed_points: usize,
}

impl SeriesAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble series from already-deduplicated runs.
    pub fn assemble<'a>(runs: impl IntoIterator<Item = &'a Run>) -> AssembledSeries {
        let mut assembler = Self::new();
        for run in runs {
            assembler.push_run(run);
        }
        assembler.finish()
    }

    /// Add every measurement of `run`, in the order the run lists them.
    pub fn push_run(&mut self, run: &Run) {
        for measurement in &run.measurements {
            self.insert(
                run.timestamp,
                SeriesPoint::new(run.commit.clone(), measurement.clone()),
            );
        }
    }

    /// Insert one point at `at` under its measurement name, renaming on
    /// collision. Returns the key the point was stored under.
    pub fn insert(&mut self, at: DateTime<Utc>, point: SeriesPoint) -> String {
        let Claim { key, renamed } = self.occupancy.claim(&point.result.name, at);
        if renamed {
            self.renamed_points += 1;
            tracing::debug!(
                name = %point.result.name,
                key = %key,
                commit = %point.commit.sha,
                "renamed colliding benchmark"
            );
        }

        if !self.buckets.contains_key(&key) {
            self.order.push(key.clone());
        }
        let previous = self.buckets.entry(key.clone()).or_default().insert(at, point);
        debug_assert!(previous.is_none(), "occupancy handed out a taken key");
        key
    }

    /// Order each key's points by timestamp and emit the series.
    pub fn finish(mut self) -> AssembledSeries {
        let series = self
            .order
            .into_iter()
            .map(|key| {
                let points = self
                    .buckets
                    .remove(&key)
                    .map(|bucket| bucket.into_values().collect())
                    .unwrap_or_default();
                Series::new(SeriesKey::Name(key), points)
            })
            .collect();

        AssembledSeries {
            series,
            renamed_points: self.renamed_points,
        }
    }
}
