//! Two-level grouping: base name -> job -> timestamp-ordered series.
//!
//! Job identity already disambiguates variants, so a second point at the
//! same timestamp for the same (base, job) overwrites the first.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use benchgraph_core::constants::DEFAULT_JOB;
use benchgraph_core::types::{
    FxHashMap, Measurement, Run, Series, SeriesKey, SeriesPoint, SmallVec4,
};

use super::name::JobName;

/// Every job series sharing one base benchmark name; charted on one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobGroup {
    pub base: String,
    /// One series per job, in order of first appearance.
    pub jobs: SmallVec4<Series>,
}

impl JobGroup {
    /// Job names in order.
    pub fn job_names(&self) -> Vec<&str> {
        self.jobs
            .iter()
            .filter_map(|s| match &s.key {
                SeriesKey::Job { job, .. } => Some(job.as_str()),
                SeriesKey::Name(_) => None,
            })
            .collect()
    }

    /// The series for `job`, if present.
    pub fn job(&self, job: &str) -> Option<&Series> {
        self.jobs.iter().find(|s| {
            matches!(&s.key, SeriesKey::Job { job: j, .. } if j == job)
        })
    }

    /// Total point count across jobs.
    pub fn point_count(&self) -> usize {
        self.jobs.iter().map(Series::len).sum()
    }

    /// Returns true if any point in any job carries memory data.
    pub fn has_memory_data(&self) -> bool {
        self.jobs.iter().any(Series::has_memory_data)
    }

    /// Every measurement across all jobs, for normalizing the shared axis.
    pub fn measurements_mut(&mut self) -> impl Iterator<Item = &mut Measurement> {
        self.jobs
            .iter_mut()
            .flat_map(|s| s.points.iter_mut().map(|p| &mut p.result))
    }
}

/// Output of one grouping pass.
#[derive(Debug, Clone, Default)]
pub struct GroupedJobs {
    /// One group per base name, in order of first appearance.
    pub groups: Vec<JobGroup>,
    /// Points that replaced an earlier point at the same (base, job, timestamp).
    pub overwritten_points: usize,
}

#[derive(Debug, Default)]
struct BaseBucket {
    base: String,
    jobs: Vec<(String, BTreeMap<DateTime<Utc>, SeriesPoint>)>,
    job_index: FxHashMap<String, usize>,
}

/// Groups points by (base name, job).
#[derive(Debug)]
pub struct JobAwareGrouper {
    default_job: String,
    bases: Vec<BaseBucket>,
    base_index: FxHashMap<String, usize>,
    overwritten_points: usize,
}

impl Default for JobAwareGrouper {
    fn default() -> Self {
        Self::new(DEFAULT_JOB)
    }
}

impl JobAwareGrouper {
    /// Create a grouper that files unbracketed names under `default_job`.
    pub fn new(default_job: impl Into<String>) -> Self {
        Self {
            default_job: default_job.into(),
            bases: Vec::new(),
            base_index: FxHashMap::default(),
            overwritten_points: 0,
        }
    }

    /// Group already-deduplicated runs with the `"default"` job name.
    pub fn group<'a>(runs: impl IntoIterator<Item = &'a Run>) -> GroupedJobs {
        let mut grouper = Self::default();
        for run in runs {
            grouper.push_run(run);
        }
        grouper.finish()
    }

    /// Add every measurement of `run`.
    pub fn push_run(&mut self, run: &Run) {
        for measurement in &run.measurements {
            self.insert(
                run.timestamp,
                SeriesPoint::new(run.commit.clone(), measurement.clone()),
            );
        }
    }

    /// Insert one point at `at` under `grouped[base][job]`, last write wins.
    pub fn insert(&mut self, at: DateTime<Utc>, point: SeriesPoint) {
        let parsed = JobName::parse(&point.result.name);
        let base = parsed.base.to_string();
        let job = parsed.job_or(&self.default_job).to_string();

        let base_idx = match self.base_index.get(&base) {
            Some(&idx) => idx,
            None => {
                self.bases.push(BaseBucket {
                    base: base.clone(),
                    ..Default::default()
                });
                self.base_index.insert(base, self.bases.len() - 1);
                self.bases.len() - 1
            }
        };
        let bucket = &mut self.bases[base_idx];

        let job_idx = match bucket.job_index.get(&job) {
            Some(&idx) => idx,
            None => {
                bucket.jobs.push((job.clone(), BTreeMap::new()));
                bucket.job_index.insert(job, bucket.jobs.len() - 1);
                bucket.jobs.len() - 1
            }
        };

        if let Some(previous) = bucket.jobs[job_idx].1.insert(at, point) {
            self.overwritten_points += 1;
            tracing::debug!(
                base = %bucket.base,
                job = %bucket.jobs[job_idx].0,
                commit = %previous.commit.sha,
                "overwrote point at duplicate timestamp"
            );
        }
    }

    /// Order each job's points by timestamp and emit the groups.
    pub fn finish(self) -> GroupedJobs {
        let groups = self
            .bases
            .into_iter()
            .map(|bucket| {
                let base = bucket.base;
                let jobs = bucket
                    .jobs
                    .into_iter()
                    .map(|(job, points)| {
                        Series::new(
                            SeriesKey::Job {
                                base: base.clone(),
                                job,
                            },
                            points.into_values().collect(),
                        )
                    })
                    .collect();
                JobGroup { base, jobs }
            })
            .collect();

        GroupedJobs {
            groups,
            overwritten_points: self.overwritten_points,
        }
    }
}
