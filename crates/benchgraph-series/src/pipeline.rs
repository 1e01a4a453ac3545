//! Top-level series pipeline orchestrator.
//!
//! Phase 1: dedup runs by commit sha.
//! Phase 2: assemble series-by-name (collision renaming).
//! Phase 3: group by (base name, job).
//! Phase 4: normalize each chart's units.

use serde::Serialize;

use benchgraph_core::config::{BenchgraphConfig, ChartSettings};
use benchgraph_core::errors::PipelineError;
use benchgraph_core::types::{Run, Series};

use crate::assembler::SeriesAssembler;
use crate::chart::{ChartBuilder, ChartConfig};
use crate::dedup::RunDeduplicator;
use crate::ingest::BenchmarkDocument;
use crate::jobs::{JobAwareGrouper, JobGroup};
use crate::normalize::UnitNormalizer;

/// Counters describing one pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PipelineStats {
    pub runs_in: usize,
    pub runs_kept: usize,
    pub renamed_points: usize,
    pub series_count: usize,
    pub group_count: usize,
}

/// Both normalized views of one dataset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineOutput {
    /// One single-line chart per effective benchmark name.
    pub by_name: Vec<Series>,
    /// One multi-line chart family per base name.
    pub by_job: Vec<JobGroup>,
    pub stats: PipelineStats,
}

impl PipelineOutput {
    /// Chart configs for every series and every group, in that order.
    pub fn charts(&self, settings: &ChartSettings) -> Vec<ChartConfig> {
        let singles = self
            .by_name
            .iter()
            .map(|series| ChartBuilder::single(series, settings));
        let multis = self
            .by_job
            .iter()
            .flat_map(|group| ChartBuilder::multi(group, settings));
        singles.chain(multis).collect()
    }

    /// Returns true if the dataset produced no series at all.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_job.is_empty()
    }
}

/// The series pipeline.
pub struct SeriesPipeline {
    config: BenchgraphConfig,
}

impl SeriesPipeline {
    pub fn new(config: BenchgraphConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(BenchgraphConfig::default())
    }

    pub fn config(&self) -> &BenchgraphConfig {
        &self.config
    }

    /// Run every phase over `runs`. Any malformed range fails the whole
    /// dataset.
    pub fn run(&self, runs: &[Run]) -> Result<PipelineOutput, PipelineError> {
        let runs_in = runs.len();

        // Phase 1: dedup
        let kept = RunDeduplicator::dedup(runs);

        // Phase 2: series by effective name
        let assembled = SeriesAssembler::assemble(kept.iter().copied());

        // Phase 3: series by (base, job)
        let mut grouper = JobAwareGrouper::new(self.config.grouping.effective_default_job());
        for run in &kept {
            grouper.push_run(run);
        }
        let grouped = grouper.finish();

        // Phase 4: normalize, one chart at a time
        let mut by_name = assembled.series;
        for series in &mut by_name {
            UnitNormalizer::normalize_series(series)?;
        }
        let mut by_job = grouped.groups;
        for group in &mut by_job {
            UnitNormalizer::normalize_group(group)?;
        }

        let stats = PipelineStats {
            runs_in,
            runs_kept: kept.len(),
            renamed_points: assembled.renamed_points,
            series_count: by_name.len(),
            group_count: by_job.len(),
        };
        tracing::info!(
            runs_in = stats.runs_in,
            runs_kept = stats.runs_kept,
            renamed = stats.renamed_points,
            overwritten = grouped.overwritten_points,
            series = stats.series_count,
            groups = stats.group_count,
            "series pipeline complete"
        );

        Ok(PipelineOutput {
            by_name,
            by_job,
            stats,
        })
    }

    /// Parse a JSON document and run every phase over its runs.
    pub fn run_document(&self, json: &str) -> Result<PipelineOutput, PipelineError> {
        let runs = BenchmarkDocument::from_json(json)?.into_runs()?;
        self.run(&runs)
    }

    /// Chart configs for `output` using this pipeline's chart settings.
    pub fn charts(&self, output: &PipelineOutput) -> Vec<ChartConfig> {
        output.charts(&self.config.chart)
    }
}
