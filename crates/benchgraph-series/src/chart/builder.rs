//! Build chart configs from normalized series and job groups.

use benchgraph_core::config::ChartSettings;
use benchgraph_core::types::{Series, SeriesPoint};

use super::types::{ChartConfig, ChartKind, Dataset, JobDatasets};
use crate::jobs::JobGroup;

pub struct ChartBuilder;

impl ChartBuilder {
    /// One single-line chart for a series-by-name.
    pub fn single(series: &Series, settings: &ChartSettings) -> ChartConfig {
        let dataset = Dataset::Single(series.points.clone());
        ChartConfig {
            name: series.key.to_string(),
            error_bars: error_bars(&dataset, settings),
            dataset,
            kind: None,
            image_format: settings.effective_image_format().to_string(),
            palette: None,
        }
    }

    /// Charts for one base-name group: a time chart, plus a memory chart
    /// when any job carries memory data.
    pub fn multi(group: &JobGroup, settings: &ChartSettings) -> Vec<ChartConfig> {
        let palette = cycle_palette(&settings.effective_palette(), group.jobs.len());
        let mut charts = vec![multi_chart(group, ChartKind::Time, settings, &palette)];
        if group.has_memory_data() {
            charts.push(multi_chart(group, ChartKind::Memory, settings, &palette));
        }
        charts
    }
}

fn multi_chart(
    group: &JobGroup,
    kind: ChartKind,
    settings: &ChartSettings,
    palette: &[String],
) -> ChartConfig {
    let jobs = group
        .job_names()
        .into_iter()
        .zip(&group.jobs)
        .map(|(job, series)| (job.to_string(), series.points.clone()))
        .collect();
    let dataset = Dataset::Multi(JobDatasets(jobs));
    ChartConfig {
        name: group.base.clone(),
        error_bars: error_bars(&dataset, settings),
        dataset,
        kind: Some(kind),
        image_format: settings.effective_image_format().to_string(),
        palette: Some(palette.to_vec()),
    }
}

fn error_bars(dataset: &Dataset, settings: &ChartSettings) -> bool {
    settings.effective_error_bars() && dataset.points().any(has_range)
}

fn has_range(point: &SeriesPoint) -> bool {
    point.result.range.is_some()
}

/// Repeat `colors` until there is one per job.
fn cycle_palette(colors: &[String], jobs: usize) -> Vec<String> {
    colors.iter().cycle().take(jobs).cloned().collect()
}
