use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use benchgraph_core::types::{Author, Commit, Measurement, Run, TimeUnit};
use benchgraph_series::{SeriesAssembler, SeriesPipeline, UnitNormalizer};
use chrono::{TimeZone, Utc};

/// 500 commits x 20 benchmarks, two jobs each, with ranges and memory data.
fn build_runs() -> Vec<Run> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..500)
        .map(|i| {
            let at = base + chrono::Duration::hours(i);
            let measurements = (0..20)
                .flat_map(move |b| {
                    ["linux", "windows"].into_iter().map(move |job| {
                        Measurement::new(
                            format!("bench_{b}[{job}]"),
                            800.0 + (i * b) as f64,
                            TimeUnit::Nanos,
                        )
                        .with_range("± 25")
                        .with_memory(1_500_000.0 + i as f64, None)
                    })
                })
                .collect();
            Run {
                commit: Commit {
                    sha: format!("{i:040x}"),
                    message: format!("commit {i}"),
                    timestamp: at,
                    author: Author {
                        username: "bench".to_string(),
                    },
                    url: String::new(),
                },
                timestamp: at,
                measurements,
            }
        })
        .collect()
}

fn bench_normalize_series(c: &mut Criterion) {
    let runs = build_runs();
    let series = SeriesAssembler::assemble(&runs).series;

    c.bench_function("normalize_40_series_500_points", |b| {
        b.iter_batched(
            || series.clone(),
            |mut series| {
                for s in &mut series {
                    UnitNormalizer::normalize_series(s).unwrap();
                }
                series
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let runs = build_runs();
    let pipeline = SeriesPipeline::with_defaults();

    c.bench_function("pipeline_500_runs", |b| {
        b.iter(|| pipeline.run(&runs).unwrap());
    });
}

criterion_group!(benches, bench_normalize_series, bench_full_pipeline);
criterion_main!(benches);
