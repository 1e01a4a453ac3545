use benchgraph_core::types::{
    Author, Commit, Measurement, MemoryUnit, Run, Series, SeriesKey, SeriesPoint, TimeUnit,
};
use benchgraph_series::{RunDeduplicator, SeriesAssembler, UnitNormalizer};
use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(day as i64)
}

fn commit(sha: String, day: u32) -> Commit {
    Commit {
        sha,
        message: String::new(),
        timestamp: at(day),
        author: Author {
            username: "dev".to_string(),
        },
        url: String::new(),
    }
}

fn arb_time_unit() -> impl Strategy<Value = TimeUnit> {
    prop_oneof![
        Just(TimeUnit::Nanos),
        Just(TimeUnit::Micros),
        Just(TimeUnit::Millis),
        Just(TimeUnit::Seconds),
    ]
}

fn arb_memory_unit() -> impl Strategy<Value = Option<MemoryUnit>> {
    prop_oneof![
        Just(None),
        Just(Some(MemoryUnit::Bytes)),
        Just(Some(MemoryUnit::Kilobytes)),
        Just(Some(MemoryUnit::Megabytes)),
        Just(Some(MemoryUnit::Gigabytes)),
    ]
}

fn arb_measurement() -> impl Strategy<Value = Measurement> {
    (
        1e-3f64..1e12,
        arb_time_unit(),
        proptest::option::of(1e-3f64..1e3),
        proptest::option::of((1.0f64..1e12, arb_memory_unit())),
    )
        .prop_map(|(value, unit, margin, memory)| {
            let mut m = Measurement::new("bench", value, unit);
            if let Some(margin) = margin {
                m = m.with_range(format!("± {margin}"));
            }
            if let Some((bytes, memory_unit)) = memory {
                m = m.with_memory(bytes, memory_unit);
            }
            m
        })
}

fn series_of(measurements: Vec<Measurement>) -> Series {
    let points = measurements
        .into_iter()
        .enumerate()
        .map(|(i, m)| SeriesPoint::new(commit(format!("c{i}"), i as u32), m))
        .collect();
    Series::new(SeriesKey::Name("bench".to_string()), points)
}

// ── Dedup keeps the first occurrence per sha, in input order ─────────────

proptest! {
    #[test]
    fn dedup_keeps_first_occurrence(shas in prop::collection::vec(0u8..6, 0..40)) {
        let runs: Vec<Run> = shas
            .iter()
            .enumerate()
            .map(|(i, sha)| Run {
                commit: commit(format!("sha{sha}"), i as u32),
                timestamp: at(i as u32),
                measurements: Vec::new(),
            })
            .collect();

        let kept = RunDeduplicator::dedup(&runs);

        let mut expected: Vec<usize> = Vec::new();
        for (i, sha) in shas.iter().enumerate() {
            if !expected.iter().any(|&j| shas[j] == *sha) {
                expected.push(i);
            }
        }
        prop_assert_eq!(kept.len(), expected.len());
        for (run, idx) in kept.iter().zip(expected) {
            prop_assert_eq!(run.timestamp, at(idx as u32));
        }
    }
}

// ── N same-named points at one timestamp get N distinct keys ─────────────

proptest! {
    #[test]
    fn collisions_produce_suffixed_keys(n in 1usize..30) {
        let run = Run {
            commit: commit("a".to_string(), 0),
            timestamp: at(0),
            measurements: (0..n)
                .map(|i| Measurement::new("Sort", i as f64, TimeUnit::Nanos))
                .collect(),
        };
        let out = SeriesAssembler::assemble(&[run]);

        let mut expected = vec!["Sort".to_string()];
        expected.extend((1..n).map(|i| format!("Sort[{i}]")));
        let keys: Vec<String> = out.series.iter().map(|s| s.key.to_string()).collect();
        prop_assert_eq!(keys, expected);
        prop_assert_eq!(out.renamed_points, n - 1);
    }
}

// ── Normalized series share one unit per axis ────────────────────────────

proptest! {
    #[test]
    fn normalized_series_are_unit_consistent(
        measurements in prop::collection::vec(arb_measurement(), 1..20),
    ) {
        let memory_pattern: Vec<bool> =
            measurements.iter().map(Measurement::has_memory_data).collect();
        let mut s = series_of(measurements);

        UnitNormalizer::normalize_series(&mut s).unwrap();

        prop_assert!(s.time_unit().is_some());
        if memory_pattern.iter().any(|&m| m) {
            prop_assert!(s.memory_unit().is_some());
        }
        let after: Vec<bool> = s.points.iter().map(|p| p.result.has_memory_data()).collect();
        prop_assert_eq!(after, memory_pattern);
    }
}

// ── Normalizing twice is a no-op ─────────────────────────────────────────

proptest! {
    #[test]
    fn normalization_is_idempotent(
        measurements in prop::collection::vec(arb_measurement(), 1..20),
    ) {
        let mut s = series_of(measurements);
        let first = UnitNormalizer::normalize_series(&mut s).unwrap();
        let once = s.clone();
        let second = UnitNormalizer::normalize_series(&mut s).unwrap();
        prop_assert_eq!(first.time_unit, second.time_unit);
        prop_assert_eq!(s, once);
    }
}
