//! RunDeduplicator: one authoritative run per commit sha.

use benchgraph_core::types::{Author, Commit, Measurement, Run, TimeUnit};
use benchgraph_series::RunDeduplicator;
use chrono::{TimeZone, Utc};

fn run(sha: &str, day: u32, value: f64) -> Run {
    let at = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
    Run {
        commit: Commit {
            sha: sha.to_string(),
            message: format!("commit {sha}"),
            timestamp: at,
            author: Author {
                username: "dev".to_string(),
            },
            url: String::new(),
        },
        timestamp: at,
        measurements: vec![Measurement::new("Sort", value, TimeUnit::Nanos)],
    }
}

#[test]
fn test_later_duplicate_dropped_even_with_different_contents() {
    let runs = vec![run("a", 1, 100.0), run("a", 2, 999.0)];
    let kept = RunDeduplicator::dedup(&runs);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].measurements[0].value, 100.0);
}

#[test]
fn test_order_of_first_appearance_preserved() {
    // input order is not time order; dedup must not sort
    let runs = vec![
        run("c", 3, 1.0),
        run("a", 1, 1.0),
        run("c", 4, 1.0),
        run("b", 2, 1.0),
    ];
    let shas: Vec<&str> = RunDeduplicator::dedup(&runs)
        .iter()
        .map(|r| r.commit.sha.as_str())
        .collect();
    assert_eq!(shas, ["c", "a", "b"]);
}

#[test]
fn test_no_duplicates_is_identity() {
    let runs = vec![run("a", 1, 1.0), run("b", 2, 2.0)];
    let kept = RunDeduplicator::dedup_owned(runs.clone());
    assert_eq!(kept, runs);
}
