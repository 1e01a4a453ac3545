//! Run deduplication: first submission per commit sha wins.

use benchgraph_core::types::{FxHashSet, Run};

/// Collapses repeated submissions for the same commit into one logical run.
pub struct RunDeduplicator;

impl RunDeduplicator {
    /// Keep the first run per `commit.sha`, preserving the order of first
    /// appearance. Later duplicates are dropped whatever their contents.
    pub fn dedup(runs: &[Run]) -> Vec<&Run> {
        let mut seen = FxHashSet::default();
        let kept: Vec<&Run> = runs
            .iter()
            .filter(|run| seen.insert(run.commit.sha.as_str()))
            .collect();

        if kept.len() < runs.len() {
            tracing::debug!(
                runs_in = runs.len(),
                runs_kept = kept.len(),
                "dropped duplicate run submissions"
            );
        }
        kept
    }

    /// Owned variant of [`RunDeduplicator::dedup`].
    pub fn dedup_owned(runs: Vec<Run>) -> Vec<Run> {
        let mut seen = FxHashSet::default();
        runs.into_iter()
            .filter(|run| seen.insert(run.commit.sha.clone()))
            .collect()
    }
}
