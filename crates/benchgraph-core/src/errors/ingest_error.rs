//! Errors raised while turning a wire document into typed runs.

use super::error_code::{self, BenchgraphErrorCode};
use super::UnitError;

/// Errors that can occur while ingesting a benchmark document.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Benchmark document is not valid JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Benchmark {benchmark:?} at commit {commit}: {source}")]
    InvalidUnit {
        benchmark: String,
        commit: String,
        source: UnitError,
    },

    #[error("Invalid timestamp for commit {commit}: {value}")]
    InvalidTimestamp { commit: String, value: String },
}

impl BenchgraphErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUnit { source, .. } => source.error_code(),
            _ => error_code::INGEST_ERROR,
        }
    }
}
