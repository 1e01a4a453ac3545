//! Unit normalization errors.

use super::BenchgraphErrorCode;
use super::RangeError;

/// Errors that can occur while rescaling a chart's points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Benchmark {benchmark:?}: {source}")]
    MalformedRange {
        benchmark: String,
        source: RangeError,
    },
}

impl BenchgraphErrorCode for NormalizeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRange { source, .. } => source.error_code(),
        }
    }
}
