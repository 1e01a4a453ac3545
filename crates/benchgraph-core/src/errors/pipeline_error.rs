//! Pipeline errors.

use super::BenchgraphErrorCode;
use super::{ConfigError, IngestError, NormalizeError, UnitError};

/// Errors that can occur during a pipeline invocation.
/// Aggregates subsystem errors via `From` conversions. Every variant is
/// fatal: the dataset as a whole is unusable.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    #[error("Normalize error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BenchgraphErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Ingest(e) => e.error_code(),
            Self::Unit(e) => e.error_code(),
            Self::Normalize(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
