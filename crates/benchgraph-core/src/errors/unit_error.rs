//! Unit token errors.

use super::error_code::{self, BenchgraphErrorCode};

/// A unit token outside the recognized set. Never guessed around.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("Unrecognized time unit: {unit:?}")]
    InvalidTimeUnit { unit: String },

    #[error("Unrecognized memory unit: {unit:?}")]
    InvalidMemoryUnit { unit: String },
}

impl BenchgraphErrorCode for UnitError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_UNIT
    }
}
