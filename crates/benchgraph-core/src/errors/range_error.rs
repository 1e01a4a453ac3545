//! Error-margin (`range`) parse errors.

use std::num::ParseFloatError;

use super::error_code::{self, BenchgraphErrorCode};

/// Errors raised while splitting a `range` string into glyph prefix and magnitude.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    #[error("Range {range:?} is shorter than its glyph prefix")]
    MissingPrefix { range: String },

    #[error("Range {range:?} has a malformed magnitude: {source}")]
    MalformedMagnitude {
        range: String,
        source: ParseFloatError,
    },
}

impl BenchgraphErrorCode for RangeError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_RANGE
    }
}
