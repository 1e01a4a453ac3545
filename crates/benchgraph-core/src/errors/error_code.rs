//! BenchgraphErrorCode trait for structured error reporting.

/// Trait for attaching a stable error code to every benchgraph error.
/// Callers that hand errors across a process or language boundary use the
/// code instead of matching on message text.
pub trait BenchgraphErrorCode {
    /// Returns the error code string (e.g., "INVALID_UNIT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_UNIT: &str = "INVALID_UNIT";
pub const MALFORMED_RANGE: &str = "MALFORMED_RANGE";
pub const INGEST_ERROR: &str = "INGEST_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
