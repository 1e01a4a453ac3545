//! Error handling for benchgraph.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod ingest_error;
pub mod normalize_error;
pub mod pipeline_error;
pub mod range_error;
pub mod unit_error;

pub use config_error::ConfigError;
pub use error_code::BenchgraphErrorCode;
pub use ingest_error::IngestError;
pub use normalize_error::NormalizeError;
pub use pipeline_error::PipelineError;
pub use range_error::RangeError;
pub use unit_error::UnitError;
