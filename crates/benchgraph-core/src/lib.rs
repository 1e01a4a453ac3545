//! # benchgraph-core
//!
//! Foundation crate for the benchgraph series engine.
//! Defines the benchmark data model, closed unit enumerations, errors,
//! config, tracing setup, and constants. `benchgraph-series` builds on it.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::BenchgraphConfig;
pub use errors::{BenchgraphErrorCode, PipelineError};
pub use types::{
    Author, Commit, ErrorRange, Measurement, MemoryUnit, Run, Series, SeriesKey, SeriesPoint,
    TimeUnit,
};
