//! JSON wire documents -> typed runs.
//!
//! Accepted layouts: a bare array of runs, `{"runs": [...]}`, or
//! `{"entries": {"<suite>": [...]}}`. Records may use the native field
//! names or the benchmark-action ones (`commit.id`, `date`, `benches`).

pub mod document;
pub(crate) mod wire;

pub use document::{BenchmarkDocument, Suite};
