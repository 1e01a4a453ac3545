//! # benchgraph-series
//!
//! Turns benchmark runs into chart-ready series:
//! - **dedup**: one authoritative run per commit
//! - **assembler**: one series per effective benchmark name, collisions renamed
//! - **jobs**: one series per (base name, job), grouped by base name
//! - **normalize**: one shared time (and memory) unit per chart
//! - **chart**: chart configs for the renderer
//!
//! `pipeline::SeriesPipeline` wires the phases together; `ingest` parses the
//! JSON wire document into typed runs.

pub mod assembler;
pub mod chart;
pub mod dedup;
pub mod ingest;
pub mod jobs;
pub mod normalize;
pub mod pipeline;

pub use assembler::SeriesAssembler;
pub use chart::{ChartBuilder, ChartConfig, ChartKind, Dataset};
pub use dedup::RunDeduplicator;
pub use ingest::BenchmarkDocument;
pub use jobs::{JobAwareGrouper, JobGroup, JobName};
pub use normalize::{NormalizeOutcome, UnitNormalizer};
pub use pipeline::{PipelineOutput, PipelineStats, SeriesPipeline};
