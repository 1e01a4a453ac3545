//! Chart configs handed to the renderer.

pub mod builder;
pub mod types;

pub use builder::ChartBuilder;
pub use types::{ChartConfig, ChartKind, Dataset, JobDatasets};
