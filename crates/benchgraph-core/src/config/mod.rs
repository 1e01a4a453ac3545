//! Configuration system for benchgraph.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod benchgraph_config;
pub mod chart_config;
pub mod grouping_config;

pub use benchgraph_config::{BenchgraphConfig, ConfigOverrides};
pub use chart_config::ChartSettings;
pub use grouping_config::GroupingConfig;
