//! Benchmark data model for benchgraph.
//! Commits, runs, measurements, series, closed unit enumerations, and
//! error-margin strings.

pub mod collections;
pub mod commit;
pub mod measurement;
pub mod range;
pub mod run;
pub mod series;
pub mod units;

pub use collections::{FxHashMap, FxHashSet, SmallVec4};
pub use commit::{Author, Commit};
pub use measurement::Measurement;
pub use range::ErrorRange;
pub use run::Run;
pub use series::{Series, SeriesKey, SeriesPoint};
pub use units::{AxisUnit, MemoryUnit, TimeUnit};
