//! Job-aware grouping: base benchmark name -> job -> series.

pub mod grouper;
pub mod name;

pub use grouper::{GroupedJobs, JobAwareGrouper, JobGroup};
pub use name::JobName;
