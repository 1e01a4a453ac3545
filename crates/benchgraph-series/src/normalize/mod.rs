//! Unit normalization: one shared, human-scaled unit per chart axis.

pub mod axis;
pub mod normalizer;

pub use axis::{convert, scale_up_target};
pub use normalizer::{NormalizeOutcome, UnitNormalizer};
