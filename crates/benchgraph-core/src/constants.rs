//! Shared constants for the benchgraph engine.

/// benchgraph version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Unit normalization ----

/// Scale-up keeps going while the smallest value on an axis is at least this.
pub const SCALE_UP_THRESHOLD: f64 = 700.0;

/// Ratio between neighbouring units on both the time and memory ladders.
pub const UNIT_STEP: f64 = 1000.0;

/// Number of leading characters of a `range` string that form its glyph prefix.
pub const RANGE_PREFIX_CHARS: usize = 2;

// ---- Grouping ----

/// Job assigned to benchmark names without a bracketed suffix.
pub const DEFAULT_JOB: &str = "default";

// ---- Charts ----

/// Default chart image export format.
pub const DEFAULT_IMAGE_FORMAT: &str = "png";

/// Image formats a chart config may request.
pub const SUPPORTED_IMAGE_FORMATS: [&str; 4] = ["png", "jpeg", "webp", "svg"];

/// Default palette, assigned positionally to jobs.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#3366cc", "#dc3912", "#ff9900", "#109618", "#990099", "#0099c6", "#dd4477", "#66aa00",
];

/// Project config file name, looked up in the root directory.
pub const PROJECT_CONFIG_FILE: &str = "benchgraph.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "BENCHGRAPH_LOG";
