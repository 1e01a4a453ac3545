//! Top-level benchgraph configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ChartSettings, GroupingConfig};
use crate::constants::{PROJECT_CONFIG_FILE, SUPPORTED_IMAGE_FORMATS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Caller overrides (applied via `apply_overrides`)
/// 2. Environment variables (`BENCHGRAPH_*`)
/// 3. Project config (`benchgraph.toml` in the root directory)
/// 4. User config (`~/.benchgraph/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BenchgraphConfig {
    pub chart: ChartSettings,
    pub grouping: GroupingConfig,
}

/// Override arguments that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub image_format: Option<String>,
    pub error_bars: Option<bool>,
    pub palette: Option<Vec<String>>,
    pub default_job: Option<String>,
}

impl BenchgraphConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): caller overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &BenchgraphConfig) -> Result<(), ConfigError> {
        if let Some(ref format) = config.chart.image_format {
            if !SUPPORTED_IMAGE_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "chart.image_format".to_string(),
                    message: format!(
                        "must be one of {}, got {format:?}",
                        SUPPORTED_IMAGE_FORMATS.join(", ")
                    ),
                });
            }
        }
        if config.chart.palette.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "chart.palette".to_string(),
                message: "color tokens must not be empty".to_string(),
            });
        }
        if let Some(ref job) = config.grouping.default_job {
            if job.is_empty() || job.contains(['[', ']']) {
                return Err(ConfigError::ValidationFailed {
                    field: "grouping.default_job".to_string(),
                    message: "must be non-empty and contain no brackets".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.benchgraph/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".benchgraph").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BenchgraphConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BenchgraphConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut BenchgraphConfig, other: &BenchgraphConfig) {
        if other.chart.image_format.is_some() {
            base.chart.image_format = other.chart.image_format.clone();
        }
        if other.chart.error_bars.is_some() {
            base.chart.error_bars = other.chart.error_bars;
        }
        if !other.chart.palette.is_empty() {
            base.chart.palette = other.chart.palette.clone();
        }
        if other.grouping.default_job.is_some() {
            base.grouping.default_job = other.grouping.default_job.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BENCHGRAPH_CHART_IMAGE_FORMAT`, `BENCHGRAPH_CHART_PALETTE=a,b,c`, etc.
    fn apply_env_overrides(config: &mut BenchgraphConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("BENCHGRAPH_CHART_IMAGE_FORMAT") {
            config.chart.image_format = Some(val);
        }
        if let Ok(val) = std::env::var("BENCHGRAPH_CHART_ERROR_BARS") {
            let v = val.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                field: "BENCHGRAPH_CHART_ERROR_BARS".to_string(),
                message: format!("expected true or false, got {val:?}"),
            })?;
            config.chart.error_bars = Some(v);
        }
        if let Ok(val) = std::env::var("BENCHGRAPH_CHART_PALETTE") {
            config.chart.palette = val.split(',').map(|c| c.trim().to_string()).collect();
        }
        if let Ok(val) = std::env::var("BENCHGRAPH_GROUPING_DEFAULT_JOB") {
            config.grouping.default_job = Some(val);
        }
        Ok(())
    }

    /// Apply caller overrides (highest priority).
    fn apply_overrides(config: &mut BenchgraphConfig, o: &ConfigOverrides) {
        if let Some(ref v) = o.image_format {
            config.chart.image_format = Some(v.clone());
        }
        if let Some(v) = o.error_bars {
            config.chart.error_bars = Some(v);
        }
        if let Some(ref v) = o.palette {
            config.chart.palette = v.clone();
        }
        if let Some(ref v) = o.default_job {
            config.grouping.default_job = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
