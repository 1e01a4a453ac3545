//! Chart output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_IMAGE_FORMAT, DEFAULT_PALETTE};

/// Settings copied into every chart config handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChartSettings {
    /// Image export format. Default: "png".
    pub image_format: Option<String>,
    /// Draw error bars when points carry a `range`. Default: true.
    pub error_bars: Option<bool>,
    /// Color tokens assigned positionally to jobs.
    #[serde(default)]
    pub palette: Vec<String>,
}

impl ChartSettings {
    /// Returns the effective image format, defaulting to "png".
    pub fn effective_image_format(&self) -> &str {
        self.image_format.as_deref().unwrap_or(DEFAULT_IMAGE_FORMAT)
    }

    /// Returns whether error bars are enabled, defaulting to true.
    pub fn effective_error_bars(&self) -> bool {
        self.error_bars.unwrap_or(true)
    }

    /// Returns the effective palette, falling back to the built-in colors.
    pub fn effective_palette(&self) -> Vec<String> {
        if self.palette.is_empty() {
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
        } else {
            self.palette.clone()
        }
    }
}
