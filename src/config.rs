//! Viewport tunables, loaded from a host-supplied JSON object.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_MIN_SCALE, DEFAULT_ZOOM_FACTOR};

/// Error returned by [`ViewportConfig::from_json`] and [`ViewportConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not a valid config object.
    #[error("invalid viewport config: {0}")]
    Json(#[from] serde_json::Error),
    /// A field held NaN or an infinity.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    /// `min_scale` must stay strictly positive so canvas conversions never divide by zero.
    #[error("min_scale must be > 0, got {0}")]
    NonPositiveMinScale(f64),
    /// `zoom_factor` at or below 1 would invert or freeze wheel zoom.
    #[error("zoom_factor must be > 1, got {0}")]
    ZoomFactorTooSmall(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    /// Scale multiplier per wheel step.
    pub zoom_factor: f64,
    /// Floor applied by the zoom controller.
    pub min_scale: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { zoom_factor: DEFAULT_ZOOM_FACTOR, min_scale: DEFAULT_MIN_SCALE }
    }
}

impl ViewportConfig {
    /// Parse a (possibly partial) JSON object and validate it.
    ///
    /// Missing fields take their defaults: `{"zoom_factor": 1.25}` is valid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input or unknown fields,
    /// or any error from [`validate`](Self::validate).
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the zoom preconditions.
    ///
    /// # Errors
    ///
    /// Returns an error if either field is non-finite, `min_scale <= 0`, or
    /// `zoom_factor <= 1`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("zoom_factor", self.zoom_factor)?;
        check_finite("min_scale", self.min_scale)?;
        if self.min_scale <= 0.0 {
            return Err(ConfigError::NonPositiveMinScale(self.min_scale));
        }
        if self.zoom_factor <= 1.0 {
            return Err(ConfigError::ZoomFactorTooSmall(self.zoom_factor));
        }
        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}
