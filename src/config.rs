//! Configuration for trajectory captioning.
//!
//! [`CaptionConfig`] bundles the action statistics with the two fixed
//! thresholds of the captioning rule. The defaults reproduce the bridge dataset
//! captioner; the builders exist for injecting dataset-specific statistics.
//!
//! # Example
//!
//! ```
//! use proprio_caption::{ActionStatistics, CaptionConfig};
//!
//! let config = CaptionConfig::bridge();
//! assert_eq!(config.z_threshold, 0.5);
//!
//! let custom = CaptionConfig::default()
//!     .with_statistics(ActionStatistics::new([0.0; 7], [0.01; 7]));
//! assert!(custom.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CaptionError, Result};
use crate::statistics::ActionStatistics;

/// Default look-ahead, in timesteps, for motion deltas.
pub const DEFAULT_TIME_OFFSET: usize = 5;

/// Minimum |z| for a ranked dimension to be captioned.
pub const DEFAULT_Z_THRESHOLD: f64 = 0.5;

/// Minimum |raw gripper delta| for a gripper caption.
pub const DEFAULT_GRIPPER_THRESHOLD: f64 = 0.3;

/// Configuration for caption generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CaptionConfig {
    /// Normalizing statistics for z-scores.
    pub statistics: ActionStatistics,

    /// A ranked dimension with |z| below this is skipped.
    /// Equality passes.
    pub z_threshold: f64,

    /// Gripper deltas strictly beyond +/- this value caption as
    /// open/close. Compared against the raw delta, not a z-score.
    pub gripper_threshold: f64,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            statistics: ActionStatistics::bridge(),
            z_threshold: DEFAULT_Z_THRESHOLD,
            gripper_threshold: DEFAULT_GRIPPER_THRESHOLD,
        }
    }
}

impl CaptionConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for the bridge manipulation dataset.
    #[must_use]
    pub fn bridge() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the statistics are invalid or a threshold is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        self.statistics.validate()?;
        if !(self.z_threshold.is_finite() && self.z_threshold >= 0.0) {
            return Err(CaptionError::invalid_config(
                "z_threshold must be finite and non-negative",
            ));
        }
        if !(self.gripper_threshold.is_finite() && self.gripper_threshold >= 0.0) {
            return Err(CaptionError::invalid_config(
                "gripper_threshold must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Set the normalizing statistics.
    #[must_use]
    pub fn with_statistics(mut self, statistics: ActionStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    /// Set the z-score threshold.
    #[must_use]
    pub const fn with_z_threshold(mut self, threshold: f64) -> Self {
        self.z_threshold = threshold;
        self
    }

    /// Set the gripper delta threshold.
    #[must_use]
    pub const fn with_gripper_threshold(mut self, threshold: f64) -> Self {
        self.gripper_threshold = threshold;
        self
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or validation fails.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
