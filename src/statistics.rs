//! Per-dimension action statistics used to normalize proprioceptive deltas.
//!
//! The default table holds the bridge dataset statistics. It is versioned data,
//! not something computed at runtime: swapping in dataset-specific statistics
//! changes the scale of the z-scores without touching the algorithm.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CaptionError, Result};
use crate::trajectory::{StateVector, STATE_DIM};

/// Mean of the bridge dataset actions, per dimension.
///
/// Not used when building captions; kept alongside the std table for parity
/// with the statistics tooling that produced both.
pub const BRIDGE_ACTION_MEAN: [f64; STATE_DIM] = [
    0.000_211_605_627_555_400_13,
    0.000_126_136_874_314_397_57,
    -0.000_170_218_947_459_943_6,
    -0.000_150_618_769_112_043_08,
    -0.000_238_307_591_644_115_75,
    0.000_256_457_744_399_085_64,
    0.588_063_120_841_98,
];

/// Standard deviation of the bridge dataset actions, per dimension.
pub const BRIDGE_ACTION_STD: [f64; STATE_DIM] = [
    0.009_637_202_136_218_548,
    0.013_506_611_809_134_483,
    0.012_518_613_599_240_78,
    0.028_067_860_752_344_13,
    0.030_169_039_964_675_903,
    0.076_326_221_227_645_87,
    0.488_380_610_942_840_6,
];

/// Mean and standard deviation of each proprioceptive dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActionStatistics {
    /// Per-dimension mean.
    pub mean: [f64; STATE_DIM],

    /// Per-dimension standard deviation, the z-score divisor.
    pub std: [f64; STATE_DIM],
}

impl Default for ActionStatistics {
    fn default() -> Self {
        Self::bridge()
    }
}

impl ActionStatistics {
    /// Create statistics from explicit tables.
    #[must_use]
    pub const fn new(mean: [f64; STATE_DIM], std: [f64; STATE_DIM]) -> Self {
        Self { mean, std }
    }

    /// Statistics of the bridge manipulation dataset.
    #[must_use]
    pub const fn bridge() -> Self {
        Self::new(BRIDGE_ACTION_MEAN, BRIDGE_ACTION_STD)
    }

    /// Standard deviation as a state-shaped vector.
    #[must_use]
    pub fn std_vector(&self) -> StateVector {
        StateVector::from(self.std)
    }

    /// Mean as a state-shaped vector.
    #[must_use]
    pub fn mean_vector(&self) -> StateVector {
        StateVector::from(self.mean)
    }

    /// Validate the statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if any mean is non-finite or any std entry is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<()> {
        if let Some(d) = self.mean.iter().position(|m| !m.is_finite()) {
            return Err(CaptionError::invalid_config(format!(
                "action mean for dimension {d} is not finite"
            )));
        }
        if let Some(d) = self.std.iter().position(|&s| !(s.is_finite() && s > 0.0)) {
            return Err(CaptionError::invalid_config(format!(
                "action std for dimension {d} must be positive and finite, got {}",
                self.std[d]
            )));
        }
        Ok(())
    }

    /// Parse statistics from a JSON object with `mean` and `std` arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the parsed statistics fail
    /// [`ActionStatistics::validate`].
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let stats: Self = serde_json::from_str(json)?;
        stats.validate()?;
        Ok(stats)
    }
}
