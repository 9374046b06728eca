//! Error types for trajectory captioning.
//!
//! Every failure is an input problem detected before any caption is built, so
//! captioning is all-or-nothing per call.

use thiserror::Error;

/// Main error type for captioning operations.
#[derive(Error, Debug)]
pub enum CaptionError {
    /// A state vector does not have the expected dimensionality.
    #[error("State at index {index} has {actual} dimensions, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Time offset must be at least one step.
    #[error("Invalid time offset {0}: must be at least 1")]
    InvalidTimeOffset(usize),

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Statistics or trajectory JSON could not be parsed.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for captioning operations.
pub type Result<T> = std::result::Result<T, CaptionError>;

impl CaptionError {
    /// Create a dimension mismatch error.
    #[must_use]
    pub const fn dimension_mismatch(index: usize, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            index,
            expected,
            actual,
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether this error is caused by a malformed trajectory or offset.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. } | Self::InvalidTimeOffset(_)
        )
    }
}
