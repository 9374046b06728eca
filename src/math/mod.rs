//! Numeric core of the captioner.
//!
//! This module provides:
//! - [`delta`]: look-ahead state shift with tail padding
//! - [`zscore`]: rate normalization, sign/magnitude split and top-k ranking

pub mod delta;
pub mod zscore;

pub use delta::{future_index, future_states, proprio_deltas};
pub use zscore::{StepScores, TOP_K};
