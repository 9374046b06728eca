//! Trajectory records as produced by the dataset loader.
//!
//! A [`Trajectory`] is an ordered list of [`Observation`]s. Each observation
//! carries a raw `state` vector; records are kept untyped so that malformed
//! vectors surface as a [`CaptionError::DimensionMismatch`] at captioning time
//! instead of failing deserialization.
//!
//! # State Layout
//!
//! | Index | Dimension | Captioned as |
//! |-------|-----------|--------------|
//! | 0 | forward/back | move farther / move closer |
//! | 1 | left/right | move left / move right |
//! | 2 | up/down | move up / move down |
//! | 3 | unused | - |
//! | 4 | unused | - |
//! | 5 | rotation | rotate left / rotate right |
//! | 6 | gripper | open gripper / close gripper |

use nalgebra::SVector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CaptionError, Result};

/// Number of proprioceptive dimensions per state.
pub const STATE_DIM: usize = 7;

/// A single validated proprioceptive state.
pub type StateVector = SVector<f64, STATE_DIM>;

/// One timestep of a trajectory.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// Proprioceptive state, expected to hold [`STATE_DIM`] values.
    pub state: Vec<f64>,
}

impl Observation {
    /// Create an observation from a raw state.
    #[must_use]
    pub fn new(state: Vec<f64>) -> Self {
        Self { state }
    }
}

impl From<StateVector> for Observation {
    fn from(state: StateVector) -> Self {
        Self::new(state.iter().copied().collect())
    }
}

/// An ordered sequence of observations.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trajectory {
    /// Observations in time order.
    pub observations: Vec<Observation>,
}

impl Trajectory {
    /// Create a trajectory from observations.
    #[must_use]
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Build a trajectory from raw state rows.
    #[must_use]
    pub fn from_states<S: Into<Vec<f64>>>(states: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            states
                .into_iter()
                .map(|s| Observation::new(s.into()))
                .collect(),
        )
    }

    /// Number of timesteps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the trajectory has no timesteps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Convert every observation into a [`StateVector`].
    ///
    /// # Errors
    ///
    /// Returns [`CaptionError::DimensionMismatch`] for the first observation
    /// whose state does not hold exactly [`STATE_DIM`] values.
    pub fn state_vectors(&self) -> Result<Vec<StateVector>> {
        self.observations
            .iter()
            .enumerate()
            .map(|(i, obs)| state_vector(i, &obs.state))
            .collect()
    }

    /// Parse a trajectory from a JSON record with an `observations` list.
    ///
    /// Unknown fields on the record and its observations are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the record schema.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<Observation> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Validate a raw state slice and copy it into a [`StateVector`].
///
/// # Errors
///
/// Returns [`CaptionError::DimensionMismatch`] if `state` does not hold exactly
/// [`STATE_DIM`] values.
pub fn state_vector(index: usize, state: &[f64]) -> Result<StateVector> {
    if state.len() != STATE_DIM {
        return Err(CaptionError::dimension_mismatch(
            index,
            STATE_DIM,
            state.len(),
        ));
    }
    Ok(StateVector::from_column_slice(state))
}
