//! Caption assembly.
//!
//! [`Captioner::caption`] produces one caption per timestep. A caption is the
//! concatenation, in this order, of:
//!
//! 1. the phrase of the highest-ranked dimension, if its |z| reaches the threshold
//! 2. the phrase of the second-ranked dimension, under the same condition
//! 3. `open gripper` / `close gripper`, decided from the raw gripper delta
//!
//! Every phrase carries a trailing `"; "`. A step where nothing qualifies
//! captions as the empty string.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::config::CaptionConfig;
use crate::error::{CaptionError, Result};
use crate::math::{future_index, StepScores, TOP_K};
use crate::trajectory::{StateVector, Trajectory};
use crate::vocabulary::{ProprioDimension, CLOSE_GRIPPER, OPEN_GRIPPER, PHRASE_SEPARATOR};

/// Heuristic motion captioner.
///
/// # Example
///
/// ```
/// use proprio_caption::{Captioner, Trajectory, DEFAULT_TIME_OFFSET};
///
/// // Forward motion of 1cm per step, gripper opening at the start.
/// let states = (0..20).map(|i| {
///     let gripper = if i < 3 { 0.0 } else { 1.0 };
///     vec![0.01 * i as f64, 0.0, 0.0, 0.0, 0.0, 0.0, gripper]
/// });
/// let trajectory = Trajectory::from_states(states);
///
/// let captioner = Captioner::bridge();
/// let captions = captioner.caption(&trajectory, DEFAULT_TIME_OFFSET)?;
///
/// assert_eq!(captions.len(), 20);
/// assert_eq!(captions[0], "move farther; open gripper; ");
/// assert_eq!(captions[19], "");
/// # Ok::<(), proprio_caption::CaptionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Captioner {
    config: CaptionConfig,
    std: StateVector,
}

impl Default for Captioner {
    fn default() -> Self {
        Self::bridge()
    }
}

impl Captioner {
    /// Create a captioner from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: CaptionConfig) -> Result<Self> {
        config.validate()?;
        let std = config.statistics.std_vector();
        Ok(Self { config, std })
    }

    /// Captioner with the bridge dataset statistics and default thresholds.
    #[must_use]
    pub fn bridge() -> Self {
        let config = CaptionConfig::bridge();
        let std = config.statistics.std_vector();
        Self { config, std }
    }

    /// Get reference to configuration.
    #[must_use]
    pub const fn config(&self) -> &CaptionConfig {
        &self.config
    }

    /// Caption every timestep of a trajectory.
    ///
    /// An empty trajectory yields an empty caption list.
    ///
    /// # Errors
    ///
    /// Returns an error if `time_offset` is zero or any observation's state
    /// does not hold exactly seven values.
    pub fn caption(&self, trajectory: &Trajectory, time_offset: usize) -> Result<Vec<String>> {
        check_time_offset(time_offset)?;
        let states = trajectory.state_vectors()?;
        self.caption_states(&states, time_offset)
    }

    /// Caption already-validated state vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if `time_offset` is zero.
    pub fn caption_states(&self, states: &[StateVector], time_offset: usize) -> Result<Vec<String>> {
        check_time_offset(time_offset)?;

        let n = states.len();
        if n == 0 {
            warn!("captioning an empty trajectory");
            return Ok(Vec::new());
        }
        debug!(n_steps = n, time_offset, "captioning trajectory");

        let caption_at = |i: usize| {
            let future = &states[future_index(i, n, time_offset)];
            self.caption_step(&states[i], future, time_offset)
        };

        #[cfg(feature = "parallel")]
        let captions = (0..n).into_par_iter().map(caption_at).collect();
        #[cfg(not(feature = "parallel"))]
        let captions = (0..n).map(caption_at).collect();

        Ok(captions)
    }

    /// Caption a single step from its state and its look-ahead state.
    ///
    /// `time_offset` must be non-zero; the batch entry points check this.
    #[must_use]
    pub fn caption_step(
        &self,
        current: &StateVector,
        future: &StateVector,
        time_offset: usize,
    ) -> String {
        let delta = future - current;
        let scores = StepScores::new(&delta, time_offset, &self.std);

        let mut caption = String::new();
        for dim in scores.ranked(TOP_K) {
            if !dim.is_ranked() || scores.magnitude(dim) < self.config.z_threshold {
                continue;
            }
            let phrase = dim.phrase(scores.direction(dim));
            trace!(?dim, z = scores.z()[dim.index()], phrase, "ranked phrase");
            push_phrase(&mut caption, phrase);
        }

        if let Some(phrase) = self.gripper_phrase(delta[ProprioDimension::Gripper.index()]) {
            trace!(delta = delta[ProprioDimension::Gripper.index()], phrase, "gripper phrase");
            push_phrase(&mut caption, phrase);
        }

        caption
    }

    fn gripper_phrase(&self, delta: f64) -> Option<&'static str> {
        let threshold = self.config.gripper_threshold;
        if delta > threshold {
            Some(OPEN_GRIPPER)
        } else if delta < -threshold {
            Some(CLOSE_GRIPPER)
        } else {
            None
        }
    }
}

/// Caption a trajectory with the bridge dataset defaults.
///
/// # Errors
///
/// See [`Captioner::caption`].
pub fn auto_caption(trajectory: &Trajectory, time_offset: usize) -> Result<Vec<String>> {
    Captioner::bridge().caption(trajectory, time_offset)
}

pub(crate) fn check_time_offset(time_offset: usize) -> Result<()> {
    if time_offset == 0 {
        return Err(CaptionError::InvalidTimeOffset(time_offset));
    }
    Ok(())
}

fn push_phrase(caption: &mut String, phrase: &str) {
    caption.push_str(phrase);
    caption.push_str(PHRASE_SEPARATOR);
}
