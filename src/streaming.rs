//! Incremental captioning of a live state stream.
//!
//! This module provides [`StreamingCaptioner`], which captions step `i` as soon
//! as step `i + time_offset` arrives and captions the remaining tail when the
//! stream ends. The concatenated output equals [`Captioner::caption`] on the
//! full trajectory.

use std::collections::VecDeque;

use tracing::debug;

use crate::captioner::{check_time_offset, Captioner};
use crate::error::Result;
use crate::trajectory::{state_vector, StateVector};

/// Upper bound on the look-ahead buffer reserved up front; it grows on demand.
const MAX_PREALLOCATED: usize = 64;

/// Streaming captioner with a look-ahead buffer of `time_offset` states.
///
/// # Example
///
/// ```
/// use proprio_caption::{Captioner, StreamingCaptioner};
///
/// let mut stream = StreamingCaptioner::new(Captioner::bridge(), 2)?;
///
/// let mut captions = Vec::new();
/// for i in 0..6 {
///     let state = [0.0, 0.0, 0.05 * i as f64, 0.0, 0.0, 0.0, 1.0];
///     if let Some((index, caption)) = stream.push(&state)? {
///         captions.push((index, caption));
///     }
/// }
/// captions.extend(stream.finish());
///
/// assert_eq!(captions.len(), 6);
/// assert_eq!(captions[0], (0, "move up; ".to_string()));
/// # Ok::<(), proprio_caption::CaptionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StreamingCaptioner {
    /// Captioner used for every step.
    captioner: Captioner,

    /// Look-ahead in steps.
    time_offset: usize,

    /// States not yet captioned, oldest first.
    pending: VecDeque<StateVector>,

    /// Stream index of the front of `pending`.
    next_index: usize,

    /// Number of states received since the last reset.
    received: usize,
}

impl StreamingCaptioner {
    /// Create a streaming captioner.
    ///
    /// # Errors
    ///
    /// Returns an error if `time_offset` is zero.
    pub fn new(captioner: Captioner, time_offset: usize) -> Result<Self> {
        check_time_offset(time_offset)?;
        Ok(Self {
            captioner,
            time_offset,
            pending: VecDeque::with_capacity(time_offset.saturating_add(1).min(MAX_PREALLOCATED)),
            next_index: 0,
            received: 0,
        })
    }

    /// Push a raw state.
    ///
    /// Returns the caption of step `n - 1 - time_offset` once enough look-ahead
    /// is buffered.
    ///
    /// # Errors
    ///
    /// Returns an error if `state` does not hold exactly seven values. The
    /// stream is left unchanged.
    pub fn push(&mut self, state: &[f64]) -> Result<Option<(usize, String)>> {
        let state = state_vector(self.received, state)?;
        Ok(self.push_state(state))
    }

    /// Push an already-validated state.
    pub fn push_state(&mut self, state: StateVector) -> Option<(usize, String)> {
        self.received += 1;
        self.pending.push_back(state);

        if self.pending.len() <= self.time_offset {
            return None;
        }

        let current = self.pending.pop_front()?;
        let caption = self
            .captioner
            .caption_step(&current, &state, self.time_offset);
        let index = self.next_index;
        self.next_index += 1;
        Some((index, caption))
    }

    /// End the stream and caption every buffered step against the last state.
    ///
    /// The captioner is reset and can be reused for a new stream.
    pub fn finish(&mut self) -> Vec<(usize, String)> {
        let Some(&last) = self.pending.back() else {
            self.reset();
            return Vec::new();
        };

        debug!(
            tail = self.pending.len(),
            total = self.received,
            "flushing streaming captions"
        );

        let start = self.next_index;
        let tail = self
            .pending
            .iter()
            .enumerate()
            .map(|(offset, current)| {
                (
                    start + offset,
                    self.captioner.caption_step(current, &last, self.time_offset),
                )
            })
            .collect();

        self.reset();
        tail
    }

    /// Drop all buffered states and restart indexing at zero.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.next_index = 0;
        self.received = 0;
    }

    /// Number of buffered, not yet captioned states.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of states received since the last reset.
    #[must_use]
    pub const fn received(&self) -> usize {
        self.received
    }

    /// Look-ahead in steps.
    #[must_use]
    pub const fn time_offset(&self) -> usize {
        self.time_offset
    }

    /// Get reference to the underlying captioner.
    #[must_use]
    pub const fn captioner(&self) -> &Captioner {
        &self.captioner
    }
}
