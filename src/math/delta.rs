//! Short-horizon proprioceptive deltas.
//!
//! Step `i` is compared against step `i + time_offset`. Near the end of the
//! trajectory that index runs past the last state, so the comparison state is
//! clamped to the final state. The last `min(time_offset, n)` steps therefore
//! compare against `states[n - 1]`, and the very last step always has a zero
//! delta.

use crate::trajectory::StateVector;

/// Index of the comparison state for step `index`.
///
/// `len` must be non-zero.
///
/// # Example
///
/// ```
/// use proprio_caption::math::future_index;
///
/// assert_eq!(future_index(0, 10, 5), 5);
/// assert_eq!(future_index(7, 10, 5), 9);
/// assert_eq!(future_index(0, 3, 5), 2);
/// ```
#[inline]
#[must_use]
pub const fn future_index(index: usize, len: usize, time_offset: usize) -> usize {
    let shifted = index.saturating_add(time_offset);
    if shifted < len {
        shifted
    } else {
        len - 1
    }
}

/// Comparison state for every step, shifted by `time_offset` and padded with
/// the final state.
#[must_use]
pub fn future_states(states: &[StateVector], time_offset: usize) -> Vec<StateVector> {
    let n = states.len();
    (0..n)
        .map(|i| states[future_index(i, n, time_offset)])
        .collect()
}

/// `future - current` for every step.
#[must_use]
pub fn proprio_deltas(states: &[StateVector], time_offset: usize) -> Vec<StateVector> {
    future_states(states, time_offset)
        .iter()
        .zip(states)
        .map(|(future, current)| future - current)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(n: usize) -> Vec<StateVector> {
        (0..n)
            .map(|i| {
                let x = i as f64;
                StateVector::from([x, -x, 0.0, 0.0, 0.0, 0.0, 0.0])
            })
            .collect()
    }

    #[test]
    fn test_future_shift() {
        let states = ramp(10);
        let future = future_states(&states, 3);
        assert_eq!(future.len(), 10);
        for i in 0..7 {
            assert_eq!(future[i], states[i + 3]);
        }
        for f in &future[7..] {
            assert_eq!(*f, states[9]);
        }
    }

    #[test]
    fn test_offset_longer_than_trajectory() {
        let states = ramp(3);
        let future = future_states(&states, 5);
        assert!(future.iter().all(|f| *f == states[2]));
    }

    #[test]
    fn test_deltas() {
        let states = ramp(8);
        let deltas = proprio_deltas(&states, 2);
        assert_eq!(deltas.len(), 8);

        assert_relative_eq!(deltas[0][0], 2.0);
        assert_relative_eq!(deltas[0][1], -2.0);
        // Clamped tail.
        assert_relative_eq!(deltas[6][0], 1.0);
        assert_relative_eq!(deltas[7][0], 0.0);
    }

    #[test]
    fn test_empty() {
        assert!(proprio_deltas(&[], 5).is_empty());
    }
}
