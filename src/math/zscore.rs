//! Z-score normalization and ranking of a single step.
//!
//! A delta is turned into a per-step rate (`delta / time_offset`) and divided
//! by the per-dimension action std. The sign of each z-score picks the phrase
//! direction; its magnitude decides the ranking. Unused dimensions and the
//! gripper are forced to zero magnitude so they never win a ranked slot.

use std::cmp::Ordering;

use crate::trajectory::{StateVector, STATE_DIM};
use crate::vocabulary::{Direction, ProprioDimension};

/// Number of ranked dimensions considered per step.
pub const TOP_K: usize = 2;

/// Z-scores of one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepScores {
    z: StateVector,
    magnitude: StateVector,
}

impl StepScores {
    /// Score a delta.
    ///
    /// `std` entries are expected to be positive; a zero entry yields an
    /// infinite or NaN z-score under IEEE semantics.
    #[must_use]
    pub fn new(delta: &StateVector, time_offset: usize, std: &StateVector) -> Self {
        let rate = delta / time_offset as f64;
        let z = rate.component_div(std);

        let mut magnitude = z.abs();
        for dim in ProprioDimension::ALL {
            if !dim.is_ranked() {
                magnitude[dim.index()] = 0.0;
            }
        }

        Self { z, magnitude }
    }

    /// Signed z-scores, unmasked.
    #[must_use]
    pub const fn z(&self) -> &StateVector {
        &self.z
    }

    /// Ranking magnitude of a dimension (zero for unranked dimensions).
    #[must_use]
    pub fn magnitude(&self, dim: ProprioDimension) -> f64 {
        self.magnitude[dim.index()]
    }

    /// Direction of motion along a dimension.
    #[must_use]
    pub fn direction(&self, dim: ProprioDimension) -> Direction {
        Direction::of(self.z[dim.index()])
    }

    /// The `k` dimensions with the largest magnitude, largest first.
    ///
    /// Dimensions are stably sorted by ascending magnitude and read from the
    /// end, so among equal magnitudes the higher index comes first. NaN sorts
    /// above every number.
    #[must_use]
    pub fn ranked(&self, k: usize) -> Vec<ProprioDimension> {
        let mut order: [usize; STATE_DIM] = std::array::from_fn(|i| i);
        order.sort_by(|&a, &b| self.compare(a, b));
        order
            .iter()
            .rev()
            .take(k)
            .map(|&i| ProprioDimension::ALL[i])
            .collect()
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        let (ma, mb) = (self.magnitude[a], self.magnitude[b]);
        match (ma.is_nan(), mb.is_nan()) {
            (false, false) => ma.total_cmp(&mb),
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_std() -> StateVector {
        StateVector::repeat(1.0)
    }

    #[test]
    fn test_rate_and_normalization() {
        let delta = StateVector::from([1.0, -0.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let std = StateVector::from([0.01, 0.1, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let scores = StepScores::new(&delta, 5, &std);

        assert_relative_eq!(scores.z()[0], 20.0, epsilon = 1e-9);
        assert_relative_eq!(scores.z()[1], -1.0, epsilon = 1e-9);
        assert_eq!(scores.direction(ProprioDimension::Lateral), Direction::Negative);
        assert_relative_eq!(scores.magnitude(ProprioDimension::Lateral), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unranked_dimensions_masked() {
        let delta = StateVector::from([0.1, 0.0, 0.0, 9.0, -9.0, 0.0, 9.0]);
        let scores = StepScores::new(&delta, 1, &unit_std());

        assert_eq!(scores.magnitude(ProprioDimension::Unused3), 0.0);
        assert_eq!(scores.magnitude(ProprioDimension::Unused4), 0.0);
        assert_eq!(scores.magnitude(ProprioDimension::Gripper), 0.0);
        // The signed score survives masking.
        assert_relative_eq!(scores.z()[6], 9.0);

        assert_eq!(scores.ranked(1), vec![ProprioDimension::Depth]);
    }

    #[test]
    fn test_ranking_order() {
        let delta = StateVector::from([0.2, 0.9, -0.5, 0.0, 0.0, 0.7, 0.0]);
        let scores = StepScores::new(&delta, 1, &unit_std());
        assert_eq!(
            scores.ranked(TOP_K),
            vec![ProprioDimension::Lateral, ProprioDimension::Rotation]
        );
        assert_eq!(scores.ranked(4).len(), 4);
    }

    #[test]
    fn test_ties_prefer_higher_index() {
        let delta = StateVector::from([0.4, 0.4, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let scores = StepScores::new(&delta, 1, &unit_std());
        assert_eq!(
            scores.ranked(TOP_K),
            vec![ProprioDimension::Lateral, ProprioDimension::Depth]
        );

        let zero = StepScores::new(&StateVector::zeros(), 1, &unit_std());
        assert_eq!(
            zero.ranked(TOP_K),
            vec![ProprioDimension::Gripper, ProprioDimension::Rotation]
        );
    }

    #[test]
    fn test_unused_dimensions_never_reach_top_slots() {
        let deltas = [
            [0.0, 0.0, 0.0, 50.0, 50.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, -7.0, 7.0, 0.0, 9.0],
            [0.3, 0.0, 0.0, 50.0, -50.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 1.0, 0.2, 0.0],
        ];
        for delta in deltas {
            let scores = StepScores::new(&StateVector::from(delta), 1, &unit_std());
            let top = scores.ranked(TOP_K);
            assert!(!top.contains(&ProprioDimension::Unused3), "{delta:?}");
            assert!(!top.contains(&ProprioDimension::Unused4), "{delta:?}");
        }

        let zero = StepScores::new(&StateVector::from(deltas[0]), 1, &unit_std());
        assert_eq!(
            zero.ranked(TOP_K),
            vec![ProprioDimension::Gripper, ProprioDimension::Rotation]
        );
    }

    #[test]
    fn test_zero_std_gives_non_finite() {
        let delta = StateVector::from([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let mut std = unit_std();
        std[0] = 0.0;
        std[1] = 0.0;
        let scores = StepScores::new(&delta, 1, &std);
        assert!(scores.z()[0].is_infinite());
        assert!(scores.z()[1].is_nan());
        assert_eq!(scores.ranked(1), vec![ProprioDimension::Lateral]);
    }
}
