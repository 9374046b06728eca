//! Caption vocabulary.
//!
//! Each proprioceptive dimension maps to a pair of directional phrases,
//! `(positive direction, negative direction)`. Dimensions 3 and 4 are unused
//! and map to empty phrases. The gripper entry exists for completeness only:
//! gripper captions are decided from the raw delta and always use
//! [`OPEN_GRIPPER`] or [`CLOSE_GRIPPER`].

use crate::trajectory::STATE_DIM;

/// Separator appended after every emitted phrase, including the last one.
pub const PHRASE_SEPARATOR: &str = "; ";

/// Phrase emitted when the gripper delta exceeds the positive threshold.
pub const OPEN_GRIPPER: &str = "open gripper";

/// Phrase emitted when the gripper delta is below the negative threshold.
pub const CLOSE_GRIPPER: &str = "close gripper";

/// Directional phrases indexed by dimension, then by direction
/// (`0` = positive or zero, `1` = negative).
pub const DIRECTIONAL_CAPTIONS: [[&str; 2]; STATE_DIM] = [
    ["move farther", "move closer"],
    ["move left", "move right"],
    ["move up", "move down"],
    ["", ""],
    ["", ""],
    ["rotate left", "rotate right"],
    [OPEN_GRIPPER, CLOSE_GRIPPER],
];

/// Sign of a z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Strictly negative.
    Negative,
    /// Exactly zero, or NaN.
    #[default]
    Zero,
    /// Strictly positive.
    Positive,
}

impl Direction {
    /// Classify the sign of a value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Self::Negative
        } else if value > 0.0 {
            Self::Positive
        } else {
            Self::Zero
        }
    }

    /// Column in [`DIRECTIONAL_CAPTIONS`]. Zero reads as positive.
    #[must_use]
    pub const fn column(self) -> usize {
        match self {
            Self::Negative => 1,
            Self::Zero | Self::Positive => 0,
        }
    }
}

/// Named proprioceptive dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProprioDimension {
    /// Index 0: forward/back.
    Depth,
    /// Index 1: left/right.
    Lateral,
    /// Index 2: up/down.
    Vertical,
    /// Index 3.
    Unused3,
    /// Index 4.
    Unused4,
    /// Index 5: rotation about the vertical axis.
    Rotation,
    /// Index 6: gripper aperture/force.
    Gripper,
}

impl ProprioDimension {
    /// All dimensions in index order.
    pub const ALL: [Self; STATE_DIM] = [
        Self::Depth,
        Self::Lateral,
        Self::Vertical,
        Self::Unused3,
        Self::Unused4,
        Self::Rotation,
        Self::Gripper,
    ];

    /// Dimension for a state index, if in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < STATE_DIM {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Index in the state vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the dimension competes for the top-ranked caption slots.
    ///
    /// Unused dimensions never caption and the gripper has its own rule.
    #[must_use]
    pub const fn is_ranked(self) -> bool {
        !matches!(self, Self::Unused3 | Self::Unused4 | Self::Gripper)
    }

    /// Phrase describing motion along this dimension.
    #[must_use]
    pub const fn phrase(self, direction: Direction) -> &'static str {
        DIRECTIONAL_CAPTIONS[self.index()][direction.column()]
    }
}
