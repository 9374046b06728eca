//! Proprioceptive Motion Captions
//!
//! Heuristic natural-language captions for robot manipulation trajectories.
//!
//! For every timestep the captioner compares the proprioceptive state with
//! the state `time_offset` steps ahead, normalizes the per-step rate by the
//! dataset's action std, and names the two dominant motions. Gripper
//! open/close events are captioned separately from the raw gripper delta.
//!
//! # Features
//!
//! - **Deterministic**: a pure function of the trajectory and fixed statistics
//! - **Index-aligned**: exactly one caption per input timestep
//! - **Streaming support**: incremental captioner with identical output
//! - **Swappable statistics**: inject dataset-specific action std tables
//!
//! # Quick Start
//!
//! ```
//! use proprio_caption::{auto_caption, Trajectory};
//!
//! // Moving down and closing the gripper at the end.
//! let states: Vec<[f64; 7]> = (0..12)
//!     .map(|i| {
//!         let gripper = if i < 9 { 1.0 } else { 0.0 };
//!         [0.0, 0.0, -0.02 * i as f64, 0.0, 0.0, 0.0, gripper]
//!     })
//!     .collect();
//! let trajectory = Trajectory::from_states(states);
//!
//! let captions = auto_caption(&trajectory, 5)?;
//! assert_eq!(captions.len(), 12);
//! assert_eq!(captions[0], "move down; ");
//! assert_eq!(captions[4], "move down; close gripper; ");
//! # Ok::<(), proprio_caption::CaptionError>(())
//! ```
//!
//! # Caption Vocabulary
//!
//! | Index | Positive | Negative |
//! |-------|----------|----------|
//! | 0 | move farther | move closer |
//! | 1 | move left | move right |
//! | 2 | move up | move down |
//! | 5 | rotate left | rotate right |
//! | 6 | open gripper | close gripper |
//!
//! Dimensions 3 and 4 never caption.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod analysis;
pub mod captioner;
pub mod config;
pub mod error;
pub mod math;
pub mod statistics;
pub mod streaming;
pub mod trajectory;
pub mod vocabulary;

// Re-exports for convenient access
pub use analysis::{analyze_captions, split_phrases, CaptionAnalysis};
pub use captioner::{auto_caption, Captioner};
pub use config::{
    CaptionConfig, DEFAULT_GRIPPER_THRESHOLD, DEFAULT_TIME_OFFSET, DEFAULT_Z_THRESHOLD,
};
pub use error::{CaptionError, Result};
pub use math::StepScores;
pub use statistics::{ActionStatistics, BRIDGE_ACTION_MEAN, BRIDGE_ACTION_STD};
pub use streaming::StreamingCaptioner;
pub use trajectory::{Observation, StateVector, Trajectory, STATE_DIM};
pub use vocabulary::{Direction, ProprioDimension};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
