//! Caption coverage analysis.
//!
//! Summarizes a caption sequence: how many steps are uncaptioned and how often
//! each phrase occurs. Useful for sanity-checking statistics on a new dataset
//! before exporting captions.

use std::collections::BTreeMap;

use crate::vocabulary::{CLOSE_GRIPPER, OPEN_GRIPPER, PHRASE_SEPARATOR};

/// Phrase statistics over a caption sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionAnalysis {
    /// Number of captions analyzed.
    pub total_steps: usize,

    /// Captions with no phrase.
    pub empty_steps: usize,

    /// Occurrences of each phrase, separator stripped.
    pub phrase_counts: BTreeMap<String, usize>,

    /// Steps captioned with `open gripper`.
    pub open_gripper_steps: usize,

    /// Steps captioned with `close gripper`.
    pub close_gripper_steps: usize,
}

impl CaptionAnalysis {
    /// Fraction of steps with an empty caption (0 for no steps).
    #[must_use]
    pub fn empty_fraction(&self) -> f64 {
        if self.total_steps == 0 {
            return 0.0;
        }
        self.empty_steps as f64 / self.total_steps as f64
    }

    /// Most frequent phrase. Ties resolve to the alphabetically first phrase.
    #[must_use]
    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.phrase_counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(phrase, &count)| (phrase.as_str(), count))
    }
}

/// Split a caption into its phrases.
///
/// ```
/// use proprio_caption::analysis::split_phrases;
///
/// let phrases: Vec<&str> = split_phrases("move up; open gripper; ").collect();
/// assert_eq!(phrases, ["move up", "open gripper"]);
/// ```
pub fn split_phrases(caption: &str) -> impl Iterator<Item = &str> {
    caption
        .split(PHRASE_SEPARATOR)
        .filter(|phrase| !phrase.is_empty())
}

/// Analyze a caption sequence.
#[must_use]
pub fn analyze_captions<S: AsRef<str>>(captions: &[S]) -> CaptionAnalysis {
    let mut analysis = CaptionAnalysis {
        total_steps: captions.len(),
        ..CaptionAnalysis::default()
    };

    for caption in captions {
        let mut phrases = split_phrases(caption.as_ref()).peekable();
        if phrases.peek().is_none() {
            analysis.empty_steps += 1;
            continue;
        }
        for phrase in phrases {
            match phrase {
                OPEN_GRIPPER => analysis.open_gripper_steps += 1,
                CLOSE_GRIPPER => analysis.close_gripper_steps += 1,
                _ => {}
            }
            *analysis.phrase_counts.entry(phrase.to_string()).or_insert(0) += 1;
        }
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis() {
        let captions = [
            "move farther; open gripper; ",
            "move farther; move up; ",
            "",
            "close gripper; ",
            "",
        ];
        let a = analyze_captions(&captions);

        assert_eq!(a.total_steps, 5);
        assert_eq!(a.empty_steps, 2);
        assert!((a.empty_fraction() - 0.4).abs() < 1e-12);
        assert_eq!(a.open_gripper_steps, 1);
        assert_eq!(a.close_gripper_steps, 1);
        assert_eq!(a.phrase_counts["move farther"], 2);
        assert_eq!(a.most_common(), Some(("move farther", 2)));
    }

    #[test]
    fn test_empty_input() {
        let a = analyze_captions::<String>(&[]);
        assert_eq!(a.total_steps, 0);
        assert_eq!(a.empty_fraction(), 0.0);
        assert!(a.most_common().is_none());
    }

    #[test]
    fn test_most_common_tie() {
        let a = analyze_captions(&["move up; ", "move down; "]);
        assert_eq!(a.most_common(), Some(("move down", 1)));
    }
}
