//! Stress detection and validation
//!
//! Evidence is consulted in a fixed order: the stress lexicon, then the
//! first matching ending rule, then the first-syllable default.

mod format;

pub use format::{format_with_stress, StressMarker};

use crate::lexicon::Lexicon;
use crate::syllable::syllabify;
use serde::{Deserialize, Serialize};

/// Confidence when the stress lexicon has the word
pub const CONFIDENCE_LEXICON: u8 = 100;
/// Confidence when an ending rule applies
pub const CONFIDENCE_RULE: u8 = 85;
/// Confidence of the unconditional fallback
pub const CONFIDENCE_DEFAULT: u8 = 40;

/// Which piece of evidence decided a stress verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressSource {
    OutOfRange,
    Lexicon,
    Rule,
    Default,
}

/// Result of checking a proposed stress index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressVerdict {
    /// Proposed 0-based syllable index
    pub index: usize,
    pub confidence: u8,
    pub valid: bool,
    /// Index the evidence expects, when there is one
    pub expected: Option<usize>,
    pub source: StressSource,
    pub message: String,
}

/// Stressed syllable index for `word`
///
/// Total: unknown words without a matching rule get the first syllable.
pub fn detect_stress(lexicon: &Lexicon, word: &str) -> usize {
    let word = word.to_lowercase();

    if let Some(index) = lexicon.stress_index(&word) {
        return index;
    }

    if let Some(rule) = lexicon.stress_rule_for(&word) {
        return rule.expected_index(syllabify(&word).len());
    }

    0
}

/// Check a proposed stress index against the available evidence
///
/// Out-of-range indices are invalid with confidence 0. Words with no
/// evidence are accepted at low confidence rather than rejected.
pub fn validate_stress(lexicon: &Lexicon, word: &str, proposed: usize) -> StressVerdict {
    let word = word.to_lowercase();
    let syllable_count = syllabify(&word).len();

    if proposed >= syllable_count {
        return StressVerdict {
            index: proposed,
            confidence: 0,
            valid: false,
            expected: None,
            source: StressSource::OutOfRange,
            message: "Stress position outside word boundaries".to_string(),
        };
    }

    if let Some(expected) = lexicon.stress_index(&word) {
        let valid = proposed == expected;
        return StressVerdict {
            index: proposed,
            confidence: CONFIDENCE_LEXICON,
            valid,
            expected: Some(expected),
            source: StressSource::Lexicon,
            message: if valid {
                "Correct stress".to_string()
            } else {
                format!("Expected stress on syllable {}", expected + 1)
            },
        };
    }

    if let Some(rule) = lexicon.stress_rule_for(&word) {
        let expected = rule.expected_index(syllable_count);
        let valid = proposed == expected;
        return StressVerdict {
            index: proposed,
            confidence: CONFIDENCE_RULE,
            valid,
            expected: Some(expected),
            source: StressSource::Rule,
            message: if valid {
                "Correct stress".to_string()
            } else {
                format!("Pattern suggests stress on syllable {}", expected + 1)
            },
        };
    }

    StressVerdict {
        index: proposed,
        confidence: CONFIDENCE_DEFAULT,
        valid: true,
        expected: None,
        source: StressSource::Default,
        message: "Stress position accepted (low confidence)".to_string(),
    }
}
