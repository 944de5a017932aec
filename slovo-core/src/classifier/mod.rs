//! Part-of-speech classification
//!
//! [`classify`] runs exact lexicon lookups followed by ordered suffix rules
//! and always returns a verdict. [`validate`] is the second pass that can
//! override a verb or adverb verdict with stronger noun evidence. Compose
//! them as `validate(word, classify(lexicon, word))`.

pub mod rules;
mod validator;

pub use validator::validate;

use crate::lexicon::Lexicon;
use rules::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence of an exact lexicon hit
pub const CONFIDENCE_LEXICON: u8 = 100;
/// Plural/abstract noun ending, also used for validator overrides
pub const CONFIDENCE_NOUN_ENDING: u8 = 95;
/// Adjective agreement ending
pub const CONFIDENCE_ADJECTIVE_ENDING: u8 = 90;
/// Infinitive ending
pub const CONFIDENCE_VERB_ENDING: u8 = 85;
/// Any other word ending in the noun vowel
pub const CONFIDENCE_NOUN_VOWEL: u8 = 70;
/// Adverb vowel ending
pub const CONFIDENCE_ADVERB_ENDING: u8 = 65;
/// No evidence at all
pub const CONFIDENCE_DEFAULT: u8 = 50;

/// Part of speech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Verb,
    Adjective,
    Adverb,
    Noun,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Verb,
        Category::Adjective,
        Category::Adverb,
        Category::Noun,
    ];

    /// Display label ("Verb")
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Verb => "Verb",
            Category::Adjective => "Adjective",
            Category::Adverb => "Adverb",
            Category::Noun => "Noun",
        }
    }

    /// Lowercase key ("verb"), as stored in vocabulary files
    pub fn key(&self) -> &'static str {
        match self {
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Adverb => "adverb",
            Category::Noun => "noun",
        }
    }

    /// Parse either form, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationVerdict {
    pub category: Category,
    /// Evidence strength, 0..=100
    pub confidence: u8,
    /// Set only when the validator replaced the first-pass verdict
    #[serde(default)]
    pub overridden: bool,
}

impl ClassificationVerdict {
    pub const fn new(category: Category, confidence: u8) -> Self {
        Self {
            category,
            confidence,
            overridden: false,
        }
    }

    /// Whether the verdict came from an exact lexicon match
    pub fn is_exact(&self) -> bool {
        self.confidence == CONFIDENCE_LEXICON
    }
}

/// Classify `word` against `lexicon`
///
/// Total and deterministic: every input, including the empty string and
/// non-Cyrillic text, yields exactly one verdict.
pub fn classify(lexicon: &Lexicon, word: &str) -> ClassificationVerdict {
    let word = word.to_lowercase();

    if lexicon.is_verb(&word) {
        return ClassificationVerdict::new(Category::Verb, CONFIDENCE_LEXICON);
    }

    if lexicon.is_adjective(&word) {
        return ClassificationVerdict::new(Category::Adjective, CONFIDENCE_LEXICON);
    }

    if ends_with_guarded(&word, VERB_ENDINGS, VERB_EXCLUSIONS) {
        return ClassificationVerdict::new(Category::Verb, CONFIDENCE_VERB_ENDING);
    }

    if ends_with_any(&word, ADJECTIVE_ENDINGS) {
        return ClassificationVerdict::new(Category::Adjective, CONFIDENCE_ADJECTIVE_ENDING);
    }

    if ends_with_guarded(&word, ADVERB_ENDINGS, ADVERB_EXCLUSIONS) {
        return ClassificationVerdict::new(Category::Adverb, CONFIDENCE_ADVERB_ENDING);
    }

    if word.ends_with(NOUN_VOWEL_ENDING) {
        let confidence = if ends_with_any(&word, NOUN_ENDINGS) {
            CONFIDENCE_NOUN_ENDING
        } else {
            CONFIDENCE_NOUN_VOWEL
        };
        return ClassificationVerdict::new(Category::Noun, confidence);
    }

    ClassificationVerdict::new(Category::Noun, CONFIDENCE_DEFAULT)
}
