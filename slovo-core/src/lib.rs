//! Heuristic Russian word analysis
//!
//! This crate classifies Russian words by part of speech, splits them into
//! syllables, and resolves and validates lexical stress. Every analysis is a
//! pure function over an immutable [`Lexicon`], so results are deterministic
//! and the crate can be used from many threads at once.
//!
//! # Pipeline
//!
//! - [`classify`] produces a first-pass [`ClassificationVerdict`] from
//!   lexicon lookups and ordered suffix rules.
//! - [`validate`] may override a Verb or Adverb verdict with noun evidence.
//! - [`detect_stress`] and [`validate_stress`] work on syllable indices.
//! - [`format_with_stress`] renders the stressed syllable.
//! - [`analyze`] runs all of the above and returns a [`WordAnalysis`].
//!
//! The free functions at the crate root use the built-in lexicon. The
//! module-level functions take an explicit `&Lexicon` for callers that load
//! their own tables.
//!
//! # Example
//!
//! ```rust
//! use slovo_core::{classify_and_validate, detect_stress, format_with_stress, Category};
//!
//! let verdict = classify_and_validate("радости");
//! assert_eq!(verdict.category, Category::Noun);
//! assert!(verdict.overridden);
//!
//! let index = detect_stress("вода");
//! assert_eq!(format_with_stress("вода", index), "во<b>да</b>");
//! ```

pub mod analysis;
pub mod classifier;
pub mod error;
pub mod lexicon;
pub mod script;
pub mod stress;
pub mod syllable;

pub use analysis::{analyze_batch, WordAnalysis};
pub use classifier::{Category, ClassificationVerdict};
pub use error::{LexiconError, Result};
pub use lexicon::{Aspect, Directionality, Lexicon, LexiconConfig, Synonym, VerbRecord};
pub use script::is_target_script;
pub use stress::{format_with_stress, StressMarker, StressSource, StressVerdict};
pub use syllable::{syllabify, Syllables};

/// First-pass classification against the built-in lexicon
pub fn classify(word: &str) -> ClassificationVerdict {
    classifier::classify(lexicon::builtin(), word)
}

/// Second-pass validation of a verdict for `word`
pub fn validate(word: &str, verdict: ClassificationVerdict) -> ClassificationVerdict {
    classifier::validate(word, verdict)
}

/// `validate(word, classify(word))`
pub fn classify_and_validate(word: &str) -> ClassificationVerdict {
    validate(word, classify(word))
}

/// Stressed syllable index using the built-in lexicon
pub fn detect_stress(word: &str) -> usize {
    stress::detect_stress(lexicon::builtin(), word)
}

/// Validate a proposed stress index using the built-in lexicon
pub fn validate_stress(word: &str, proposed: usize) -> StressVerdict {
    stress::validate_stress(lexicon::builtin(), word, proposed)
}

/// Full analysis using the built-in lexicon and default marker
pub fn analyze(word: &str) -> WordAnalysis {
    analysis::analyze(lexicon::builtin(), word)
}
