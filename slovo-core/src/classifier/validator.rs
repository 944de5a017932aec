//! Second-pass verdict validation

use super::{
    rules::{ends_with_any, OVERRIDE_ENDINGS},
    Category, ClassificationVerdict, CONFIDENCE_NOUN_ENDING,
};

/// Re-check a verdict against strong noun endings
///
/// A Verb or Adverb verdict for a word ending like an abstract or plural
/// noun becomes Noun/95 with `overridden` set. Any other verdict is returned
/// unchanged. Applying it twice gives the same result as applying it once.
pub fn validate(word: &str, verdict: ClassificationVerdict) -> ClassificationVerdict {
    if !matches!(verdict.category, Category::Verb | Category::Adverb) {
        return verdict;
    }

    let word = word.to_lowercase();
    if !ends_with_any(&word, OVERRIDE_ENDINGS) {
        return verdict;
    }

    tracing::debug!(
        word = %word,
        from = verdict.category.as_str(),
        "classification overridden to Noun"
    );

    ClassificationVerdict {
        category: Category::Noun,
        confidence: CONFIDENCE_NOUN_ENDING,
        overridden: true,
    }
}
