//! Full per-word pipeline
//!
//! [`analyze`] chains the syllabifier, classifier, validator and stress
//! resolver into one serializable snapshot. The snapshot is what callers
//! persist; later lexicon changes do not alter it.

use crate::classifier::{classify, validate, Category};
use crate::lexicon::Lexicon;
use crate::stress::{detect_stress, validate_stress, StressMarker};
use crate::syllable::syllabify;
use serde::{Deserialize, Serialize};

/// Everything the pipeline knows about one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// Input as given
    pub word: String,
    /// Lowercased form used for every lookup
    pub normalized: String,
    pub syllables: Vec<String>,
    /// Category after validation
    pub category: Category,
    pub confidence: u8,
    pub overridden: bool,
    /// First-pass category, differs from `category` only when overridden
    pub detected_category: Category,
    pub stress_index: usize,
    pub stress_confidence: u8,
    pub stress_valid: bool,
    pub stress_message: String,
    /// Word with the stressed syllable wrapped in the marker
    pub marked: String,
}

impl WordAnalysis {
    /// Whether the final verdict is too weak to accept without confirmation
    pub fn is_low_confidence(&self, threshold: u8) -> bool {
        self.confidence < threshold
    }

    /// Whether the validator replaced the first-pass category
    pub fn was_corrected(&self) -> bool {
        self.overridden && self.detected_category != self.category
    }
}

/// Analyze `word` with the default stress marker
pub fn analyze(lexicon: &Lexicon, word: &str) -> WordAnalysis {
    analyze_with_marker(lexicon, word, &StressMarker::default())
}

/// Analyze `word`, rendering stress with `marker`
pub fn analyze_with_marker(lexicon: &Lexicon, word: &str, marker: &StressMarker) -> WordAnalysis {
    let normalized = word.to_lowercase();
    let syllables = syllabify(&normalized).into_vec();

    let first = classify(lexicon, word);
    let verdict = validate(word, first);

    let stress_index = detect_stress(lexicon, word);
    let stress = validate_stress(lexicon, word, stress_index);
    let marked = marker.apply(word, stress_index);

    tracing::trace!(
        word,
        category = verdict.category.as_str(),
        confidence = verdict.confidence,
        stress_index,
        "analyzed word"
    );

    WordAnalysis {
        word: word.to_string(),
        normalized,
        syllables,
        category: verdict.category,
        confidence: verdict.confidence,
        overridden: verdict.overridden,
        detected_category: first.category,
        stress_index,
        stress_confidence: stress.confidence,
        stress_valid: stress.valid,
        stress_message: stress.message,
        marked,
    }
}

/// Analyze many words, keeping input order
///
/// Runs on the rayon pool when the `parallel` feature is enabled.
pub fn analyze_batch<S>(lexicon: &Lexicon, words: &[S], marker: &StressMarker) -> Vec<WordAnalysis>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        words
            .par_iter()
            .map(|word| analyze_with_marker(lexicon, word.as_ref(), marker))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        words
            .iter()
            .map(|word| analyze_with_marker(lexicon, word.as_ref(), marker))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::builtin;

    #[test]
    fn test_analyze_lexicon_verb() {
        let analysis = analyze(builtin(), "работать");
        assert_eq!(analysis.category, Category::Verb);
        assert_eq!(analysis.confidence, 100);
        assert_eq!(analysis.syllables, vec!["ра", "бо", "тать"]);
        assert_eq!(analysis.stress_index, 0);
        assert_eq!(analysis.stress_confidence, 100);
        assert!(analysis.stress_valid);
        assert_eq!(analysis.marked, "<b>ра</b>ботать");
        assert!(!analysis.was_corrected());
    }

    #[test]
    fn test_analyze_records_correction() {
        let analysis = analyze(builtin(), "Кости");
        assert_eq!(analysis.normalized, "кости");
        assert_eq!(analysis.detected_category, Category::Verb);
        assert_eq!(analysis.category, Category::Noun);
        assert_eq!(analysis.confidence, 95);
        assert!(analysis.overridden);
        assert!(analysis.was_corrected());
    }

    #[test]
    fn test_analyze_rule_stress() {
        let analysis = analyze(builtin(), "рыбак");
        assert_eq!(analysis.stress_index, 1);
        assert_eq!(analysis.stress_confidence, 85);
        assert_eq!(analysis.marked, "ры<b>бак</b>");
    }

    #[test]
    fn test_low_confidence_threshold() {
        let analysis = analyze(builtin(), "стол");
        assert_eq!(analysis.confidence, 50);
        assert!(analysis.is_low_confidence(80));
        assert!(!analyze(builtin(), "красный").is_low_confidence(80));
    }

    #[test]
    fn test_analyze_empty_word() {
        let analysis = analyze(builtin(), "");
        assert_eq!(analysis.category, Category::Noun);
        assert_eq!(analysis.syllables, vec![""]);
        assert_eq!(analysis.stress_index, 0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let words = ["вода", "хорошо", "кости", "рыбак", "красный"];
        let batch = analyze_batch(builtin(), &words, &StressMarker::default());
        assert_eq!(batch.len(), words.len());
        for (analysis, word) in batch.iter().zip(words) {
            assert_eq!(analysis, &analyze(builtin(), word));
        }
    }

    #[test]
    fn test_snapshot_serializes() {
        let analysis = analyze(builtin(), "вода");
        let json = serde_json::to_string(&analysis).unwrap();
        let back: WordAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}
