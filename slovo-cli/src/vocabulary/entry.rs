//! Vocabulary entry records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slovo_core::Category;
use std::fmt;

/// Study lists every store starts with
pub const STUDY_LISTS: [&str; 4] = ["review", "supplemental", "critical", "lesson"];

/// Word type as stored in vocabulary files ("verb", "noun", ...)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Verb,
    Adjective,
    Adverb,
    #[default]
    Noun,
}

impl WordType {
    pub fn category(self) -> Category {
        match self {
            WordType::Verb => Category::Verb,
            WordType::Adjective => Category::Adjective,
            WordType::Adverb => Category::Adverb,
            WordType::Noun => Category::Noun,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.category().key()
    }
}

impl From<Category> for WordType {
    fn from(category: Category) -> Self {
        match category {
            Category::Verb => WordType::Verb,
            Category::Adjective => WordType::Adjective,
            Category::Adverb => WordType::Adverb,
            Category::Noun => WordType::Noun,
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One saved word
///
/// Analysis fields are a snapshot taken when the word was added; they are
/// not recomputed when the lexicon changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub id: u64,
    pub word: String,
    /// Word with the stressed syllable marked
    #[serde(default)]
    pub word_displayed: Option<String>,
    pub translation: String,
    #[serde(default)]
    pub sentence: Option<String>,
    /// Study list
    pub category: String,
    #[serde(default)]
    pub word_type: WordType,
    /// Display label of `word_type` ("Verb")
    #[serde(default)]
    pub word_category: Option<String>,
    pub date_added: NaiveDate,
    #[serde(default)]
    pub last_reviewed: Option<NaiveDate>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub is_verb: bool,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub overridden: bool,
    #[serde(default)]
    pub stress_index: Option<usize>,
    #[serde(default)]
    pub stress_confidence: Option<u8>,
}

impl VocabularyEntry {
    /// Example shown on flashcards: the sentence, else the first example
    pub fn example(&self) -> &str {
        self.sentence
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.examples.first().map(String::as_str))
            .unwrap_or("")
    }

    /// Case-insensitive substring match on word or translation
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.word.to_lowercase().contains(&needle)
            || self.translation.to_lowercase().contains(&needle)
    }

    /// Display form, falling back to the plain word
    pub fn display_word(&self) -> &str {
        self.word_displayed.as_deref().unwrap_or(&self.word)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Minimal entry for store and export tests
    pub fn entry(id: u64, word: &str, translation: &str, list: &str, date: &str) -> VocabularyEntry {
        VocabularyEntry {
            id,
            word: word.to_string(),
            word_displayed: None,
            translation: translation.to_string(),
            sentence: None,
            category: list.to_string(),
            word_type: WordType::Noun,
            word_category: Some("Noun".to_string()),
            date_added: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            last_reviewed: None,
            examples: Vec::new(),
            is_verb: false,
            confidence: Some(50),
            overridden: false,
            stress_index: Some(0),
            stress_confidence: Some(40),
        }
    }
}
