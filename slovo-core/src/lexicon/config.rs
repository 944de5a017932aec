//! Configuration structures and validation
//!
//! This module defines the TOML schema for lexicon data. Every section is
//! optional so the embedded tables can live in separate files and a user
//! overlay only needs the sections it extends.

use crate::error::{LexiconError, Result};
use crate::syllable::syllabify;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Headwords and endings must be lowercase Russian, optionally hyphenated
const HEADWORD_PATTERN: &str = r"^[а-яё]+(-[а-яё]+)*$";

/// Root lexicon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub adjectives: Adjectives,
    #[serde(default)]
    pub stress: StressSection,
    #[serde(default)]
    pub verbs: Vec<VerbRecord>,
    #[serde(default)]
    pub synonyms: Vec<SynonymGroup>,
}

/// Adjective set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Adjectives {
    #[serde(default)]
    pub words: Vec<String>,
}

/// Stress lexicon and ending rules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StressSection {
    #[serde(default)]
    pub entries: Vec<StressEntry>,
    #[serde(default)]
    pub rules: Vec<StressRule>,
}

/// Known stress position for one word
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressEntry {
    pub word: String,
    /// 0-based syllable index
    pub syllable: usize,
}

/// Where an ending rule counts from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressPosition {
    /// Count back from the last syllable
    #[default]
    Last,
}

/// Ending-based stress rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressRule {
    pub ending: String,
    #[serde(default)]
    pub position: StressPosition,
    #[serde(default)]
    pub offset: usize,
}

impl StressRule {
    /// Expected stress index for a word with `syllable_count` syllables
    pub fn expected_index(&self, syllable_count: usize) -> usize {
        match self.position {
            StressPosition::Last => syllable_count.saturating_sub(1 + self.offset),
        }
    }
}

/// Grammatical aspect of a verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Imperfective,
    Perfective,
}

impl Aspect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Imperfective => "imperfective",
            Aspect::Perfective => "perfective",
        }
    }
}

/// Motion-verb directionality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Directionality {
    #[default]
    NonDirectional,
    Unidirectional,
    Multidirectional,
}

impl Directionality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Directionality::NonDirectional => "non-directional",
            Directionality::Unidirectional => "unidirectional",
            Directionality::Multidirectional => "multidirectional",
        }
    }
}

/// One cell of a conjugation table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonForm {
    pub person: String,
    pub form: String,
}

/// Verb lexicon record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRecord {
    pub infinitive: String,
    pub meaning: String,
    pub aspect: Aspect,
    #[serde(default)]
    pub directionality: Directionality,
    /// Present tense, in display order
    #[serde(default)]
    pub present: Vec<PersonForm>,
    /// Past tense, in display order
    #[serde(default)]
    pub past: Vec<PersonForm>,
}

/// Synonym with an English gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub word: String,
    pub gloss: String,
}

/// Synonyms for one headword
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub headword: String,
    pub words: Vec<Synonym>,
}

impl LexiconConfig {
    /// Parse a TOML document; `origin` names it in error messages
    pub fn from_toml_str(toml_str: &str, origin: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Append `other` after `self`; on lookup conflicts the later entry wins
    pub fn merge(mut self, other: LexiconConfig) -> Self {
        self.adjectives.words.extend(other.adjectives.words);
        self.stress.entries.extend(other.stress.entries);
        self.stress.rules.extend(other.stress.rules);
        self.verbs.extend(other.verbs);
        self.synonyms.extend(other.synonyms);
        self
    }

    /// Total number of entries across all sections
    pub fn entry_count(&self) -> usize {
        self.adjectives.words.len()
            + self.stress.entries.len()
            + self.stress.rules.len()
            + self.verbs.len()
            + self.synonyms.len()
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let headword = Regex::new(HEADWORD_PATTERN)
            .map_err(|e| LexiconError::Invalid(format!("headword pattern: {e}")))?;
        let check = |section: &str, word: &str| -> Result<()> {
            if headword.is_match(&word.to_lowercase()) {
                Ok(())
            } else {
                Err(LexiconError::Invalid(format!(
                    "{section}: '{word}' is not a Russian word"
                )))
            }
        };

        for word in &self.adjectives.words {
            check("adjectives", word)?;
        }
        for entry in &self.stress.entries {
            check("stress entry", &entry.word)?;
        }
        for rule in &self.stress.rules {
            check("stress rule ending", &rule.ending)?;
        }
        for verb in &self.verbs {
            check("verb", &verb.infinitive)?;
            if verb.present.is_empty() && verb.past.is_empty() {
                return Err(LexiconError::Invalid(format!(
                    "verb '{}' has no conjugated forms",
                    verb.infinitive
                )));
            }
        }
        for group in &self.synonyms {
            check("synonym headword", &group.headword)?;
            if group.words.is_empty() {
                return Err(LexiconError::Invalid(format!(
                    "synonym group '{}' is empty",
                    group.headword
                )));
            }
        }

        Ok(())
    }

    /// Non-fatal findings: stress entries that no syllabification can reach
    pub fn warnings(&self) -> Vec<String> {
        self.stress
            .entries
            .iter()
            .filter_map(|entry| {
                let count = syllabify(&entry.word.to_lowercase()).len();
                (entry.syllable >= count).then(|| {
                    format!(
                        "stress entry '{}' points at syllable {} but the word splits into {}",
                        entry.word, entry.syllable, count
                    )
                })
            })
            .collect()
    }
}
