//! Read-only lookup tables for classification and stress
//!
//! A [`Lexicon`] is built once from [`LexiconConfig`] and never mutated, so
//! it can be shared across threads without locking. Keys are stored
//! lowercased; every lookup lowercases its argument.

pub(crate) mod config;
pub(crate) mod loader;

pub use config::{
    Adjectives, Aspect, Directionality, LexiconConfig, PersonForm, StressEntry, StressPosition,
    StressRule, StressSection, Synonym, SynonymGroup, VerbRecord,
};
pub use loader::{builtin, builtin_config};

use crate::error::Result;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Verb, adjective, stress and synonym tables
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    verbs: HashMap<String, VerbRecord>,
    adjectives: HashSet<String>,
    stress: HashMap<String, usize>,
    stress_rules: Vec<StressRule>,
    synonyms: HashMap<String, Vec<Synonym>>,
}

impl Lexicon {
    /// Lexicon with no entries; every word falls through to the defaults
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from configuration
    ///
    /// Entries are inserted in order, so a repeated key keeps its last value.
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        config.validate()?;

        let verbs = config
            .verbs
            .iter()
            .map(|verb| (verb.infinitive.to_lowercase(), verb.clone()))
            .collect();

        let adjectives = config
            .adjectives
            .words
            .iter()
            .map(|word| word.to_lowercase())
            .collect();

        let stress = config
            .stress
            .entries
            .iter()
            .map(|entry| (entry.word.to_lowercase(), entry.syllable))
            .collect();

        let stress_rules = config
            .stress
            .rules
            .iter()
            .map(|rule| StressRule {
                ending: rule.ending.to_lowercase(),
                ..rule.clone()
            })
            .collect();

        let synonyms = config
            .synonyms
            .iter()
            .map(|group| (group.headword.to_lowercase(), group.words.clone()))
            .collect();

        Ok(Self {
            verbs,
            adjectives,
            stress,
            stress_rules,
            synonyms,
        })
    }

    /// Parse a TOML document and build a lexicon from it alone
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::from_config(&LexiconConfig::from_toml_str(toml_str, "<inline>")?)
    }

    /// Load a lexicon file on its own, without the built-in tables
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_config(&read_config(path)?)
    }

    /// Built-in tables with the entries of `path` layered on top
    pub fn builtin_with_overlay(path: &Path) -> Result<Self> {
        let overlay = read_config(path)?;
        let merged = builtin_config()?.merge(overlay);
        tracing::info!(
            path = %path.display(),
            entries = merged.entry_count(),
            "loaded lexicon overlay"
        );
        Self::from_config(&merged)
    }

    /// Verb record for `word`, if it is a known infinitive
    pub fn verb(&self, word: &str) -> Option<&VerbRecord> {
        self.verbs.get(&word.to_lowercase())
    }

    /// Whether `word` is a known verb
    pub fn is_verb(&self, word: &str) -> bool {
        self.verb(word).is_some()
    }

    /// Whether `word` is in the adjective set
    pub fn is_adjective(&self, word: &str) -> bool {
        self.adjectives.contains(&word.to_lowercase())
    }

    /// Stored stress index for `word`
    pub fn stress_index(&self, word: &str) -> Option<usize> {
        self.stress.get(&word.to_lowercase()).copied()
    }

    /// First ending rule matching the already-lowercased `word`
    pub fn stress_rule_for(&self, word: &str) -> Option<&StressRule> {
        self.stress_rules
            .iter()
            .find(|rule| word.ends_with(rule.ending.as_str()))
    }

    /// Ending rules in evaluation order
    pub fn stress_rules(&self) -> &[StressRule] {
        &self.stress_rules
    }

    /// Synonyms for `word`; empty if none are known
    pub fn synonyms(&self, word: &str) -> &[Synonym] {
        self.synonyms
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Known infinitives, sorted
    pub fn verbs(&self) -> Vec<&str> {
        let mut verbs: Vec<&str> = self.verbs.keys().map(String::as_str).collect();
        verbs.sort_unstable();
        verbs
    }

    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    pub fn adjective_count(&self) -> usize {
        self.adjectives.len()
    }

    pub fn stress_entry_count(&self) -> usize {
        self.stress.len()
    }
}

fn read_config(path: &Path) -> Result<LexiconConfig> {
    let content = std::fs::read_to_string(path)?;
    LexiconConfig::from_toml_str(&content, &path.display().to_string())
}
