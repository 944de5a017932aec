//! Suffix tables for part-of-speech heuristics
//!
//! Each rule is an ending list plus an exclusion list; rules are tried in
//! the order they appear in [`classify`](super::classify).

/// Infinitive endings
pub const VERB_ENDINGS: &[&str] = &["ть", "ти"];

/// Abstract nouns that also end like an infinitive
pub const VERB_EXCLUSIONS: &[&str] = &["ности", "ность"];

/// Short adjective agreement endings
pub const ADJECTIVE_ENDINGS: &[&str] = &["ый", "ой", "ий", "ая", "ое", "ее", "ём"];

/// Vowel endings typical of adverbs
pub const ADVERB_ENDINGS: &[&str] = &["о", "е"];

/// Diminutive, abstract and collective noun endings that rule out an adverb
pub const ADVERB_EXCLUSIONS: &[&str] = &["ка", "ко", "ние", "ца", "ости", "ость"];

/// Trailing vowel shared by the noun plural/prepositional rules
pub const NOUN_VOWEL_ENDING: &str = "и";

/// Abstract, plural and prepositional noun endings
///
/// Only consulted for words ending in [`NOUN_VOWEL_ENDING`], so the `-ения`
/// and `-жения` entries never match here.
pub const NOUN_ENDINGS: &[&str] = &["ности", "ости", "ации", "жения", "ения", "ении"];

/// Endings strong enough for the validator to force a noun
pub const OVERRIDE_ENDINGS: &[&str] = &["ности", "ости", "ации", "жения", "ения"];

/// Whether `word` ends in any of `endings`
#[inline]
pub fn ends_with_any(word: &str, endings: &[&str]) -> bool {
    endings.iter().any(|ending| word.ends_with(ending))
}

/// Whether `word` ends in one of `endings` and in none of `exclusions`
#[inline]
pub fn ends_with_guarded(word: &str, endings: &[&str], exclusions: &[&str]) -> bool {
    ends_with_any(word, endings) && !ends_with_any(word, exclusions)
}
