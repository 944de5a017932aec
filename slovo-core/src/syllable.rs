//! Vowel-boundary syllabification
//!
//! Every vowel closes a syllable; a trailing consonant run is folded into the
//! last syllable. The split is positional only, so concatenating the output
//! always reproduces the input.

use serde::Serialize;
use smallvec::SmallVec;
use std::ops::Range;

/// Vowels that close a syllable (Latin transliteration and Cyrillic)
///
/// Matched case-sensitively; callers lowercase first.
pub const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', 'а', 'е', 'и', 'о', 'у', 'ы', 'я',
];

/// Check whether a character closes a syllable
#[inline]
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Ordered, non-empty syllable sequence
///
/// Most words have four syllables or fewer, so they stay inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Syllables(SmallVec<[String; 4]>);

impl Syllables {
    /// Number of syllables (at least 1)
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Syllable at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate over syllables in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Character range (not byte range) covered by the syllable at `index`
    ///
    /// Offsets are accumulated from the lengths of the preceding syllables.
    pub fn char_range(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.0.len() {
            return None;
        }
        let start: usize = self.0[..index].iter().map(|s| s.chars().count()).sum();
        let len = self.0[index].chars().count();
        Some(start..start + len)
    }

    /// Rebuild the original word
    pub fn concat(&self) -> String {
        self.0.concat()
    }

    /// Convert into an owned vector
    pub fn into_vec(self) -> Vec<String> {
        self.0.into_vec()
    }
}

impl<'a> IntoIterator for &'a Syllables {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Split `word` into syllables by vowel boundaries
///
/// The input is not lowercased here. The empty string yields a single empty
/// syllable, and a word without vowels is returned whole.
pub fn syllabify(word: &str) -> Syllables {
    let mut syllables: SmallVec<[String; 4]> = SmallVec::new();
    let mut current = String::new();

    for ch in word.chars() {
        current.push(ch);
        if is_vowel(ch) {
            syllables.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        match syllables.last_mut() {
            Some(last) => last.push_str(&current),
            None => syllables.push(current),
        }
    }

    if syllables.is_empty() {
        syllables.push(String::new());
    }

    Syllables(syllables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(word: &str) -> Vec<String> {
        syllabify(word).into_vec()
    }

    #[test]
    fn test_open_syllables() {
        assert_eq!(parts("мама"), vec!["ма", "ма"]);
        assert_eq!(parts("голова"), vec!["го", "ло", "ва"]);
    }

    #[test]
    fn test_trailing_consonants_join_last_syllable() {
        assert_eq!(parts("работать"), vec!["ра", "бо", "тать"]);
        assert_eq!(parts("мальчик"), vec!["ма", "льчик"]);
        assert_eq!(parts("рыбак"), vec!["ры", "бак"]);
    }

    #[test]
    fn test_vowel_only_word() {
        assert_eq!(parts("аоу"), vec!["а", "о", "у"]);
    }

    #[test]
    fn test_consonant_only_word() {
        assert_eq!(parts("бббб"), vec!["бббб"]);
    }

    #[test]
    fn test_empty_word() {
        let syllables = syllabify("");
        assert_eq!(syllables.len(), 1);
        assert_eq!(syllables.get(0), Some(""));
        assert_eq!(syllables.concat(), "");
    }

    #[test]
    fn test_vowel_set_excludes_yo_yu_e() {
        // ё, ю and э are not in the closing set
        assert_eq!(parts("ёж"), vec!["ёж"]);
        assert_eq!(parts("юла"), vec!["юла"]);
    }

    #[test]
    fn test_latin_vowels() {
        assert_eq!(parts("mama"), vec!["ma", "ma"]);
    }

    #[test]
    fn test_uppercase_vowels_do_not_split() {
        assert_eq!(parts("МАМА"), vec!["МАМА"]);
    }

    #[test]
    fn test_char_range_is_cumulative() {
        let syllables = syllabify("голова");
        assert_eq!(syllables.char_range(0), Some(0..2));
        assert_eq!(syllables.char_range(1), Some(2..4));
        assert_eq!(syllables.char_range(2), Some(4..6));
        assert_eq!(syllables.char_range(3), None);
    }

    #[test]
    fn test_concat_reconstructs_word() {
        for word in ["расшнуровывать", "здравствуйте", "вещество", "a-б"] {
            assert_eq!(syllabify(word).concat(), word);
        }
    }
}
