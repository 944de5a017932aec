//! Stressed-syllable rendering

use crate::syllable::syllabify;
use serde::{Deserialize, Serialize};

/// Opening and closing text wrapped around the stressed syllable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressMarker {
    pub open: String,
    pub close: String,
}

impl Default for StressMarker {
    fn default() -> Self {
        Self {
            open: "<b>".to_string(),
            close: "</b>".to_string(),
        }
    }
}

impl StressMarker {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Wrap the syllable at `index` of `word`
    ///
    /// Syllable boundaries come from the lowercased word, but the characters
    /// emitted are the original ones. An index past the last syllable
    /// returns `word` unchanged.
    pub fn apply(&self, word: &str, index: usize) -> String {
        let syllables = syllabify(&word.to_lowercase());
        let Some(range) = syllables.char_range(index) else {
            return word.to_string();
        };

        let start = byte_offset(word, range.start);
        let end = byte_offset(word, range.end);

        let mut marked =
            String::with_capacity(word.len() + self.open.len() + self.close.len());
        marked.push_str(&word[..start]);
        marked.push_str(&self.open);
        marked.push_str(&word[start..end]);
        marked.push_str(&self.close);
        marked.push_str(&word[end..]);
        marked
    }

    /// Remove every occurrence of this marker from `text`
    pub fn strip(&self, text: &str) -> String {
        text.replace(&self.open, "").replace(&self.close, "")
    }
}

/// Render `word` with the default `<b>`/`</b>` marker around the syllable at
/// `index`
pub fn format_with_stress(word: &str, index: usize) -> String {
    StressMarker::default().apply(word, index)
}

// Byte offset of the `chars`-th character, clamped to the end of `s`
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}
