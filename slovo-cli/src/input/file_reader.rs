//! Word list reading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads word lists and free text from disk
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read a file and split it into word tokens
    pub fn read_words(path: &Path) -> Result<Vec<String>> {
        let text = Self::read_text(path)?;
        Ok(tokenize(&text))
    }
}

/// Split text into word tokens
///
/// A token is a run of letters, optionally joined by inner hyphens
/// ("кто-нибудь"). Punctuation, digits and whitespace separate tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|ch: char| !(ch.is_alphabetic() || ch == '-'))
        .map(|token| token.trim_matches('-'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_tokenize_sentence() {
        assert_eq!(
            tokenize("Мальчик читает книгу, а девочка пишет."),
            vec!["Мальчик", "читает", "книгу", "а", "девочка", "пишет"]
        );
    }

    #[test]
    fn test_tokenize_keeps_inner_hyphens() {
        assert_eq!(tokenize("кто-нибудь - где-то"), vec!["кто-нибудь", "где-то"]);
    }

    #[test]
    fn test_tokenize_drops_digits_and_punctuation() {
        assert_eq!(tokenize("1. вода\n2) голова!"), vec!["вода", "голова"]);
        assert!(tokenize("  ...  123 ").is_empty());
    }

    #[test]
    fn test_read_words_one_per_line() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("words.txt");
        fs::write(&file_path, "вода\nрыбак\n\nкости\n").unwrap();

        let words = FileReader::read_words(&file_path).unwrap();
        assert_eq!(words, vec!["вода", "рыбак", "кости"]);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/words.txt"));

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        assert!(FileReader::read_words(&file_path).unwrap().is_empty());
    }
}
