//! Error handling for the CLI application

use std::fmt;

/// Errors the CLI reports directly to the user
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Input is not a Cyrillic word
    NotRussian(String),
    /// Word is not in the lexicon
    UnknownWord(String),
    /// Stress index outside the word
    InvalidStress { word: String, index: usize },
    /// No vocabulary entry with this id
    EntryNotFound(u64),
    /// Export selection is empty
    NothingToExport,
    /// Vocabulary store could not be read or written
    StoreError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NotRussian(word) => {
                write!(f, "Not a Russian word: {word:?} (Cyrillic letters only)")
            }
            CliError::UnknownWord(word) => write!(f, "Unknown word: {word}"),
            CliError::InvalidStress { word, index } => write!(
                f,
                "Stress index {index} is outside the syllables of {word:?}"
            ),
            CliError::EntryNotFound(id) => write!(f, "No vocabulary entry with id {id}"),
            CliError::NothingToExport => write!(f, "No words to export"),
            CliError::StoreError(msg) => write!(f, "Vocabulary store error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("words.txt".to_string());
        assert_eq!(error.to_string(), "File not found: words.txt");
    }

    #[test]
    fn test_not_russian_error_display() {
        let error = CliError::NotRussian("hello".to_string());
        assert_eq!(
            error.to_string(),
            "Not a Russian word: \"hello\" (Cyrillic letters only)"
        );
    }

    #[test]
    fn test_invalid_stress_error_display() {
        let error = CliError::InvalidStress {
            word: "вода".to_string(),
            index: 5,
        };
        assert_eq!(
            error.to_string(),
            "Stress index 5 is outside the syllables of \"вода\""
        );
    }

    #[test]
    fn test_nothing_to_export_display() {
        assert_eq!(CliError::NothingToExport.to_string(), "No words to export");
    }

    #[test]
    fn test_error_survives_anyhow_downcast() {
        let result: CliResult<()> = Err(CliError::EntryNotFound(42).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::EntryNotFound(42))
        ));
        assert_eq!(err.to_string(), "No vocabulary entry with id 42");
    }

    #[test]
    fn test_error_with_cyrillic_path() {
        let error = CliError::FileNotFound("слова/урок 1.txt".to_string());
        assert_eq!(error.to_string(), "File not found: слова/урок 1.txt");

        let pattern_error = CliError::InvalidPattern("**[слов".to_string());
        assert_eq!(pattern_error.to_string(), "Invalid file pattern: **[слов");
    }
}
