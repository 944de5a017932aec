//! Flashcard and backup export formats

use super::entry::VocabularyEntry;
use anyhow::Result;
use chrono::NaiveDate;

/// Supported export targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Tab-separated word, translation and example
    Anki,
    /// Tab-separated word and translation
    Quizlet,
    /// Pretty-printed JSON backup of full entries
    Json,
}

impl ExportFormat {
    /// Name recorded in the export history
    pub fn platform(self) -> &'static str {
        match self {
            ExportFormat::Anki => "Anki",
            ExportFormat::Quizlet => "Quizlet",
            ExportFormat::Json => "JSON Backup",
        }
    }

    fn kind(self) -> &'static str {
        match self {
            ExportFormat::Anki => "anki",
            ExportFormat::Quizlet => "quizlet",
            ExportFormat::Json => "backup",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Anki | ExportFormat::Quizlet => "txt",
            ExportFormat::Json => "json",
        }
    }

    /// Default file name, e.g. `russian-vocab-anki-review-2024-03-01.txt`
    pub fn file_name(self, list: &str, date: NaiveDate) -> String {
        format!(
            "russian-vocab-{}-{}-{}.{}",
            self.kind(),
            list,
            date.format("%Y-%m-%d"),
            self.extension()
        )
    }

    /// Render `entries` in this format
    ///
    /// Text formats join lines with `\n` and have no trailing newline.
    pub fn render(self, entries: &[&VocabularyEntry]) -> Result<String> {
        let content = match self {
            ExportFormat::Anki => entries
                .iter()
                .map(|e| format!("{}\t{}\t{}", e.word, e.translation, e.example()))
                .collect::<Vec<_>>()
                .join("\n"),
            ExportFormat::Quizlet => entries
                .iter()
                .map(|e| format!("{}\t{}", e.word, e.translation))
                .collect::<Vec<_>>()
                .join("\n"),
            ExportFormat::Json => serde_json::to_string_pretty(entries)?,
        };
        Ok(content)
    }
}
