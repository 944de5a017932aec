//! Import command implementation

use super::Context;
use crate::error::CliError;
use crate::vocabulary::{ImportMode, VocabularyEntry};
use anyhow::{Context as _, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the import command
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON backup produced by `export json`
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Replace the whole vocabulary instead of merging
    #[arg(long)]
    pub replace: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        if !self.file.exists() {
            return Err(CliError::FileNotFound(self.file.display().to_string()).into());
        }

        let content = fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;
        let entries: Vec<VocabularyEntry> = serde_json::from_str(&content)
            .with_context(|| format!("{} is not a vocabulary backup", self.file.display()))?;

        let mode = if self.replace {
            ImportMode::Replace
        } else {
            ImportMode::Merge
        };

        let mut store = ctx.open_store()?;
        let summary = store.import(entries, mode);
        store.save()?;

        println!("Imported {} words", summary.added);
        if summary.skipped > 0 {
            println!("Skipped {} entries with existing ids", summary.skipped);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use crate::vocabulary::entry::test_support::entry;
    use tempfile::TempDir;

    fn write_backup(dir: &TempDir, entries: &[VocabularyEntry]) -> PathBuf {
        let path = dir.path().join("backup.json");
        fs::write(&path, serde_json::to_string(entries).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_merge_then_replace() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let mut store = ctx.open_store().unwrap();
        store
            .insert(entry(0, "вода", "water", "review", "2024-01-01"))
            .unwrap();
        store.save().unwrap();

        let file = write_backup(
            &dir,
            &[
                entry(1, "вода", "water", "review", "2024-01-01"),
                entry(2, "рыбак", "fisherman", "lesson", "2024-01-02"),
            ],
        );

        ImportArgs {
            file: file.clone(),
            replace: false,
        }
        .execute(&ctx)
        .unwrap();
        assert_eq!(ctx.open_store().unwrap().len(), 2);

        let file = write_backup(&dir, &[entry(9, "голова", "head", "lesson", "2024-01-03")]);
        ImportArgs {
            file,
            replace: true,
        }
        .execute(&ctx)
        .unwrap();
        let store = ctx.open_store().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].id, 9);
    }

    #[test]
    fn test_rejects_non_backup_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"vocabulary": 3}"#).unwrap();

        let err = ImportArgs {
            file: path,
            replace: false,
        }
        .execute(&context(&dir))
        .unwrap_err();
        assert!(err.to_string().contains("is not a vocabulary backup"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ImportArgs {
            file: dir.path().join("none.json"),
            replace: false,
        }
        .execute(&context(&dir))
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }
}
