//! Edit command implementation

use super::add::AddArgs;
use super::Context;
use crate::error::CliError;
use crate::vocabulary::VocabularyEntry;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

/// Arguments for the edit command
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the entry to change
    #[arg(value_name = "ID")]
    pub id: u64,

    /// New Russian word; the entry is re-analyzed
    #[arg(short, long, required_unless_present = "translation")]
    pub word: Option<String>,

    /// New translation
    #[arg(short, long)]
    pub translation: Option<String>,
}

impl EditArgs {
    /// Execute the edit command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let mut store = ctx.open_store()?;
        let current = store
            .get(self.id)
            .cloned()
            .ok_or(CliError::EntryNotFound(self.id))?;

        let updated = self.apply(ctx, current, Local::now().date_naive())?;
        let summary = format!("{} - {}", updated.display_word(), updated.translation);

        if let Some(entry) = store.get_mut(self.id) {
            *entry = updated;
        }
        store.save()?;

        println!("Updated #{}: {summary}", self.id);
        Ok(())
    }

    /// Produce the edited copy of `entry`
    pub fn apply(
        &self,
        ctx: &Context,
        entry: VocabularyEntry,
        today: NaiveDate,
    ) -> Result<VocabularyEntry> {
        let translation = self
            .translation
            .clone()
            .unwrap_or_else(|| entry.translation.clone());

        let mut updated = match self.word.as_deref().map(str::trim) {
            Some(word) if word != entry.word => {
                log::debug!("Re-analyzing #{}: {} -> {}", entry.id, entry.word, word);
                let reanalyzed = AddArgs {
                    word: word.to_string(),
                    translation: Some(translation),
                    sentence: entry.sentence.clone(),
                    list: entry.category.clone(),
                    word_type: None,
                    stress: None,
                }
                .build_entry(ctx, entry.date_added)?;

                VocabularyEntry {
                    id: entry.id,
                    ..reanalyzed
                }
            }
            _ => VocabularyEntry {
                translation,
                ..entry
            },
        };

        updated.last_reviewed = Some(today);
        Ok(updated)
    }
}
