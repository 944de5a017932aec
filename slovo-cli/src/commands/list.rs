//! List and stats command implementations

use super::Context;
use crate::vocabulary::{EntryFilter, VocabularyEntry, VocabularyStore, WordType};
use anyhow::Result;
use clap::Args;
use std::fmt::Write as _;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only entries on this study list ("all" for every list)
    #[arg(short, long)]
    pub list: Option<String>,

    /// Only entries of this word type
    #[arg(short = 'w', long, value_enum)]
    pub word_type: Option<WordType>,

    /// Case-insensitive search in words and translations
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let store = ctx.open_store()?;
        let entries = store.query(&self.filter());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            println!("No matching entries");
            return Ok(());
        }

        for entry in &entries {
            println!("{}", render_line(entry));
        }
        Ok(())
    }

    fn filter(&self) -> EntryFilter {
        EntryFilter {
            list: self.list.clone(),
            word_type: self.word_type,
            search: self.search.clone().filter(|s| !s.trim().is_empty()),
        }
    }
}

fn render_line(entry: &VocabularyEntry) -> String {
    let mut line = format!(
        "#{:<4} {}\t{}\t[{}, {}]",
        entry.id,
        entry.display_word(),
        entry.translation,
        entry.category,
        entry.word_type
    );
    if entry.overridden {
        line.push_str(" (corrected)");
    }
    if let Some(sentence) = entry.sentence.as_deref().filter(|s| !s.is_empty()) {
        let _ = write!(line, "\n      {sentence}");
    }
    line
}

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let store = ctx.open_store()?;
        print!("{}", render_stats(&store));
        Ok(())
    }
}

fn render_stats(store: &VocabularyStore) -> String {
    let stats = store.stats();
    let mut out = String::new();

    let _ = writeln!(out, "Total words: {}", stats.total);
    let _ = writeln!(out, "\nBy list:");
    for (list, count) in &stats.by_list {
        let _ = writeln!(out, "  {list:<14}{count}");
    }
    let _ = writeln!(out, "\nBy type:");
    for (word_type, count) in &stats.by_type {
        let _ = writeln!(out, "  {:<14}{count}", word_type.to_string());
    }

    if let Some(last) = store.export_history().first() {
        let _ = writeln!(
            out,
            "\nExports: {} (last: {} of {} words from {}, {})",
            stats.exports,
            last.platform,
            last.count,
            last.category,
            last.timestamp.format("%Y-%m-%d %H:%M UTC")
        );
    }
    out
}
