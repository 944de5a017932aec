//! CLI command implementations

use crate::config::CliConfig;
use crate::lexicon_source::LexiconSource;
use crate::vocabulary::VocabularyStore;
use anyhow::Result;
use clap::Subcommand;
use slovo_core::{Lexicon, StressMarker};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

pub mod add;
pub mod analyze;
pub mod conjugate;
pub mod edit;
pub mod export;
pub mod import;
pub mod lexicon;
pub mod list;
pub mod remove;
pub mod stress;
pub mod synonyms;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify words and show syllables and stress
    Analyze(analyze::AnalyzeArgs),

    /// Detect or check the stressed syllable of a word
    Stress(stress::StressArgs),

    /// Show conjugation tables for a known verb
    Conjugate(conjugate::ConjugateArgs),

    /// Show synonyms for a word
    Synonyms(synonyms::SynonymsArgs),

    /// Analyze a word and save it to the vocabulary
    Add(add::AddArgs),

    /// Change the word or translation of a saved entry
    Edit(edit::EditArgs),

    /// Delete saved entries
    Remove(remove::RemoveArgs),

    /// Delete every saved entry and the export history
    Clear(remove::ClearArgs),

    /// List saved entries, newest first
    List(list::ListArgs),

    /// Show vocabulary totals
    Stats(list::StatsArgs),

    /// Export saved entries for flashcard apps or as a backup
    Export(export::ExportArgs),

    /// Import entries from a JSON backup
    Import(import::ImportArgs),

    /// Work with lexicon files
    Lexicon {
        #[command(subcommand)]
        subcommand: LexiconCommands,
    },
}

/// Lexicon subcommands
#[derive(Debug, Subcommand)]
pub enum LexiconCommands {
    /// Check a lexicon file for errors
    Validate(lexicon::ValidateArgs),

    /// Write a commented lexicon template
    Template(lexicon::TemplateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(ctx),
            Commands::Stress(args) => args.execute(ctx),
            Commands::Conjugate(args) => args.execute(ctx),
            Commands::Synonyms(args) => args.execute(ctx),
            Commands::Add(args) => args.execute(ctx),
            Commands::Edit(args) => args.execute(ctx),
            Commands::Remove(args) => args.execute(ctx),
            Commands::Clear(args) => args.execute(ctx),
            Commands::List(args) => args.execute(ctx),
            Commands::Stats(args) => args.execute(ctx),
            Commands::Export(args) => args.execute(ctx),
            Commands::Import(args) => args.execute(ctx),
            Commands::Lexicon { subcommand } => subcommand.execute(),
        }
    }
}

impl LexiconCommands {
    /// Execute without a context; these commands work on a file of their own
    pub fn execute(&self) -> Result<()> {
        match self {
            LexiconCommands::Validate(args) => args.execute(),
            LexiconCommands::Template(args) => args.execute(),
        }
    }
}

/// Shared state for one CLI invocation
pub struct Context {
    pub config: CliConfig,
    pub lexicon: Cow<'static, Lexicon>,
    pub store_path: PathBuf,
    pub quiet: bool,
}

impl Context {
    /// Build the context from loaded configuration and global flags
    ///
    /// `store_path` overrides the configured store.
    pub fn new(
        config: CliConfig,
        lexicon_path: Option<&Path>,
        store_path: Option<PathBuf>,
        quiet: bool,
    ) -> Result<Self> {
        let lexicon = LexiconSource::resolve(lexicon_path, &config.analysis).load()?;
        let store_path = store_path.unwrap_or_else(|| config.store.path.clone());

        Ok(Self {
            config,
            lexicon,
            store_path,
            quiet,
        })
    }

    /// Open the vocabulary store
    pub fn open_store(&self) -> Result<VocabularyStore> {
        VocabularyStore::open(&self.store_path)
    }

    /// Configured stress marker
    pub fn marker(&self) -> StressMarker {
        self.config.analysis.marker()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_store_override() {
        let dir = TempDir::new().unwrap();
        let ctx = test_support::context(&dir);
        assert_eq!(ctx.store_path, dir.path().join("vocab.json"));
        assert!(ctx.open_store().unwrap().is_empty());
    }

    #[test]
    fn test_context_defaults_to_configured_store() {
        let ctx = Context::new(CliConfig::default(), None, None, true).unwrap();
        assert_eq!(ctx.store_path, PathBuf::from("slovo-vocab.json"));
        assert!(matches!(ctx.lexicon, Cow::Borrowed(_)));
    }

    #[test]
    fn test_lexicon_command_runs_through_dispatch() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("lexicon.toml");
        let cmd = Commands::Lexicon {
            subcommand: LexiconCommands::Template(lexicon::TemplateArgs {
                output: output.clone(),
            }),
        };

        cmd.execute(&test_support::context(&dir)).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_stats_on_empty_store() {
        let dir = TempDir::new().unwrap();
        let cmd = Commands::Stats(list::StatsArgs {});
        assert!(cmd.execute(&test_support::context(&dir)).is_ok());
    }
}
