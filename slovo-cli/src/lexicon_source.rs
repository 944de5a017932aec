//! Lexicon source management for CLI

use crate::config::AnalysisConfig;
use anyhow::{Context, Result};
use slovo_core::{lexicon, Lexicon};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Where the lexicon tables come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// Built-in tables only
    BuiltIn,
    /// Built-in tables with a user file layered on top
    Overlay(PathBuf),
    /// A user file on its own
    Standalone(PathBuf),
}

impl LexiconSource {
    /// Resolve the source from the command line and configuration
    ///
    /// A path given on the command line takes precedence over the configured
    /// one.
    pub fn resolve(cli_path: Option<&Path>, config: &AnalysisConfig) -> Self {
        let path = cli_path
            .map(Path::to_path_buf)
            .or_else(|| config.lexicon.clone());

        match path {
            None => LexiconSource::BuiltIn,
            Some(path) if config.replace_builtin => LexiconSource::Standalone(path),
            Some(path) => LexiconSource::Overlay(path),
        }
    }

    /// Load the lexicon, borrowing the shared built-in one when possible
    pub fn load(&self) -> Result<Cow<'static, Lexicon>> {
        let lexicon = match self {
            LexiconSource::BuiltIn => Cow::Borrowed(lexicon::builtin()),
            LexiconSource::Overlay(path) => Cow::Owned(
                Lexicon::builtin_with_overlay(path)
                    .with_context(|| format!("Failed to load lexicon {}", path.display()))?,
            ),
            LexiconSource::Standalone(path) => Cow::Owned(
                Lexicon::from_file(path)
                    .with_context(|| format!("Failed to load lexicon {}", path.display()))?,
            ),
        };
        log::debug!("Using lexicon: {}", self.display_name());
        Ok(lexicon)
    }

    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::BuiltIn => "Built-in".to_string(),
            LexiconSource::Overlay(path) => format!("Built-in + {}", path.display()),
            LexiconSource::Standalone(path) => format!("External: {}", path.display()),
        }
    }
}
