//! Error types for lexicon loading
//!
//! Classification and stress detection are total and never fail; only
//! building a [`Lexicon`](crate::lexicon::Lexicon) from configuration can.

use thiserror::Error;

/// Errors raised while reading, parsing or validating lexicon data
#[derive(Debug, Error)]
pub enum LexiconError {
    /// I/O error while reading a lexicon file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse failure
    #[error("failed to parse {origin}: {message}")]
    Parse {
        /// Where the TOML came from (file path or embedded table name)
        origin: String,
        /// Parser message
        message: String,
    },

    /// Structurally valid TOML with invalid content
    #[error("invalid lexicon: {0}")]
    Invalid(String),
}

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;
