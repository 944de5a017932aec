//! Slovo CLI library
//!
//! This library provides the command-line interface for the slovo Russian
//! vocabulary tools: word analysis, stress lookup, verb tables and a saved
//! vocabulary with flashcard export.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon_source;
pub mod output;
pub mod progress;
pub mod vocabulary;

pub use error::{CliError, CliResult};
