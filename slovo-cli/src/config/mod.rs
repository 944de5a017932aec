//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use slovo_core::StressMarker;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Vocabulary store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Parse a configuration document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Extra lexicon file layered over the built-in tables
    pub lexicon: Option<PathBuf>,

    /// Use the extra lexicon on its own instead of layering it
    pub replace_builtin: bool,

    /// Text inserted before the stressed syllable
    pub marker_open: String,

    /// Text inserted after the stressed syllable
    pub marker_close: String,

    /// Verdicts below this confidence are reported for confirmation
    pub low_confidence_threshold: u8,
}

impl AnalysisConfig {
    /// Stress marker built from the configured open/close text
    pub fn marker(&self) -> StressMarker {
        StressMarker::new(self.marker_open.clone(), self.marker_close.clone())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let marker = StressMarker::default();
        Self {
            lexicon: None,
            replace_builtin: false,
            marker_open: marker.open,
            marker_close: marker.close,
            low_confidence_threshold: 80,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Vocabulary store configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Vocabulary file
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("slovo-vocab.json"),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Word count at which batch analysis switches to parallel
    pub parallel_threshold_words: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Worker threads to use, resolving 0 to the CPU count
    pub fn thread_count(&self) -> usize {
        match self.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold_words: 1_000,
            worker_threads: 0,
        }
    }
}
