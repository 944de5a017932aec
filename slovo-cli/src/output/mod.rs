//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use slovo_core::WordAnalysis;
use std::io::Write;

/// Trait for analysis output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single word analysis
    fn format_analysis(&mut self, analysis: &WordAnalysis) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab-separated line per word
    #[default]
    Text,
    /// JSON array of analyses
    Json,
    /// Markdown table
    Markdown,
}

/// Build the formatter for `format` over `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Category label with a note when the validator corrected it
pub(crate) fn category_label(analysis: &WordAnalysis) -> String {
    if analysis.was_corrected() {
        format!(
            "{} (corrected from {})",
            analysis.category, analysis.detected_category
        )
    } else {
        analysis.category.to_string()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory writer for inspecting formatter output
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
