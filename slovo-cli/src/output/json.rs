//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use slovo_core::WordAnalysis;
use std::io::Write;

/// JSON formatter - collects analyses and writes them as one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    analyses: Vec<WordAnalysis>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            analyses: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_analysis(&mut self, analysis: &WordAnalysis) -> Result<()> {
        self.analyses.push(analysis.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.analyses)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.analyses)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
