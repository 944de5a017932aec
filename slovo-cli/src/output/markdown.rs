//! Markdown output formatter

use super::{category_label, OutputFormatter};
use anyhow::Result;
use slovo_core::WordAnalysis;
use std::io::Write;

/// Markdown formatter - outputs analyses as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "| # | Word | Category | Confidence | Syllables | Stress |"
        )?;
        writeln!(self.writer, "|---|------|----------|------------|-----------|--------|")?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_analysis(&mut self, analysis: &WordAnalysis) -> Result<()> {
        if self.word_count == 0 {
            self.write_header()?;
        }
        self.word_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {}% | {} | {} |",
            self.word_count,
            analysis.word,
            category_label(analysis),
            analysis.confidence,
            analysis.syllables.join("-"),
            analysis.stress_index + 1,
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
