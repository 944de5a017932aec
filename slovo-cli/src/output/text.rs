//! Plain text output formatter

use super::{category_label, OutputFormatter};
use anyhow::Result;
use slovo_core::WordAnalysis;
use std::io::Write;

/// Plain text formatter - outputs one tab-separated line per word
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_analysis(&mut self, analysis: &WordAnalysis) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{} {}%\t{}\t{}",
            analysis.word,
            category_label(analysis),
            analysis.confidence,
            analysis.syllables.join("-"),
            analysis.marked,
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;
    use slovo_core::analyze;

    #[test]
    fn test_one_line_per_word() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        formatter.format_analysis(&analyze("работать")).unwrap();
        formatter.format_analysis(&analyze("радости")).unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "работать\tVerb 100%\tра-бо-тать\t<b>ра</b>ботать");
        assert!(lines[1].starts_with("радости\tNoun (corrected from Verb) 95%"));
    }
}
