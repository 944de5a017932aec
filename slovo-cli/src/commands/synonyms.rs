//! Synonyms command implementation

use super::Context;
use anyhow::Result;
use clap::Args;

/// Arguments for the synonyms command
#[derive(Debug, Args)]
pub struct SynonymsArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

impl SynonymsArgs {
    /// Execute the synonyms command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let word = self.word.trim();
        let synonyms = ctx.lexicon.synonyms(word);

        if synonyms.is_empty() {
            println!("No synonyms found for {word}");
            return Ok(());
        }

        println!("Synonyms for {word}:");
        for synonym in synonyms {
            println!("  {} ({})", synonym.word, synonym.gloss);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use tempfile::TempDir;

    #[test]
    fn test_known_and_unknown_words_succeed() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        for word in ["большой", "неизвестное"] {
            let args = SynonymsArgs {
                word: word.to_string(),
            };
            assert!(args.execute(&ctx).is_ok());
        }
    }
}
