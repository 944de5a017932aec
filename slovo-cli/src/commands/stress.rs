//! Stress command implementation

use super::Context;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use slovo_core::stress::{detect_stress, validate_stress};
use slovo_core::{is_target_script, syllabify, StressVerdict};

/// Arguments for the stress command
#[derive(Debug, Args)]
pub struct StressArgs {
    /// Word to inspect
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Proposed stressed syllable (0-based) to check instead of detecting one
    #[arg(short, long, value_name = "N")]
    pub index: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Stress result as printed by the command
#[derive(Debug, Serialize)]
pub struct StressReport {
    pub word: String,
    pub syllables: Vec<String>,
    pub marked: String,
    #[serde(flatten)]
    pub verdict: StressVerdict,
}

impl StressArgs {
    /// Execute the stress command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        if !is_target_script(&self.word) {
            log::warn!("{:?} has no Cyrillic letters; stress rules will not apply", self.word);
        }

        let report = self.report(ctx);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("{}", report.marked);
        println!("Syllables: {}", report.syllables.join("-"));
        if report.verdict.index < report.syllables.len() {
            println!(
                "Stress: syllable {} of {}",
                report.verdict.index + 1,
                report.syllables.len()
            );
        }
        println!(
            "{} ({}% confidence)",
            report.verdict.message, report.verdict.confidence
        );

        Ok(())
    }

    /// Detect or check the stress of the word
    pub fn report(&self, ctx: &Context) -> StressReport {
        let word = self.word.trim();
        let index = self
            .index
            .unwrap_or_else(|| detect_stress(&ctx.lexicon, word));
        let verdict = validate_stress(&ctx.lexicon, word, index);

        StressReport {
            word: word.to_string(),
            syllables: syllabify(&word.to_lowercase()).into_vec(),
            marked: ctx.marker().apply(word, index),
            verdict,
        }
    }
}
