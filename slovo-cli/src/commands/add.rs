//! Add command implementation

use super::Context;
use crate::error::CliError;
use crate::vocabulary::{VocabularyEntry, WordType};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use slovo_core::analysis::analyze_with_marker;
use slovo_core::stress::validate_stress;
use slovo_core::{is_target_script, WordAnalysis};

/// Arguments for the add command
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Russian word to save
    #[arg(value_name = "WORD")]
    pub word: String,

    /// English translation (default: the lexicon meaning for known verbs)
    #[arg(short, long)]
    pub translation: Option<String>,

    /// Example sentence
    #[arg(short, long)]
    pub sentence: Option<String>,

    /// Study list
    #[arg(short, long, default_value = "review")]
    pub list: String,

    /// Word type, overriding the detected one
    #[arg(short = 'w', long, value_enum)]
    pub word_type: Option<WordType>,

    /// Stressed syllable (0-based), overriding the detected one
    #[arg(long, value_name = "N")]
    pub stress: Option<usize>,
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let mut store = ctx.open_store()?;
        let entry = self.build_entry(ctx, Local::now().date_naive())?;
        let display = entry.display_word().to_string();
        let word_category = entry.word_category.clone().unwrap_or_default();

        let id = store.insert(entry)?;
        store.save()?;

        println!("Added #{id}: {display} ({word_category}) to {}", self.list);
        Ok(())
    }

    /// Analyze the word and assemble the entry to save
    pub fn build_entry(&self, ctx: &Context, today: NaiveDate) -> Result<VocabularyEntry> {
        let word = self.word.trim();
        if word.is_empty() || !is_target_script(word) {
            return Err(CliError::NotRussian(self.word.clone()).into());
        }

        let marker = ctx.marker();
        let analysis = analyze_with_marker(&ctx.lexicon, word, &marker);
        self.report_classification(ctx, &analysis);

        let word_type = self
            .word_type
            .unwrap_or_else(|| WordType::from(analysis.category));

        let (stress_index, stress_confidence) = match self.stress {
            Some(index) => {
                let verdict = validate_stress(&ctx.lexicon, word, index);
                if verdict.confidence == 0 {
                    return Err(CliError::InvalidStress {
                        word: word.to_string(),
                        index,
                    }
                    .into());
                }
                if !verdict.valid {
                    log::warn!("{}; keeping syllable {} as given", verdict.message, index + 1);
                }
                (index, verdict.confidence)
            }
            None => {
                if analysis.stress_confidence < 100 {
                    log::info!(
                        "Stress ({}% confidence): {}",
                        analysis.stress_confidence,
                        analysis.stress_message
                    );
                }
                (analysis.stress_index, analysis.stress_confidence)
            }
        };

        let verb = ctx.lexicon.verb(word);
        let translation = self
            .translation
            .clone()
            .or_else(|| verb.map(|v| v.meaning.clone()))
            .unwrap_or_else(|| "Unknown".to_string());
        let examples = verb.map(|v| vec![v.meaning.clone()]).unwrap_or_default();

        Ok(VocabularyEntry {
            id: 0,
            word: word.to_string(),
            word_displayed: Some(marker.apply(word, stress_index)),
            translation,
            sentence: self.sentence.clone().filter(|s| !s.trim().is_empty()),
            category: self.list.clone(),
            word_type,
            word_category: Some(word_type.category().to_string()),
            date_added: today,
            last_reviewed: None,
            examples,
            is_verb: verb.is_some() || word_type == WordType::Verb,
            confidence: Some(analysis.confidence),
            overridden: analysis.overridden,
            stress_index: Some(stress_index),
            stress_confidence: Some(stress_confidence),
        })
    }

    fn report_classification(&self, ctx: &Context, analysis: &WordAnalysis) {
        if analysis.was_corrected() {
            println!(
                "Classification corrected: \"{}\" is a {} (not {})",
                analysis.word, analysis.category, analysis.detected_category
            );
        }

        let threshold = ctx.config.analysis.low_confidence_threshold;
        if self.word_type.is_none() && analysis.is_low_confidence(threshold) {
            log::warn!(
                "\"{}\" classified as {} with {}% confidence; pass --word-type to confirm",
                analysis.word,
                analysis.category,
                analysis.confidence
            );
        }
    }
}
