//! Analyze command implementation

use super::Context;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context as _, Result};
use clap::Args;
use slovo_core::analysis::{analyze_batch, analyze_with_marker};
use slovo_core::{is_target_script, StressMarker, WordAnalysis};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Words handed to the parallel batch between progress updates
const BATCH_CHUNK_WORDS: usize = 512;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Words to analyze
    #[arg(value_name = "WORD", required_unless_present = "input")]
    pub words: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Force parallel analysis even for short word lists
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel analysis (default: from config, then all CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        log::info!("Starting word analysis");
        log::debug!("Arguments: {:?}", self);

        let words = russian_only(self.collect_words(ctx)?);
        if words.is_empty() {
            anyhow::bail!("No Russian words to analyze");
        }

        let analyses = self.analyze(ctx, &words)?;

        let threshold = ctx.config.analysis.low_confidence_threshold;
        let uncertain = analyses
            .iter()
            .filter(|a| a.is_low_confidence(threshold))
            .count();
        if uncertain > 0 {
            log::info!("{uncertain} word(s) classified below {threshold}% confidence");
        }

        let mut formatter = self.formatter(ctx)?;
        for analysis in &analyses {
            formatter.format_analysis(analysis)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn collect_words(&self, ctx: &Context) -> Result<Vec<String>> {
        let mut words: Vec<String> = self
            .words
            .iter()
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if self.input.is_empty() {
            return Ok(words);
        }

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(ctx.quiet);
        progress.init_files(files.len() as u64);

        for file in &files {
            words.extend(FileReader::read_words(file)?);
            progress.file_completed(&file.display().to_string());
        }
        progress.finish();

        log::info!("Read {} word(s) from {} file(s)", words.len(), files.len());
        Ok(words)
    }

    fn analyze(&self, ctx: &Context, words: &[String]) -> Result<Vec<WordAnalysis>> {
        let marker = ctx.marker();
        let parallel =
            self.parallel || words.len() >= ctx.config.performance.parallel_threshold_words;

        if !parallel {
            return Ok(words
                .iter()
                .map(|word| analyze_with_marker(&ctx.lexicon, word, &marker))
                .collect());
        }

        let threads = self
            .threads
            .unwrap_or_else(|| ctx.config.performance.thread_count());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker thread pool")?;

        log::info!("Analyzing {} words on {} threads", words.len(), threads);

        let mut progress = ProgressReporter::new(ctx.quiet);
        progress.init_words(words.len() as u64);
        let analyses = pool.install(|| analyze_in_chunks(ctx, words, &marker, &progress));
        progress.finish();

        Ok(analyses)
    }

    fn formatter(&self, ctx: &Context) -> Result<Box<dyn OutputFormatter>> {
        let format = self.format.unwrap_or(ctx.config.output.default_format);
        let pretty = ctx.config.output.pretty_json;

        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                create_formatter(format, BufWriter::new(file), pretty)
            }
            None => create_formatter(format, io::stdout(), pretty),
        })
    }
}

/// Batch-analyze `words` one chunk at a time, advancing `progress` per chunk
fn analyze_in_chunks(
    ctx: &Context,
    words: &[String],
    marker: &StressMarker,
    progress: &ProgressReporter,
) -> Vec<WordAnalysis> {
    let mut analyses = Vec::with_capacity(words.len());
    for chunk in words.chunks(BATCH_CHUNK_WORDS) {
        analyses.extend(analyze_batch(&ctx.lexicon, chunk, marker));
        progress.words_completed(chunk.len() as u64);
    }
    analyses
}

/// Drop tokens that are not Cyrillic, warning about each one
fn russian_only(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .filter(|word| {
            let keep = is_target_script(word);
            if !keep {
                log::warn!("Skipping non-Russian word: {word}");
            }
            keep
        })
        .collect()
}
