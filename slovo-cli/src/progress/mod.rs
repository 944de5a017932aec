//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const FILE_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";
const WORD_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} words";

/// Progress reporter for file and batch analysis
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for reading input files
    pub fn init_files(&mut self, total_files: u64) {
        self.init(total_files, FILE_TEMPLATE);
    }

    /// Initialize progress bar for a batch of words
    pub fn init_words(&mut self, total_words: u64) {
        self.init(total_words, WORD_TEMPLATE);
    }

    fn init(&mut self, total: u64, template: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        match ProgressStyle::default_bar().template(template) {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("Falling back to default progress style: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Read: {filename}"));
            pb.inc(1);
        }
    }

    /// Advance by `count` analyzed words
    pub fn words_completed(&self, count: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(count);
        }
    }

    /// Units completed so far; 0 when nothing is drawn
    pub fn position(&self) -> u64 {
        self.progress_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}
