//! Export command implementation

use super::Context;
use crate::error::CliError;
use crate::vocabulary::ExportFormat;
use anyhow::{Context as _, Result};
use chrono::{Local, Utc};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Study list to export ("all" for every list)
    #[arg(short, long, default_value = "all")]
    pub list: String,

    /// Output file (default: russian-vocab-<kind>-<list>-<date>.<ext>)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let mut store = ctx.open_store()?;
        let entries = store.select_list(&self.list);
        if entries.is_empty() {
            return Err(CliError::NothingToExport.into());
        }

        let count = entries.len();
        let content = self.format.render(&entries)?;

        if self.stdout {
            println!("{content}");
        } else {
            let path = self.output.clone().unwrap_or_else(|| {
                PathBuf::from(self.format.file_name(&self.list, Local::now().date_naive()))
            });
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported {count} words to {}", path.display());
        }

        store.record_export(self.format.platform(), &self.list, count, Utc::now());
        store.save()?;
        Ok(())
    }
}
