//! Remove and clear command implementations

use super::Context;
use anyhow::Result;
use clap::Args;

/// Arguments for the remove command
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Ids of the entries to delete
    #[arg(value_name = "ID", required = true, num_args = 1..)]
    pub ids: Vec<u64>,
}

impl RemoveArgs {
    /// Execute the remove command
    ///
    /// Nothing is written unless every id exists.
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let mut store = ctx.open_store()?;

        let mut removed = Vec::with_capacity(self.ids.len());
        for &id in &self.ids {
            removed.push(store.remove(id)?);
        }
        store.save()?;

        for entry in &removed {
            println!("Removed #{}: {}", entry.id, entry.word);
        }
        Ok(())
    }
}

/// Arguments for the clear command
#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Confirm deleting every entry
    #[arg(long)]
    pub yes: bool,
}

impl ClearArgs {
    /// Execute the clear command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        if !self.yes {
            anyhow::bail!("Refusing to delete the whole vocabulary without --yes");
        }

        let mut store = ctx.open_store()?;
        let count = store.clear();
        store.save()?;

        log::info!("Cleared {}", store.path().display());
        println!("Deleted {count} entries");
        Ok(())
    }
}
