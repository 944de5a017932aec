//! slovo command-line entry point

use clap::Parser;
use slovo_cli::commands::{Commands, Context};
use slovo_cli::config::CliConfig;
use slovo_cli::CliResult;
use std::path::PathBuf;
use std::process::ExitCode;

/// Russian vocabulary tools: part of speech, syllables, stress and flashcards
#[derive(Debug, Parser)]
#[command(name = "slovo", version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE", env = "SLOVO_CONFIG")]
    config: Option<PathBuf>,

    /// Extra lexicon file layered over the built-in tables
    #[arg(long, global = true, value_name = "FILE", env = "SLOVO_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Vocabulary store file
    #[arg(long, global = true, value_name = "FILE", env = "SLOVO_STORE")]
    store: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress progress bars and log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    fn run(self) -> CliResult<()> {
        self.init_logging();

        if let Commands::Lexicon { subcommand } = &self.command {
            return subcommand.execute();
        }

        let config = CliConfig::load(self.config.as_deref())?;
        let ctx = Context::new(config, self.lexicon.as_deref(), self.store, self.quiet)?;
        self.command.execute(&ctx)
    }
}

fn main() -> ExitCode {
    match Cli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
