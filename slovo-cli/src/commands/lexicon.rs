//! Lexicon validate and template command implementations

use anyhow::{Context, Result};
use clap::Args;
use slovo_core::{Lexicon, LexiconConfig};
use std::fs;
use std::path::PathBuf;

/// Arguments for the lexicon validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub lexicon_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon_config.display());

        let content = fs::read_to_string(&self.lexicon_config)
            .with_context(|| format!("Failed to read {}", self.lexicon_config.display()))?;

        let checked = LexiconConfig::from_toml_str(
            &content,
            &self.lexicon_config.display().to_string(),
        )
        .and_then(|config| Lexicon::from_config(&config).map(|lexicon| (config, lexicon)));

        match checked {
            Ok((config, lexicon)) => {
                println!("✓ Lexicon is valid!");
                println!("  Verbs: {}", lexicon.verb_count());
                println!("  Adjectives: {}", lexicon.adjective_count());
                println!("  Stress entries: {}", lexicon.stress_entry_count());
                println!("  Stress rules: {}", lexicon.stress_rules().len());
                println!("  Synonym groups: {}", config.synonyms.len());

                for warning in config.warnings() {
                    println!("  warning: {warning}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Arguments for the lexicon template command
#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl TemplateArgs {
    /// Execute the template command
    pub fn execute(&self) -> Result<()> {
        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Add your own words to the sections you need");
        println!("2. Validate it:");
        println!(
            "   slovo lexicon validate --lexicon-config {}",
            self.output.display()
        );
        println!("3. Use it on top of the built-in tables:");
        println!("   slovo --lexicon {} analyze слово", self.output.display());

        Ok(())
    }
}

const TEMPLATE: &str = r#"# Lexicon overlay for slovo
#
# Every section is optional. Entries are appended to the built-in tables;
# when a word appears twice, the later entry wins.
# Words are lowercase Cyrillic, optionally hyphenated.

# Exact adjective lookups (classified with 100% confidence)
[adjectives]
words = ["лиловый"]

# Known stress positions, 0-based syllable index
[stress]
entries = [
    { word = "сирень", syllable = 1 },
]

# Ending rules, tried in order after the entries above.
# offset counts back from the last syllable: 0 = last, 1 = second to last.
rules = [
    { ending = "ист", position = "last", offset = 0 },
]

# Verbs with conjugation tables (classified with 100% confidence).
# aspect: imperfective | perfective
# directionality: non-directional | unidirectional | multidirectional
[[verbs]]
infinitive = "рисовать"
meaning = "to draw"
aspect = "imperfective"
directionality = "non-directional"
present = [
    { person = "Я", form = "я рисую" },
    { person = "Ты", form = "ты рисуешь" },
    { person = "Он/Она", form = "он/она рисует" },
    { person = "Мы", form = "мы рисуем" },
    { person = "Вы", form = "вы рисуете" },
    { person = "Они", form = "они рисуют" },
]
past = [
    { person = "Он", form = "он рисовал" },
    { person = "Она", form = "она рисовала" },
    { person = "Оно", form = "оно рисовало" },
    { person = "Они", form = "они рисовали" },
]

# Synonyms with English glosses
[[synonyms]]
headword = "рисовать"
words = [
    { word = "чертить", gloss = "to draft" },
]
"#;
