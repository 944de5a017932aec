//! Conjugate command implementation

use super::Context;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use slovo_core::lexicon::PersonForm;
use slovo_core::VerbRecord;

/// Arguments for the conjugate command
#[derive(Debug, Args)]
pub struct ConjugateArgs {
    /// Verb infinitive
    #[arg(value_name = "VERB")]
    pub verb: String,

    /// Tense to show
    #[arg(short, long, value_enum, default_value = "all")]
    pub tense: Tense,
}

/// Conjugation tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Tense {
    Present,
    Past,
    All,
}

impl ConjugateArgs {
    /// Execute the conjugate command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let verb = ctx
            .lexicon
            .verb(self.verb.trim())
            .ok_or_else(|| CliError::UnknownWord(self.verb.clone()))?;

        print!("{}", render(verb, self.tense));
        Ok(())
    }
}

/// Header line plus the requested tables
pub fn render(verb: &VerbRecord, tense: Tense) -> String {
    let mut out = format!(
        "{} - {}\n{} • {}\n",
        verb.infinitive,
        verb.meaning,
        capitalize(verb.aspect.as_str()),
        capitalize(verb.directionality.as_str()),
    );

    if matches!(tense, Tense::Present | Tense::All) {
        out.push_str(&table("Present tense", &verb.present));
    }
    if matches!(tense, Tense::Past | Tense::All) {
        out.push_str(&table("Past tense", &verb.past));
    }
    out
}

fn table(title: &str, forms: &[PersonForm]) -> String {
    let mut out = format!("\n{title}:\n");
    if forms.is_empty() {
        out.push_str("  No conjugations available\n");
        return out;
    }

    let width = forms
        .iter()
        .map(|f| f.person.chars().count())
        .max()
        .unwrap_or(0);
    for form in forms {
        out.push_str(&format!("  {:<width$}  {}\n", form.person, form.form));
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use slovo_core::lexicon::builtin;
    use tempfile::TempDir;

    #[test]
    fn test_render_present_only() {
        let verb = builtin().verb("говорить").unwrap();
        let output = render(verb, Tense::Present);
        assert!(output.starts_with("говорить - "));
        assert!(output.contains("Imperfective • Non-directional"));
        assert!(output.contains("Present tense:"));
        assert!(output.contains("я говорю"));
        assert!(!output.contains("Past tense:"));
    }

    #[test]
    fn test_render_all_includes_past() {
        let verb = builtin().verb("идти").unwrap();
        let output = render(verb, Tense::All);
        assert!(output.contains("Unidirectional"));
        assert!(output.contains("Past tense:"));
    }

    #[test]
    fn test_unknown_verb() {
        let dir = TempDir::new().unwrap();
        let args = ConjugateArgs {
            verb: "прыгнуть".to_string(),
            tense: Tense::All,
        };
        let err = args.execute(&context(&dir)).unwrap_err();
        assert_eq!(err.to_string(), "Unknown word: прыгнуть");
    }

    #[test]
    fn test_table_alignment() {
        let forms = vec![
            PersonForm {
                person: "Я".to_string(),
                form: "я пью".to_string(),
            },
            PersonForm {
                person: "Они".to_string(),
                form: "они пьют".to_string(),
            },
        ];
        assert_eq!(
            table("Present tense", &forms),
            "\nPresent tense:\n  Я    я пью\n  Они  они пьют\n"
        );
    }
}
