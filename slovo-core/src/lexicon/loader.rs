//! Embedded lexicon loader
//!
//! The built-in tables are compiled into the binary and parsed once, on
//! first use.

use std::sync::OnceLock;

use super::{config::LexiconConfig, Lexicon};
use crate::error::Result;

static BUILTIN: OnceLock<Lexicon> = OnceLock::new();

macro_rules! embed_table {
    ($name:expr) => {
        ($name, include_str!(concat!("../../configs/lexicon/", $name)))
    };
}

/// Embedded tables, merged in this order
const EMBEDDED_TABLES: [(&str, &str); 4] = [
    embed_table!("verbs.toml"),
    embed_table!("adjectives.toml"),
    embed_table!("stress.toml"),
    embed_table!("synonyms.toml"),
];

/// Parse and merge the embedded tables
pub fn builtin_config() -> Result<LexiconConfig> {
    EMBEDDED_TABLES
        .iter()
        .try_fold(LexiconConfig::default(), |merged, (name, toml_str)| {
            Ok(merged.merge(LexiconConfig::from_toml_str(toml_str, name)?))
        })
}

/// Shared built-in lexicon
///
/// Falls back to an empty lexicon if the embedded data fails to load, so
/// every classification still resolves to its default verdict.
pub fn builtin() -> &'static Lexicon {
    BUILTIN.get_or_init(|| {
        match builtin_config().and_then(|config| Lexicon::from_config(&config)) {
            Ok(lexicon) => {
                tracing::debug!(
                    verbs = lexicon.verb_count(),
                    adjectives = lexicon.adjective_count(),
                    stress_entries = lexicon.stress_entry_count(),
                    "loaded built-in lexicon"
                );
                lexicon
            }
            Err(e) => {
                tracing::error!("failed to load built-in lexicon: {e}");
                Lexicon::empty()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config_parses() {
        let config = builtin_config().expect("embedded tables should parse");
        assert_eq!(config.verbs.len(), 20);
        assert_eq!(config.adjectives.words.len(), 60);
        assert_eq!(config.stress.rules.len(), 4);
        assert_eq!(config.synonyms.len(), 21);
    }

    #[test]
    fn test_builtin_config_validates() {
        let config = builtin_config().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builtin_is_shared() {
        let first = builtin();
        let second = builtin();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_builtin_is_not_empty() {
        let lexicon = builtin();
        assert_eq!(lexicon.verb_count(), 20);
        assert_eq!(lexicon.adjective_count(), 60);
        assert!(lexicon.stress_entry_count() > 400);
    }

    #[test]
    fn test_builtin_stress_warnings() {
        // Four entries rely on a vowel the syllabifier does not split on
        let config = builtin_config().unwrap();
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 4);
        assert!(warnings.iter().any(|w| w.contains("включать")));
    }
}
