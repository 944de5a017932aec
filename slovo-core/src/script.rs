//! Cyrillic script detection
//!
//! Gate applied by callers before translation or classification.

/// Check whether a character is a Russian Cyrillic letter
///
/// Covers `а..=я`, `А..=Я` and the separately encoded `ё`/`Ё`.
#[inline]
pub fn is_cyrillic_letter(ch: char) -> bool {
    // ASCII never qualifies
    if ch.is_ascii() {
        return false;
    }
    matches!(ch, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

/// True iff `text` contains at least one Cyrillic letter
pub fn is_target_script(text: &str) -> bool {
    text.chars().any(is_cyrillic_letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_cyrillic() {
        assert!(is_target_script("слово"));
        assert!(is_target_script("СЛОВО"));
    }

    #[test]
    fn test_yo_is_detected() {
        assert!(is_target_script("ё"));
        assert!(is_target_script("Ё"));
        assert!(is_target_script("ещё"));
    }

    #[test]
    fn test_no_cyrillic() {
        assert!(!is_target_script(""));
        assert!(!is_target_script("hello"));
        assert!(!is_target_script("123 !?"));
        // Greek and Ukrainian-only letters are outside the range
        assert!(!is_target_script("λόγος"));
        assert!(!is_target_script("ї"));
    }

    #[test]
    fn test_single_character_anywhere() {
        assert!(is_target_script("hello д"));
        assert!(is_target_script("дhello"));
        assert!(is_target_script("abcя"));
    }

    #[test]
    fn test_latin_lookalikes_are_not_cyrillic() {
        // Latin "a", "o", "e" look like Cyrillic letters but are ASCII
        assert!(!is_target_script("aoe"));
        assert!(is_cyrillic_letter('а'));
        assert!(!is_cyrillic_letter('a'));
    }
}
