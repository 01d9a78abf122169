//! Symbol section - checks for punctuation from a fixed set.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Punctuation that earns the symbol point.
pub const SCORING_SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|',
    '<', '>',
];

/// Checks for at least one character from [`SCORING_SYMBOLS`].
pub fn symbol_section(password: &SecretString) -> SectionResult {
    if !password
        .expose_secret()
        .chars()
        .any(|c| SCORING_SYMBOLS.contains(&c))
    {
        return Some("Add a symbol such as ! @ # $ %".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_section_present() {
        let pwd = SecretString::new("abc\"def".to_string().into());
        assert_eq!(symbol_section(&pwd), None);
    }

    #[test]
    fn test_symbol_section_missing() {
        let pwd = SecretString::new("NoSpecial123".to_string().into());
        assert!(symbol_section(&pwd).is_some());
    }

    #[test]
    fn test_symbol_section_ignores_unlisted_punctuation() {
        // underscore, dash, brackets and semicolon are not in the set
        let pwd = SecretString::new("a_b-c[d]e;f=g+h".to_string().into());
        assert!(symbol_section(&pwd).is_some());
    }
}
