//! Character variety sections - lowercase, uppercase and digits.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

fn contains(password: &SecretString, class: fn(&char) -> bool, reason: &str) -> SectionResult {
    if !password.expose_secret().chars().any(|c| class(&c)) {
        return Some(reason.to_string());
    }
    None
}

/// Checks for an ASCII lowercase letter (`a`-`z`).
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    contains(password, char::is_ascii_lowercase, "Add a lowercase letter")
}

/// Checks for an ASCII uppercase letter (`A`-`Z`).
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    contains(password, char::is_ascii_uppercase, "Add an uppercase letter")
}

/// Checks for a digit (`0`-`9`).
pub fn digit_section(password: &SecretString) -> SectionResult {
    contains(password, char::is_ascii_digit, "Add a number")
}
