//! Length sections - one point at 6 characters, another at 10.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_LENGTH: usize = 6;
pub const LONG_LENGTH: usize = 10;

fn length_at_least(password: &SecretString, length: usize) -> SectionResult {
    // Characters, not bytes: "é" counts once.
    if password.expose_secret().chars().count() < length {
        return Some(format!("Use at least {} characters", length));
    }
    None
}

/// Checks that the password has at least [`MIN_LENGTH`] characters.
pub fn min_length_section(password: &SecretString) -> SectionResult {
    length_at_least(password, MIN_LENGTH)
}

/// Checks that the password has at least [`LONG_LENGTH`] characters.
pub fn long_length_section(password: &SecretString) -> SectionResult {
    length_at_least(password, LONG_LENGTH)
}
