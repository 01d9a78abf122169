//! Strong password suggestions.

use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;

use crate::sections::SCORING_SYMBOLS;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";

/// Symbols a suggestion draws from.
pub const SUGGESTION_SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const LOWERCASE_COUNT: usize = 4;
pub const UPPERCASE_COUNT: usize = 3;
pub const DIGIT_COUNT: usize = 3;
pub const SYMBOL_COUNT: usize = 3;

/// Length of every suggestion.
pub const SUGGESTION_LENGTH: usize = LOWERCASE_COUNT + UPPERCASE_COUNT + DIGIT_COUNT + SYMBOL_COUNT;

/// Generates a suggestion with the thread-local generator.
pub fn suggest_password() -> SecretString {
    suggest_password_with(&mut rand::thread_rng())
}

/// Generates a 13 character suggestion: 4 lowercase letters, 3 uppercase
/// letters, 3 digits and 3 symbols, shuffled together.
///
/// One of the symbols always comes from the scoring punctuation set, so every
/// suggestion scores 6.
pub fn suggest_password_with<R: Rng + ?Sized>(rng: &mut R) -> SecretString {
    let scored_symbols: Vec<u8> = SUGGESTION_SYMBOLS
        .iter()
        .copied()
        .filter(|&b| SCORING_SYMBOLS.contains(&char::from(b)))
        .collect();

    let mut chars = Vec::with_capacity(SUGGESTION_LENGTH);
    pick(rng, LOWERCASE, LOWERCASE_COUNT, &mut chars);
    pick(rng, UPPERCASE, UPPERCASE_COUNT, &mut chars);
    pick(rng, DIGITS, DIGIT_COUNT, &mut chars);
    pick(rng, &scored_symbols, 1, &mut chars);
    pick(rng, SUGGESTION_SYMBOLS, SYMBOL_COUNT - 1, &mut chars);

    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!("generated password suggestion");

    SecretString::new(chars.into_iter().collect::<String>().into())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &[u8], count: usize, out: &mut Vec<char>) {
    for _ in 0..count {
        out.push(char::from(set[rng.gen_range(0..set.len())]));
    }
}
