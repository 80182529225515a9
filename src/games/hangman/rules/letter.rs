//! Single-character guess logic.

use super::super::{PLACEHOLDER, RevealPattern, SecretString};
use tracing::instrument;

/// Returns true if the character occurs anywhere in the secret.
#[instrument(skip(secret))]
pub fn is_letter_correct(letter: char, secret: &SecretString) -> bool {
    secret
        .as_str()
        .chars()
        .any(|c| c.to_lowercase().eq(letter.to_lowercase()))
}

/// Reveals every position whose secret character matches the letter.
///
/// The revealed character is taken from the secret, not from the guess.
/// Positions already revealed are left untouched.
#[instrument(skip(secret, pattern))]
pub fn reveal_letter(
    letter: char,
    secret: &SecretString,
    pattern: &RevealPattern,
) -> RevealPattern {
    let revealed: String = secret
        .as_str()
        .chars()
        .zip(pattern.as_str().chars())
        .map(|(secret_char, shown)| {
            if shown == PLACEHOLDER && secret_char.to_lowercase().eq(letter.to_lowercase()) {
                secret_char
            } else {
                shown
            }
        })
        .collect();
    RevealPattern::from_rendered(revealed)
}
