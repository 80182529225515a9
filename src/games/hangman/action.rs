//! First-class guess actions for hangman.
//!
//! Raw player input is normalized into a [`Guess`] before it ever touches
//! round state. A `Guess` that exists is already well formed.

use super::Outcome;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A normalized guess: a single letter/digit or a whole word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct Guess(String);

impl Guess {
    /// Normalizes raw input into a guess.
    ///
    /// Trims, lower-cases, and keeps only the first whitespace-delimited token.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGuess::Empty`] if nothing remains, or
    /// [`InvalidGuess::DisallowedCharacter`] for a single character outside
    /// `[A-Za-z0-9]`.
    #[instrument(skip(raw), fields(raw_len = raw.len()))]
    pub fn normalize(raw: &str) -> Result<Self, InvalidGuess> {
        let token = raw.split_whitespace().next().unwrap_or("").to_lowercase();

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(InvalidGuess::Empty),
            (Some(c), None) if !c.is_ascii_alphanumeric() => {
                debug!(character = %c, "Rejected single-character guess");
                Err(InvalidGuess::DisallowedCharacter(c))
            }
            _ => Ok(Self(token)),
        }
    }

    /// Returns the guess as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the character if this is a single-character guess.
    pub fn as_letter(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// Returns true if this guess is a single character.
    pub fn is_letter(&self) -> bool {
        self.as_letter().is_some()
    }
}

/// Input that cannot be used as a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidGuess {
    /// Nothing was entered.
    #[display("You did not enter any guess")]
    Empty,
    /// A single character that is not a letter or digit.
    #[display("'{}' is not allowed: only letters and numbers", _0)]
    DisallowedCharacter(char),
}

impl std::error::Error for InvalidGuess {}

/// Error raised when a guess cannot be applied to a round.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GuessError {
    /// The input did not normalize into a guess.
    #[display("Invalid guess: {}", _0)]
    Invalid(InvalidGuess),

    /// The round already ended.
    #[display("Round is already over ({})", _0)]
    RoundOver(Outcome),

    /// A postcondition failed after applying the guess.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GuessError {}

impl From<InvalidGuess> for GuessError {
    fn from(err: InvalidGuess) -> Self {
        Self::Invalid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(Guess::normalize("  CaT ").unwrap().as_str(), "cat");
    }

    #[test]
    fn test_normalize_keeps_first_token() {
        assert_eq!(Guess::normalize("quick brown fox").unwrap().as_str(), "quick");
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert_eq!(Guess::normalize("   "), Err(InvalidGuess::Empty));
        assert_eq!(Guess::normalize(""), Err(InvalidGuess::Empty));
    }

    #[test]
    fn test_normalize_rejects_symbol() {
        assert_eq!(
            Guess::normalize("#"),
            Err(InvalidGuess::DisallowedCharacter('#'))
        );
    }

    #[test]
    fn test_multi_character_symbols_are_word_guesses() {
        let guess = Guess::normalize("don't").unwrap();
        assert!(!guess.is_letter());
    }

    #[test]
    fn test_digit_is_letter_guess() {
        let guess = Guess::normalize("7").unwrap();
        assert_eq!(guess.as_letter(), Some('7'));
    }
}
