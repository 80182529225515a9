//! Guess evaluation rules for hangman.
//!
//! Pure functions over secret, pattern and history. Single-character
//! guesses are handled here for every variant; whole-word guesses are
//! delegated to the [`GameVariant`].

pub mod letter;
pub mod win;

pub use letter::{is_letter_correct, reveal_letter};
pub use win::check_win;

use super::{GameVariant, Guess, GuessHistory, RevealPattern, SecretString};
use tracing::instrument;

/// Returns true if the guess was already submitted this round.
#[instrument(skip(history), fields(guess = %guess))]
pub fn is_repeated(guess: &Guess, history: &GuessHistory) -> bool {
    history.contains(guess.as_str())
}

/// Returns true if the guess is correct for the secret.
#[instrument(skip(secret, variant), fields(guess = %guess))]
pub fn is_correct(guess: &Guess, secret: &SecretString, variant: &dyn GameVariant) -> bool {
    match guess.as_letter() {
        Some(letter) => is_letter_correct(letter, secret),
        None => variant.is_word_correct(guess.as_str(), secret),
    }
}

/// Returns the pattern after revealing a correct guess.
#[instrument(skip(secret, pattern, variant), fields(guess = %guess))]
pub fn reveal(
    guess: &Guess,
    secret: &SecretString,
    pattern: &RevealPattern,
    variant: &dyn GameVariant,
) -> RevealPattern {
    match guess.as_letter() {
        Some(letter) => reveal_letter(letter, secret, pattern),
        None => variant.reveal_word(guess.as_str(), secret, pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::Mode;

    #[test]
    fn test_repeat_detected_in_either_list() {
        let mut history = GuessHistory::new();
        history.record_correct("a");
        history.record_incorrect("z");
        assert!(is_repeated(&Guess::normalize("a").unwrap(), &history));
        assert!(is_repeated(&Guess::normalize("Z").unwrap(), &history));
        assert!(!is_repeated(&Guess::normalize("b").unwrap(), &history));
    }

    #[test]
    fn test_word_guess_delegates_to_variant() {
        let secret = SecretString::new("the quick fox");
        let guess = Guess::normalize("fox").unwrap();
        assert!(is_correct(&guess, &secret, Mode::Phrases.variant()));
        assert!(!is_correct(&guess, &secret, Mode::Words.variant()));
    }
}
