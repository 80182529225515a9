//! Phrase mode: guess a multi-word phrase one word or letter at a time.
//!
//! A word guess is correct if it matches any word of the phrase, and it
//! reveals every position holding that word at once.

use super::{
    Difficulty, GameVariant, Mode, Outcome, RevealPattern, ScoringPolicy, SecretString,
};
use tracing::{debug, instrument};

/// Points per word of a solved phrase.
pub const POINTS_PER_WORD: u32 = 5;

/// Multi-word hangman rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhraseVariant;

impl GameVariant for PhraseVariant {
    fn mode(&self) -> Mode {
        Mode::Phrases
    }

    /// Collapses whitespace runs so pattern words line up with secret words.
    fn secret_from(&self, candidate: &str) -> SecretString {
        SecretString::new(&candidate.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    #[instrument(skip(self, secret))]
    fn is_word_correct(&self, guess: &str, secret: &SecretString) -> bool {
        secret
            .words()
            .iter()
            .any(|word| word.to_lowercase() == guess.to_lowercase())
    }

    /// Sets every matching word to the guess and re-renders the pattern with
    /// single spaces.
    #[instrument(skip(self, secret, pattern))]
    fn reveal_word(
        &self,
        guess: &str,
        secret: &SecretString,
        pattern: &RevealPattern,
    ) -> RevealPattern {
        let secret_words = secret.words();
        let mut shown: Vec<&str> = pattern.as_str().split(' ').collect();
        shown.resize(secret_words.len(), "");

        let mut revealed = 0;
        for (i, word) in secret_words.iter().enumerate() {
            if word.to_lowercase() == guess.to_lowercase() {
                shown[i] = guess;
                revealed += 1;
            }
        }
        debug!(revealed, "Revealed phrase words");

        RevealPattern::from_rendered(shown.join(" "))
    }
}

impl ScoringPolicy for PhraseVariant {
    /// A win scores five points per phrase word.
    fn compute_score(
        &self,
        secret: &SecretString,
        _difficulty: Difficulty,
        outcome: Outcome,
    ) -> u32 {
        match outcome {
            Outcome::Won => POINTS_PER_WORD * secret.word_count() as u32,
            Outcome::Lost | Outcome::InProgress => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_word_is_correct() {
        let secret = SecretString::new("the quick fox");
        assert!(PhraseVariant.is_word_correct("fox", &secret));
        assert!(PhraseVariant.is_word_correct("the", &secret));
        assert!(!PhraseVariant.is_word_correct("dog", &secret));
    }

    #[test]
    fn test_reveal_single_word() {
        let secret = SecretString::new("the quick fox");
        let pattern = RevealPattern::hidden(&secret);
        assert_eq!(
            PhraseVariant.reveal_word("fox", &secret, &pattern).as_str(),
            "___ _____ fox"
        );
    }

    #[test]
    fn test_reveal_every_occurrence() {
        let secret = SecretString::new("a cat and a dog");
        let pattern = RevealPattern::hidden(&secret);
        assert_eq!(
            PhraseVariant.reveal_word("a", &secret, &pattern).as_str(),
            "a ___ ___ a ___"
        );
    }

    #[test]
    fn test_reveal_keeps_revealed_words() {
        let secret = SecretString::new("the quick fox");
        let pattern = RevealPattern::from_rendered("t__ _____ fox");
        assert_eq!(
            PhraseVariant.reveal_word("quick", &secret, &pattern).as_str(),
            "t__ quick fox"
        );
    }

    #[test]
    fn test_secret_collapses_whitespace() {
        assert_eq!(
            PhraseVariant.secret_from("  The   quick\tfox ").as_str(),
            "the quick fox"
        );
    }

    #[test]
    fn test_score_five_per_word() {
        let secret = SecretString::new("the quick fox");
        let difficulty = Difficulty::new(2).unwrap();
        assert_eq!(PhraseVariant.compute_score(&secret, difficulty, Outcome::Won), 15);
        assert_eq!(PhraseVariant.compute_score(&secret, difficulty, Outcome::Lost), 0);
    }
}
