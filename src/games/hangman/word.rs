//! Word mode: guess a single dictionary word.

use super::{
    Difficulty, GameVariant, Mode, Outcome, RevealPattern, ScoringPolicy, SecretString,
};
use tracing::instrument;

/// Single-word hangman rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordVariant;

impl GameVariant for WordVariant {
    fn mode(&self) -> Mode {
        Mode::Words
    }

    /// The guess must match the whole secret.
    #[instrument(skip(self, secret))]
    fn is_word_correct(&self, guess: &str, secret: &SecretString) -> bool {
        secret.as_str().to_lowercase() == guess.to_lowercase()
    }

    /// Replaces the whole pattern with the guess as typed.
    #[instrument(skip(self, _secret, _pattern))]
    fn reveal_word(
        &self,
        guess: &str,
        _secret: &SecretString,
        _pattern: &RevealPattern,
    ) -> RevealPattern {
        RevealPattern::from_rendered(guess)
    }
}

impl ScoringPolicy for WordVariant {
    /// A win scores the difficulty level.
    fn compute_score(
        &self,
        _secret: &SecretString,
        difficulty: Difficulty,
        outcome: Outcome,
    ) -> u32 {
        match outcome {
            Outcome::Won => u32::from(difficulty.level()),
            Outcome::Lost | Outcome::InProgress => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_match() {
        let secret = SecretString::new("cat");
        assert!(WordVariant.is_word_correct("cat", &secret));
        assert!(WordVariant.is_word_correct("CAT", &secret));
        assert!(!WordVariant.is_word_correct("ca", &secret));
    }

    #[test]
    fn test_word_reveal_replaces_pattern() {
        let secret = SecretString::new("cat");
        let pattern = RevealPattern::hidden(&secret);
        assert_eq!(
            WordVariant.reveal_word("cat", &secret, &pattern).as_str(),
            "cat"
        );
    }

    #[test]
    fn test_score_is_difficulty_on_win() {
        let secret = SecretString::new("cat");
        for level in 1..=10 {
            let difficulty = Difficulty::new(level).unwrap();
            assert_eq!(
                WordVariant.compute_score(&secret, difficulty, Outcome::Won),
                u32::from(level)
            );
            assert_eq!(WordVariant.compute_score(&secret, difficulty, Outcome::Lost), 0);
        }
    }
}
