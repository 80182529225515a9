//! Core domain types for hangman.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Maximum number of incorrect guesses allowed in a round.
pub const MAX_ATTEMPTS: u8 = 6;

/// Marker standing in for an unrevealed letter or digit.
pub const PLACEHOLDER: char = '_';

/// Returns true if the character is hidden behind a placeholder at round start.
pub fn is_maskable(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// The word or phrase the player is trying to guess.
///
/// Always lower-cased. Immutable for the lifetime of a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a secret from a raw candidate, trimming and lower-casing it.
    #[instrument(skip(raw))]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Returns the secret as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the whitespace-delimited words of the secret.
    pub fn words(&self) -> Vec<&str> {
        self.0.split_whitespace().collect()
    }

    /// Number of whitespace-delimited words.
    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    /// Returns true if the secret has at least one maskable character.
    pub fn has_maskable(&self) -> bool {
        self.0.chars().any(is_maskable)
    }
}

/// Partially hidden rendering of the secret.
///
/// Every maskable secret position holds either [`PLACEHOLDER`] or the
/// case-insensitively equal secret character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct RevealPattern(String);

impl RevealPattern {
    /// Builds the fully hidden pattern for a secret.
    #[instrument(skip(secret))]
    pub fn hidden(secret: &SecretString) -> Self {
        Self(
            secret
                .as_str()
                .chars()
                .map(|c| if is_maskable(c) { PLACEHOLDER } else { c })
                .collect(),
        )
    }

    /// Wraps an already rendered pattern.
    pub fn from_rendered(rendered: impl Into<String>) -> Self {
        Self(rendered.into())
    }

    /// Returns the pattern as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if at least one placeholder remains.
    pub fn has_placeholders(&self) -> bool {
        self.0.contains(PLACEHOLDER)
    }
}

/// Guesses already submitted in a round, split by verdict.
///
/// A string appears at most once, in at most one of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessHistory {
    correct: Vec<String>,
    incorrect: Vec<String>,
}

impl GuessHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the guess was already recorded in either list.
    pub fn contains(&self, guess: &str) -> bool {
        self.correct.iter().any(|g| g == guess) || self.incorrect.iter().any(|g| g == guess)
    }

    /// Records a correct guess. Returns false if it was already known.
    pub fn record_correct(&mut self, guess: &str) -> bool {
        if self.contains(guess) {
            return false;
        }
        self.correct.push(guess.to_string());
        true
    }

    /// Records an incorrect guess. Returns false if it was already known.
    pub fn record_incorrect(&mut self, guess: &str) -> bool {
        if self.contains(guess) {
            return false;
        }
        self.incorrect.push(guess.to_string());
        true
    }

    /// Correct guesses in submission order.
    pub fn correct(&self) -> &[String] {
        &self.correct
    }

    /// Incorrect guesses in submission order.
    pub fn incorrect(&self) -> &[String] {
        &self.incorrect
    }

    /// Total number of recorded guesses.
    pub fn len(&self) -> usize {
        self.correct.len() + self.incorrect.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// Round still accepts guesses.
    #[display("in progress")]
    InProgress,
    /// Every placeholder was resolved.
    #[display("won")]
    Won,
    /// Attempts ran out with placeholders remaining.
    #[display("lost")]
    Lost,
}

impl Outcome {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Difficulty level between 1 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// Lowest difficulty.
    pub const MIN: u8 = 1;
    /// Highest difficulty.
    pub const MAX: u8 = 10;

    /// Creates a difficulty, rejecting values outside 1..=10.
    pub fn new(level: u8) -> Result<Self, ProfileError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ProfileError::DifficultyOutOfRange(level))
        }
    }

    /// Returns the numeric level.
    pub fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ProfileError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

/// Player name and difficulty, fixed for a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    name: String,
    difficulty: Difficulty,
}

impl PlayerProfile {
    /// Creates a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::EmptyName`] if the trimmed name is empty.
    #[instrument(skip(name), fields(difficulty = %difficulty))]
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Result<Self, ProfileError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(Self { name, difficulty })
    }

    /// Player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selected difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Invalid player profile input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ProfileError {
    /// Name was empty after trimming.
    #[display("Player name is required")]
    EmptyName,
    /// Difficulty outside 1..=10.
    #[display("Difficulty must be between 1 and 10, got {}", _0)]
    DifficultyOutOfRange(u8),
}

impl std::error::Error for ProfileError {}
