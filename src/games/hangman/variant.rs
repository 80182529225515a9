//! Variant capability contract.
//!
//! Word mode and phrase mode share the letter rules and round lifecycle;
//! they differ only in the hooks below. [`Mode`] selects one at round
//! creation.

use super::{
    CandidateSupplier, Difficulty, PhraseVariant, RevealPattern, RoundError, ScoringPolicy,
    SecretString, WordVariant, is_maskable,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, instrument, warn};

/// Playable hangman mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Guess a single word.
    Words,
    /// Guess a multi-word phrase.
    Phrases,
}

impl Mode {
    /// Returns the rules for this mode.
    pub fn variant(self) -> &'static dyn GameVariant {
        match self {
            Mode::Words => &WordVariant,
            Mode::Phrases => &PhraseVariant,
        }
    }
}

/// Hooks that distinguish one hangman variant from another.
pub trait GameVariant: ScoringPolicy + std::fmt::Debug + Send + Sync {
    /// The mode this variant implements.
    fn mode(&self) -> Mode;

    /// Returns true if a multi-character guess is correct.
    fn is_word_correct(&self, guess: &str, secret: &SecretString) -> bool;

    /// Returns the pattern after a correct multi-character guess.
    fn reveal_word(&self, guess: &str, secret: &SecretString, pattern: &RevealPattern)
    -> RevealPattern;

    /// Canonical form of a chosen candidate.
    fn secret_from(&self, candidate: &str) -> SecretString {
        SecretString::new(candidate)
    }

    /// Fetches usable candidates for a round.
    ///
    /// Blank candidates and candidates with nothing to guess are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WordListUnavailable`] if the supplier fails or
    /// yields no usable candidate.
    #[instrument(skip(self, supplier), fields(mode = %self.mode()))]
    fn supply_candidates(
        &self,
        supplier: &dyn CandidateSupplier,
        difficulty: Difficulty,
    ) -> Result<Vec<String>, RoundError> {
        let raw = supplier
            .candidates(self.mode(), difficulty)
            .map_err(RoundError::WordListUnavailable)?;
        let total = raw.len();

        let usable: Vec<String> = raw
            .into_iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| c.chars().any(is_maskable))
            .collect();

        debug!(total, usable = usable.len(), "Filtered candidates");
        if usable.is_empty() {
            warn!(total, "Supplier produced no usable candidates");
            return Err(RoundError::WordListUnavailable(super::SupplyError::new(format!(
                "no usable {} for difficulty {}",
                self.mode(),
                difficulty
            ))));
        }
        Ok(usable)
    }
}
