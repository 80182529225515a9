//! Scoring policy for finished rounds.

use super::{Difficulty, Outcome, SecretString};
use serde::{Deserialize, Serialize};

/// Maps a finished round to a score.
pub trait ScoringPolicy {
    /// Computes the score for a terminal outcome.
    ///
    /// Called once per round, at the transition out of `InProgress`.
    fn compute_score(&self, secret: &SecretString, difficulty: Difficulty, outcome: Outcome) -> u32;
}

/// Score of a round, settled at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard(Option<u32>);

impl ScoreCard {
    /// Settles the score on first call. Later calls return the settled
    /// value without evaluating `compute`.
    pub(crate) fn settle(&mut self, compute: impl FnOnce() -> u32) -> u32 {
        *self.0.get_or_insert_with(compute)
    }

    /// Settled score, or 0 while the round is running.
    pub fn value(&self) -> u32 {
        self.0.unwrap_or(0)
    }

    /// Returns true once the score has been settled.
    pub fn is_settled(&self) -> bool {
        self.0.is_some()
    }
}
