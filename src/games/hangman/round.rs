//! Round state and the guess lifecycle.
//!
//! A [`RoundState`] is created once per round and only changes through
//! [`RoundState::submit`] / [`RoundState::apply`]. `Won` and `Lost` are
//! terminal: the score is settled on the transition and every later guess
//! is refused.

use super::contracts::{Contract, GuessContract};
use super::rules;
use super::selection::choose_secret_string;
use super::{
    GuessHistory, Guess, GuessError, MAX_ATTEMPTS, Mode, Outcome, PlayerProfile, RevealPattern,
    ScoreCard, SecretString, SupplyError,
};
use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Verdict on a single submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GuessFeedback {
    /// The guess was correct and the pattern was updated.
    #[display("correct")]
    Correct,
    /// The guess was wrong and cost one attempt.
    #[display("incorrect")]
    Incorrect,
    /// The guess had already been submitted; nothing changed.
    #[display("repeated")]
    Repeated,
}

/// Result of applying one guess to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Verdict on the guess.
    pub feedback: GuessFeedback,
    /// Score settled by this guess, present only on the finishing turn.
    pub settled_score: Option<u32>,
}

/// Mutable state of one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    mode: Mode,
    profile: PlayerProfile,
    secret: SecretString,
    reveal_pattern: RevealPattern,
    attempts_remaining: u8,
    history: GuessHistory,
    outcome: Outcome,
    score: ScoreCard,
}

impl RoundState {
    /// Starts a round with a secret picked from the candidates.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyCandidateList`] if there are no candidates.
    #[instrument(skip(profile, candidates, rng), fields(player = %profile.name(), count = candidates.len()))]
    pub fn start<R>(
        mode: Mode,
        profile: PlayerProfile,
        candidates: &[String],
        rng: &mut R,
    ) -> Result<Self, RoundError>
    where
        R: Rng + ?Sized,
    {
        let chosen = choose_secret_string(candidates, rng)?;
        let round = Self::with_secret(mode, profile, chosen);
        info!(
            mode = %mode,
            secret_len = round.secret.as_str().len(),
            "Round started"
        );
        Ok(round)
    }

    /// Starts a round with a known secret.
    #[instrument(skip(profile, secret), fields(player = %profile.name()))]
    pub fn with_secret(mode: Mode, profile: PlayerProfile, secret: &str) -> Self {
        let secret = mode.variant().secret_from(secret);
        let reveal_pattern = RevealPattern::hidden(&secret);
        let mut round = Self {
            mode,
            profile,
            secret,
            reveal_pattern,
            attempts_remaining: MAX_ATTEMPTS,
            history: GuessHistory::new(),
            outcome: Outcome::InProgress,
            score: ScoreCard::default(),
        };
        // A secret with nothing to hide is solved before the first guess.
        if rules::check_win(&round.reveal_pattern) {
            round.outcome = Outcome::Won;
            round.settle_if_terminal();
        }
        round
    }

    /// Normalizes raw input and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::RoundOver`] for a finished round, and
    /// [`GuessError::Invalid`] if the input is not a usable guess. Neither
    /// changes the round.
    #[instrument(skip(self, raw), fields(mode = %self.mode))]
    pub fn submit(&mut self, raw: &str) -> Result<Turn, GuessError> {
        super::contracts::RoundInProgress::check(self)?;
        let guess = Guess::normalize(raw)?;
        self.apply(&guess)
    }

    /// Applies a normalized guess.
    ///
    /// Repeated guesses are reported as [`GuessFeedback::Repeated`] and leave
    /// the round untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::RoundOver`] for a finished round.
    #[instrument(skip(self), fields(mode = %self.mode, attempts = self.attempts_remaining))]
    pub fn apply(&mut self, guess: &Guess) -> Result<Turn, GuessError> {
        GuessContract::pre(self, guess)?;

        if rules::is_repeated(guess, &self.history) {
            debug!(guess = %guess, "Repeated guess ignored");
            return Ok(Turn {
                feedback: GuessFeedback::Repeated,
                settled_score: None,
            });
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let variant = self.mode.variant();
        let feedback = if rules::is_correct(guess, &self.secret, variant) {
            self.history.record_correct(guess.as_str());
            self.reveal_pattern = rules::reveal(guess, &self.secret, &self.reveal_pattern, variant);
            if rules::check_win(&self.reveal_pattern) {
                self.outcome = Outcome::Won;
            }
            GuessFeedback::Correct
        } else {
            self.history.record_incorrect(guess.as_str());
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            if self.attempts_remaining == 0 {
                self.outcome = Outcome::Lost;
            }
            GuessFeedback::Incorrect
        };

        debug!(
            feedback = %feedback,
            pattern = %self.reveal_pattern,
            attempts = self.attempts_remaining,
            "Guess applied"
        );

        let settled_score = self.settle_if_terminal();

        #[cfg(debug_assertions)]
        GuessContract::post(&before, self)?;

        Ok(Turn {
            feedback,
            settled_score,
        })
    }

    /// Settles the score if the round just ended.
    fn settle_if_terminal(&mut self) -> Option<u32> {
        if !self.outcome.is_terminal() || self.score.is_settled() {
            return None;
        }
        let variant = self.mode.variant();
        let difficulty = self.profile.difficulty();
        let outcome = self.outcome;
        let score = self
            .score
            .settle(|| variant.compute_score(&self.secret, difficulty, outcome));
        info!(outcome = %outcome, score, player = %self.profile.name(), "Round finished");
        Some(score)
    }

    /// Mode of this round.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Player profile for this round.
    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// The secret word or phrase.
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// Current reveal pattern.
    pub fn reveal_pattern(&self) -> &RevealPattern {
        &self.reveal_pattern
    }

    /// Incorrect guesses still allowed.
    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Guesses submitted so far.
    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Settled score, or 0 while the round is running.
    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// Score card, for checking whether the score was settled.
    pub fn score_card(&self) -> &ScoreCard {
        &self.score
    }
}

/// Failure to create a round. No round state exists after this error.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RoundError {
    /// There was nothing to choose a secret from.
    #[display("No candidates to choose a secret from")]
    EmptyCandidateList,

    /// The word or phrase list could not be produced.
    #[display("Word list unavailable: {}", _0)]
    WordListUnavailable(SupplyError),
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordListUnavailable(err) => Some(err),
            Self::EmptyCandidateList => None,
        }
    }
}
