//! Game session orchestration.
//!
//! A [`GameSession`] is the only thing a front end talks to. It owns one
//! mode, one leaderboard for that mode, and at most one round at a time.
//! Scores reach the leaderboard exactly once per round; the leaderboard is
//! read when the session opens and written only by [`GameSession::save_scores`].

use crate::games::hangman::{
    CandidateSupplier, GuessError, GuessFeedback, InvalidGuess, Mode, Outcome, PlayerProfile,
    RoundError, RoundState,
};
use crate::leaderboard::{LeaderboardEntry, LeaderboardError, LeaderboardStore};
use derive_more::Display;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Why a submitted guess was not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The input was not a usable guess.
    #[display("{}", _0)]
    Invalid(InvalidGuess),
    /// The guess was already submitted this round.
    #[display("You repeated your guess")]
    Repeated,
}

/// What a front end needs to render after a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    /// True if the guess was evaluated (correct or incorrect).
    pub accepted: bool,
    /// True if the guess was evaluated and correct.
    pub correct: bool,
    /// Why the guess was not evaluated.
    pub rejection: Option<Rejection>,
    /// Pattern after the guess.
    pub reveal_pattern: String,
    /// Attempts left after the guess.
    pub attempts_remaining: u8,
    /// Outcome after the guess.
    pub outcome: Outcome,
    /// Round score (0 until the round ends).
    pub score: u32,
}

/// Session error.
#[derive(Debug, Clone, Display)]
pub enum SessionError {
    /// No round has been started.
    #[display("No round in progress. Start a new game to continue playing")]
    NoRound,

    /// The current round already ended.
    #[display("Round is already over ({}). Start a new game to continue playing", _0)]
    RoundOver(Outcome),

    /// A round could not be created.
    #[display("{}", _0)]
    Round(RoundError),

    /// The leaderboard could not be loaded or saved.
    #[display("{}", _0)]
    Leaderboard(LeaderboardError),

    /// Engine postcondition failure.
    #[display("{}", _0)]
    Guess(GuessError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Round(err) => Some(err),
            Self::Leaderboard(err) => Some(err),
            Self::Guess(err) => Some(err),
            Self::NoRound | Self::RoundOver(_) => None,
        }
    }
}

impl From<RoundError> for SessionError {
    fn from(err: RoundError) -> Self {
        Self::Round(err)
    }
}

impl From<LeaderboardError> for SessionError {
    fn from(err: LeaderboardError) -> Self {
        Self::Leaderboard(err)
    }
}

/// One player's session in one mode.
#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    mode: Mode,
    leaderboard: LeaderboardStore,
    profile: Option<PlayerProfile>,
    candidates: Vec<String>,
    round: Option<RoundState>,
    rng: R,
}

impl GameSession<StdRng> {
    /// Opens a session, loading the mode's leaderboard.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Leaderboard`] if the leaderboard is corrupt or
    /// unreadable.
    #[instrument(skip(leaderboard_path), fields(mode = %mode, path = %leaderboard_path.as_ref().display()))]
    pub fn open(mode: Mode, leaderboard_path: impl AsRef<Path>) -> Result<Self, SessionError> {
        Self::with_rng(mode, leaderboard_path, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    /// Opens a session with a caller-supplied random source.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Leaderboard`] if the leaderboard is corrupt or
    /// unreadable.
    #[instrument(skip(leaderboard_path, rng), fields(mode = %mode))]
    pub fn with_rng(
        mode: Mode,
        leaderboard_path: impl AsRef<Path>,
        rng: R,
    ) -> Result<Self, SessionError> {
        let leaderboard = LeaderboardStore::load(leaderboard_path)?;
        Ok(Self::with_store(mode, leaderboard, rng))
    }

    /// Creates a session around an already loaded leaderboard.
    #[instrument(skip(leaderboard, rng), fields(mode = %mode, entries = leaderboard.entries().len()))]
    pub fn with_store(mode: Mode, leaderboard: LeaderboardStore, rng: R) -> Self {
        info!("Creating game session");
        Self {
            mode,
            leaderboard,
            profile: None,
            candidates: Vec::new(),
            round: None,
            rng,
        }
    }

    /// Fetches candidates for the profile and starts a fresh round.
    ///
    /// On failure the previous round, if any, is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Round`] if no candidates are available.
    #[instrument(skip(self, profile, supplier), fields(mode = %self.mode, player = %profile.name()))]
    pub fn start_round(
        &mut self,
        profile: PlayerProfile,
        supplier: &dyn CandidateSupplier,
    ) -> Result<&RoundState, SessionError> {
        let candidates = self
            .mode
            .variant()
            .supply_candidates(supplier, profile.difficulty())?;
        let round = RoundState::start(self.mode, profile.clone(), &candidates, &mut self.rng)?;

        self.candidates = candidates;
        self.profile = Some(profile);
        Ok(self.round.insert(round))
    }

    /// Starts another round with the same profile and candidate list.
    ///
    /// The current round is discarded whether or not it finished.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoRound`] if no round was ever started.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset_round(&mut self) -> Result<&RoundState, SessionError> {
        let profile = self.profile.clone().ok_or(SessionError::NoRound)?;
        let round = RoundState::start(self.mode, profile, &self.candidates, &mut self.rng)?;
        if self.round.as_ref().is_some_and(|r| !r.outcome().is_terminal()) {
            debug!("Abandoning unfinished round");
        }
        Ok(self.round.insert(round))
    }

    /// Submits raw player input to the current round.
    ///
    /// Invalid and repeated guesses come back as a report with a
    /// [`Rejection`] and leave the round untouched. When a guess ends the
    /// round, its score is appended to the leaderboard.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoRound`] before the first round and
    /// [`SessionError::RoundOver`] once the round has ended.
    #[instrument(skip(self, raw), fields(mode = %self.mode))]
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, SessionError> {
        let round = self.round.as_mut().ok_or(SessionError::NoRound)?;

        let (feedback, rejection) = match round.submit(raw) {
            Ok(turn) => {
                if let Some(score) = turn.settled_score {
                    self.leaderboard.add(round.profile().name(), score);
                    info!(score, outcome = %round.outcome(), "Score recorded");
                }
                let rejection =
                    (turn.feedback == GuessFeedback::Repeated).then_some(Rejection::Repeated);
                (Some(turn.feedback), rejection)
            }
            Err(GuessError::Invalid(invalid)) => {
                warn!(reason = %invalid, "Invalid guess");
                (None, Some(Rejection::Invalid(invalid)))
            }
            Err(GuessError::RoundOver(outcome)) => return Err(SessionError::RoundOver(outcome)),
            Err(err @ GuessError::InvariantViolation(_)) => return Err(SessionError::Guess(err)),
        };

        let accepted = matches!(
            feedback,
            Some(GuessFeedback::Correct) | Some(GuessFeedback::Incorrect)
        );
        Ok(GuessReport {
            accepted,
            correct: feedback == Some(GuessFeedback::Correct),
            rejection,
            reveal_pattern: round.reveal_pattern().to_string(),
            attempts_remaining: round.attempts_remaining(),
            outcome: round.outcome(),
            score: round.score(),
        })
    }

    /// Score of the current round, 0 while running or before any round.
    pub fn current_score(&self) -> u32 {
        self.round.as_ref().map_or(0, RoundState::score)
    }

    /// Ranked leaderboard for this session's mode.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.ranked_view()
    }

    /// Persists the leaderboard.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Leaderboard`] if the file cannot be written.
    #[instrument(skip(self), fields(mode = %self.mode, path = %self.leaderboard.path().display()))]
    pub fn save_scores(&self) -> Result<(), SessionError> {
        self.leaderboard.save()?;
        Ok(())
    }

    /// Current round, if any.
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// The secret of the current round, for admin views.
    pub fn secret(&self) -> Option<&str> {
        self.round.as_ref().map(|r| r.secret().as_str())
    }

    /// Mode of this session.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Profile of the most recent round.
    pub fn profile(&self) -> Option<&PlayerProfile> {
        self.profile.as_ref()
    }
}
