//! Strictly Hangman library - type-safe hangman engine
//!
//! Word mode and phrase mode share one guess engine and one round
//! lifecycle; each mode keeps its own persisted leaderboard.
//!
//! # Architecture
//!
//! - **Games**: Guess normalization, letter/word reveal rules, scoring, round state
//! - **Leaderboard**: Append-only ranked scores, one JSON file per mode
//! - **Session**: The orchestrator a front end drives
//! - **Suppliers**: Where candidate words and phrases come from
//!
//! # Example
//!
//! ```no_run
//! use strictly_hangman::{Difficulty, GameSession, Mode, PlayerProfile, StaticSupplier};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut session = GameSession::open(Mode::Words, "word_LB.json")?;
//! let profile = PlayerProfile::new("ann", Difficulty::new(4)?)?;
//! let supplier = StaticSupplier::new(["hangman"], Vec::<String>::new());
//!
//! session.start_round(profile, &supplier)?;
//! let report = session.submit_guess("a")?;
//! println!("{} ({} attempts left)", report.reveal_pattern, report.attempts_remaining);
//! session.save_scores()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod leaderboard;
mod session;
mod suppliers;

// Crate-level exports - Configuration
pub use config::{ConfigError, HangmanConfig};

// Crate-level exports - Game engine
pub use games::hangman::{
    AttemptsAccounted, CandidateSupplier, Contract, Difficulty, GameVariant, Guess,
    GuessContract, GuessError, GuessFeedback, GuessHistory, InvalidGuess, Invariant,
    InvariantSet, InvariantViolation, MAX_ATTEMPTS, Mode, Outcome, OutcomeConsistent,
    PLACEHOLDER, POINTS_PER_WORD, PhraseVariant, PlayerProfile, ProfileError, RevealConsistent,
    RevealPattern, RoundError, RoundInProgress, RoundInvariants, RoundState, ScoreCard,
    ScoringPolicy, SecretString, SupplyError, Turn, WordVariant, choose_secret_string,
    is_maskable,
};

// Crate-level exports - Guess evaluation rules
pub use games::hangman::rules;

// Crate-level exports - Leaderboard
pub use leaderboard::{LeaderboardEntry, LeaderboardError, LeaderboardErrorKind, LeaderboardStore};

// Crate-level exports - Session management
pub use session::{GameSession, GuessReport, Rejection, SessionError};

// Crate-level exports - Candidate suppliers
pub use suppliers::{ConfiguredSupplier, RemoteWordSupplier, StaticSupplier};
