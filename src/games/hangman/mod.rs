//! Hangman game engine: word mode and phrase mode.

mod action;
mod contracts;
mod invariants;
mod phrase;
pub mod rules;
mod round;
mod scoring;
mod selection;
mod supply;
mod types;
mod variant;
mod word;

pub use action::{Guess, GuessError, InvalidGuess};
pub use contracts::{Contract, GuessContract, RoundInProgress};
pub use invariants::{
    AttemptsAccounted, Invariant, InvariantSet, InvariantViolation, OutcomeConsistent,
    RevealConsistent, RoundInvariants,
};
pub use phrase::{POINTS_PER_WORD, PhraseVariant};
pub use round::{GuessFeedback, RoundError, RoundState, Turn};
pub use scoring::{ScoreCard, ScoringPolicy};
pub use selection::choose_secret_string;
pub use supply::{CandidateSupplier, SupplyError};
pub use types::{
    Difficulty, GuessHistory, MAX_ATTEMPTS, Outcome, PLACEHOLDER, PlayerProfile, ProfileError,
    RevealPattern, SecretString, is_maskable,
};
pub use variant::{GameVariant, Mode};
pub use word::WordVariant;
