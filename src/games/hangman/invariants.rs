//! First-class invariants for hangman rounds.
//!
//! Invariants are logical properties that must hold after every applied
//! guess. They are checked in debug builds and tested independently.

use super::{MAX_ATTEMPTS, Outcome, PLACEHOLDER, RoundState, is_maskable};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for v in &violations {
                warn!(invariant = %v.description, "Invariant violated");
            }
            Err(violations)
        }
    }
}

/// Every maskable secret position shows a placeholder or its own character.
pub struct RevealConsistent;

impl Invariant<RoundState> for RevealConsistent {
    fn holds(round: &RoundState) -> bool {
        let secret = round.secret().as_str();
        let pattern = round.reveal_pattern().as_str();
        if secret.chars().count() != pattern.chars().count() {
            return false;
        }
        secret.chars().zip(pattern.chars()).all(|(s, p)| {
            if is_maskable(s) {
                p == PLACEHOLDER || p.to_lowercase().eq(s.to_lowercase())
            } else {
                p == s
            }
        })
    }

    fn description() -> &'static str {
        "Reveal pattern agrees with the secret"
    }
}

/// Attempts stay within bounds and account for every incorrect guess.
pub struct AttemptsAccounted;

impl Invariant<RoundState> for AttemptsAccounted {
    fn holds(round: &RoundState) -> bool {
        let spent = usize::from(MAX_ATTEMPTS - round.attempts_remaining().min(MAX_ATTEMPTS));
        round.attempts_remaining() <= MAX_ATTEMPTS && spent == round.history().incorrect().len()
    }

    fn description() -> &'static str {
        "Attempts remaining matches incorrect guesses"
    }
}

/// The outcome agrees with the pattern and attempts.
pub struct OutcomeConsistent;

impl Invariant<RoundState> for OutcomeConsistent {
    fn holds(round: &RoundState) -> bool {
        let solved = !round.reveal_pattern().has_placeholders();
        match round.outcome() {
            Outcome::InProgress => !solved && round.attempts_remaining() > 0,
            Outcome::Won => solved && round.score_card().is_settled(),
            Outcome::Lost => {
                !solved && round.attempts_remaining() == 0 && round.score_card().is_settled()
            }
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with pattern and attempts"
    }
}

/// All round invariants.
pub type RoundInvariants = (RevealConsistent, AttemptsAccounted, OutcomeConsistent);
