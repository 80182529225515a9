//! Contract-based validation for guesses.
//!
//! Preconditions are checked on every guess; postconditions only in debug
//! builds.

use super::invariants::{InvariantSet, RoundInvariants};
use super::{Guess, GuessError, RoundState};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessError>;
}

/// Precondition: the round still accepts guesses.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects guesses against a finished round.
    #[instrument(skip(round))]
    pub fn check(round: &RoundState) -> Result<(), GuessError> {
        if round.outcome().is_terminal() {
            Err(GuessError::RoundOver(round.outcome()))
        } else {
            Ok(())
        }
    }
}

/// Contract for applying a guess.
///
/// Postconditions:
/// - attempts never increase and drop by at most one
/// - history grows by at most one entry
/// - all round invariants hold
pub struct GuessContract;

impl Contract<RoundState, Guess> for GuessContract {
    fn pre(round: &RoundState, _guess: &Guess) -> Result<(), GuessError> {
        RoundInProgress::check(round)
    }

    fn post(before: &RoundState, after: &RoundState) -> Result<(), GuessError> {
        let attempts_ok = after.attempts_remaining() <= before.attempts_remaining()
            && before.attempts_remaining() - after.attempts_remaining() <= 1;
        if !attempts_ok {
            return Err(GuessError::InvariantViolation(format!(
                "Postcondition failed: attempts went from {} to {}",
                before.attempts_remaining(),
                after.attempts_remaining()
            )));
        }

        if after.history().len() > before.history().len() + 1 {
            return Err(GuessError::InvariantViolation(
                "Postcondition failed: more than one guess recorded".to_string(),
            ));
        }

        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GuessError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{Difficulty, Mode, Outcome, PlayerProfile};

    fn profile() -> PlayerProfile {
        PlayerProfile::new("tester", Difficulty::new(4).unwrap()).unwrap()
    }

    #[test]
    fn test_precondition_rejects_finished_round() {
        let mut round = RoundState::with_secret(Mode::Words, profile(), "cat");
        round.submit("cat").unwrap();
        let guess = Guess::normalize("a").unwrap();
        assert_eq!(
            GuessContract::pre(&round, &guess),
            Err(GuessError::RoundOver(Outcome::Won))
        );
    }

    #[test]
    fn test_postcondition_holds_after_guess() {
        let before = RoundState::with_secret(Mode::Words, profile(), "cat");
        let mut after = before.clone();
        after.submit("z").unwrap();
        assert!(GuessContract::post(&before, &after).is_ok());
    }
}
