//! Candidate supply contract.
//!
//! Where words and phrases come from (files, a remote dictionary, a test
//! fixture) is outside the engine. The engine only sees this trait.

use super::{Difficulty, Mode};
use derive_more::{Display, Error};
use tracing::instrument;

/// Source of candidate secret strings.
pub trait CandidateSupplier {
    /// Returns candidate words or phrases for the mode and difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError`] if the underlying source cannot be read.
    fn candidates(&self, mode: Mode, difficulty: Difficulty) -> Result<Vec<String>, SupplyError>;
}

/// Failure to produce candidates, with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Supply error: {} at {}:{}", message, file, line)]
pub struct SupplyError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SupplyError {
    /// Creates a new supply error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
