//! Leaderboard error types.

use derive_more::{Display, Error};
use std::path::Path;
use tracing::instrument;

/// What went wrong with a leaderboard file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LeaderboardErrorKind {
    /// The file could not be read, created or written.
    #[display("I/O failure")]
    Io,
    /// The file holds data that is not a leaderboard.
    #[display("corrupt data")]
    Corrupt,
}

/// Leaderboard error with resource, operation and location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display(
    "Leaderboard error ({}) during {} of '{}': {} at {}:{}",
    kind, operation, path, message, file, line
)]
pub struct LeaderboardError {
    /// Failure category.
    pub kind: LeaderboardErrorKind,
    /// Operation that failed (`load` or `save`).
    pub operation: &'static str,
    /// Leaderboard file involved.
    pub path: String,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LeaderboardError {
    /// Creates an I/O error with caller location tracking.
    #[track_caller]
    #[instrument(skip(path, message))]
    pub fn io(operation: &'static str, path: &Path, message: impl Into<String>) -> Self {
        Self::with_kind(LeaderboardErrorKind::Io, operation, path, message.into())
    }

    /// Creates a corrupt-data error with caller location tracking.
    #[track_caller]
    #[instrument(skip(path, message))]
    pub fn corrupt(operation: &'static str, path: &Path, message: impl Into<String>) -> Self {
        Self::with_kind(LeaderboardErrorKind::Corrupt, operation, path, message.into())
    }

    /// Returns true if the file held malformed data.
    pub fn is_corrupt(&self) -> bool {
        self.kind == LeaderboardErrorKind::Corrupt
    }

    /// One line suitable for showing to a player before giving up.
    pub fn user_message(&self) -> String {
        match self.kind {
            LeaderboardErrorKind::Corrupt => format!(
                "There was a problem loading the leader board from '{}'. The application will now exit.",
                self.path
            ),
            LeaderboardErrorKind::Io => format!(
                "The leader board at '{}' could not be accessed ({}).",
                self.path, self.message
            ),
        }
    }

    #[track_caller]
    fn with_kind(
        kind: LeaderboardErrorKind,
        operation: &'static str,
        path: &Path,
        message: String,
    ) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            operation,
            path: path.display().to_string(),
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
