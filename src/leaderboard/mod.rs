//! Persisted per-mode leaderboards.

mod error;
mod models;
mod store;

pub use error::{LeaderboardError, LeaderboardErrorKind};
pub use models::LeaderboardEntry;
pub use store::LeaderboardStore;
