//! Leaderboard records.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One finished round: who played and what they scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct LeaderboardEntry {
    name: String,
    score: u32,
}
