//! Player and PlayerStats data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered player. Identity is the exact (trimmed) name; the record is
/// never mutated after registration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub date_added: DateTime<Utc>,
}

impl Player {
    /// Create a new player with the given name, registered now.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date_added: Utc::now(),
        }
    }
}

/// Statistics view of a player (for API / display). Derived from the match
/// ledger on every read, never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub total_games: u32,
    /// Tournament points: 2 per win, 1 per draw, 0 per loss.
    pub points: u32,
    /// Win percentage in 0..=100, rounded to one decimal; 0.0 with no games.
    pub win_rate: f64,
}
