//! Match records: outcome sum type, ledger entries, and the raw submission shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match. Assigned by the ledger from a strictly
/// increasing counter; never reused, even after deletions.
pub type MatchId = u64;

/// Outcome of a match. Internally tagged as `result`, so a win serializes as
/// `"result":"win","winner":...` and a draw as `"result":"draw"` with no
/// winner field at all.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum MatchOutcome {
    /// Decisive game; `winner` is one of the two players of the match.
    Win { winner: String },
    /// Drawn game. There is no winner to name, so the type carries none.
    Draw,
}

/// A single entry in the match ledger. Entries are appended and deleted,
/// never updated in place.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub match_id: MatchId,
    pub player1: String,
    pub player2: String,
    #[serde(flatten)]
    pub outcome: MatchOutcome,
    pub timestamp: DateTime<Utc>,
}

impl MatchRecord {
    /// The winning player's name, or None for a draw.
    pub fn winner(&self) -> Option<&str> {
        match &self.outcome {
            MatchOutcome::Win { winner } => Some(winner),
            MatchOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Draw)
    }

    /// Whether the named player took part in this match (either side).
    pub fn involves(&self, name: &str) -> bool {
        self.player1 == name || self.player2 == name
    }
}

/// Raw match submission as it arrives on the wire. Every field defaults so a
/// missing field reaches the ordered validation rules (and their exact error
/// messages) instead of failing deserialization.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MatchSubmission {
    #[serde(default)]
    pub player1: String,
    #[serde(default)]
    pub player2: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub winner: Option<String>,
}

impl MatchSubmission {
    /// Convenience constructor for tests and programmatic submissions.
    pub fn new(
        player1: impl Into<String>,
        player2: impl Into<String>,
        result: impl Into<String>,
        winner: Option<&str>,
    ) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            result: result.into(),
            winner: winner.map(str::to_string),
        }
    }
}
