//! Tournament store: player registry, match ledger, and their invariants.

use crate::models::game::{MatchId, MatchOutcome, MatchRecord, MatchSubmission};
use crate::models::player::Player;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Errors that can occur during registry and ledger operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Player name empty (or whitespace only) after trimming.
    EmptyPlayerName,
    /// A player with this exact name is already registered.
    DuplicatePlayer(String),
    /// The referenced player is not in the registry.
    PlayerNotFound(String),
    /// The player still appears in the match ledger and cannot be removed.
    PlayerHasMatches(String),
    /// No ledger entry carries this id.
    MatchNotFound(MatchId),
    /// A match submission is missing one or both player names.
    PlayersRequired,
    /// Both sides of a submission name the same player.
    IdenticalPlayers,
    /// A submission references at least one unregistered player.
    UnknownPlayers,
    /// The submitted result is neither "win" nor "draw".
    InvalidResult,
    /// The submitted winner is missing or not one of the two players.
    InvalidWinner,
}

impl TournamentError {
    /// Errors about a referenced entity being absent (404 at the API layer).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TournamentError::PlayerNotFound(_) | TournamentError::MatchNotFound(_)
        )
    }
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyPlayerName => write!(f, "Player name is required"),
            TournamentError::DuplicatePlayer(_) => write!(f, "Player already exists"),
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::PlayerHasMatches(_) => {
                write!(f, "Player has recorded matches and cannot be removed")
            }
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::PlayersRequired => write!(f, "Both players are required"),
            TournamentError::IdenticalPlayers => write!(f, "Players must be different"),
            TournamentError::UnknownPlayers => write!(f, "One or both players do not exist"),
            TournamentError::InvalidResult => write!(f, "Invalid result type"),
            TournamentError::InvalidWinner => write!(f, "Invalid winner"),
        }
    }
}

/// The tournament store: registry of players, append/delete-only match
/// ledger, and the id counter the ledger hands out. One instance owns all
/// records; handlers receive it via dependency injection and every mutation
/// runs under its lock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    /// Registered players, in registration order.
    pub players: Vec<Player>,
    /// The match ledger, in append order.
    pub matches: Vec<MatchRecord>,
    /// Next id handed out by `record_match`. Monotonic for the lifetime of
    /// the ledger; deletions never roll it back.
    pub next_match_id: MatchId,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl Tournament {
    /// Create an empty tournament with the id counter at its initial value.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            next_match_id: 1,
        }
    }

    /// Register a player. The name is trimmed; it must be non-empty and not
    /// already registered (exact, case-sensitive comparison).
    pub fn add_player(&mut self, name: &str) -> Result<Player, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        if self.player_exists(name) {
            return Err(TournamentError::DuplicatePlayer(name.to_string()));
        }
        let player = Player::new(name);
        self.players.push(player.clone());
        Ok(player)
    }

    /// Whether a player with exactly this name is registered.
    pub fn player_exists(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Remove a player by exact name. Fails while any ledger entry still
    /// references the player, so standings never carry stats for an
    /// unregistered name.
    pub fn remove_player(&mut self, name: &str) -> Result<(), TournamentError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| TournamentError::PlayerNotFound(name.to_string()))?;
        if self.matches.iter().any(|m| m.involves(name)) {
            return Err(TournamentError::PlayerHasMatches(name.to_string()));
        }
        self.players.remove(idx);
        Ok(())
    }

    /// Validate a submission and append it to the ledger.
    ///
    /// The rules run in a fixed order and the first failure wins; callers
    /// rely on which message they get back:
    /// 1. both player names present
    /// 2. the two players differ
    /// 3. both players registered
    /// 4. result is "win" or "draw"
    /// 5. for a win, the winner is one of the two players
    ///
    /// A winner submitted alongside a draw is discarded: a draw record has no
    /// winner by construction.
    pub fn record_match(
        &mut self,
        submission: &MatchSubmission,
    ) -> Result<MatchRecord, TournamentError> {
        if submission.player1.is_empty() || submission.player2.is_empty() {
            return Err(TournamentError::PlayersRequired);
        }
        if submission.player1 == submission.player2 {
            return Err(TournamentError::IdenticalPlayers);
        }
        if !self.player_exists(&submission.player1) || !self.player_exists(&submission.player2) {
            return Err(TournamentError::UnknownPlayers);
        }
        let outcome = match submission.result.as_str() {
            "win" => {
                let winner = submission
                    .winner
                    .as_deref()
                    .filter(|w| *w == submission.player1 || *w == submission.player2)
                    .ok_or(TournamentError::InvalidWinner)?;
                MatchOutcome::Win {
                    winner: winner.to_string(),
                }
            }
            "draw" => MatchOutcome::Draw,
            _ => return Err(TournamentError::InvalidResult),
        };

        let record = MatchRecord {
            match_id: self.next_match_id,
            player1: submission.player1.clone(),
            player2: submission.player2.clone(),
            outcome,
            timestamp: Utc::now(),
        };
        self.next_match_id += 1;
        self.matches.push(record.clone());
        Ok(record)
    }

    /// Delete a ledger entry by id. The id counter is untouched: ids are
    /// never reused and later entries are not renumbered.
    pub fn delete_match(&mut self, match_id: MatchId) -> Result<(), TournamentError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.match_id == match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        self.matches.remove(idx);
        Ok(())
    }

    /// Ledger entries most recent first; timestamp ties fall back to id
    /// descending (insertion order).
    pub fn matches_by_recency(&self) -> Vec<MatchRecord> {
        let mut sorted = self.matches.clone();
        sorted.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.match_id.cmp(&a.match_id))
        });
        sorted
    }

    /// Clear all players and matches and restart the id counter. Runs under
    /// the store's write lock, so readers never see a partial reset.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
