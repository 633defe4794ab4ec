//! Chess tournament scoreboard: library with models, stores and business logic.

pub mod auth;
pub mod logic;
pub mod models;

pub use auth::{AdminCredentials, AuthError, SessionStore};
pub use logic::{compare_standings, player_stats, standings, top_player};
pub use models::{
    MatchId, MatchOutcome, MatchRecord, MatchSubmission, Player, PlayerStats, Session, SessionUser,
    Tournament, TournamentError,
};
