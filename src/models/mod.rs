//! Data structures for the chess scoreboard: players, matches, sessions, tournament store.

mod game;
mod player;
mod session;
mod tournament;

pub use game::{MatchId, MatchOutcome, MatchRecord, MatchSubmission};
pub use player::{Player, PlayerStats};
pub use session::{Session, SessionUser};
pub use tournament::{Tournament, TournamentError};
