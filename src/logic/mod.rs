//! Business logic over the tournament store: standings aggregation.

mod standings;

pub use standings::{compare_standings, player_stats, standings, top_player};
