//! Standings: derive per-player win/loss/draw/point aggregates from the match ledger.

use crate::models::{MatchRecord, Player, PlayerStats, Tournament};
use std::cmp::Ordering;

/// Compute one player's stats with a single scan of the ledger.
///
/// A match involving the player counts as a draw if drawn, a win if the
/// player is the named winner, and a loss otherwise.
pub fn player_stats(player: &Player, matches: &[MatchRecord]) -> PlayerStats {
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut draws = 0u32;
    for m in matches.iter().filter(|m| m.involves(&player.name)) {
        if m.is_draw() {
            draws += 1;
        } else if m.winner() == Some(player.name.as_str()) {
            wins += 1;
        } else {
            losses += 1;
        }
    }
    let total_games = wins + losses + draws;
    let points = 2 * wins + draws;
    let win_rate = if total_games > 0 {
        round_one_decimal(f64::from(wins) / f64::from(total_games) * 100.0)
    } else {
        0.0
    };
    PlayerStats {
        name: player.name.clone(),
        wins,
        losses,
        draws,
        total_games,
        points,
        win_rate,
    }
}

/// Round to one decimal, the precision win rates are reported at.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Ranking order shared by the standings list and the top-player view:
/// win rate descending, then wins descending.
pub fn compare_standings(a: &PlayerStats, b: &PlayerStats) -> Ordering {
    b.win_rate
        .total_cmp(&a.win_rate)
        .then_with(|| b.wins.cmp(&a.wins))
}

/// Stats for every registered player, ranked. Recomputed from the full
/// ledger on every call; nothing is cached between reads.
pub fn standings(tournament: &Tournament) -> Vec<PlayerStats> {
    let mut table: Vec<PlayerStats> = tournament
        .players
        .iter()
        .map(|p| player_stats(p, &tournament.matches))
        .collect();
    table.sort_by(compare_standings);
    table
}

/// Head of a ranked standings slice.
pub fn top_player(table: &[PlayerStats]) -> Option<&PlayerStats> {
    table.first()
}
