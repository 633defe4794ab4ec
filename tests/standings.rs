//! Integration tests for standings aggregation: counts, points, win rate, ranking.

use chess_scoreboard_web::{standings, top_player, MatchSubmission, PlayerStats, Tournament};

fn tournament_with(names: &[&str]) -> Tournament {
    let mut t = Tournament::new();
    for name in names {
        t.add_player(name).unwrap();
    }
    t
}

fn record_win(t: &mut Tournament, p1: &str, p2: &str, winner: &str) {
    t.record_match(&MatchSubmission::new(p1, p2, "win", Some(winner)))
        .unwrap();
}

fn record_draw(t: &mut Tournament, p1: &str, p2: &str) {
    t.record_match(&MatchSubmission::new(p1, p2, "draw", None))
        .unwrap();
}

fn stats_for<'a>(table: &'a [PlayerStats], name: &str) -> &'a PlayerStats {
    table.iter().find(|s| s.name == name).unwrap()
}

#[test]
fn points_and_win_rate_formula() {
    // Alice: 3 wins, 1 draw, 2 losses against Bob
    let mut t = tournament_with(&["Alice", "Bob"]);
    for _ in 0..3 {
        record_win(&mut t, "Alice", "Bob", "Alice");
    }
    record_draw(&mut t, "Alice", "Bob");
    for _ in 0..2 {
        record_win(&mut t, "Alice", "Bob", "Bob");
    }

    let table = standings(&t);
    let alice = stats_for(&table, "Alice");
    assert_eq!(alice.wins, 3);
    assert_eq!(alice.draws, 1);
    assert_eq!(alice.losses, 2);
    assert_eq!(alice.total_games, 6);
    assert_eq!(alice.points, 7);
    assert_eq!(alice.win_rate, 50.0);

    // Bob's rate exercises the one-decimal rounding: 2/6 -> 33.3
    let bob = stats_for(&table, "Bob");
    assert_eq!(bob.wins, 2);
    assert_eq!(bob.draws, 1);
    assert_eq!(bob.losses, 3);
    assert_eq!(bob.points, 5);
    assert_eq!(bob.win_rate, 33.3);
}

#[test]
fn win_and_draw_scenario_ranks_alice_first() {
    let mut t = tournament_with(&["Alice", "Bob"]);
    record_win(&mut t, "Alice", "Bob", "Alice");
    record_draw(&mut t, "Alice", "Bob");

    let table = standings(&t);
    assert_eq!(table[0].name, "Alice");

    let alice = stats_for(&table, "Alice");
    assert_eq!((alice.wins, alice.draws, alice.losses), (1, 1, 0));
    assert_eq!(alice.points, 3);

    let bob = stats_for(&table, "Bob");
    assert_eq!((bob.wins, bob.draws, bob.losses), (0, 1, 1));
    assert_eq!(bob.points, 1);
}

#[test]
fn players_with_no_games_have_zero_stats() {
    let t = tournament_with(&["Alice"]);
    let table = standings(&t);
    let alice = stats_for(&table, "Alice");
    assert_eq!(alice.total_games, 0);
    assert_eq!(alice.points, 0);
    assert_eq!(alice.win_rate, 0.0);
}

#[test]
fn equal_win_rates_are_broken_by_win_count() {
    // Carol and Dave are both unbeaten, but Carol has more wins
    let mut t = tournament_with(&["Carol", "Dave", "Erin"]);
    record_win(&mut t, "Carol", "Erin", "Carol");
    record_win(&mut t, "Carol", "Erin", "Carol");
    record_win(&mut t, "Dave", "Erin", "Dave");

    let table = standings(&t);
    let names: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Carol", "Dave", "Erin"]);
}

#[test]
fn top_player_is_the_head_of_the_ranking() {
    let mut t = tournament_with(&["Carol", "Dave", "Erin"]);
    record_win(&mut t, "Carol", "Erin", "Carol");
    record_win(&mut t, "Dave", "Erin", "Dave");
    record_win(&mut t, "Carol", "Dave", "Carol");

    let table = standings(&t);
    assert_eq!(top_player(&table).unwrap().name, table[0].name);
    assert_eq!(top_player(&table).unwrap().name, "Carol");
}

#[test]
fn empty_tournament_has_no_standings_and_no_top_player() {
    let t = Tournament::new();
    let table = standings(&t);
    assert!(table.is_empty());
    assert!(top_player(&table).is_none());
}

#[test]
fn deleting_a_match_updates_derived_stats() {
    let mut t = tournament_with(&["Alice", "Bob"]);
    record_win(&mut t, "Alice", "Bob", "Alice");
    record_win(&mut t, "Alice", "Bob", "Alice");

    let id = t.matches_by_recency()[0].match_id;
    t.delete_match(id).unwrap();

    let table = standings(&t);
    assert_eq!(stats_for(&table, "Alice").wins, 1);
    assert_eq!(stats_for(&table, "Bob").losses, 1);
}
