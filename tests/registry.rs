//! Integration tests for the player registry: registration, uniqueness, removal.

use chess_scoreboard_web::{MatchSubmission, Tournament, TournamentError};

fn tournament_with(names: &[&str]) -> Tournament {
    let mut t = Tournament::new();
    for name in names {
        t.add_player(name).unwrap();
    }
    t
}

#[test]
fn add_then_exists() {
    let mut t = Tournament::new();
    let player = t.add_player("Alice").unwrap();
    assert_eq!(player.name, "Alice");
    assert!(t.player_exists("Alice"));
    assert!(!t.player_exists("Bob"));
}

#[test]
fn add_trims_surrounding_whitespace() {
    let mut t = Tournament::new();
    let player = t.add_player("  Alice  ").unwrap();
    assert_eq!(player.name, "Alice");
    assert!(t.player_exists("Alice"));
    assert!(!t.player_exists("  Alice  "));
}

#[test]
fn add_rejects_empty_and_whitespace_only_names() {
    let mut t = Tournament::new();
    assert!(matches!(
        t.add_player(""),
        Err(TournamentError::EmptyPlayerName)
    ));
    assert!(matches!(
        t.add_player("   "),
        Err(TournamentError::EmptyPlayerName)
    ));
    assert!(t.players.is_empty());
}

#[test]
fn adding_same_name_twice_is_a_conflict() {
    let mut t = tournament_with(&["Alice"]);
    assert!(matches!(
        t.add_player("Alice"),
        Err(TournamentError::DuplicatePlayer(_))
    ));
    // trimming happens before the uniqueness check
    assert!(matches!(
        t.add_player("  Alice "),
        Err(TournamentError::DuplicatePlayer(_))
    ));
    assert_eq!(t.players.len(), 1);
}

#[test]
fn names_compare_case_sensitively() {
    let mut t = tournament_with(&["alice"]);
    t.add_player("Alice").unwrap();
    assert!(t.player_exists("alice"));
    assert!(t.player_exists("Alice"));
    assert!(!t.player_exists("ALICE"));
}

#[test]
fn remove_unknown_player_is_not_found() {
    let mut t = tournament_with(&["Alice"]);
    let err = t.remove_player("Bob").unwrap_err();
    assert!(matches!(err, TournamentError::PlayerNotFound(_)));
    assert!(err.is_not_found());
}

#[test]
fn remove_player_without_matches_succeeds() {
    let mut t = tournament_with(&["Alice", "Bob"]);
    t.remove_player("Alice").unwrap();
    assert!(!t.player_exists("Alice"));
    assert!(t.player_exists("Bob"));
}

#[test]
fn remove_is_blocked_while_matches_reference_the_player() {
    let mut t = tournament_with(&["Alice", "Bob"]);
    let m = t
        .record_match(&MatchSubmission::new("Alice", "Bob", "win", Some("Alice")))
        .unwrap();

    assert!(matches!(
        t.remove_player("Bob"),
        Err(TournamentError::PlayerHasMatches(_))
    ));
    assert!(t.player_exists("Bob"));

    // once the referencing match is gone, removal goes through
    t.delete_match(m.match_id).unwrap();
    t.remove_player("Bob").unwrap();
    assert!(!t.player_exists("Bob"));
}
