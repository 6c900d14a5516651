//! Integration tests for individual statistics aggregation.

use foosball_league::{compute_player_stats, Match, MatchInput, Player, PlayerStat};

fn registry(names: &[&str]) -> Vec<Player> {
    names.iter().map(|n| Player::new(*n)).collect()
}

fn played(a1: &str, a2: &str, b1: &str, b2: &str, score_a: u32, score_b: u32) -> Match {
    Match::new(MatchInput {
        team_a_player_1: a1.to_owned(),
        team_a_player_2: a2.to_owned(),
        team_b_player_1: b1.to_owned(),
        team_b_player_2: b2.to_owned(),
        score_a,
        score_b,
    })
}

fn stat<'a>(stats: &'a [PlayerStat], name: &str) -> &'a PlayerStat {
    stats
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("no stat entry for {name}"))
}

#[test]
fn one_match_credits_winners_and_losers() {
    let players = registry(&["Alice", "Bob", "Carol", "Dave"]);
    let matches = vec![played("Alice", "Bob", "Carol", "Dave", 5, 3)];

    let stats = compute_player_stats(&matches, &players);
    assert_eq!(stats.len(), 4);

    for name in ["Alice", "Bob"] {
        let s = stat(&stats, name);
        assert_eq!((s.matches, s.wins, s.losses, s.total_score), (1, 1, 0, 1));
        assert_eq!(s.ratio, 1.0);
    }
    for name in ["Carol", "Dave"] {
        let s = stat(&stats, name);
        assert_eq!((s.matches, s.wins, s.losses, s.total_score), (1, 0, 1, 0));
        assert_eq!(s.ratio, 0.0);
    }
}

#[test]
fn tie_counts_as_team_a_loss() {
    let players = registry(&["Alice", "Bob", "Carol", "Dave"]);
    let matches = vec![
        played("Alice", "Bob", "Carol", "Dave", 5, 3),
        played("Alice", "Bob", "Carol", "Dave", 5, 5),
    ];

    let stats = compute_player_stats(&matches, &players);

    for name in ["Alice", "Bob"] {
        let s = stat(&stats, name);
        assert_eq!((s.matches, s.wins, s.losses), (2, 1, 1));
        assert_eq!(s.ratio, 1.0);
    }
    for name in ["Carol", "Dave"] {
        let s = stat(&stats, name);
        assert_eq!((s.matches, s.wins, s.losses), (2, 1, 1));
    }
}

#[test]
fn zero_match_players_are_filtered() {
    let players = registry(&["Alice", "Bob", "Carol", "Dave", "Eve"]);
    let matches = vec![played("Alice", "Bob", "Carol", "Dave", 10, 0)];

    let stats = compute_player_stats(&matches, &players);
    assert_eq!(stats.len(), 4);
    assert!(stats.iter().all(|s| s.name != "Eve"));
}

#[test]
fn no_matches_yields_no_entries() {
    let players = registry(&["Alice", "Bob"]);
    let stats = compute_player_stats(&[], &players);
    assert!(stats.is_empty());
}

#[test]
fn unregistered_name_in_log_gets_an_entry() {
    let players = registry(&["Alice", "Bob", "Carol"]);
    let matches = vec![played("Alice", "Bob", "Carol", "Dave", 3, 7)];

    let stats = compute_player_stats(&matches, &players);
    let s = stat(&stats, "Dave");
    assert_eq!((s.matches, s.wins, s.losses), (1, 1, 0));
}

#[test]
fn every_match_contributes_four_participations() {
    let players = registry(&["Alice", "Bob", "Carol", "Dave", "Eve", "Frank"]);
    let matches = vec![
        played("Alice", "Bob", "Carol", "Dave", 5, 3),
        played("Eve", "Frank", "Alice", "Carol", 2, 8),
        played("Bob", "Dave", "Eve", "Alice", 6, 6),
    ];

    let stats = compute_player_stats(&matches, &players);
    let total_matches: u32 = stats.iter().map(|s| s.matches).sum();
    assert_eq!(total_matches, 4 * matches.len() as u32);

    let total_wins: u32 = stats.iter().map(|s| s.wins).sum();
    let total_losses: u32 = stats.iter().map(|s| s.losses).sum();
    assert_eq!(total_wins, 2 * matches.len() as u32);
    assert_eq!(total_losses, 2 * matches.len() as u32);
}

#[test]
fn recomputation_is_deterministic() {
    let players = registry(&["Alice", "Bob", "Carol", "Dave", "Eve"]);
    let matches = vec![
        played("Alice", "Bob", "Carol", "Dave", 5, 3),
        played("Carol", "Eve", "Alice", "Dave", 4, 4),
        played("Bob", "Carol", "Dave", "Eve", 1, 9),
    ];

    let first = compute_player_stats(&matches, &players);
    let second = compute_player_stats(&matches, &players);
    assert_eq!(first, second);
}

#[test]
fn output_is_first_appearance_order() {
    let players = registry(&["Dave", "Carol", "Bob", "Alice"]);
    let matches = vec![played("Alice", "Bob", "Carol", "Eve", 5, 3)];

    let stats = compute_player_stats(&matches, &players);
    let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
    // Registry order first (zero-match Dave filtered), then log-only names.
    assert_eq!(names, ["Carol", "Bob", "Alice", "Eve"]);
}

#[test]
fn ratio_is_win_count_when_no_losses() {
    let players = registry(&["Alice", "Bob", "Carol", "Dave"]);
    let matches = vec![
        played("Alice", "Bob", "Carol", "Dave", 5, 1),
        played("Alice", "Bob", "Carol", "Dave", 5, 2),
        played("Alice", "Bob", "Carol", "Dave", 5, 0),
    ];

    let stats = compute_player_stats(&matches, &players);
    let s = stat(&stats, "Alice");
    assert_eq!((s.wins, s.losses), (3, 0));
    assert_eq!(s.ratio, 3.0);
}

#[test]
fn ratio_divides_wins_by_losses() {
    let players = registry(&["Alice", "Bob", "Carol", "Dave"]);
    let matches = vec![
        played("Alice", "Bob", "Carol", "Dave", 5, 1),
        played("Alice", "Bob", "Carol", "Dave", 7, 2),
        played("Carol", "Dave", "Alice", "Bob", 3, 1),
    ];

    let stats = compute_player_stats(&matches, &players);
    let s = stat(&stats, "Alice");
    assert_eq!((s.wins, s.losses), (2, 1));
    assert_eq!(s.ratio, 2.0);
}
