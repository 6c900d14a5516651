//! Individual statistics: fold the match log into per-player counters.

use crate::models::{Match, Player, PlayerStat};
use std::collections::HashMap;

/// Compute per-player statistics over the full match log.
///
/// Every call recomputes from scratch; the inputs are never mutated.
/// The registry seeds a zero-valued entry per known player, and a name
/// found only in the log is inserted on first sight, so the fold never
/// drops a participant. A tied score counts as a team A loss. Entries
/// that saw no matches are filtered from the result; output order is
/// first-appearance order (registry first, then log).
pub fn compute_player_stats(matches: &[Match], players: &[Player]) -> Vec<PlayerStat> {
    log::debug!(
        "computing player stats: {} matches, {} registered players",
        matches.len(),
        players.len()
    );

    let mut stats: Vec<PlayerStat> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for player in players {
        entry_index(&mut stats, &mut index, &player.name);
    }

    for game in matches {
        let team_a_wins = game.team_a_wins();
        log::trace!(
            "folding match {}: {:?} vs {:?} ({}-{})",
            game.id,
            game.team_a(),
            game.team_b(),
            game.score_a,
            game.score_b
        );

        for name in game.player_names() {
            let i = entry_index(&mut stats, &mut index, name);
            let in_team_a = game.team_a().contains(&name);
            if in_team_a == team_a_wins {
                stats[i].add_win();
            } else {
                stats[i].add_loss();
            }
        }
    }

    for stat in &mut stats {
        stat.finalize_ratio();
    }

    // Seeded-but-never-played players stay invisible to callers.
    stats.retain(|s| s.matches > 0);
    stats
}

/// Index of the entry for `name`, inserting a zero-valued one on first sight.
fn entry_index(
    stats: &mut Vec<PlayerStat>,
    index: &mut HashMap<String, usize>,
    name: &str,
) -> usize {
    if let Some(&i) = index.get(name) {
        return i;
    }
    let i = stats.len();
    stats.push(PlayerStat::zeroed(name));
    index.insert(name.to_owned(), i);
    i
}
