//! Duo statistics: fold the match log into per-pairing counters.

use crate::models::{duo_key, DuoKey, DuoStat, Match};
use std::collections::HashMap;

/// Compute per-duo statistics over the full match log.
///
/// Each team is canonicalized as its sorted pair of names, so the same
/// two players land in one bucket regardless of submission order. Only
/// pairings that appear in the log produce an entry (there is no
/// zero-match duo); output order is first-appearance order. A tied
/// score counts as a loss for team A's duo.
pub fn compute_duo_stats(matches: &[Match]) -> Vec<DuoStat> {
    log::debug!("computing duo stats over {} matches", matches.len());

    let mut stats: Vec<DuoStat> = Vec::new();
    let mut index: HashMap<DuoKey, usize> = HashMap::new();

    for game in matches {
        let team_a_wins = game.team_a_wins();
        let key_a = duo_key(&game.team_a_player_1, &game.team_a_player_2);
        let key_b = duo_key(&game.team_b_player_1, &game.team_b_player_2);
        log::trace!(
            "folding match {}: {:?} vs {:?} ({}-{})",
            game.id,
            key_a,
            key_b,
            game.score_a,
            game.score_b
        );

        let a = entry_index(&mut stats, &mut index, key_a);
        if team_a_wins {
            stats[a].add_win();
        } else {
            stats[a].add_loss();
        }

        let b = entry_index(&mut stats, &mut index, key_b);
        if team_a_wins {
            stats[b].add_loss();
        } else {
            stats[b].add_win();
        }
    }

    for stat in &mut stats {
        stat.finalize_ratio();
    }

    stats
}

/// Index of the entry for `key`, inserting a zero-valued one on first sight.
fn entry_index(
    stats: &mut Vec<DuoStat>,
    index: &mut HashMap<DuoKey, usize>,
    key: DuoKey,
) -> usize {
    if let Some(&i) = index.get(&key) {
        return i;
    }
    let i = stats.len();
    stats.push(DuoStat::zeroed(key.clone()));
    index.insert(key, i);
    i
}
