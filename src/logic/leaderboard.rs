//! Leaderboard projection: sort a stat table and assign 1-based ranks.

use crate::models::{DuoStat, PlayerStat};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort key for a leaderboard.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingKey {
    TotalScore,
    Ratio,
}

/// A stat entry with its dense 1-based rank.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ranked<T> {
    pub rank: usize,
    pub stat: T,
}

/// Rank player statistics by the given key, descending.
///
/// The sort is stable: entries with equal keys keep their aggregation
/// order, which is the only tie-break.
pub fn rank_players(stats: &[PlayerStat], key: RankingKey) -> Vec<Ranked<PlayerStat>> {
    rank_by(stats, |s| match key {
        RankingKey::TotalScore => f64::from(s.total_score),
        RankingKey::Ratio => s.ratio,
    })
}

/// Rank duo statistics by the given key, descending.
pub fn rank_duos(stats: &[DuoStat], key: RankingKey) -> Vec<Ranked<DuoStat>> {
    rank_by(stats, |s| match key {
        RankingKey::TotalScore => f64::from(s.total_score),
        RankingKey::Ratio => s.ratio,
    })
}

/// Stable descending sort plus rank assignment. Keys are finite by
/// construction (the ratio sentinel is a plain win count, never NaN).
fn rank_by<T: Clone>(stats: &[T], key: impl Fn(&T) -> f64) -> Vec<Ranked<T>> {
    let mut sorted: Vec<T> = stats.to_vec();
    sorted.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, stat)| Ranked { rank: i + 1, stat })
        .collect()
}
