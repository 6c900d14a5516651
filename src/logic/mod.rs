//! Statistics computation: aggregation folds and leaderboard projection.

mod duo_stats;
mod leaderboard;
mod player_stats;

pub use duo_stats::compute_duo_stats;
pub use leaderboard::{rank_duos, rank_players, Ranked, RankingKey};
pub use player_stats::compute_player_stats;
