//! Foosball league core: match log, player registry, and derived
//! win/loss leaderboards.

pub mod league;
pub mod logic;
pub mod models;

pub use league::{League, LeagueError};
pub use logic::{
    compute_duo_stats, compute_player_stats, rank_duos, rank_players, Ranked, RankingKey,
};
pub use models::{
    duo_key, win_loss_ratio, DuoKey, DuoStat, Match, MatchId, MatchInput, Player, PlayerId,
    PlayerStat,
};
