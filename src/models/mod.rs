//! Data structures for the foosball league: players, matches, statistics.

mod game;
mod player;
mod stats;

pub use game::{Match, MatchId, MatchInput};
pub use player::{Player, PlayerId};
pub use stats::{duo_key, win_loss_ratio, DuoKey, DuoStat, PlayerStat};
