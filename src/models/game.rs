//! Match data structures for 2v2 foosball games.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// The four participants and final score of one match, as submitted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchInput {
    pub team_a_player_1: String,
    pub team_a_player_2: String,
    pub team_b_player_1: String,
    pub team_b_player_2: String,
    pub score_a: u32,
    pub score_b: u32,
}

/// A recorded 2v2 match. Immutable once read by the aggregators.
///
/// Teams are stored as player names; the four names are pairwise
/// distinct (enforced at recording time, see `League::record_match`).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub team_a_player_1: String,
    pub team_a_player_2: String,
    pub team_b_player_1: String,
    pub team_b_player_2: String,
    /// Goals scored by team A. Non-negative, no upper bound.
    pub score_a: u32,
    /// Goals scored by team B.
    pub score_b: u32,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Create a match from submitted fields, stamped with a fresh id.
    pub fn new(input: MatchInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_a_player_1: input.team_a_player_1,
            team_a_player_2: input.team_a_player_2,
            team_b_player_1: input.team_b_player_1,
            team_b_player_2: input.team_b_player_2,
            score_a: input.score_a,
            score_b: input.score_b,
            created_at: Utc::now(),
        }
    }

    /// Whether team A won. A drawn score counts as a team A loss.
    pub fn team_a_wins(&self) -> bool {
        self.score_a > self.score_b
    }

    /// Team A's two player names.
    pub fn team_a(&self) -> [&str; 2] {
        [&self.team_a_player_1, &self.team_a_player_2]
    }

    /// Team B's two player names.
    pub fn team_b(&self) -> [&str; 2] {
        [&self.team_b_player_1, &self.team_b_player_2]
    }

    /// All four player names, team A first.
    pub fn player_names(&self) -> [&str; 4] {
        [
            &self.team_a_player_1,
            &self.team_a_player_2,
            &self.team_b_player_1,
            &self.team_b_player_2,
        ]
    }
}
