//! Derived statistics: per-player and per-duo win/loss tables.
//!
//! Both types are ephemeral views, recomputed from the full match log on
//! every aggregation call and discarded after rendering.

use serde::{Deserialize, Serialize};

/// Canonical key for a duo: the two names sorted lexicographically.
///
/// A composite key rather than a joined string, so a name containing any
/// would-be separator character cannot collide two distinct duos.
pub type DuoKey = (String, String);

/// Build the canonical key for two teammates, regardless of input order.
pub fn duo_key(p1: &str, p2: &str) -> DuoKey {
    if p1 <= p2 {
        (p1.to_owned(), p2.to_owned())
    } else {
        (p2.to_owned(), p1.to_owned())
    }
}

/// Win/loss ratio, with `losses == 0` treated as a finite sentinel equal
/// to the win count (never infinity or NaN).
pub fn win_loss_ratio(wins: u32, losses: u32) -> f64 {
    if losses > 0 {
        f64::from(wins) / f64::from(losses)
    } else {
        f64::from(wins)
    }
}

/// Statistics view of a player (for ranking / display).
///
/// Invariants: `matches = wins + losses`; `total_score` counts one point
/// per win; `ratio` follows [`win_loss_ratio`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub name: String,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_score: u32,
    pub ratio: f64,
}

impl PlayerStat {
    /// Zero-valued entry for a player that has not been folded yet.
    pub fn zeroed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record a won match for this player.
    pub fn add_win(&mut self) {
        self.matches += 1;
        self.wins += 1;
        self.total_score += 1;
    }

    /// Record a lost match for this player.
    pub fn add_loss(&mut self) {
        self.matches += 1;
        self.losses += 1;
    }

    /// Compute `ratio` from the final counters (call once, after the fold).
    pub fn finalize_ratio(&mut self) {
        self.ratio = win_loss_ratio(self.wins, self.losses);
    }
}

/// Statistics view of a duo, keyed by the sorted pair of names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuoStat {
    /// The duo, as the lexicographically sorted pair of names.
    pub players: DuoKey,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_score: u32,
    pub ratio: f64,
}

impl DuoStat {
    /// Zero-valued entry for a duo seen for the first time.
    pub fn zeroed(players: DuoKey) -> Self {
        Self {
            players,
            matches: 0,
            wins: 0,
            losses: 0,
            total_score: 0,
            ratio: 0.0,
        }
    }

    /// Record a won match for this duo.
    pub fn add_win(&mut self) {
        self.matches += 1;
        self.wins += 1;
        self.total_score += 1;
    }

    /// Record a lost match for this duo.
    pub fn add_loss(&mut self) {
        self.matches += 1;
        self.losses += 1;
    }

    /// Compute `ratio` from the final counters (call once, after the fold).
    pub fn finalize_ratio(&mut self) {
        self.ratio = win_loss_ratio(self.wins, self.losses);
    }
}
