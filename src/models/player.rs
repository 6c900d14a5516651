//! Player data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in lookups and admin operations).
pub type PlayerId = Uuid;

/// A registered player.
///
/// `name` is the join key used by the statistics fold: match rows store
/// names, not ids, so renaming a player does not relink history.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Unique (case-insensitive), mutable display name.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Create a new player with the given name, stamped with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
