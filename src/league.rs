//! League state: player registry, match log, and admin operations.
//!
//! `League` is the in-memory form of the collaborator that feeds the
//! aggregation core: it owns the registry and the append-only match log,
//! validates incoming records, and recomputes both stat tables from
//! scratch whenever asked. There is no incremental update path, so any
//! create/edit/delete is immediately consistent with the next
//! `player_stats`/`duo_stats` call.

use crate::logic::{compute_duo_stats, compute_player_stats};
use crate::models::{DuoStat, Match, MatchId, MatchInput, Player, PlayerId, PlayerStat};
use serde::{Deserialize, Serialize};

/// Errors that can occur during league admin operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    /// Player not found in the registry.
    PlayerNotFound(PlayerId),
    /// Match not found in the log.
    MatchNotFound(MatchId),
    /// The four player names of a match must be pairwise distinct.
    PlayersNotDistinct,
    /// A match references a name that is not in the registry.
    UnknownPlayer(String),
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            LeagueError::DuplicatePlayerName => {
                write!(f, "A player with this name already exists")
            }
            LeagueError::PlayerNotFound(_) => write!(f, "Player not found"),
            LeagueError::MatchNotFound(_) => write!(f, "Match not found"),
            LeagueError::PlayersNotDistinct => {
                write!(f, "The four players of a match must be distinct")
            }
            LeagueError::UnknownPlayer(name) => {
                write!(f, "Unknown player: {}", name)
            }
        }
    }
}

/// Full league state: registered players and the recorded match log.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct League {
    players: Vec<Player>,
    matches: Vec<Match>,
}

impl League {
    /// Create an empty league.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered players, in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Recorded matches, in recording order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Register a player. Names are trimmed and must be unique (case-insensitive).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, LeagueError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LeagueError::EmptyPlayerName);
        }
        if self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(trimmed))
        {
            return Err(LeagueError::DuplicatePlayerName);
        }
        let player = Player::new(trimmed);
        let id = player.id;
        log::debug!("registered player {} ({})", player.name, id);
        self.players.push(player);
        Ok(id)
    }

    /// Rename a player. Historical match rows keep the old name: the log
    /// stores names, so past results stay under the name they were
    /// played under.
    pub fn rename_player(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
    ) -> Result<(), LeagueError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LeagueError::EmptyPlayerName);
        }
        if self
            .players
            .iter()
            .any(|p| p.id != id && p.name.eq_ignore_ascii_case(trimmed))
        {
            return Err(LeagueError::DuplicatePlayerName);
        }
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(LeagueError::PlayerNotFound(id))?;
        log::debug!("renaming player {} -> {}", player.name, trimmed);
        player.name = trimmed.to_owned();
        Ok(())
    }

    /// Remove a player from the registry. Matches they played stay in
    /// the log under their name.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), LeagueError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(LeagueError::PlayerNotFound(id))?;
        let removed = self.players.remove(idx);
        log::debug!("removed player {} ({})", removed.name, id);
        Ok(())
    }

    /// Record a match. The four names must be non-empty, pairwise
    /// distinct, and registered.
    pub fn record_match(&mut self, input: MatchInput) -> Result<MatchId, LeagueError> {
        self.validate_match(&input)?;
        let game = Match::new(input);
        let id = game.id;
        log::debug!(
            "recorded match {}: {}/{} vs {}/{} ({}-{})",
            id,
            game.team_a_player_1,
            game.team_a_player_2,
            game.team_b_player_1,
            game.team_b_player_2,
            game.score_a,
            game.score_b
        );
        self.matches.push(game);
        Ok(id)
    }

    /// Replace a recorded match's teams and score (same validation as
    /// `record_match`). Keeps the original id and timestamp.
    pub fn edit_match(&mut self, id: MatchId, input: MatchInput) -> Result<(), LeagueError> {
        self.validate_match(&input)?;
        let game = self
            .matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(LeagueError::MatchNotFound(id))?;
        game.team_a_player_1 = input.team_a_player_1;
        game.team_a_player_2 = input.team_a_player_2;
        game.team_b_player_1 = input.team_b_player_1;
        game.team_b_player_2 = input.team_b_player_2;
        game.score_a = input.score_a;
        game.score_b = input.score_b;
        log::debug!("edited match {}", id);
        Ok(())
    }

    /// Delete a recorded match.
    pub fn remove_match(&mut self, id: MatchId) -> Result<(), LeagueError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(LeagueError::MatchNotFound(id))?;
        self.matches.remove(idx);
        log::debug!("removed match {}", id);
        Ok(())
    }

    /// Per-player statistics, recomputed over the full log.
    pub fn player_stats(&self) -> Vec<PlayerStat> {
        compute_player_stats(&self.matches, &self.players)
    }

    /// Per-duo statistics, recomputed over the full log.
    pub fn duo_stats(&self) -> Vec<DuoStat> {
        compute_duo_stats(&self.matches)
    }

    fn validate_match(&self, input: &MatchInput) -> Result<(), LeagueError> {
        let names = [
            &input.team_a_player_1,
            &input.team_a_player_2,
            &input.team_b_player_1,
            &input.team_b_player_2,
        ];
        for name in names {
            if name.trim().is_empty() {
                return Err(LeagueError::EmptyPlayerName);
            }
        }
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                if names[i] == names[j] {
                    return Err(LeagueError::PlayersNotDistinct);
                }
            }
        }
        for name in names {
            if !self.players.iter().any(|p| &p.name == name) {
                return Err(LeagueError::UnknownPlayer(name.clone()));
            }
        }
        Ok(())
    }
}
