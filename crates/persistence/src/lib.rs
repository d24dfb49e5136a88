// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the league simulator.
//!
//! The orchestration layer talks to storage only through the capability
//! traits in this crate:
//!
//! - [`LeagueRead`]: teams, seasons, fixtures, aggregates, standings and
//!   prediction history
//! - [`MatchStatsWrite`]: fixture results and team-season aggregates
//! - [`SeasonStateWrite`]: season lifecycle, fixtures and history
//! - [`Transactional`]: all-or-nothing grouping of the above
//!
//! [`Persistence`] implements all of them in memory. A transaction
//! checkpoints every table and restores the checkpoint when the enclosed
//! operation fails, so concurrent callers must serialize access to one
//! store themselves.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod capabilities;
mod error;
mod mutations;
mod queries;
mod tables;

#[cfg(test)]
mod tests;

pub use capabilities::{LeagueRead, LeagueStore, MatchStatsWrite, SeasonStateWrite, Transactional};
pub use error::PersistenceError;

use league_sim_domain::{DomainError, Strength, Team, TeamName, validate_team_name};
use tables::LeagueTables;
use tracing::{debug, info};

/// Number of prediction snapshots kept per season unless configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// The clubs a fresh store is seeded with: name, attack, defense.
pub const DEFAULT_TEAMS: [(&str, f64, f64); 4] = [
    ("Arsenal", 2.2, 1.8),
    ("Chelsea", 1.9, 2.1),
    ("Liverpool", 2.3, 1.7),
    ("Manchester City", 2.5, 2.0),
];

/// In-memory store for teams, seasons, fixtures and their aggregates.
#[derive(Debug, Clone)]
pub struct Persistence {
    tables: LeagueTables,
    history_limit: usize,
    in_transaction: bool,
}

impl Default for Persistence {
    fn default() -> Self {
        Self::new_in_memory()
    }
}

impl Persistence {
    /// Creates an empty store keeping [`DEFAULT_HISTORY_LIMIT`] snapshots
    /// per season.
    #[must_use]
    pub fn new_in_memory() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates an empty store keeping at most `history_limit` snapshots per
    /// season.
    #[must_use]
    pub fn with_history_limit(history_limit: usize) -> Self {
        debug!(history_limit, "Initializing in-memory store");
        Self {
            tables: LeagueTables::default(),
            history_limit,
            in_transaction: false,
        }
    }

    /// Returns the per-season snapshot cap.
    #[must_use]
    pub const fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Creates a team.
    ///
    /// # Arguments
    ///
    /// * `name` - The team name, trimmed before storing
    /// * `strength` - Initial attack and defense ratings
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTeamName` for an empty or overlong name,
    /// or `DomainError::DuplicateTeam` if the name is taken.
    pub fn create_team(&mut self, name: &str, strength: Strength) -> Result<Team, PersistenceError> {
        let name: TeamName = validate_team_name(name)?;
        if self.find_team_by_name(&name).is_some() {
            return Err(DomainError::DuplicateTeam(name.to_string()).into());
        }

        let team_id: i64 = self.tables.sequences.next_team();
        let team: Team = Team::with_id(team_id, name, strength);
        self.tables.teams.insert(team_id, team.clone());
        info!(team_id, name = %team.name(), "Created team");
        Ok(team)
    }

    /// Finds a team by its name.
    #[must_use]
    pub fn find_team_by_name(&self, name: &TeamName) -> Option<Team> {
        self.tables
            .teams
            .values()
            .find(|team| team.name() == name)
            .cloned()
    }

    /// Creates the default clubs that are not stored yet.
    ///
    /// # Returns
    ///
    /// The default clubs, whether newly created or already present.
    ///
    /// # Errors
    ///
    /// Returns an error if a default club cannot be stored.
    pub fn seed_default_teams(&mut self) -> Result<Vec<Team>, PersistenceError> {
        let mut teams: Vec<Team> = Vec::with_capacity(DEFAULT_TEAMS.len());
        for (name, attack, defense) in DEFAULT_TEAMS {
            let existing: Option<Team> = self.find_team_by_name(&validate_team_name(name)?);
            let team: Team = match existing {
                Some(team) => team,
                None => self.create_team(name, Strength::new(attack, defense)?)?,
            };
            teams.push(team);
        }
        Ok(teams)
    }
}

impl Transactional for Persistence {
    fn transaction<T, E, F>(&mut self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<PersistenceError>,
    {
        if self.in_transaction {
            return Err(PersistenceError::TransactionFailed(
                "a transaction is already open".to_string(),
            )
            .into());
        }

        let checkpoint: LeagueTables = self.tables.clone();
        self.in_transaction = true;
        let outcome: Result<T, E> = operation(self);
        self.in_transaction = false;

        if outcome.is_err() {
            self.tables = checkpoint;
            debug!("Transaction rolled back");
        } else {
            debug!("Transaction committed");
        }
        outcome
    }
}
