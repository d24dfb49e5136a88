// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use league_sim_domain::{DomainError, Fixture, PredictionSnapshot, Season, Team, TeamSeason};
use std::collections::{BTreeMap, VecDeque};

/// Identifier sequences, one per table.
#[derive(Debug, Clone, Default)]
pub struct Sequences {
    team: i64,
    season: i64,
    team_season: i64,
    fixture: i64,
    played_order: u64,
}

impl Sequences {
    pub const fn next_team(&mut self) -> i64 {
        self.team += 1;
        self.team
    }

    pub const fn next_season(&mut self) -> i64 {
        self.season += 1;
        self.season
    }

    pub const fn next_team_season(&mut self) -> i64 {
        self.team_season += 1;
        self.team_season
    }

    pub const fn next_fixture(&mut self) -> i64 {
        self.fixture += 1;
        self.fixture
    }

    pub const fn next_played_order(&mut self) -> u64 {
        self.played_order += 1;
        self.played_order
    }
}

/// Every stored row, keyed by identifier.
///
/// Cloned wholesale to checkpoint a transaction.
#[derive(Debug, Clone, Default)]
pub struct LeagueTables {
    pub teams: BTreeMap<i64, Team>,
    pub seasons: BTreeMap<i64, Season>,
    pub team_seasons: BTreeMap<i64, TeamSeason>,
    pub fixtures: BTreeMap<i64, Fixture>,
    pub history: BTreeMap<i64, VecDeque<PredictionSnapshot>>,
    pub sequences: Sequences,
}

impl LeagueTables {
    pub fn team(&self, team_id: i64) -> Result<&Team, PersistenceError> {
        self.teams
            .get(&team_id)
            .ok_or_else(|| DomainError::TeamNotFound(team_id.to_string()).into())
    }

    pub fn season(&self, season_id: i64) -> Result<&Season, PersistenceError> {
        self.seasons
            .get(&season_id)
            .ok_or_else(|| DomainError::SeasonNotFound(season_id).into())
    }

    pub fn season_mut(&mut self, season_id: i64) -> Result<&mut Season, PersistenceError> {
        self.seasons
            .get_mut(&season_id)
            .ok_or_else(|| DomainError::SeasonNotFound(season_id).into())
    }

    pub fn fixture_mut(&mut self, fixture_id: i64) -> Result<&mut Fixture, PersistenceError> {
        self.fixtures
            .get_mut(&fixture_id)
            .ok_or_else(|| DomainError::FixtureNotFound(fixture_id).into())
    }

    pub fn team_season_mut(
        &mut self,
        season_id: i64,
        team_id: i64,
    ) -> Result<&mut TeamSeason, PersistenceError> {
        self.team_seasons
            .values_mut()
            .find(|row| row.season_id == season_id && row.team_id == team_id)
            .ok_or_else(|| team_season_missing(season_id, team_id))
    }

    pub fn season_fixtures(&self, season_id: i64) -> impl Iterator<Item = &Fixture> {
        self.fixtures
            .values()
            .filter(move |fixture| fixture.season_id == season_id)
    }

    pub fn season_rows(&self, season_id: i64) -> impl Iterator<Item = &TeamSeason> {
        self.team_seasons
            .values()
            .filter(move |row| row.season_id == season_id)
    }
}

pub fn team_season_missing(season_id: i64, team_id: i64) -> PersistenceError {
    PersistenceError::NotFound {
        entity: "Team season",
        key: format!("season {season_id}, team {team_id}"),
    }
}
