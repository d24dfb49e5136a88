// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use crate::capabilities::LeagueRead;
use crate::error::PersistenceError;
use crate::tables::team_season_missing;
use league_sim::{StandingKey, rank_by};
use league_sim_domain::{DomainError, Fixture, PredictionSnapshot, Season, Team, TeamSeason};
use tracing::debug;

impl LeagueRead for Persistence {
    fn find_team(&self, team_id: i64) -> Result<Team, PersistenceError> {
        debug!("Looking up team ID: {}", team_id);
        self.tables.team(team_id).cloned()
    }

    fn list_teams(&self) -> Result<Vec<Team>, PersistenceError> {
        Ok(self.tables.teams.values().cloned().collect())
    }

    fn find_season(&self, season_id: i64) -> Result<Season, PersistenceError> {
        debug!("Looking up season ID: {}", season_id);
        self.tables.season(season_id).cloned()
    }

    fn list_seasons(&self) -> Result<Vec<Season>, PersistenceError> {
        Ok(self.tables.seasons.values().cloned().collect())
    }

    fn find_fixture(&self, fixture_id: i64) -> Result<Fixture, PersistenceError> {
        debug!("Looking up fixture ID: {}", fixture_id);
        self.tables
            .fixtures
            .get(&fixture_id)
            .cloned()
            .ok_or_else(|| DomainError::FixtureNotFound(fixture_id).into())
    }

    fn list_fixtures(&self, season_id: i64) -> Result<Vec<Fixture>, PersistenceError> {
        self.tables.season(season_id)?;
        let mut fixtures: Vec<Fixture> = self.tables.season_fixtures(season_id).cloned().collect();
        // identifiers ascend with creation, so this keeps insertion order within a week
        fixtures.sort_by_key(|fixture| (fixture.week, fixture.fixture_id));
        Ok(fixtures)
    }

    fn list_fixtures_for_week(
        &self,
        season_id: i64,
        week: u32,
    ) -> Result<Vec<Fixture>, PersistenceError> {
        self.tables.season(season_id)?;
        Ok(self
            .tables
            .season_fixtures(season_id)
            .filter(|fixture| fixture.week == week)
            .cloned()
            .collect())
    }

    fn list_team_seasons(&self, season_id: i64) -> Result<Vec<TeamSeason>, PersistenceError> {
        self.tables.season(season_id)?;
        Ok(self.tables.season_rows(season_id).cloned().collect())
    }

    fn find_team_season(
        &self,
        season_id: i64,
        team_id: i64,
    ) -> Result<TeamSeason, PersistenceError> {
        self.tables
            .season_rows(season_id)
            .find(|row| row.team_id == team_id)
            .cloned()
            .ok_or_else(|| team_season_missing(season_id, team_id))
    }

    fn standings(&self, season_id: i64) -> Result<Vec<(Team, TeamSeason)>, PersistenceError> {
        self.tables.season(season_id)?;
        let mut rows: Vec<(Team, TeamSeason)> = self
            .tables
            .season_rows(season_id)
            .map(|row| -> Result<(Team, TeamSeason), PersistenceError> {
                Ok((self.tables.team(row.team_id)?.clone(), row.clone()))
            })
            .collect::<Result<_, _>>()?;
        rank_by(&mut rows, |(_, row)| StandingKey::from(row));
        Ok(rows)
    }

    fn prediction_history(
        &self,
        season_id: i64,
    ) -> Result<Vec<PredictionSnapshot>, PersistenceError> {
        self.tables.season(season_id)?;
        Ok(self
            .tables
            .history
            .get(&season_id)
            .map(|snapshots| snapshots.iter().cloned().collect())
            .unwrap_or_default())
    }
}
