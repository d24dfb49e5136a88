// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use crate::capabilities::{MatchStatsWrite, SeasonStateWrite};
use crate::error::PersistenceError;
use league_sim_domain::{
    DomainError, Fixture, Goals, MatchStatistics, PredictionSnapshot, Probability, Season,
    TeamSeason, validate_season_name, validate_week,
};
use std::collections::VecDeque;
use time::OffsetDateTime;
use tracing::{debug, info};

impl MatchStatsWrite for Persistence {
    fn record_fixture_result(
        &mut self,
        fixture_id: i64,
        home_goals: Goals,
        away_goals: Goals,
        statistics: MatchStatistics,
        played_at: OffsetDateTime,
    ) -> Result<Fixture, PersistenceError> {
        let already_ordered: Option<u64> = self.tables.fixture_mut(fixture_id)?.played_order;
        let played_order: u64 = match already_ordered {
            Some(order) => order,
            None => self.tables.sequences.next_played_order(),
        };

        let fixture: &mut Fixture = self.tables.fixture_mut(fixture_id)?;
        fixture.home_goals = Some(home_goals);
        fixture.away_goals = Some(away_goals);
        fixture.statistics = Some(statistics);
        fixture.played_at = Some(played_at);
        fixture.played_order = Some(played_order);
        debug!(
            fixture_id,
            played_order,
            home_goals = home_goals.value(),
            away_goals = away_goals.value(),
            "Recorded fixture result"
        );
        Ok(fixture.clone())
    }

    fn clear_fixture_result(&mut self, fixture_id: i64) -> Result<(), PersistenceError> {
        self.tables.fixture_mut(fixture_id)?.clear_result();
        debug!("Cleared result of fixture ID: {}", fixture_id);
        Ok(())
    }

    fn save_team_season(&mut self, team_season: &TeamSeason) -> Result<(), PersistenceError> {
        let row: &mut TeamSeason =
            self.tables.team_season_mut(team_season.season_id, team_season.team_id)?;
        *row = team_season.clone();
        debug!(
            season_id = team_season.season_id,
            team_id = team_season.team_id,
            points = team_season.points.value(),
            "Saved team season"
        );
        Ok(())
    }

    fn set_championship_probability(
        &mut self,
        season_id: i64,
        team_id: i64,
        probability: Probability,
    ) -> Result<(), PersistenceError> {
        self.tables
            .team_season_mut(season_id, team_id)?
            .championship_probability = probability;
        Ok(())
    }
}

impl SeasonStateWrite for Persistence {
    fn create_season(
        &mut self,
        name: &str,
        total_weeks: u32,
    ) -> Result<Season, PersistenceError> {
        let name: String = validate_season_name(name)?;
        if self.tables.seasons.values().any(|season| season.name == name) {
            return Err(DomainError::DuplicateSeasonName(name).into());
        }

        let season_id: i64 = self.tables.sequences.next_season();
        let season: Season = Season::new(season_id, name, total_weeks);
        self.tables.seasons.insert(season_id, season.clone());
        info!(season_id, name = %season.name, total_weeks, "Created season");
        Ok(season)
    }

    fn attach_team(
        &mut self,
        season_id: i64,
        team_id: i64,
        initial_probability: Probability,
        form_length: usize,
    ) -> Result<TeamSeason, PersistenceError> {
        self.tables.season(season_id)?;
        let team_name: String = self.tables.team(team_id)?.name().to_string();
        if self
            .tables
            .season_rows(season_id)
            .any(|row| row.team_id == team_id)
        {
            return Err(DomainError::DuplicateTeam(team_name).into());
        }

        let team_season_id: i64 = self.tables.sequences.next_team_season();
        let row: TeamSeason = TeamSeason::new(
            team_season_id,
            season_id,
            team_id,
            initial_probability,
            form_length,
        );
        self.tables.team_seasons.insert(team_season_id, row.clone());
        debug!(season_id, team_id, team = %team_name, "Attached team to season");
        Ok(row)
    }

    fn insert_fixture(
        &mut self,
        season_id: i64,
        week: u32,
        home_team_id: i64,
        away_team_id: i64,
    ) -> Result<Fixture, PersistenceError> {
        let total_weeks: u32 = self.tables.season(season_id)?.total_weeks;
        validate_week(week, total_weeks)?;
        self.tables.team(home_team_id)?;
        self.tables.team(away_team_id)?;
        if self.tables.season_fixtures(season_id).any(|fixture| {
            fixture.home_team_id == home_team_id && fixture.away_team_id == away_team_id
        }) {
            return Err(PersistenceError::DuplicateFixture {
                season_id,
                home_team_id,
                away_team_id,
            });
        }

        let fixture_id: i64 = self.tables.sequences.next_fixture();
        let fixture: Fixture = Fixture::new(fixture_id, season_id, week, home_team_id, away_team_id);
        self.tables.fixtures.insert(fixture_id, fixture.clone());
        debug!(
            season_id,
            week,
            home_team_id,
            away_team_id,
            "Inserted fixture"
        );
        Ok(fixture)
    }

    fn save_season(&mut self, season: &Season) -> Result<(), PersistenceError> {
        let row: &mut Season = self.tables.season_mut(season.season_id)?;
        *row = season.clone();
        debug!(
            season_id = season.season_id,
            status = %season.status,
            current_week = season.current_week,
            "Saved season"
        );
        Ok(())
    }

    fn reset_season(
        &mut self,
        season_id: i64,
        initial_probability: Probability,
    ) -> Result<Season, PersistenceError> {
        let season: &mut Season = self.tables.season_mut(season_id)?;
        season.reset()?;
        let season: Season = season.clone();

        for fixture in self
            .tables
            .fixtures
            .values_mut()
            .filter(|fixture| fixture.season_id == season_id)
        {
            fixture.clear_result();
        }
        for row in self
            .tables
            .team_seasons
            .values_mut()
            .filter(|row| row.season_id == season_id)
        {
            row.reset(initial_probability);
        }
        self.tables.history.remove(&season_id);
        info!(season_id, "Reset season");
        Ok(season)
    }

    fn append_prediction(
        &mut self,
        season_id: i64,
        snapshot: PredictionSnapshot,
    ) -> Result<(), PersistenceError> {
        self.tables.season(season_id)?;
        let limit: usize = self.history_limit;
        let timeline: &mut VecDeque<PredictionSnapshot> =
            self.tables.history.entry(season_id).or_default();
        timeline.push_back(snapshot);
        while timeline.len() > limit {
            timeline.pop_front();
        }
        debug!(season_id, entries = timeline.len(), "Appended prediction snapshot");
        Ok(())
    }

    fn clear_prediction_history(&mut self, season_id: i64) -> Result<(), PersistenceError> {
        self.tables.season(season_id)?;
        self.tables.history.remove(&season_id);
        Ok(())
    }
}
