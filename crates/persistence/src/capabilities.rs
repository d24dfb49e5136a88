// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The narrow contracts the orchestration layer depends on.
//!
//! Each trait covers one capability. Callers that need all of them take a
//! [`LeagueStore`].

use crate::error::PersistenceError;
use league_sim_domain::{
    Fixture, Goals, MatchStatistics, PredictionSnapshot, Probability, Season, Team, TeamSeason,
};
use time::OffsetDateTime;

/// Read access to teams, seasons, fixtures, aggregates and history.
pub trait LeagueRead {
    /// Finds a team by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TeamNotFound` if no such team exists.
    fn find_team(&self, team_id: i64) -> Result<Team, PersistenceError>;

    /// Lists every team in identifier order.
    ///
    /// # Errors
    ///
    /// Returns an error if the teams cannot be read.
    fn list_teams(&self) -> Result<Vec<Team>, PersistenceError>;

    /// Finds a season by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonNotFound` if no such season exists.
    fn find_season(&self, season_id: i64) -> Result<Season, PersistenceError>;

    /// Lists every season in identifier order.
    ///
    /// # Errors
    ///
    /// Returns an error if the seasons cannot be read.
    fn list_seasons(&self) -> Result<Vec<Season>, PersistenceError>;

    /// Finds a fixture by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FixtureNotFound` if no such fixture exists.
    fn find_fixture(&self, fixture_id: i64) -> Result<Fixture, PersistenceError>;

    /// Lists a season's fixtures ordered by week, then creation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonNotFound` for an unknown season.
    fn list_fixtures(&self, season_id: i64) -> Result<Vec<Fixture>, PersistenceError>;

    /// Lists the fixtures of one week.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonNotFound` for an unknown season.
    fn list_fixtures_for_week(
        &self,
        season_id: i64,
        week: u32,
    ) -> Result<Vec<Fixture>, PersistenceError>;

    /// Lists a season's aggregates in attachment order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonNotFound` for an unknown season.
    fn list_team_seasons(&self, season_id: i64) -> Result<Vec<TeamSeason>, PersistenceError>;

    /// Finds one team's aggregate for a season.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the team is not in the season.
    fn find_team_season(
        &self,
        season_id: i64,
        team_id: i64,
    ) -> Result<TeamSeason, PersistenceError>;

    /// Returns each team with its aggregate, ranked into table order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonNotFound` for an unknown season.
    fn standings(&self, season_id: i64) -> Result<Vec<(Team, TeamSeason)>, PersistenceError>;

    /// Returns the stored prediction timeline, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonNotFound` for an unknown season.
    fn prediction_history(
        &self,
        season_id: i64,
    ) -> Result<Vec<PredictionSnapshot>, PersistenceError>;
}

/// Writes that follow from playing or editing matches.
pub trait MatchStatsWrite {
    /// Stores a fixture's result.
    ///
    /// A fixture played for the first time receives the next play-order
    /// number; an edited fixture keeps its original one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FixtureNotFound` for an unknown fixture.
    fn record_fixture_result(
        &mut self,
        fixture_id: i64,
        home_goals: Goals,
        away_goals: Goals,
        statistics: MatchStatistics,
        played_at: OffsetDateTime,
    ) -> Result<Fixture, PersistenceError>;

    /// Removes a fixture's result.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FixtureNotFound` for an unknown fixture.
    fn clear_fixture_result(&mut self, fixture_id: i64) -> Result<(), PersistenceError>;

    /// Replaces a stored aggregate.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the aggregate does not exist.
    fn save_team_season(&mut self, team_season: &TeamSeason) -> Result<(), PersistenceError>;

    /// Stores a team's championship probability.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the team is not in the season.
    fn set_championship_probability(
        &mut self,
        season_id: i64,
        team_id: i64,
        probability: Probability,
    ) -> Result<(), PersistenceError>;
}

/// Writes that shape a season and its lifecycle.
pub trait SeasonStateWrite {
    /// Creates a pending season.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateSeasonName` if the name is taken.
    fn create_season(&mut self, name: &str, total_weeks: u32)
    -> Result<Season, PersistenceError>;

    /// Attaches a team to a season with an empty aggregate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateTeam` if the team is already attached.
    fn attach_team(
        &mut self,
        season_id: i64,
        team_id: i64,
        initial_probability: Probability,
        form_length: usize,
    ) -> Result<TeamSeason, PersistenceError>;

    /// Inserts an unplayed fixture.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateFixture` if the season already
    /// holds the same (home, away) pairing.
    fn insert_fixture(
        &mut self,
        season_id: i64,
        week: u32,
        home_team_id: i64,
        away_team_id: i64,
    ) -> Result<Fixture, PersistenceError>;

    /// Replaces a stored season.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonNotFound` for an unknown season.
    fn save_season(&mut self, season: &Season) -> Result<(), PersistenceError>;

    /// Returns a season, its fixtures, aggregates and history to their
    /// initial state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonAlreadyCompleted` for a completed season.
    fn reset_season(
        &mut self,
        season_id: i64,
        initial_probability: Probability,
    ) -> Result<Season, PersistenceError>;

    /// Appends a snapshot, evicting the oldest beyond the history limit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonNotFound` for an unknown season.
    fn append_prediction(
        &mut self,
        season_id: i64,
        snapshot: PredictionSnapshot,
    ) -> Result<(), PersistenceError>;

    /// Drops a season's prediction timeline.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonNotFound` for an unknown season.
    fn clear_prediction_history(&mut self, season_id: i64) -> Result<(), PersistenceError>;
}

/// All-or-nothing grouping of writes.
pub trait Transactional {
    /// Runs `operation` against the store.
    ///
    /// Every write made inside becomes visible together when `operation`
    /// returns `Ok`; none of them survive when it returns `Err`.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `operation`, or
    /// `PersistenceError::TransactionFailed` (converted into `E`) if a
    /// transaction is already open.
    fn transaction<T, E, F>(&mut self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<PersistenceError>;
}

/// Everything the orchestration layer needs from storage.
pub trait LeagueStore: LeagueRead + MatchStatsWrite + SeasonStateWrite + Transactional {}

impl<T> LeagueStore for T where T: LeagueRead + MatchStatsWrite + SeasonStateWrite + Transactional {}
