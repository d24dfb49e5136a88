// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_season, create_test_store, team_id};
use crate::{LeagueRead, MatchStatsWrite, Persistence, PersistenceError, SeasonStateWrite};
use league_sim_domain::{
    DomainError, Goals, MatchStatistics, Probability, Season, SeasonStatus, SideStatistics, Team,
    TeamSeason,
};
use time::OffsetDateTime;

fn even_statistics() -> MatchStatistics {
    let side: SideStatistics = SideStatistics {
        shots: 10,
        shots_on_target: 5,
        possession: 50,
        corners: 4,
        fouls: 11,
    };
    MatchStatistics::new(side, side).unwrap()
}

#[test]
fn test_create_season_starts_pending() {
    let mut store: Persistence = create_test_store();

    let season: Season = store.create_season("  Premier League 2026 ", 6).unwrap();

    assert_eq!(season.name, "Premier League 2026");
    assert_eq!(season.status, SeasonStatus::Pending);
    assert_eq!(season.current_week, 0);
    assert_eq!(store.find_season(season.season_id).unwrap(), season);
}

#[test]
fn test_create_season_rejects_duplicate_name() {
    let mut store: Persistence = create_test_store();
    store.create_season("League", 6).unwrap();

    let err: PersistenceError = store.create_season("League", 6).unwrap_err();

    assert_eq!(
        err,
        PersistenceError::DomainViolation(DomainError::DuplicateSeasonName(String::from("League")))
    );
}

#[test]
fn test_find_unknown_season() {
    let store: Persistence = create_test_store();

    let err: PersistenceError = store.find_season(7).unwrap_err();

    assert_eq!(err, PersistenceError::DomainViolation(DomainError::SeasonNotFound(7)));
    assert!(store.list_fixtures(7).is_err());
}

#[test]
fn test_attach_team_twice_is_rejected() {
    let mut store: Persistence = create_test_store();
    let season: Season = create_test_season(&mut store, "League");
    let arsenal: i64 = team_id(&store, "Arsenal");

    let err: PersistenceError = store
        .attach_team(season.season_id, arsenal, Probability::ZERO, 5)
        .unwrap_err();

    assert_eq!(
        err,
        PersistenceError::DomainViolation(DomainError::DuplicateTeam(String::from("Arsenal")))
    );
    assert_eq!(store.list_team_seasons(season.season_id).unwrap().len(), 4);
}

#[test]
fn test_missing_team_season_is_not_found() {
    let mut store: Persistence = create_test_store();
    let season: Season = store.create_season("Empty", 6).unwrap();

    let err: PersistenceError = store.find_team_season(season.season_id, 1).unwrap_err();

    assert!(matches!(err, PersistenceError::NotFound { .. }));
}

#[test]
fn test_standings_rank_persisted_aggregates() {
    let mut store: Persistence = create_test_store();
    let season: Season = create_test_season(&mut store, "League");
    let chelsea: i64 = team_id(&store, "Chelsea");
    let liverpool: i64 = team_id(&store, "Liverpool");

    let mut row: TeamSeason = store.find_team_season(season.season_id, chelsea).unwrap();
    row.apply_result(Goals::new(2), Goals::new(0));
    store.save_team_season(&row).unwrap();
    let mut row: TeamSeason = store.find_team_season(season.season_id, liverpool).unwrap();
    row.apply_result(Goals::new(1), Goals::new(1));
    store.save_team_season(&row).unwrap();

    let standings: Vec<(Team, TeamSeason)> = store.standings(season.season_id).unwrap();
    let names: Vec<&str> = standings
        .iter()
        .map(|(team, _)| team.name().as_str())
        .collect();

    assert_eq!(names, vec!["Chelsea", "Liverpool", "Arsenal", "Manchester City"]);
}

#[test]
fn test_reset_season_clears_results_and_aggregates() {
    let mut store: Persistence = create_test_store();
    let mut season: Season = create_test_season(&mut store, "League");
    let arsenal: i64 = team_id(&store, "Arsenal");
    let chelsea: i64 = team_id(&store, "Chelsea");
    let fixture_id: i64 = store
        .insert_fixture(season.season_id, 1, arsenal, chelsea)
        .unwrap()
        .fixture_id;
    store
        .record_fixture_result(
            fixture_id,
            Goals::new(3),
            Goals::new(1),
            even_statistics(),
            OffsetDateTime::UNIX_EPOCH,
        )
        .unwrap();
    let mut row: TeamSeason = store.find_team_season(season.season_id, arsenal).unwrap();
    row.apply_result(Goals::new(3), Goals::new(1));
    store.save_team_season(&row).unwrap();
    season.transition_to(SeasonStatus::Active).unwrap();
    season.advance_week();
    store.save_season(&season).unwrap();

    let reset: Season = store
        .reset_season(season.season_id, Probability::new(0.25).unwrap())
        .unwrap();

    assert_eq!(reset.status, SeasonStatus::Pending);
    assert_eq!(reset.current_week, 0);
    assert!(!store.find_fixture(fixture_id).unwrap().is_played());
    let row: TeamSeason = store.find_team_season(season.season_id, arsenal).unwrap();
    assert_eq!(row.played, 0);
    assert!(row.form.is_empty());
    assert_eq!(store.list_fixtures(season.season_id).unwrap().len(), 1);
}

#[test]
fn test_reset_completed_season_is_forbidden() {
    let mut store: Persistence = create_test_store();
    let mut season: Season = create_test_season(&mut store, "League");
    season.transition_to(SeasonStatus::Active).unwrap();
    for _ in 0..6 {
        season.advance_week();
    }
    store.save_season(&season).unwrap();

    let err: PersistenceError = store
        .reset_season(season.season_id, Probability::ZERO)
        .unwrap_err();

    assert!(matches!(
        err,
        PersistenceError::DomainViolation(DomainError::SeasonAlreadyCompleted(_))
    ));
    assert_eq!(
        store.find_season(season.season_id).unwrap().status,
        SeasonStatus::Completed
    );
}
