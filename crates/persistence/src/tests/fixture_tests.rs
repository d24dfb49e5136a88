// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_season, create_test_store, team_id};
use crate::{LeagueRead, MatchStatsWrite, Persistence, PersistenceError, SeasonStateWrite};
use league_sim_domain::{
    DomainError, Fixture, Goals, MatchStatistics, Season, SideStatistics,
};
use time::OffsetDateTime;

fn statistics(home_possession: u32) -> MatchStatistics {
    let home: SideStatistics = SideStatistics {
        shots: 12,
        shots_on_target: 6,
        possession: home_possession,
        corners: 5,
        fouls: 10,
    };
    let away: SideStatistics = SideStatistics {
        possession: 100 - home_possession,
        ..home
    };
    MatchStatistics::new(home, away).unwrap()
}

fn create_two_fixtures(store: &mut Persistence) -> (Season, i64, i64) {
    let season: Season = create_test_season(store, "League");
    let arsenal: i64 = team_id(store, "Arsenal");
    let chelsea: i64 = team_id(store, "Chelsea");
    let liverpool: i64 = team_id(store, "Liverpool");
    let city: i64 = team_id(store, "Manchester City");
    let first: Fixture = store
        .insert_fixture(season.season_id, 1, arsenal, chelsea)
        .unwrap();
    let second: Fixture = store
        .insert_fixture(season.season_id, 1, liverpool, city)
        .unwrap();
    (season, first.fixture_id, second.fixture_id)
}

#[test]
fn test_insert_fixture_rejects_duplicate_pairing() {
    let mut store: Persistence = create_test_store();
    let (season, _, _) = create_two_fixtures(&mut store);
    let arsenal: i64 = team_id(&store, "Arsenal");
    let chelsea: i64 = team_id(&store, "Chelsea");

    let err: PersistenceError = store
        .insert_fixture(season.season_id, 4, arsenal, chelsea)
        .unwrap_err();

    assert_eq!(
        err,
        PersistenceError::DuplicateFixture {
            season_id: season.season_id,
            home_team_id: arsenal,
            away_team_id: chelsea,
        }
    );
    // the reverse pairing is a different fixture
    assert!(
        store
            .insert_fixture(season.season_id, 4, chelsea, arsenal)
            .is_ok()
    );
}

#[test]
fn test_insert_fixture_rejects_week_outside_season() {
    let mut store: Persistence = create_test_store();
    let season: Season = create_test_season(&mut store, "League");
    let arsenal: i64 = team_id(&store, "Arsenal");
    let chelsea: i64 = team_id(&store, "Chelsea");

    let err: PersistenceError = store
        .insert_fixture(season.season_id, 7, arsenal, chelsea)
        .unwrap_err();

    assert_eq!(
        err,
        PersistenceError::DomainViolation(DomainError::InvalidWeek {
            week: 7,
            total_weeks: 6,
        })
    );
}

#[test]
fn test_fixtures_are_listed_by_week() {
    let mut store: Persistence = create_test_store();
    let (season, _, _) = create_two_fixtures(&mut store);
    let arsenal: i64 = team_id(&store, "Arsenal");
    let liverpool: i64 = team_id(&store, "Liverpool");
    store
        .insert_fixture(season.season_id, 2, arsenal, liverpool)
        .unwrap();

    let all: Vec<Fixture> = store.list_fixtures(season.season_id).unwrap();
    let week_one: Vec<Fixture> = store.list_fixtures_for_week(season.season_id, 1).unwrap();

    let weeks: Vec<u32> = all.iter().map(|fixture| fixture.week).collect();
    assert_eq!(weeks, vec![1, 1, 2]);
    assert_eq!(week_one.len(), 2);
    assert!(
        store
            .list_fixtures_for_week(season.season_id, 3)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_played_order_increases_and_survives_edits() {
    let mut store: Persistence = create_test_store();
    let (_, first, second) = create_two_fixtures(&mut store);

    let played_second: Fixture = store
        .record_fixture_result(
            second,
            Goals::new(0),
            Goals::new(0),
            statistics(50),
            OffsetDateTime::UNIX_EPOCH,
        )
        .unwrap();
    let played_first: Fixture = store
        .record_fixture_result(
            first,
            Goals::new(2),
            Goals::new(1),
            statistics(60),
            OffsetDateTime::UNIX_EPOCH,
        )
        .unwrap();
    let edited_second: Fixture = store
        .record_fixture_result(
            second,
            Goals::new(1),
            Goals::new(3),
            statistics(40),
            OffsetDateTime::UNIX_EPOCH,
        )
        .unwrap();

    assert_eq!(played_second.played_order, Some(1));
    assert_eq!(played_first.played_order, Some(2));
    assert_eq!(edited_second.played_order, Some(1));
    assert_eq!(edited_second.score(), Some((Goals::new(1), Goals::new(3))));
}

#[test]
fn test_clear_fixture_result() {
    let mut store: Persistence = create_test_store();
    let (_, first, _) = create_two_fixtures(&mut store);
    store
        .record_fixture_result(
            first,
            Goals::new(1),
            Goals::new(0),
            statistics(55),
            OffsetDateTime::UNIX_EPOCH,
        )
        .unwrap();

    store.clear_fixture_result(first).unwrap();

    let fixture: Fixture = store.find_fixture(first).unwrap();
    assert!(!fixture.is_played());
    assert_eq!(fixture.statistics, None);
    assert_eq!(fixture.played_order, None);
}

#[test]
fn test_unknown_fixture_is_lookup_failure() {
    let mut store: Persistence = create_test_store();

    let err: PersistenceError = store.clear_fixture_result(42).unwrap_err();

    assert_eq!(err, PersistenceError::DomainViolation(DomainError::FixtureNotFound(42)));
}
