// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for playing weeks and simulating whole seasons.

use league_sim::{LeagueConfig, RngSource};
use league_sim_domain::{Fixture, SeasonStatus};
use league_sim_persistence::{LeagueRead, Persistence};

use crate::{
    ApiError, PlayWeekResponse, SimulateAllResponse, StandingRow, play_next_week, simulate_all,
};

use super::helpers::{
    create_active_season, create_pending_season, create_test_config, create_test_store,
};

fn total_points(standings: &[StandingRow]) -> u32 {
    standings.iter().map(|row| row.points).sum()
}

#[test]
fn test_play_next_week_requires_active_season() {
    let mut store: Persistence = create_test_store();
    let config: LeagueConfig = create_test_config();
    let season_id: i64 = create_pending_season(&mut store, &config, "Pending");
    let mut rng = RngSource::seeded(1);

    match play_next_week(&mut store, &config, &mut rng, season_id) {
        Err(ApiError::DomainRuleViolation { rule, message }) => {
            assert_eq!(rule, "season_active");
            assert!(message.contains("pending"));
        }
        other => panic!("Expected DomainRuleViolation, got: {other:?}"),
    }
}

#[test]
fn test_play_next_week_plays_first_week() {
    let mut store: Persistence = create_test_store();
    let config: LeagueConfig = create_test_config();
    let season_id: i64 = create_active_season(&mut store, &config, "First");
    let mut rng = RngSource::seeded(7);

    let response: PlayWeekResponse =
        play_next_week(&mut store, &config, &mut rng, season_id).expect("Failed to play week");

    assert_eq!(response.week, 1);
    assert_eq!(response.matches.len(), 2);
    assert!(response.matches.iter().all(|info| info.is_played));
    assert!(response.matches.iter().all(|info| info.statistics.is_some()));
    assert_eq!(response.season.current_week, 1);
    assert_eq!(response.season.status, SeasonStatus::Active);
    assert!(response.standings.iter().all(|row| row.played == 1));
    assert!(response.standings.iter().all(|row| row.form.len() == 1));

    let probability_sum: f64 = response
        .standings
        .iter()
        .map(|row| row.championship_probability)
        .sum();
    assert!((probability_sum - 100.0).abs() < 0.1);
    assert_eq!(
        store
            .prediction_history(season_id)
            .expect("Failed to read history")
            .len(),
        1
    );
}

#[test]
fn test_played_fixtures_follow_play_order() {
    let mut store: Persistence = create_test_store();
    let config: LeagueConfig = create_test_config();
    let season_id: i64 = create_active_season(&mut store, &config, "Order");
    let mut rng = RngSource::seeded(3);

    play_next_week(&mut store, &config, &mut rng, season_id).expect("Failed to play week 1");
    play_next_week(&mut store, &config, &mut rng, season_id).expect("Failed to play week 2");

    let orders: Vec<Option<u64>> = store
        .list_fixtures(season_id)
        .expect("Failed to list fixtures")
        .iter()
        .filter(|fixture| fixture.week <= 2)
        .map(|fixture| fixture.played_order)
        .collect();
    assert_eq!(orders, vec![Some(1), Some(2), Some(3), Some(4)]);
}

#[test]
fn test_playing_every_week_completes_the_season() {
    let mut store: Persistence = create_test_store();
    let config: LeagueConfig = create_test_config();
    let season_id: i64 = create_active_season(&mut store, &config, "Complete");
    let mut rng = RngSource::seeded(11);

    let mut last: Option<PlayWeekResponse> = None;
    for _ in 0..6 {
        last = Some(
            play_next_week(&mut store, &config, &mut rng, season_id).expect("Failed to play week"),
        );
    }
    let last: PlayWeekResponse = last.unwrap();

    assert_eq!(last.week, 6);
    assert_eq!(last.season.status, SeasonStatus::Completed);
    assert_eq!(last.season.current_week, 6);
    assert!(last.standings.iter().all(|row| row.played == 6));

    let fixtures: Vec<Fixture> = store
        .list_fixtures(season_id)
        .expect("Failed to list fixtures");
    let expected_points: u32 = fixtures
        .iter()
        .map(|fixture| match fixture.score() {
            Some((home, away)) if home == away => 2,
            Some(_) => 3,
            None => 0,
        })
        .sum();
    assert_eq!(total_points(&last.standings), expected_points);

    match play_next_week(&mut store, &config, &mut rng, season_id) {
        Err(ApiError::DomainRuleViolation { rule, .. }) => {
            assert_eq!(rule, "season_not_completed");
        }
        other => panic!("Expected DomainRuleViolation, got: {other:?}"),
    }
}

#[test]
fn test_simulate_all_plays_remaining_fixtures() {
    let mut store: Persistence = create_test_store();
    let config: LeagueConfig = create_test_config();
    let season_id: i64 = create_active_season(&mut store, &config, "Remaining");
    let mut rng = RngSource::seeded(5);

    play_next_week(&mut store, &config, &mut rng, season_id).expect("Failed to play week");
    let response: SimulateAllResponse =
        simulate_all(&mut store, &config, &mut rng, season_id).expect("Failed to simulate");

    assert_eq!(response.matches_simulated, 10);
    assert_eq!(response.season.status, SeasonStatus::Completed);
    assert_eq!(response.season.current_week, 6);
    assert!(response.standings.iter().all(|row| row.played == 6));
    assert!(
        store
            .list_fixtures(season_id)
            .expect("Failed to list fixtures")
            .iter()
            .all(Fixture::is_played)
    );

    assert!(matches!(
        simulate_all(&mut store, &config, &mut rng, season_id),
        Err(ApiError::DomainRuleViolation { .. })
    ));
}

#[test]
fn test_simulate_all_is_reproducible_for_a_seed() {
    let config: LeagueConfig = create_test_config();
    let run = |seed: u64| -> Vec<StandingRow> {
        let mut store: Persistence = create_test_store();
        let season_id: i64 = create_active_season(&mut store, &config, "Seeded");
        let mut rng = RngSource::seeded(seed);
        simulate_all(&mut store, &config, &mut rng, season_id)
            .expect("Failed to simulate")
            .standings
    };

    assert_eq!(run(2026), run(2026));
}

#[test]
fn test_simulate_all_requires_active_season() {
    let mut store: Persistence = create_test_store();
    let config: LeagueConfig = create_test_config();
    let season_id: i64 = create_pending_season(&mut store, &config, "Idle");
    let mut rng = RngSource::seeded(1);

    assert!(matches!(
        simulate_all(&mut store, &config, &mut rng, season_id),
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "season_active"
    ));
    assert!(
        store
            .list_fixtures(season_id)
            .expect("Failed to list fixtures")
            .iter()
            .all(|fixture| !fixture.is_played())
    );
}
