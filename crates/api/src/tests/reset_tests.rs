// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for resetting seasons.

use league_sim::{LeagueConfig, RngSource};
use league_sim_domain::SeasonStatus;
use league_sim_persistence::{LeagueRead, Persistence};

use crate::{
    ApiError, PlayWeekResponse, SeasonInfo, StandingRow, get_standings, play_next_week,
    reset_season, simulate_all, start_season,
};

use super::helpers::{create_active_season, create_test_config, create_test_store};

#[test]
fn test_reset_season_clears_progress() {
    let mut store: Persistence = create_test_store();
    let config: LeagueConfig = create_test_config();
    let season_id: i64 = create_active_season(&mut store, &config, "Rewind");
    let mut rng = RngSource::seeded(53);
    play_next_week(&mut store, &config, &mut rng, season_id).expect("Failed to play week 1");
    play_next_week(&mut store, &config, &mut rng, season_id).expect("Failed to play week 2");

    let season: SeasonInfo = reset_season(&mut store, season_id).expect("Failed to reset");

    assert_eq!(season.status, SeasonStatus::Pending);
    assert_eq!(season.current_week, 0);
    let standings: Vec<StandingRow> = get_standings(&store, season_id)
        .expect("Failed to get standings")
        .standings;
    for row in &standings {
        assert_eq!(row.played, 0);
        assert_eq!(row.points, 0);
        assert_eq!(row.goals_for, 0);
        assert!(row.form.is_empty());
        assert!((row.championship_probability - 25.0).abs() < 1e-9);
    }
    assert!(
        store
            .list_fixtures(season_id)
            .expect("Failed to list fixtures")
            .iter()
            .all(|fixture| !fixture.is_played() && fixture.played_order.is_none())
    );
    assert!(
        store
            .prediction_history(season_id)
            .expect("Failed to read history")
            .is_empty()
    );
}

#[test]
fn test_reset_season_can_be_replayed() {
    let mut store: Persistence = create_test_store();
    let config: LeagueConfig = create_test_config();
    let season_id: i64 = create_active_season(&mut store, &config, "Again");
    let mut rng = RngSource::seeded(59);
    play_next_week(&mut store, &config, &mut rng, season_id).expect("Failed to play week");
    reset_season(&mut store, season_id).expect("Failed to reset");

    start_season(&mut store, season_id).expect("Failed to restart");
    let response: PlayWeekResponse =
        play_next_week(&mut store, &config, &mut rng, season_id).expect("Failed to replay week");

    assert_eq!(response.week, 1);
    assert!(response.standings.iter().all(|row| row.played == 1));
}

#[test]
fn test_reset_completed_season_is_forbidden() {
    let mut store: Persistence = create_test_store();
    let config: LeagueConfig = create_test_config();
    let season_id: i64 = create_active_season(&mut store, &config, "Closed");
    let mut rng = RngSource::seeded(61);
    simulate_all(&mut store, &config, &mut rng, season_id).expect("Failed to simulate");

    match reset_season(&mut store, season_id) {
        Err(ApiError::DomainRuleViolation { rule, .. }) => {
            assert_eq!(rule, "season_not_completed");
        }
        other => panic!("Expected DomainRuleViolation, got: {other:?}"),
    }
    assert!(
        get_standings(&store, season_id)
            .expect("Failed to get standings")
            .standings
            .iter()
            .all(|row| row.played == 6)
    );
}
