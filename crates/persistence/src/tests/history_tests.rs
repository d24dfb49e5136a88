// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_season;
use crate::{LeagueRead, MatchStatsWrite, Persistence, SeasonStateWrite};
use league_sim_domain::{PredictionSnapshot, Probability, Season, Team, TeamName, TeamSeason};
use std::collections::BTreeMap;
use time::OffsetDateTime;

fn snapshot(week: u32) -> PredictionSnapshot {
    let mut probabilities: BTreeMap<TeamName, Probability> = BTreeMap::new();
    probabilities.insert(TeamName::new("Arsenal").unwrap(), Probability::ONE);
    PredictionSnapshot::new(week, OffsetDateTime::UNIX_EPOCH, probabilities)
}

#[test]
fn test_history_is_capped_per_season() {
    let mut store: Persistence = Persistence::with_history_limit(3);
    store.seed_default_teams().unwrap();
    let season: Season = create_test_season(&mut store, "League");
    let other: Season = create_test_season(&mut store, "Other");

    for week in 1..=5 {
        store.append_prediction(season.season_id, snapshot(week)).unwrap();
    }
    store.append_prediction(other.season_id, snapshot(1)).unwrap();

    let history: Vec<PredictionSnapshot> = store.prediction_history(season.season_id).unwrap();
    let weeks: Vec<u32> = history.iter().map(|entry| entry.week).collect();
    assert_eq!(weeks, vec![3, 4, 5]);
    assert_eq!(store.prediction_history(other.season_id).unwrap().len(), 1);
}

#[test]
fn test_clear_prediction_history() {
    let mut store: Persistence = Persistence::new_in_memory();
    store.seed_default_teams().unwrap();
    let season: Season = create_test_season(&mut store, "League");
    store.append_prediction(season.season_id, snapshot(1)).unwrap();

    store.clear_prediction_history(season.season_id).unwrap();

    assert!(store.prediction_history(season.season_id).unwrap().is_empty());
}

#[test]
fn test_set_championship_probability() {
    let mut store: Persistence = Persistence::new_in_memory();
    let teams: Vec<Team> = store.seed_default_teams().unwrap();
    let season: Season = create_test_season(&mut store, "League");
    let team_id: i64 = teams[1].team_id().unwrap();

    store
        .set_championship_probability(season.season_id, team_id, Probability::new(0.4).unwrap())
        .unwrap();

    let row: TeamSeason = store.find_team_season(season.season_id, team_id).unwrap();
    assert!((row.championship_probability.value() - 0.4).abs() < f64::EPSILON);
}
