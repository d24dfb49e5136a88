// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_statistics, create_test_teams, team};
use crate::{
    ChampionshipProjector, LeagueConfig, MatchOutcomeSimulator, RngSource, ScheduleGenerator,
    ScheduledFixture, SeasonStatistics, SimulatedMatch, TeamStatisticsTracker,
};
use league_sim_domain::{MatchOutcome, MatchResult, Probability, Strength, TeamName, TeamStatistics};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use time::OffsetDateTime;

fn current_strength(state: &SeasonStatistics, name: &TeamName) -> Strength {
    let stats: &TeamStatistics = state.statistics(name).unwrap();
    Strength::new(stats.attack_strength, stats.defense_strength).unwrap()
}

#[test]
fn test_full_season_with_equal_teams() {
    let config: LeagueConfig = LeagueConfig::default();
    let simulator: MatchOutcomeSimulator = MatchOutcomeSimulator::new(&config);
    let tracker: TeamStatisticsTracker = TeamStatisticsTracker::new(&config);
    let teams: Vec<TeamName> = create_test_teams();
    let mut state: SeasonStatistics = tracker.start_season(&teams).unwrap();
    let mut rng: RngSource<ChaCha8Rng> = RngSource::seeded(42);

    let fixtures: Vec<ScheduledFixture<TeamName>> = ScheduleGenerator.generate(&teams).unwrap();
    for fixture in fixtures {
        let home: Strength = current_strength(&state, &fixture.home);
        let away: Strength = current_strength(&state, &fixture.away);
        let simulated: SimulatedMatch = simulator.simulate(&home, &away, &mut rng).unwrap();
        let result: MatchResult = MatchResult {
            home_team: fixture.home,
            away_team: fixture.away,
            home_goals: simulated.home_goals,
            away_goals: simulated.away_goals,
            statistics: simulated.statistics,
            played_at: OffsetDateTime::UNIX_EPOCH,
        };
        tracker.record_and_smooth(&mut state, result).unwrap();
    }

    let expected_points: u32 = state
        .results()
        .iter()
        .map(|result| match result.outcome() {
            MatchOutcome::Draw => 2,
            MatchOutcome::HomeWin | MatchOutcome::AwayWin => 3,
        })
        .sum();
    let total_points: u32 = state
        .all_statistics()
        .iter()
        .map(|stats| stats.points.value())
        .sum();
    assert_eq!(total_points, expected_points);
    assert_eq!(state.results().len(), 12);

    for name in &teams {
        let stats: &TeamStatistics = state.statistics(name).unwrap();
        assert_eq!(stats.games_played, 6);
        assert_eq!(stats.won + stats.drawn + stats.lost, 6);
        let home_games: usize = state
            .results()
            .iter()
            .filter(|result| &result.home_team == name)
            .count();
        assert_eq!(home_games, 3);
        assert!((0.1..=3.0).contains(&stats.attack_strength));
        assert!((0.1..=3.0).contains(&stats.defense_strength));
    }
}

#[test]
fn test_strong_team_outscores_weak_team() {
    let simulator: MatchOutcomeSimulator = MatchOutcomeSimulator::new(&LeagueConfig::default());
    let strong: Strength = Strength::new(3.0, 3.0).unwrap();
    let weak: Strength = Strength::new(0.1, 0.1).unwrap();
    let mut strong_goals: u32 = 0;
    let mut weak_goals: u32 = 0;

    for seed in 0..1000_u64 {
        let mut rng: RngSource<ChaCha8Rng> = RngSource::seeded(seed);
        let simulated: SimulatedMatch = if seed % 2 == 0 {
            simulator.simulate(&strong, &weak, &mut rng).unwrap()
        } else {
            let away_view: SimulatedMatch = simulator.simulate(&weak, &strong, &mut rng).unwrap();
            SimulatedMatch {
                home_goals: away_view.away_goals,
                away_goals: away_view.home_goals,
                statistics: away_view.statistics,
            }
        };
        strong_goals += simulated.home_goals.value();
        weak_goals += simulated.away_goals.value();
    }

    assert!(strong_goals > weak_goals);
}

#[test]
#[allow(clippy::float_cmp)]
fn test_identical_fresh_teams_split_evenly() {
    let projector: ChampionshipProjector = ChampionshipProjector::new(&LeagueConfig::default());
    let statistics: Vec<TeamStatistics> = vec![
        create_test_statistics("Arsenal", 0, 0, 1.0, 1.0),
        create_test_statistics("Chelsea", 0, 0, 1.0, 1.0),
    ];

    let probabilities: BTreeMap<TeamName, Probability> =
        projector.project_probabilities(&statistics);

    assert_eq!(probabilities[&team("Arsenal")].value(), 0.5);
    assert_eq!(probabilities[&team("Chelsea")].value(), 0.5);
}

#[test]
fn test_highest_projection_gets_highest_probability() {
    let projector: ChampionshipProjector = ChampionshipProjector::new(&LeagueConfig::default());
    let statistics: Vec<TeamStatistics> = vec![
        create_test_statistics("Arsenal", 4, 3, 1.0, 1.0),
        create_test_statistics("Chelsea", 7, 3, 1.4, 1.3),
        create_test_statistics("Liverpool", 4, 3, 0.9, 1.1),
        create_test_statistics("Manchester City", 1, 3, 0.8, 0.7),
    ];

    let probabilities: BTreeMap<TeamName, Probability> =
        projector.project_probabilities(&statistics);

    let leader: f64 = probabilities[&team("Chelsea")].value();
    for (name, probability) in &probabilities {
        if name != &team("Chelsea") {
            assert!(leader > probability.value());
        }
    }
}
