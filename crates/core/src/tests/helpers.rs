// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::RandomSource;
use league_sim_domain::{
    Goals, MatchResult, MatchStatistics, Points, SideStatistics, TeamName, TeamStatistics,
};
use std::collections::VecDeque;
use time::OffsetDateTime;

/// Replays fixed draws. Falls back to the midpoint once a queue runs dry.
pub struct ScriptedSource {
    uniforms: VecDeque<f64>,
    ints: VecDeque<i32>,
}

impl ScriptedSource {
    pub fn new(uniforms: &[f64], ints: &[i32]) -> Self {
        Self {
            uniforms: uniforms.iter().copied().collect(),
            ints: ints.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        self.uniforms.pop_front().unwrap_or(0.5)
    }

    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        self.ints
            .pop_front()
            .map_or((low + high) / 2, |value| value.clamp(low, high))
    }
}

pub fn team(name: &str) -> TeamName {
    TeamName::new(name).unwrap()
}

pub fn create_test_teams() -> Vec<TeamName> {
    vec![
        team("Arsenal"),
        team("Chelsea"),
        team("Liverpool"),
        team("Manchester City"),
    ]
}

pub fn side(shots: u32, shots_on_target: u32, possession: u32) -> SideStatistics {
    SideStatistics {
        shots,
        shots_on_target,
        possession,
        corners: 5,
        fouls: 12,
    }
}

pub fn create_test_result(home: &str, away: &str, home_goals: u32, away_goals: u32) -> MatchResult {
    MatchResult {
        home_team: team(home),
        away_team: team(away),
        home_goals: Goals::new(home_goals),
        away_goals: Goals::new(away_goals),
        statistics: MatchStatistics::new(side(12, 5, 55), side(9, 3, 45)).unwrap(),
        played_at: OffsetDateTime::UNIX_EPOCH,
    }
}

pub fn create_test_statistics(
    name: &str,
    points: u32,
    games_played: u32,
    attack: f64,
    defense: f64,
) -> TeamStatistics {
    let mut stats: TeamStatistics = TeamStatistics::new(team(name), attack, defense, 5);
    stats.points = Points::new(points);
    stats.games_played = games_played;
    stats
}
