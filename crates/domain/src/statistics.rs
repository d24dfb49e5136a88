// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::outcome::Form;
use crate::values::{Goals, Points, TeamName};
use serde::{Deserialize, Serialize};

/// Running per-team aggregates for one season-analysis pass.
///
/// Created at zero when a team enters the season. Every field except
/// `team` changes after each recorded match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatistics {
    /// The team these figures belong to.
    pub team: TeamName,
    /// League points.
    pub points: Points,
    /// Goals scored.
    pub goals_scored: Goals,
    /// Goals conceded.
    pub goals_conceded: Goals,
    /// Matches played.
    pub games_played: u32,
    /// Matches won.
    pub won: u32,
    /// Matches drawn.
    pub drawn: u32,
    /// Matches lost.
    pub lost: u32,
    /// Mean shots per match.
    pub shots_per_game: f64,
    /// Mean shots on target per match.
    pub shots_on_target_per_game: f64,
    /// Mean possession percentage.
    pub average_possession: f64,
    /// Smoothed attack rating.
    pub attack_strength: f64,
    /// Smoothed defense rating.
    pub defense_strength: f64,
    /// Most recent results.
    pub form: Form,
}

impl TeamStatistics {
    /// Creates zeroed statistics with the given starting ratings.
    #[must_use]
    pub fn new(team: TeamName, attack_strength: f64, defense_strength: f64, form_length: usize) -> Self {
        Self {
            team,
            points: Points::default(),
            goals_scored: Goals::ZERO,
            goals_conceded: Goals::ZERO,
            games_played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            shots_per_game: 0.0,
            shots_on_target_per_game: 0.0,
            average_possession: 0.0,
            attack_strength,
            defense_strength,
            form: Form::new(form_length),
        }
    }

    /// Goals scored minus goals conceded.
    #[must_use]
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_scored.value()) - i64::from(self.goals_conceded.value())
    }

    /// Points per game, or `None` before the first match.
    #[must_use]
    pub fn points_per_game(&self) -> Option<f64> {
        if self.games_played == 0 {
            return None;
        }
        Some(f64::from(self.points.value()) / f64::from(self.games_played))
    }
}

/// A derived, read-only row of the league table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueTableEntry {
    /// 1-based rank; unique within a table.
    pub position: usize,
    /// The team in this row.
    pub team: TeamName,
    /// League points.
    pub points: Points,
    /// Matches played.
    pub played: u32,
    /// Goals scored.
    pub goals_for: Goals,
    /// Goals conceded.
    pub goals_against: Goals,
    /// Goals for minus goals against.
    pub goal_difference: i64,
    /// Attack rating at the time of ranking.
    pub attack_strength: f64,
    /// Defense rating at the time of ranking.
    pub defense_strength: f64,
}
