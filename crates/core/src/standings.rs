// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_sim_domain::{Goals, LeagueTableEntry, Points, TeamSeason, TeamStatistics};
use std::cmp::Ordering;

/// The fields a league table is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandingKey {
    /// League points.
    pub points: Points,
    /// Goals for minus goals against.
    pub goal_difference: i64,
    /// Goals scored.
    pub goals_for: Goals,
}

impl StandingKey {
    /// Orders keys so that the better-placed team sorts first.
    ///
    /// Points, then goal difference, then goals for, all descending.
    #[must_use]
    pub fn table_order(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| other.goal_difference.cmp(&self.goal_difference))
            .then_with(|| other.goals_for.cmp(&self.goals_for))
    }
}

impl From<&TeamStatistics> for StandingKey {
    fn from(stats: &TeamStatistics) -> Self {
        Self {
            points: stats.points,
            goal_difference: stats.goal_difference(),
            goals_for: stats.goals_scored,
        }
    }
}

impl From<&TeamSeason> for StandingKey {
    fn from(row: &TeamSeason) -> Self {
        Self {
            points: row.points,
            goal_difference: row.goal_difference(),
            goals_for: row.goals_for,
        }
    }
}

/// Sorts `items` into table order.
///
/// The sort is stable: items with equal keys keep their input order.
pub fn rank_by<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> StandingKey,
{
    items.sort_by(|a, b| key(a).table_order(&key(b)));
}

/// Builds the ranked league table.
///
/// Positions run `1..=N` with no gaps and no shared ranks.
#[must_use]
pub fn build_table(statistics: &[TeamStatistics]) -> Vec<LeagueTableEntry> {
    let mut ranked: Vec<&TeamStatistics> = statistics.iter().collect();
    rank_by(&mut ranked, |stats| StandingKey::from(*stats));

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, stats)| LeagueTableEntry {
            position: index + 1,
            team: stats.team.clone(),
            points: stats.points,
            played: stats.games_played,
            goals_for: stats.goals_scored,
            goals_against: stats.goals_conceded,
            goal_difference: stats.goal_difference(),
            attack_strength: stats.attack_strength,
            defense_strength: stats.defense_strength,
        })
        .collect()
}
