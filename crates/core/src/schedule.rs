// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use league_sim_domain::{validate_team_count, validate_week};

/// Slot pairings (home, away) per week for a four-team double round robin.
///
/// Weeks 4-6 mirror weeks 1-3 with venues swapped. Stored seasons depend
/// on this exact order.
pub const DOUBLE_ROUND_ROBIN: [[(usize, usize); 2]; 6] = [
    [(0, 1), (2, 3)],
    [(0, 2), (1, 3)],
    [(0, 3), (1, 2)],
    [(1, 0), (3, 2)],
    [(2, 0), (3, 1)],
    [(3, 0), (2, 1)],
];

/// One scheduled pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledFixture<T> {
    /// 1-based week.
    pub week: u32,
    /// Hosting team.
    pub home: T,
    /// Visiting team.
    pub away: T,
}

/// Deterministic fixture list for the fixed-size league.
///
/// Teams occupy slots in the order they were attached to the season.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Number of teams the table is built for.
    #[must_use]
    pub const fn required_teams(&self) -> usize {
        4
    }

    /// Number of weeks in the table.
    #[must_use]
    pub const fn total_weeks(&self) -> u32 {
        6
    }

    /// Produces every fixture of the season in week order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTeamCount` unless exactly four teams are given.
    pub fn generate<T: Clone>(&self, teams: &[T]) -> Result<Vec<ScheduledFixture<T>>, CoreError> {
        validate_team_count(self.required_teams(), teams.len())?;
        let mut fixtures: Vec<ScheduledFixture<T>> = Vec::with_capacity(12);
        for week in 1..=self.total_weeks() {
            fixtures.extend(self.pairings(teams, week));
        }
        Ok(fixtures)
    }

    /// Produces the fixtures of a single week.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTeamCount` for the wrong number of teams,
    /// or `DomainError::InvalidWeek` for a week outside `1..=6`.
    pub fn week<T: Clone>(
        &self,
        teams: &[T],
        week: u32,
    ) -> Result<Vec<ScheduledFixture<T>>, CoreError> {
        validate_team_count(self.required_teams(), teams.len())?;
        validate_week(week, self.total_weeks())?;
        Ok(self.pairings(teams, week).collect())
    }

    fn pairings<'a, T: Clone>(
        &self,
        teams: &'a [T],
        week: u32,
    ) -> impl Iterator<Item = ScheduledFixture<T>> + 'a {
        let index: usize = usize::try_from(week.saturating_sub(1)).unwrap_or(usize::MAX);
        DOUBLE_ROUND_ROBIN
            .get(index)
            .copied()
            .into_iter()
            .flatten()
            .map(move |(home, away)| ScheduledFixture {
                week,
                home: teams[home].clone(),
                away: teams[away].clone(),
            })
    }
}
