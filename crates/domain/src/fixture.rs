// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::match_result::MatchStatistics;
use crate::outcome::MatchOutcome;
use crate::values::Goals;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A scheduled match within a season.
///
/// Goals, statistics and timestamps are `None` until the fixture is played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Identifier assigned by persistence.
    pub fixture_id: i64,
    /// The season this fixture belongs to.
    pub season_id: i64,
    /// 1-based week number.
    pub week: u32,
    /// Hosting team.
    pub home_team_id: i64,
    /// Visiting team.
    pub away_team_id: i64,
    /// Goals scored by the home team.
    pub home_goals: Option<Goals>,
    /// Goals scored by the away team.
    pub away_goals: Option<Goals>,
    /// Statistics of the played match.
    pub statistics: Option<MatchStatistics>,
    /// When the match was played.
    #[serde(with = "time::serde::rfc3339::option")]
    pub played_at: Option<OffsetDateTime>,
    /// Monotonic sequence number assigned when the result was recorded.
    ///
    /// Replays follow this order rather than timestamps, which can tie.
    pub played_order: Option<u64>,
}

impl Fixture {
    /// Creates an unplayed fixture.
    #[must_use]
    pub const fn new(
        fixture_id: i64,
        season_id: i64,
        week: u32,
        home_team_id: i64,
        away_team_id: i64,
    ) -> Self {
        Self {
            fixture_id,
            season_id,
            week,
            home_team_id,
            away_team_id,
            home_goals: None,
            away_goals: None,
            statistics: None,
            played_at: None,
            played_order: None,
        }
    }

    /// Returns whether a result has been recorded.
    #[must_use]
    pub const fn is_played(&self) -> bool {
        self.home_goals.is_some() && self.away_goals.is_some()
    }

    /// Returns the recorded score.
    #[must_use]
    pub const fn score(&self) -> Option<(Goals, Goals)> {
        match (self.home_goals, self.away_goals) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    /// Returns the outcome of a played fixture.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.score()
            .map(|(home, away)| MatchOutcome::from_goals(home, away))
    }

    /// Returns whether `team_id` takes part in this fixture.
    #[must_use]
    pub const fn involves(&self, team_id: i64) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Clears the recorded result.
    pub const fn clear_result(&mut self) {
        self.home_goals = None;
        self.away_goals = None;
        self.statistics = None;
        self.played_at = None;
        self.played_order = None;
    }
}
