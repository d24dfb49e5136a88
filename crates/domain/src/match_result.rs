// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::outcome::MatchOutcome;
use crate::values::{Goals, TeamName};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One side's statistics for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SideStatistics {
    /// Total shots.
    pub shots: u32,
    /// Shots on target.
    pub shots_on_target: u32,
    /// Possession as a whole percentage.
    pub possession: u32,
    /// Corners won.
    pub corners: u32,
    /// Fouls committed.
    pub fouls: u32,
}

/// Both sides' statistics for a single match.
///
/// Home and away possession always sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchStatistics")]
pub struct MatchStatistics {
    home: SideStatistics,
    away: SideStatistics,
}

#[derive(Deserialize)]
struct RawMatchStatistics {
    home: SideStatistics,
    away: SideStatistics,
}

impl TryFrom<RawMatchStatistics> for MatchStatistics {
    type Error = DomainError;

    fn try_from(raw: RawMatchStatistics) -> Result<Self, Self::Error> {
        Self::new(raw.home, raw.away)
    }
}

impl MatchStatistics {
    /// Creates match statistics.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPossession` unless the two possession
    /// figures sum to exactly 100.
    pub fn new(home: SideStatistics, away: SideStatistics) -> Result<Self, DomainError> {
        if home.possession.checked_add(away.possession) != Some(100) {
            return Err(DomainError::InvalidPossession {
                home: home.possession,
                away: away.possession,
            });
        }
        Ok(Self { home, away })
    }

    /// Returns the home side's statistics.
    #[must_use]
    pub const fn home(&self) -> &SideStatistics {
        &self.home
    }

    /// Returns the away side's statistics.
    #[must_use]
    pub const fn away(&self) -> &SideStatistics {
        &self.away
    }
}

/// A resolved match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The hosting team.
    pub home_team: TeamName,
    /// The visiting team.
    pub away_team: TeamName,
    /// Goals scored by the home team.
    pub home_goals: Goals,
    /// Goals scored by the away team.
    pub away_goals: Goals,
    /// Per-side match statistics.
    pub statistics: MatchStatistics,
    /// When the match was played.
    #[serde(with = "time::serde::rfc3339")]
    pub played_at: OffsetDateTime,
}

impl MatchResult {
    /// Returns the fixture-level outcome.
    #[must_use]
    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_goals(self.home_goals, self.away_goals)
    }

    /// Returns whether the home team won.
    #[must_use]
    pub fn is_home_win(&self) -> bool {
        self.home_goals > self.away_goals
    }

    /// Returns whether the away team won.
    #[must_use]
    pub fn is_away_win(&self) -> bool {
        self.away_goals > self.home_goals
    }

    /// Returns whether the match was drawn.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.home_goals == self.away_goals
    }

    /// Returns whether the team took part in this match.
    #[must_use]
    pub fn involves(&self, team: &TeamName) -> bool {
        &self.home_team == team || &self.away_team == team
    }

    /// Returns the goals scored by `team`, or `None` if it did not play.
    #[must_use]
    pub fn goals_for(&self, team: &TeamName) -> Option<Goals> {
        if &self.home_team == team {
            Some(self.home_goals)
        } else if &self.away_team == team {
            Some(self.away_goals)
        } else {
            None
        }
    }

    /// Returns the goals conceded by `team`, or `None` if it did not play.
    #[must_use]
    pub fn goals_against(&self, team: &TeamName) -> Option<Goals> {
        if &self.home_team == team {
            Some(self.away_goals)
        } else if &self.away_team == team {
            Some(self.home_goals)
        } else {
            None
        }
    }
}
