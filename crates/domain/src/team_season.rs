// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::outcome::{Form, FormResult};
use crate::values::{Goals, Points, Probability};
use serde::{Deserialize, Serialize};

/// A team's persisted aggregate for one season.
///
/// Unlike `TeamStatistics`, which is rebuilt per analysis pass, this record
/// is the durable running total and can be decremented when a recorded
/// result is corrected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSeason {
    /// Identifier assigned by persistence.
    pub team_season_id: i64,
    /// The season.
    pub season_id: i64,
    /// The team.
    pub team_id: i64,
    /// Matches played.
    pub played: u32,
    /// Matches won.
    pub won: u32,
    /// Matches drawn.
    pub drawn: u32,
    /// Matches lost.
    pub lost: u32,
    /// Goals scored.
    pub goals_for: Goals,
    /// Goals conceded.
    pub goals_against: Goals,
    /// League points.
    pub points: Points,
    /// Latest projected probability of winning the league.
    pub championship_probability: Probability,
    /// Most recent results in play order.
    pub form: Form,
}

impl TeamSeason {
    /// Creates an empty aggregate.
    #[must_use]
    pub fn new(
        team_season_id: i64,
        season_id: i64,
        team_id: i64,
        initial_probability: Probability,
        form_length: usize,
    ) -> Self {
        Self {
            team_season_id,
            season_id,
            team_id,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: Goals::ZERO,
            goals_against: Goals::ZERO,
            points: Points::default(),
            championship_probability: initial_probability,
            form: Form::new(form_length),
        }
    }

    /// Folds one result into the aggregate.
    ///
    /// # Arguments
    ///
    /// * `goals_for` - Goals this team scored
    /// * `goals_against` - Goals this team conceded
    pub fn apply_result(&mut self, goals_for: Goals, goals_against: Goals) {
        let result: FormResult = FormResult::from_goals(goals_for, goals_against);
        self.played = self.played.saturating_add(1);
        match result {
            FormResult::Win => self.won = self.won.saturating_add(1),
            FormResult::Draw => self.drawn = self.drawn.saturating_add(1),
            FormResult::Loss => self.lost = self.lost.saturating_add(1),
        }
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        self.points += result.points();
        self.form.push(result);
    }

    /// Removes a previously applied result.
    ///
    /// The form is left untouched; callers rebuild it from the remaining
    /// played fixtures in play order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AggregateUnderflow` if any counter would go
    /// negative, which means the result was never applied. The aggregate
    /// is unchanged on error.
    pub fn revert_result(
        &mut self,
        team: &str,
        goals_for: Goals,
        goals_against: Goals,
    ) -> Result<(), DomainError> {
        let underflow = |field: &'static str| DomainError::AggregateUnderflow {
            team: team.to_string(),
            field,
        };
        let result: FormResult = FormResult::from_goals(goals_for, goals_against);

        let played: u32 = self.played.checked_sub(1).ok_or_else(|| underflow("played"))?;
        let (won, drawn, lost): (u32, u32, u32) = match result {
            FormResult::Win => (
                self.won.checked_sub(1).ok_or_else(|| underflow("won"))?,
                self.drawn,
                self.lost,
            ),
            FormResult::Draw => (
                self.won,
                self.drawn.checked_sub(1).ok_or_else(|| underflow("drawn"))?,
                self.lost,
            ),
            FormResult::Loss => (
                self.won,
                self.drawn,
                self.lost.checked_sub(1).ok_or_else(|| underflow("lost"))?,
            ),
        };
        let new_goals_for: Goals = self
            .goals_for
            .checked_sub(goals_for)
            .ok_or_else(|| underflow("goals_for"))?;
        let new_goals_against: Goals = self
            .goals_against
            .checked_sub(goals_against)
            .ok_or_else(|| underflow("goals_against"))?;
        let points: Points = self
            .points
            .checked_sub(result.points())
            .ok_or_else(|| underflow("points"))?;

        self.played = played;
        self.won = won;
        self.drawn = drawn;
        self.lost = lost;
        self.goals_for = new_goals_for;
        self.goals_against = new_goals_against;
        self.points = points;
        Ok(())
    }

    /// Goals for minus goals against.
    #[must_use]
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for.value()) - i64::from(self.goals_against.value())
    }

    /// Points per game, or `None` before the first match.
    #[must_use]
    pub fn points_per_game(&self) -> Option<f64> {
        if self.played == 0 {
            return None;
        }
        Some(f64::from(self.points.value()) / f64::from(self.played))
    }

    /// Matches left to play in a season of `total_weeks`.
    #[must_use]
    pub const fn remaining_matches(&self, total_weeks: u32) -> u32 {
        total_weeks.saturating_sub(self.played)
    }

    /// Zeroes every counter and restores the initial probability.
    pub fn reset(&mut self, initial_probability: Probability) {
        self.played = 0;
        self.won = 0;
        self.drawn = 0;
        self.lost = 0;
        self.goals_for = Goals::ZERO;
        self.goals_against = Goals::ZERO;
        self.points = Points::default();
        self.championship_probability = initial_probability;
        self.form.clear();
    }
}
