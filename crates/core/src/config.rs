// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::schedule::ScheduleGenerator;
use serde::{Deserialize, Serialize};

/// Tunable inputs of the simulation engine.
///
/// Every field has a default, so a partial JSON document can override any
/// subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Multiplier applied in favour of the home side.
    pub home_advantage: f64,
    /// Weeks (rounds) in a season. Must match the schedule's length.
    pub total_weeks: u32,
    /// Teams that take part in a season. Must match the schedule's size.
    pub required_team_count: usize,
    /// Lower possession bound for the home side.
    pub min_possession: u32,
    /// Upper possession bound for the home side.
    pub max_possession: u32,
    /// Weight given to recent performance in strength smoothing.
    pub learning_rate: f64,
    /// Trailing matches considered by strength smoothing.
    pub strength_window: usize,
    /// Results kept in a team's form.
    pub form_length: usize,
    /// Prediction snapshots kept per season.
    pub history_limit: usize,
    /// Weight of points-per-game in projections.
    pub form_weight: f64,
    /// Weight of strength ratings in projections.
    pub strength_weight: f64,
    /// Rating assigned to every team when a projection replay starts.
    pub initial_strength: f64,
    /// Highest combined score accepted for a manual edit.
    pub max_goals_per_match: u32,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            home_advantage: 1.2,
            total_weeks: 6,
            required_team_count: 4,
            min_possession: 25,
            max_possession: 75,
            learning_rate: 0.3,
            strength_window: 3,
            form_length: 5,
            history_limit: 20,
            form_weight: 0.4,
            strength_weight: 0.6,
            initial_strength: 1.0,
            max_goals_per_match: 20,
        }
    }
}

impl LeagueConfig {
    /// Checks that every value is usable by the engine.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfiguration` naming the first bad parameter.
    pub fn validate(&self) -> Result<(), CoreError> {
        positive("home_advantage", self.home_advantage)?;
        positive("initial_strength", self.initial_strength)?;
        non_negative("form_weight", self.form_weight)?;
        non_negative("strength_weight", self.strength_weight)?;

        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(invalid(
                "learning_rate",
                format!("must lie in (0, 1], got {}", self.learning_rate),
            ));
        }
        if self.min_possession > self.max_possession || self.max_possession > 100 {
            return Err(invalid(
                "max_possession",
                format!(
                    "bounds {}..={} must be ordered and within 0..=100",
                    self.min_possession, self.max_possession
                ),
            ));
        }
        let schedule: ScheduleGenerator = ScheduleGenerator;
        if self.total_weeks != schedule.total_weeks() {
            return Err(invalid(
                "total_weeks",
                format!(
                    "the double round robin spans {} weeks, got {}",
                    schedule.total_weeks(),
                    self.total_weeks
                ),
            ));
        }
        if self.required_team_count != schedule.required_teams() {
            return Err(invalid(
                "required_team_count",
                format!(
                    "the double round robin is built for {} teams, got {}",
                    schedule.required_teams(),
                    self.required_team_count
                ),
            ));
        }
        for (parameter, value) in [
            ("strength_window", self.strength_window),
            ("form_length", self.form_length),
            ("history_limit", self.history_limit),
        ] {
            if value == 0 {
                return Err(invalid(parameter, String::from("must be greater than zero")));
            }
        }
        Ok(())
    }
}

fn invalid(parameter: &'static str, reason: String) -> CoreError {
    CoreError::InvalidConfiguration { parameter, reason }
}

fn positive(parameter: &'static str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(
            parameter,
            format!("must be finite and positive, got {value}"),
        ));
    }
    Ok(())
}

fn non_negative(parameter: &'static str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            parameter,
            format!("must be finite and non-negative, got {value}"),
        ));
    }
    Ok(())
}
