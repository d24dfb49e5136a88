// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::values::{Goals, Points};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Which side of a fixture a team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Venue {
    /// The hosting side.
    Home,
    /// The visiting side.
    Away,
}

/// The result of a match from the fixture's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Home side scored more.
    HomeWin,
    /// Equal scores.
    Draw,
    /// Away side scored more.
    AwayWin,
}

impl MatchOutcome {
    /// Derives the outcome from the two scores.
    #[must_use]
    pub fn from_goals(home_goals: Goals, away_goals: Goals) -> Self {
        match home_goals.cmp(&away_goals) {
            std::cmp::Ordering::Greater => Self::HomeWin,
            std::cmp::Ordering::Equal => Self::Draw,
            std::cmp::Ordering::Less => Self::AwayWin,
        }
    }

    /// Returns the single-match result for one side.
    #[must_use]
    pub const fn result_for(self, venue: Venue) -> FormResult {
        match (self, venue) {
            (Self::Draw, _) => FormResult::Draw,
            (Self::HomeWin, Venue::Home) | (Self::AwayWin, Venue::Away) => FormResult::Win,
            (Self::HomeWin, Venue::Away) | (Self::AwayWin, Venue::Home) => FormResult::Loss,
        }
    }

    /// Returns the points one side earns from this outcome.
    #[must_use]
    pub const fn points_for(self, venue: Venue) -> Points {
        self.result_for(venue).points()
    }
}

/// A single-match result as it appears in a form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormResult {
    /// Rendered as `W`.
    #[serde(rename = "W")]
    Win,
    /// Rendered as `D`.
    #[serde(rename = "D")]
    Draw,
    /// Rendered as `L`.
    #[serde(rename = "L")]
    Loss,
}

impl FormResult {
    /// Derives the result for a team from its goals for and against.
    #[must_use]
    pub fn from_goals(goals_for: Goals, goals_against: Goals) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => Self::Win,
            std::cmp::Ordering::Equal => Self::Draw,
            std::cmp::Ordering::Less => Self::Loss,
        }
    }

    /// Returns the league points for this result.
    #[must_use]
    pub const fn points(self) -> Points {
        match self {
            Self::Win => Points::FOR_WIN,
            Self::Draw => Points::FOR_DRAW,
            Self::Loss => Points::FOR_LOSS,
        }
    }

    /// Returns the one-letter code.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Win => 'W',
            Self::Draw => 'D',
            Self::Loss => 'L',
        }
    }
}

impl TryFrom<char> for FormResult {
    type Error = DomainError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'W' => Ok(Self::Win),
            'D' => Ok(Self::Draw),
            'L' => Ok(Self::Loss),
            other => Err(DomainError::InvalidFormResult(other)),
        }
    }
}

/// A team's most recent results, oldest first.
///
/// Holds at most `capacity` entries; pushing beyond that evicts the oldest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    capacity: usize,
    results: VecDeque<FormResult>,
}

impl Form {
    /// Number of results kept by default.
    pub const DEFAULT_LENGTH: usize = 5;

    /// Creates an empty form with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            results: VecDeque::with_capacity(capacity),
        }
    }

    /// Rebuilds a form from results in play order.
    ///
    /// Only the last `capacity` results are retained.
    #[must_use]
    pub fn from_results<I>(capacity: usize, results: I) -> Self
    where
        I: IntoIterator<Item = FormResult>,
    {
        let mut form: Self = Self::new(capacity);
        for result in results {
            form.push(result);
        }
        form
    }

    /// Parses a form string such as `"WDLWW"`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormResult` for any character other
    /// than `W`, `D` or `L`.
    pub fn parse(capacity: usize, text: &str) -> Result<Self, DomainError> {
        let results: Vec<FormResult> = text
            .chars()
            .map(FormResult::try_from)
            .collect::<Result<_, _>>()?;
        Ok(Self::from_results(capacity, results))
    }

    /// Appends the newest result.
    pub fn push(&mut self, result: FormResult) {
        if self.capacity == 0 {
            return;
        }
        while self.results.len() >= self.capacity {
            self.results.pop_front();
        }
        self.results.push_back(result);
    }

    /// Removes every result.
    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = FormResult> + '_ {
        self.results.iter().copied()
    }

    /// Returns the number of stored results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns whether no results are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the newest result.
    #[must_use]
    pub fn latest(&self) -> Option<FormResult> {
        self.results.back().copied()
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH)
    }
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for result in &self.results {
            write!(f, "{}", result.as_char())?;
        }
        Ok(())
    }
}
