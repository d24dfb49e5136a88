// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The lifecycle state of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeasonStatus {
    /// Fixtures exist but no week has been played.
    #[default]
    Pending,
    /// Weeks are being played.
    Active,
    /// Every week has been played. Final.
    Completed,
}

impl FromStr for SeasonStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidLifecycleState(s.to_string())),
        }
    }
}

impl std::fmt::Display for SeasonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SeasonStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Active
    /// - Active → Completed
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Active) | (Self::Active, Self::Completed)
        )
    }

    /// Returns whether a reset back to `Pending` is allowed.
    #[must_use]
    pub const fn allows_reset(&self) -> bool {
        matches!(self, Self::Pending | Self::Active)
    }
}

/// A league season.
///
/// `status` is `Completed` exactly when `current_week >= total_weeks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// Identifier assigned by persistence.
    pub season_id: i64,
    /// Unique season name.
    pub name: String,
    /// Lifecycle state.
    pub status: SeasonStatus,
    /// Number of weeks played so far.
    pub current_week: u32,
    /// Number of weeks in the season.
    pub total_weeks: u32,
}

impl Season {
    /// Creates a pending season at week zero.
    #[must_use]
    pub const fn new(season_id: i64, name: String, total_weeks: u32) -> Self {
        Self {
            season_id,
            name,
            status: SeasonStatus::Pending,
            current_week: 0,
            total_weeks,
        }
    }

    /// Returns whether every week has been played.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.current_week >= self.total_weeks
    }

    /// Weeks still to play.
    #[must_use]
    pub const fn remaining_weeks(&self) -> u32 {
        self.total_weeks.saturating_sub(self.current_week)
    }

    /// The week that would be played next, or `None` when complete.
    #[must_use]
    pub const fn next_week(&self) -> Option<u32> {
        if self.is_completed() {
            None
        } else {
            Some(self.current_week + 1)
        }
    }

    /// Moves to `target` if the lifecycle allows it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the transition is not permitted.
    pub fn transition_to(&mut self, target: SeasonStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }

    /// Advances one week and completes the season on the last one.
    pub const fn advance_week(&mut self) {
        self.current_week = self.current_week.saturating_add(1);
        if self.is_completed() {
            self.status = SeasonStatus::Completed;
        }
    }

    /// Returns the season to its initial state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeasonAlreadyCompleted` for a completed season.
    pub fn reset(&mut self) -> Result<(), DomainError> {
        if !self.status.allows_reset() {
            return Err(DomainError::SeasonAlreadyCompleted(self.name.clone()));
        }
        self.status = SeasonStatus::Pending;
        self.current_week = 0;
        Ok(())
    }
}
