// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Maximum length of team and season names.
pub const MAX_NAME_LENGTH: usize = 255;

/// A team's identity.
///
/// Names are trimmed and must be non-empty. Two teams are the same team
/// exactly when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Creates a new team name.
    ///
    /// # Arguments
    ///
    /// * `name` - The raw team name; surrounding whitespace is removed
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTeamName` if the trimmed name is empty
    /// or longer than [`MAX_NAME_LENGTH`] characters.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let trimmed: &str = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTeamName(String::from(
                "Team name cannot be empty",
            )));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::InvalidTeamName(format!(
                "Team name cannot exceed {MAX_NAME_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TeamName> for String {
    fn from(value: TeamName) -> Self {
        value.0
    }
}

impl std::fmt::Display for TeamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative goal count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Goals(u32);

impl Goals {
    /// No goals.
    pub const ZERO: Self = Self(0);

    /// Creates a goal count.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw count.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Subtracts, flooring at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Subtracts, returning `None` if the result would be negative.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl std::ops::Add for Goals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::ops::AddAssign for Goals {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::fmt::Display for Goals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative league points total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Points(u32);

impl Points {
    /// Points awarded for a win.
    pub const FOR_WIN: Self = Self(3);
    /// Points awarded for a draw.
    pub const FOR_DRAW: Self = Self(1);
    /// Points awarded for a loss.
    pub const FOR_LOSS: Self = Self(0);

    /// Creates a points total.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw total.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Subtracts, returning `None` if the result would be negative.
    ///
    /// Only the correction path ever removes points.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl std::ops::Add for Points {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::ops::AddAssign for Points {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A probability in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    /// Certain failure.
    pub const ZERO: Self = Self(0.0);
    /// Certain success.
    pub const ONE: Self = Self(1.0);

    /// Creates a probability.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProbability` if the value is not finite
    /// or lies outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(DomainError::InvalidProbability(value));
        }
        Ok(Self(value))
    }

    /// Creates a probability, saturating into `[0, 1]`.
    ///
    /// NaN maps to zero.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a probability from a percentage in `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProbability` if the percentage is out of range.
    pub fn from_percentage(percentage: f64) -> Result<Self, DomainError> {
        Self::new(percentage / 100.0)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the value scaled to a percentage.
    #[must_use]
    pub fn percentage(self) -> f64 {
        self.0 * 100.0
    }

    /// Returns `1 - p`.
    #[must_use]
    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(value: Probability) -> Self {
        value.0
    }
}
