// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::team::{Strength, StrengthType};
use crate::values::{MAX_NAME_LENGTH, TeamName};

/// Validates a team name.
///
/// # Arguments
///
/// * `name` - The raw name
///
/// # Returns
///
/// * `Ok(TeamName)` holding the trimmed name
/// * `Err(DomainError::InvalidTeamName)` otherwise
///
/// # Errors
///
/// Returns an error if the trimmed name is empty or too long.
pub fn validate_team_name(name: &str) -> Result<TeamName, DomainError> {
    TeamName::new(name)
}

/// Validates a season name.
///
/// Uniqueness is checked by persistence, not here.
///
/// # Errors
///
/// Returns `DomainError::InvalidSeasonName` if the trimmed name is empty or
/// longer than 255 characters.
pub fn validate_season_name(name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidSeasonName(String::from(
            "Season name cannot be empty",
        )));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidSeasonName(format!(
            "Season name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validates that a week lies in `[1, total_weeks]`.
///
/// # Errors
///
/// Returns `DomainError::InvalidWeek` otherwise.
pub const fn validate_week(week: u32, total_weeks: u32) -> Result<(), DomainError> {
    if week == 0 || week > total_weeks {
        return Err(DomainError::InvalidWeek { week, total_weeks });
    }
    Ok(())
}

/// Validates ratings before they reach the expected-goals computation.
///
/// Deserialized or hand-built ratings can bypass `Strength::new`, so the
/// simulator checks again: both ratings must be finite and positive.
///
/// # Errors
///
/// Returns `DomainError::InvalidStrength` naming the offending rating.
pub fn validate_strength_for_simulation(strength: &Strength) -> Result<(), DomainError> {
    for (strength_type, value) in [
        (StrengthType::Attack, strength.attack()),
        (StrengthType::Defense, strength.defense()),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidStrength {
                strength_type,
                value,
            });
        }
    }
    Ok(())
}

/// Validates that exactly `required` teams are present.
///
/// # Errors
///
/// Returns `DomainError::InvalidTeamCount` otherwise.
pub const fn validate_team_count(required: usize, actual: usize) -> Result<(), DomainError> {
    if required != actual {
        return Err(DomainError::InvalidTeamCount { required, actual });
    }
    Ok(())
}

/// Validates a manually entered score.
///
/// # Errors
///
/// Returns `DomainError::InvalidGoals` if the combined total exceeds `max`.
pub const fn validate_goals(home: u32, away: u32, max: u32) -> Result<(), DomainError> {
    if home.saturating_add(away) > max {
        return Err(DomainError::InvalidGoals { home, away, max });
    }
    Ok(())
}
