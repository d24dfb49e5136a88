// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::values::TeamName;
use serde::{Deserialize, Serialize};

/// Which of the two strength ratings a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthType {
    /// Goal-scoring ability.
    Attack,
    /// Goal-prevention ability.
    Defense,
}

impl StrengthType {
    /// Returns the lowercase name of the rating.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defense => "defense",
        }
    }
}

impl std::fmt::Display for StrengthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A team's attack and defense ratings.
///
/// Persisted ratings live in `(0, MAX_DISPLAY]`. The simulation engine
/// works on the narrower `[MIN_SIMULATION, MAX_SIMULATION]` band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    attack: f64,
    defense: f64,
}

impl Strength {
    /// Lower bound of the simulation range.
    pub const MIN_SIMULATION: f64 = 0.1;
    /// Upper bound of the simulation range.
    pub const MAX_SIMULATION: f64 = 3.0;
    /// Upper bound of the persisted display range.
    pub const MAX_DISPLAY: f64 = 5.0;

    /// Creates a strength pair in the persisted display range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStrength` if either rating is non-finite,
    /// non-positive or above [`Self::MAX_DISPLAY`].
    pub fn new(attack: f64, defense: f64) -> Result<Self, DomainError> {
        check_rating(StrengthType::Attack, attack)?;
        check_rating(StrengthType::Defense, defense)?;
        Ok(Self { attack, defense })
    }

    /// Equal attack and defense.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn uniform(value: f64) -> Result<Self, DomainError> {
        Self::new(value, value)
    }

    /// Returns the attack rating.
    #[must_use]
    pub const fn attack(&self) -> f64 {
        self.attack
    }

    /// Returns the defense rating.
    #[must_use]
    pub const fn defense(&self) -> f64 {
        self.defense
    }

    /// Returns a copy with both ratings clamped into the simulation range.
    #[must_use]
    pub fn clamp_to_simulation_range(&self) -> Self {
        Self {
            attack: self.attack.clamp(Self::MIN_SIMULATION, Self::MAX_SIMULATION),
            defense: self.defense.clamp(Self::MIN_SIMULATION, Self::MAX_SIMULATION),
        }
    }
}

fn check_rating(strength_type: StrengthType, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value <= 0.0 || value > Strength::MAX_DISPLAY {
        return Err(DomainError::InvalidStrength {
            strength_type,
            value,
        });
    }
    Ok(())
}

/// A club that can take part in seasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Identifier assigned by persistence. `None` until stored.
    team_id: Option<i64>,
    name: TeamName,
    strength: Strength,
}

impl Team {
    /// Creates a team that has not been persisted yet.
    #[must_use]
    pub const fn new(name: TeamName, strength: Strength) -> Self {
        Self {
            team_id: None,
            name,
            strength,
        }
    }

    /// Creates a team with a known identifier.
    #[must_use]
    pub const fn with_id(team_id: i64, name: TeamName, strength: Strength) -> Self {
        Self {
            team_id: Some(team_id),
            name,
            strength,
        }
    }

    /// Returns the persisted identifier, if any.
    #[must_use]
    pub const fn team_id(&self) -> Option<i64> {
        self.team_id
    }

    /// Returns the team name.
    #[must_use]
    pub const fn name(&self) -> &TeamName {
        &self.name
    }

    /// Returns the strength ratings.
    #[must_use]
    pub const fn strength(&self) -> Strength {
        self.strength
    }
}
