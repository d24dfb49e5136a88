// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::season::SeasonStatus;
use crate::team::StrengthType;

/// The three families of failure a caller has to distinguish.
///
/// Presentation layers map each class to its own user-facing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The input violates a precondition of the operation.
    Precondition,
    /// The operation conflicts with the current lifecycle or aggregate state.
    StateConflict,
    /// A referenced team, season or fixture does not exist.
    Lookup,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Team name is empty or too long.
    InvalidTeamName(String),
    /// Season name is empty or too long.
    InvalidSeasonName(String),
    /// Probability outside `[0, 1]` or not finite.
    InvalidProbability(f64),
    /// Strength rating is non-positive, non-finite or out of range.
    InvalidStrength {
        /// Which rating was rejected.
        strength_type: StrengthType,
        /// The rejected value.
        value: f64,
    },
    /// Possession figures do not add up to 100.
    InvalidPossession {
        /// Home possession percentage.
        home: u32,
        /// Away possession percentage.
        away: u32,
    },
    /// Requested week is outside `[1, total_weeks]`.
    InvalidWeek {
        /// The requested week.
        week: u32,
        /// The number of weeks in the season.
        total_weeks: u32,
    },
    /// The schedule needs a fixed number of teams.
    InvalidTeamCount {
        /// The required team count.
        required: usize,
        /// The team count provided.
        actual: usize,
    },
    /// Not enough teams exist to start a season.
    InsufficientTeams {
        /// The required team count.
        required: usize,
        /// The number of teams available.
        available: usize,
    },
    /// A manually entered score exceeds the configured maximum.
    InvalidGoals {
        /// Home goals.
        home: u32,
        /// Away goals.
        away: u32,
        /// Maximum combined goals per match.
        max: u32,
    },
    /// Unknown lifecycle state string.
    InvalidLifecycleState(String),
    /// Unknown form character.
    InvalidFormResult(char),
    /// Predictions were requested before any week was played.
    NoPredictionsAvailable,
    /// The season is not in the `active` state.
    SeasonNotActive {
        /// The season name.
        season: String,
        /// The status the season is actually in.
        status: SeasonStatus,
    },
    /// The season has already been completed.
    SeasonAlreadyCompleted(String),
    /// A lifecycle transition is not permitted.
    InvalidTransition {
        /// The current status.
        from: SeasonStatus,
        /// The requested status.
        to: SeasonStatus,
    },
    /// No unplayed fixtures exist for the week.
    NoMatchesForWeek {
        /// The week that was requested.
        week: u32,
    },
    /// Matches of a completed season cannot be edited.
    MatchEditForbidden {
        /// The fixture that was targeted.
        fixture_id: i64,
    },
    /// Season names are unique.
    DuplicateSeasonName(String),
    /// A team is already attached to the season or tracked twice.
    DuplicateTeam(String),
    /// A correction targeted a result that was never recorded.
    MatchNotRecorded {
        /// Home team.
        home: String,
        /// Away team.
        away: String,
    },
    /// A correction would drive a running counter below zero.
    AggregateUnderflow {
        /// The team whose aggregate is inconsistent.
        team: String,
        /// The counter that would underflow.
        field: &'static str,
    },
    /// Team does not exist.
    TeamNotFound(String),
    /// Season does not exist.
    SeasonNotFound(i64),
    /// Fixture does not exist.
    FixtureNotFound(i64),
}

impl DomainError {
    /// Returns the failure family this error belongs to.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidTeamName(_)
            | Self::InvalidSeasonName(_)
            | Self::InvalidProbability(_)
            | Self::InvalidStrength { .. }
            | Self::InvalidPossession { .. }
            | Self::InvalidWeek { .. }
            | Self::InvalidTeamCount { .. }
            | Self::InsufficientTeams { .. }
            | Self::InvalidGoals { .. }
            | Self::InvalidLifecycleState(_)
            | Self::InvalidFormResult(_)
            | Self::NoPredictionsAvailable => ErrorClass::Precondition,
            Self::SeasonNotActive { .. }
            | Self::SeasonAlreadyCompleted(_)
            | Self::InvalidTransition { .. }
            | Self::NoMatchesForWeek { .. }
            | Self::MatchEditForbidden { .. }
            | Self::DuplicateSeasonName(_)
            | Self::DuplicateTeam(_)
            | Self::MatchNotRecorded { .. }
            | Self::AggregateUnderflow { .. } => ErrorClass::StateConflict,
            Self::TeamNotFound(_) | Self::SeasonNotFound(_) | Self::FixtureNotFound(_) => {
                ErrorClass::Lookup
            }
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTeamName(msg) => write!(f, "Invalid team name: {msg}"),
            Self::InvalidSeasonName(msg) => write!(f, "Invalid season name: {msg}"),
            Self::InvalidProbability(value) => {
                write!(f, "Invalid probability: {value}. Must be between 0 and 1")
            }
            Self::InvalidStrength {
                strength_type,
                value,
            } => {
                write!(f, "Invalid {strength_type} strength: {value}")
            }
            Self::InvalidPossession { home, away } => {
                write!(
                    f,
                    "Home and away possession must sum to 100, got {home} + {away}"
                )
            }
            Self::InvalidWeek { week, total_weeks } => {
                write!(
                    f,
                    "Invalid week {week}. Week must be between 1 and {total_weeks}"
                )
            }
            Self::InvalidTeamCount { required, actual } => {
                write!(
                    f,
                    "Season must have exactly {required} teams to generate matches, got {actual}"
                )
            }
            Self::InsufficientTeams {
                required,
                available,
            } => {
                write!(
                    f,
                    "Insufficient teams. Required: {required}, Available: {available}"
                )
            }
            Self::InvalidGoals { home, away, max } => {
                write!(
                    f,
                    "Invalid score {home}-{away}. At most {max} goals per match"
                )
            }
            Self::InvalidLifecycleState(state) => {
                write!(f, "Invalid season status: {state}")
            }
            Self::InvalidFormResult(c) => write!(f, "Invalid form result: '{c}'"),
            Self::NoPredictionsAvailable => {
                write!(
                    f,
                    "No predictions available. Play at least one week first"
                )
            }
            Self::SeasonNotActive { season, status } => {
                write!(f, "Season '{season}' is not active (status: {status})")
            }
            Self::SeasonAlreadyCompleted(season) => {
                write!(f, "Season '{season}' is already completed")
            }
            Self::InvalidTransition { from, to } => {
                write!(f, "Cannot transition season from {from} to {to}")
            }
            Self::NoMatchesForWeek { week } => {
                write!(f, "No matches found for week {week}")
            }
            Self::MatchEditForbidden { fixture_id } => {
                write!(
                    f,
                    "Cannot update match {fixture_id}: its season is completed"
                )
            }
            Self::DuplicateSeasonName(name) => {
                write!(f, "Season '{name}' already exists")
            }
            Self::DuplicateTeam(name) => write!(f, "Team '{name}' is already registered"),
            Self::MatchNotRecorded { home, away } => {
                write!(f, "No recorded result for {home} vs {away}")
            }
            Self::AggregateUnderflow { team, field } => {
                write!(f, "Reverting would make '{field}' negative for team '{team}'")
            }
            Self::TeamNotFound(team) => write!(f, "Team {team} not found"),
            Self::SeasonNotFound(id) => write!(f, "Season {id} not found"),
            Self::FixtureNotFound(id) => write!(f, "Match {id} not found"),
        }
    }
}

impl std::error::Error for DomainError {}
