// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use league_sim::CoreError;
use league_sim_domain::{DomainError, ErrorClass};
use league_sim_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain, core and persistence errors and
/// represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}

/// Names the field, rule or resource a domain error is about.
const fn error_subject(err: &DomainError) -> &'static str {
    match err {
        DomainError::InvalidTeamName(_) => "team_name",
        DomainError::InvalidSeasonName(_) => "season_name",
        DomainError::InvalidProbability(_) => "probability",
        DomainError::InvalidStrength { .. } => "strength",
        DomainError::InvalidPossession { .. } => "possession",
        DomainError::InvalidWeek { .. } => "week",
        DomainError::InvalidTeamCount { .. } | DomainError::InsufficientTeams { .. } => {
            "team_count"
        }
        DomainError::InvalidGoals { .. } => "goals",
        DomainError::InvalidLifecycleState(_) => "status",
        DomainError::InvalidFormResult(_) => "form",
        DomainError::NoPredictionsAvailable => "current_week",
        DomainError::SeasonNotActive { .. } => "season_active",
        DomainError::SeasonAlreadyCompleted(_) => "season_not_completed",
        DomainError::InvalidTransition { .. } => "season_lifecycle",
        DomainError::NoMatchesForWeek { .. } => "unplayed_matches",
        DomainError::MatchEditForbidden { .. } => "editable_match",
        DomainError::DuplicateSeasonName(_) => "unique_season_name",
        DomainError::DuplicateTeam(_) => "unique_team",
        DomainError::MatchNotRecorded { .. } | DomainError::AggregateUnderflow { .. } => {
            "consistent_aggregates"
        }
        DomainError::TeamNotFound(_) => "Team",
        DomainError::SeasonNotFound(_) => "Season",
        DomainError::FixtureNotFound(_) => "Match",
    }
}

/// Translates a domain error into an API error.
///
/// Precondition failures become `InvalidInput`, state conflicts become
/// `DomainRuleViolation` and lookup failures become `ResourceNotFound`.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let subject: String = String::from(error_subject(&err));
    let message: String = err.to_string();
    match err.class() {
        ErrorClass::Precondition => ApiError::InvalidInput {
            field: subject,
            message,
        },
        ErrorClass::StateConflict => ApiError::DomainRuleViolation {
            rule: subject,
            message,
        },
        ErrorClass::Lookup => ApiError::ResourceNotFound {
            resource_type: subject,
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidConfiguration { parameter, reason } => ApiError::InvalidInput {
            field: String::from(parameter),
            message: reason,
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        PersistenceError::NotFound { entity, key } => ApiError::ResourceNotFound {
            resource_type: String::from(entity),
            message: key,
        },
        duplicate @ PersistenceError::DuplicateFixture { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_fixture"),
            message: duplicate.to_string(),
        },
        PersistenceError::TransactionFailed(msg) => ApiError::Internal {
            message: format!("Transaction failed: {msg}"),
        },
    }
}
