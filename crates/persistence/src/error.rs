// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_sim_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersistenceError {
    /// A stored entity would violate a domain rule.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// A row with no domain-level identity was not found.
    #[error("{entity} not found: {key}")]
    NotFound {
        /// The kind of row.
        entity: &'static str,
        /// The key that was looked up.
        key: String,
    },
    /// The pairing already exists in the season.
    #[error(
        "Fixture {home_team_id} vs {away_team_id} already exists in season {season_id}"
    )]
    DuplicateFixture {
        /// The season.
        season_id: i64,
        /// The hosting team.
        home_team_id: i64,
        /// The visiting team.
        away_team_id: i64,
    },
    /// A transaction could not be started or completed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}
