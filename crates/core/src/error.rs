// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_sim_domain::DomainError;
use thiserror::Error;

/// Errors raised by the simulation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// A configuration value is out of range.
    #[error("Invalid configuration for '{parameter}': {reason}")]
    InvalidConfiguration {
        /// The offending parameter.
        parameter: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}
