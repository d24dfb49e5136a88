// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod fixture;
mod match_result;
mod outcome;
mod prediction;
mod season;
mod statistics;
mod team;
mod team_season;
mod validation;
mod values;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::{DomainError, ErrorClass};
pub use fixture::Fixture;
pub use match_result::{MatchResult, MatchStatistics, SideStatistics};
pub use outcome::{Form, FormResult, MatchOutcome, Venue};
pub use prediction::PredictionSnapshot;
pub use season::{Season, SeasonStatus};
pub use statistics::{LeagueTableEntry, TeamStatistics};
pub use team::{Strength, StrengthType, Team};
pub use team_season::TeamSeason;
pub use validation::{
    validate_goals, validate_season_name, validate_strength_for_simulation, validate_team_count,
    validate_team_name, validate_week,
};
pub use values::{Goals, MAX_NAME_LENGTH, Points, Probability, TeamName};
