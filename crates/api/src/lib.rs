// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Season and match orchestration for the league simulator.
//!
//! This crate is the boundary callers talk to. It drives the engine in
//! `league-sim` against any [`league_sim_persistence::LeagueStore`],
//! shapes results into serializable records and maps every lower-level
//! failure onto [`ApiError`].

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_persistence_error};
pub use handlers::{
    create_season, generate_fixtures, generate_week_fixtures, get_predictions, get_season,
    get_standings, get_team, get_week_matches, list_matches_by_week, list_seasons, list_teams,
    play_next_week, refresh_probabilities, reset_season, simulate_all, start_season, update_match,
};
pub use request_response::{
    CreateSeasonRequest, CreateSeasonResponse, GenerateFixturesResponse, HistoryEntry,
    ListTeamsResponse, MatchInfo, PlayWeekResponse, PredictionsResponse, ProbabilitiesResponse,
    SeasonAnalysis, SeasonInfo, SeasonPhase, SimulateAllResponse, StandingRow, StandingsResponse,
    TeamInfo, TeamPrediction, TeamProbability, UpdateMatchRequest, WeekMatches,
};
