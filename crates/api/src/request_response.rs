// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use league_sim::{TeamAnalysis, TeamProgression};
use league_sim_domain::{MatchStatistics, Season, SeasonStatus, Team};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// A team as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInfo {
    /// The canonical identifier.
    pub team_id: i64,
    /// The team name.
    pub name: String,
    /// Attack rating.
    pub attack_strength: f64,
    /// Defense rating.
    pub defense_strength: f64,
}

impl TeamInfo {
    /// Builds the record for a stored team.
    #[must_use]
    pub fn from_team(team_id: i64, team: &Team) -> Self {
        Self {
            team_id,
            name: team.name().to_string(),
            attack_strength: team.strength().attack(),
            defense_strength: team.strength().defense(),
        }
    }
}

/// API response listing every team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTeamsResponse {
    /// Teams in identifier order.
    pub teams: Vec<TeamInfo>,
}

/// A season as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonInfo {
    /// The canonical identifier.
    pub season_id: i64,
    /// The season name.
    pub name: String,
    /// Lifecycle state.
    pub status: SeasonStatus,
    /// Weeks played so far.
    pub current_week: u32,
    /// Weeks in the season.
    pub total_weeks: u32,
}

impl From<&Season> for SeasonInfo {
    fn from(season: &Season) -> Self {
        Self {
            season_id: season.season_id,
            name: season.name.clone(),
            status: season.status,
            current_week: season.current_week,
            total_weeks: season.total_weeks,
        }
    }
}

/// API request to create a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSeasonRequest {
    /// The season name. Must be unique.
    pub name: String,
}

/// API response for a successful season creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSeasonResponse {
    /// The created season.
    pub season: SeasonInfo,
    /// The teams taking part, in schedule slot order.
    pub teams: Vec<TeamInfo>,
    /// Number of fixtures generated.
    pub fixtures_created: usize,
    /// A success message.
    pub message: String,
}

/// API response for full-season fixture generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFixturesResponse {
    /// The season.
    pub season_id: i64,
    /// Fixtures inserted by this call.
    pub created: usize,
    /// Fixtures the season holds afterwards.
    pub total: usize,
}

/// A fixture as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInfo {
    /// The canonical identifier.
    pub fixture_id: i64,
    /// The week the fixture belongs to.
    pub week: u32,
    /// Hosting team name.
    pub home_team: String,
    /// Visiting team name.
    pub away_team: String,
    /// Home goals, once played.
    pub home_goals: Option<u32>,
    /// Away goals, once played.
    pub away_goals: Option<u32>,
    /// Whether a result is recorded.
    pub is_played: bool,
    /// Match statistics, once played.
    pub statistics: Option<MatchStatistics>,
    /// When the result was recorded.
    #[serde(with = "time::serde::rfc3339::option")]
    pub played_at: Option<OffsetDateTime>,
}

/// The fixtures of one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekMatches {
    /// The week.
    pub week: u32,
    /// Its fixtures.
    pub matches: Vec<MatchInfo>,
}

/// API request to correct a match result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMatchRequest {
    /// Corrected home goals.
    pub home_goals: u32,
    /// Corrected away goals.
    pub away_goals: u32,
    /// Statistics to store; derived from the score when omitted.
    #[serde(default)]
    pub statistics: Option<MatchStatistics>,
}

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    /// Position, starting at 1.
    pub position: usize,
    /// Team name.
    pub team: String,
    /// Matches played.
    pub played: u32,
    /// Wins.
    pub won: u32,
    /// Draws.
    pub drawn: u32,
    /// Losses.
    pub lost: u32,
    /// Goals scored.
    pub goals_for: u32,
    /// Goals conceded.
    pub goals_against: u32,
    /// Goals for minus goals against.
    pub goal_difference: i64,
    /// League points.
    pub points: u32,
    /// Championship probability as a percentage.
    pub championship_probability: f64,
    /// Recent results, oldest first, e.g. `"WDLWW"`.
    pub form: String,
}

/// API response for the league table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsResponse {
    /// The season.
    pub season: SeasonInfo,
    /// Rows in table order.
    pub standings: Vec<StandingRow>,
}

/// API response after playing one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayWeekResponse {
    /// The week that was played.
    pub week: u32,
    /// The fixtures of that week with their results.
    pub matches: Vec<MatchInfo>,
    /// The season afterwards.
    pub season: SeasonInfo,
    /// The table afterwards.
    pub standings: Vec<StandingRow>,
}

/// API response after simulating the rest of a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateAllResponse {
    /// Fixtures simulated by this call.
    pub matches_simulated: usize,
    /// The season afterwards.
    pub season: SeasonInfo,
    /// The final table.
    pub standings: Vec<StandingRow>,
}

/// One team's championship probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamProbability {
    /// Team name.
    pub team: String,
    /// Probability as a percentage.
    pub probability: f64,
}

/// API response after recomputing probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilitiesResponse {
    /// The season.
    pub season_id: i64,
    /// The week the probabilities were computed after.
    pub week: u32,
    /// Whether anything was recomputed. `false` before any match is played.
    pub updated: bool,
    /// Per-team probabilities, highest first.
    pub probabilities: Vec<TeamProbability>,
}

/// One team's championship prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPrediction {
    /// Team name.
    pub team: String,
    /// Points so far.
    pub current_points: u32,
    /// Probability as a percentage, two decimals.
    pub championship_probability: f64,
    /// Decimal odds, two decimals.
    pub betting_odds: f64,
    /// Projected season total from the season replay, one decimal.
    pub projected_points: f64,
    /// Matches left.
    pub remaining_matches: u32,
    /// Points per game, two decimals.
    pub points_per_game: f64,
    /// Stored attack rating.
    pub attack_strength: f64,
    /// Stored defense rating.
    pub defense_strength: f64,
    /// Recent results, oldest first.
    pub recent_form: String,
}

/// One entry of the probability timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The week the snapshot was taken after.
    pub week: u32,
    /// When the snapshot was taken.
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
    /// Percentages per team.
    pub probabilities: BTreeMap<String, f64>,
}

/// How far the season has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonPhase {
    /// Before week 4.
    Early,
    /// Before the final week.
    Mid,
    /// Every week played.
    Final,
}

/// A short reading of the prediction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonAnalysis {
    /// Season phase.
    pub phase: SeasonPhase,
    /// Phase description.
    pub message: String,
    /// Remark on the title race, when there is one to make.
    pub favorite: Option<String>,
}

/// API response for championship predictions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionsResponse {
    /// The season.
    pub season: SeasonInfo,
    /// Per-team predictions, highest probability first.
    pub predictions: Vec<TeamPrediction>,
    /// The probability timeline, oldest first.
    pub history: Vec<HistoryEntry>,
    /// Season-phase reading.
    pub analysis: SeasonAnalysis,
    /// Projection detail computed from the replayed results.
    pub detailed_analysis: Vec<TeamAnalysis>,
    /// Movement of each team's probability across the timeline.
    pub progression: BTreeMap<String, TeamProgression>,
}
