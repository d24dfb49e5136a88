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

mod config;
mod error;
mod projector;
mod random;
mod schedule;
mod simulator;
mod standings;
mod tracker;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use config::LeagueConfig;
pub use error::CoreError;
pub use projector::{
    ChampionshipProjector, MAX_EXPECTED_PPG, MIN_EXPECTED_PPG, NEUTRAL_FORM, ODDS_SENTINEL,
    PredictionHistory, SOFTMAX_SCALE, TeamAnalysis, TeamProgression, Trend, round_to,
};
pub use random::{RandomSource, RngSource};
pub use schedule::{DOUBLE_ROUND_ROBIN, ScheduleGenerator, ScheduledFixture};
pub use simulator::{
    ExpectedGoals, FixtureResolution, MAX_EXPECTED_GOALS, MAX_GOALS_PER_SIDE, MIN_EXPECTED_GOALS,
    MatchOutcomeSimulator, SimulatedMatch, poisson_goals,
};
pub use standings::{StandingKey, build_table, rank_by};
pub use tracker::{SeasonStatistics, TeamStatisticsTracker, incremental_mean};
