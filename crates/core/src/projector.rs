// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::LeagueConfig;
use crate::standings::build_table;
use league_sim_domain::{LeagueTableEntry, PredictionSnapshot, Probability, TeamName, TeamStatistics};
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};
use time::OffsetDateTime;

/// Fixed scale applied to normalized projections before exponentiation.
pub const SOFTMAX_SCALE: f64 = 3.0;
/// Odds displayed for a team with zero probability.
pub const ODDS_SENTINEL: f64 = 999.0;
/// Points-per-game assumed before a team has played.
pub const NEUTRAL_FORM: f64 = 1.5;
/// Bounds on the projected points-per-game.
pub const MIN_EXPECTED_PPG: f64 = 0.3;
/// Upper bound on the projected points-per-game.
pub const MAX_EXPECTED_PPG: f64 = 2.7;

/// Direction of a team's probability since the first snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// At least 10% above the first snapshot.
    Rising,
    /// At least 10% below the first snapshot.
    Falling,
    /// Neither.
    Stable,
}

impl Trend {
    /// Classifies the move from `first` to `latest`.
    ///
    /// Rising when `latest >= 1.1 * first`, falling when
    /// `latest <= 0.9 * first`. An unchanged value is always stable, which
    /// keeps a team stuck at zero from reading as rising.
    #[must_use]
    pub fn classify(first: f64, latest: f64) -> Self {
        if latest > first && latest >= first * 1.1 {
            Self::Rising
        } else if latest < first && latest <= first * 0.9 {
            Self::Falling
        } else {
            Self::Stable
        }
    }

    /// Returns the lowercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A capped timeline of probability snapshots, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionHistory {
    limit: usize,
    snapshots: VecDeque<PredictionSnapshot>,
}

impl PredictionHistory {
    /// Creates an empty timeline holding at most `limit` snapshots.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            snapshots: VecDeque::with_capacity(limit),
        }
    }

    /// Rebuilds a timeline from stored snapshots, keeping the newest `limit`.
    #[must_use]
    pub fn from_snapshots<I>(limit: usize, snapshots: I) -> Self
    where
        I: IntoIterator<Item = PredictionSnapshot>,
    {
        let mut history: Self = Self::new(limit);
        for snapshot in snapshots {
            history.push(snapshot);
        }
        history
    }

    /// Appends a snapshot, evicting the oldest beyond the limit.
    pub fn push(&mut self, snapshot: PredictionSnapshot) {
        if self.limit == 0 {
            return;
        }
        while self.snapshots.len() >= self.limit {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &PredictionSnapshot> {
        self.snapshots.iter()
    }

    /// Returns the number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns whether the timeline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the oldest snapshot.
    #[must_use]
    pub fn first(&self) -> Option<&PredictionSnapshot> {
        self.snapshots.front()
    }

    /// Returns the newest snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<&PredictionSnapshot> {
        self.snapshots.back()
    }
}

/// Per-team detail of a championship projection.
///
/// Percentages and ratings are rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamAnalysis {
    /// The team.
    pub team: TeamName,
    /// Position in the current league table.
    pub current_position: usize,
    /// Points so far.
    pub current_points: u32,
    /// Matches played.
    pub matches_played: u32,
    /// Matches left.
    pub remaining_matches: u32,
    /// Goals for minus goals against.
    pub goal_difference: i64,
    /// Attack rating, two decimals.
    pub attack_strength: f64,
    /// Defense rating, two decimals.
    pub defense_strength: f64,
    /// Points per game, two decimals.
    pub current_form: f64,
    /// Probability as a percentage, one decimal.
    pub championship_probability: f64,
    /// Decimal odds, one decimal.
    pub championship_odds: f64,
    /// Projected season total, one decimal.
    pub projected_final_points: f64,
}

/// How a team's probability moved across the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamProgression {
    /// Percentage in the oldest snapshot.
    pub initial_probability: f64,
    /// Percentage in the newest snapshot.
    pub current_probability: f64,
    /// Highest percentage across the timeline.
    pub peak_probability: f64,
    /// Direction of travel.
    pub trend: Trend,
}

/// Projects final points and turns them into championship probabilities.
#[derive(Debug, Clone)]
pub struct ChampionshipProjector {
    total_weeks: u32,
    form_weight: f64,
    strength_weight: f64,
}

impl ChampionshipProjector {
    /// Creates a projector from the engine configuration.
    #[must_use]
    pub const fn new(config: &LeagueConfig) -> Self {
        Self {
            total_weeks: config.total_weeks,
            form_weight: config.form_weight,
            strength_weight: config.strength_weight,
        }
    }

    /// Matches a team has left to play.
    #[must_use]
    pub const fn remaining_matches(&self, stats: &TeamStatistics) -> u32 {
        self.total_weeks.saturating_sub(stats.games_played)
    }

    /// Projects a team's final points total.
    ///
    /// Remaining matches are valued at a blend of rating and current
    /// points-per-game, discounted by `1 - 0.1 * remaining` (never below
    /// zero).
    #[must_use]
    pub fn projected_points(&self, stats: &TeamStatistics) -> f64 {
        let current: f64 = f64::from(stats.points.value());
        let remaining: u32 = self.remaining_matches(stats);
        if remaining == 0 {
            return current;
        }

        let overall_strength: f64 = f64::midpoint(stats.attack_strength, stats.defense_strength);
        let current_form: f64 = stats.points_per_game().unwrap_or(NEUTRAL_FORM);
        let expected_ppg: f64 = (self.strength_weight * overall_strength)
            .mul_add(1.5, self.form_weight * current_form)
            .clamp(MIN_EXPECTED_PPG, MAX_EXPECTED_PPG);
        let remaining: f64 = f64::from(remaining);
        let confidence: f64 = 0.1f64.mul_add(-remaining, 1.0).max(0.0);

        (remaining * expected_ppg).mul_add(confidence, current)
    }

    /// Converts projections into probabilities that sum to one.
    ///
    /// An empty input yields an empty map. When every projection is zero the
    /// result is uniform.
    #[must_use]
    pub fn project_probabilities(
        &self,
        statistics: &[TeamStatistics],
    ) -> BTreeMap<TeamName, Probability> {
        let projections: Vec<(&TeamName, f64)> = statistics
            .iter()
            .map(|stats| (&stats.team, self.projected_points(stats)))
            .collect();
        normalize(&projections)
    }

    /// Decimal odds per team.
    #[must_use]
    pub fn championship_odds(&self, statistics: &[TeamStatistics]) -> BTreeMap<TeamName, f64> {
        self.project_probabilities(statistics)
            .into_iter()
            .map(|(team, probability)| (team, Self::odds(probability)))
            .collect()
    }

    /// Decimal odds for a probability; [`ODDS_SENTINEL`] when it is zero.
    #[must_use]
    pub fn odds(probability: Probability) -> f64 {
        if probability.value() > 0.0 {
            1.0 / probability.value()
        } else {
            ODDS_SENTINEL
        }
    }

    /// Per-team analysis, highest probability first.
    #[must_use]
    pub fn detailed_analysis(&self, statistics: &[TeamStatistics]) -> Vec<TeamAnalysis> {
        let probabilities: BTreeMap<TeamName, Probability> =
            self.project_probabilities(statistics);
        let table: Vec<LeagueTableEntry> = build_table(statistics);

        let mut analysis: Vec<TeamAnalysis> = statistics
            .iter()
            .map(|stats| {
                let probability: Probability =
                    probabilities.get(&stats.team).copied().unwrap_or_default();
                let position: usize = table
                    .iter()
                    .find(|entry| entry.team == stats.team)
                    .map_or(table.len() + 1, |entry| entry.position);
                TeamAnalysis {
                    team: stats.team.clone(),
                    current_position: position,
                    current_points: stats.points.value(),
                    matches_played: stats.games_played,
                    remaining_matches: self.remaining_matches(stats),
                    goal_difference: stats.goal_difference(),
                    attack_strength: round_to(stats.attack_strength, 2),
                    defense_strength: round_to(stats.defense_strength, 2),
                    current_form: round_to(stats.points_per_game().unwrap_or(0.0), 2),
                    championship_probability: round_to(probability.percentage(), 1),
                    championship_odds: round_to(Self::odds(probability), 1),
                    projected_final_points: round_to(self.projected_points(stats), 1),
                }
            })
            .collect();

        analysis.sort_by(|a, b| {
            b.championship_probability
                .total_cmp(&a.championship_probability)
        });
        analysis
    }

    /// Appends the current probabilities to a timeline.
    pub fn record_snapshot(
        &self,
        history: &mut PredictionHistory,
        week: u32,
        recorded_at: OffsetDateTime,
        probabilities: BTreeMap<TeamName, Probability>,
    ) {
        history.push(PredictionSnapshot::new(week, recorded_at, probabilities));
    }

    /// Summarises how each team's probability moved across the timeline.
    ///
    /// Teams are taken from the newest snapshot. Returns an empty map for an
    /// empty timeline.
    #[must_use]
    pub fn progression_summary(
        &self,
        history: &PredictionHistory,
    ) -> BTreeMap<TeamName, TeamProgression> {
        let Some(latest) = history.latest() else {
            return BTreeMap::new();
        };

        latest
            .probabilities
            .keys()
            .filter_map(|team| {
                let series: Vec<f64> = history
                    .iter()
                    .filter_map(|snapshot| snapshot.probability_of(team))
                    .map(Probability::value)
                    .collect();
                let first: f64 = *series.first()?;
                let current: f64 = *series.last()?;
                let peak: f64 = series.iter().copied().fold(f64::MIN, f64::max);
                Some((
                    team.clone(),
                    TeamProgression {
                        initial_probability: round_to(first * 100.0, 1),
                        current_probability: round_to(current * 100.0, 1),
                        peak_probability: round_to(peak * 100.0, 1),
                        trend: Trend::classify(first, current),
                    },
                ))
            })
            .collect()
    }
}

fn normalize(projections: &[(&TeamName, f64)]) -> BTreeMap<TeamName, Probability> {
    if projections.is_empty() {
        return BTreeMap::new();
    }

    let max_points: f64 = projections
        .iter()
        .map(|(_, points)| *points)
        .fold(f64::MIN, f64::max);
    let scores: Vec<f64> = projections
        .iter()
        .map(|(_, points)| {
            let normalized: f64 = if max_points > 0.0 {
                points / max_points
            } else {
                0.0
            };
            (normalized * SOFTMAX_SCALE).exp()
        })
        .collect();
    let total: f64 = scores.iter().sum();

    projections
        .iter()
        .zip(scores)
        .map(|((team, _), score)| {
            let share: f64 = if total > 0.0 { score / total } else { 0.0 };
            ((*team).clone(), Probability::clamped(share))
        })
        .collect()
}

/// Rounds half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor: f64 = 10f64.powi(decimals);
    (value * factor).round() / factor
}
