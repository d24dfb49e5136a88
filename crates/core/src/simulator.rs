// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::LeagueConfig;
use crate::error::CoreError;
use crate::random::RandomSource;
use league_sim_domain::{
    Fixture, Goals, MatchStatistics, SideStatistics, Strength, validate_strength_for_simulation,
};
use serde::Serialize;

/// Lower bound of the Poisson mean.
pub const MIN_EXPECTED_GOALS: f64 = 0.1;
/// Upper bound of the Poisson mean.
pub const MAX_EXPECTED_GOALS: f64 = 5.0;
/// Hard cap on goals per side, bounding the sampling loop.
pub const MAX_GOALS_PER_SIDE: u32 = 10;

/// Poisson means for both sides of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpectedGoals {
    /// Home side's mean goal count.
    pub home: f64,
    /// Away side's mean goal count.
    pub away: f64,
}

/// A freshly simulated score and its statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulatedMatch {
    /// Home goals.
    pub home_goals: Goals,
    /// Away goals.
    pub away_goals: Goals,
    /// Derived match statistics.
    pub statistics: MatchStatistics,
}

/// What [`MatchOutcomeSimulator::resolve_fixture`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureResolution {
    /// The fixture already had a result; nothing was drawn.
    AlreadyPlayed {
        /// Recorded home goals.
        home_goals: Goals,
        /// Recorded away goals.
        away_goals: Goals,
        /// Recorded statistics, if any were stored.
        statistics: Option<MatchStatistics>,
    },
    /// A new result was simulated.
    Simulated(SimulatedMatch),
}

impl FixtureResolution {
    /// Returns the score regardless of how it was obtained.
    #[must_use]
    pub const fn score(&self) -> (Goals, Goals) {
        match self {
            Self::AlreadyPlayed {
                home_goals,
                away_goals,
                ..
            } => (*home_goals, *away_goals),
            Self::Simulated(simulated) => (simulated.home_goals, simulated.away_goals),
        }
    }
}

/// Produces scores and statistics from strength ratings.
///
/// Pure apart from the injected random source.
#[derive(Debug, Clone)]
pub struct MatchOutcomeSimulator {
    home_advantage: f64,
    min_possession: u32,
    max_possession: u32,
}

impl MatchOutcomeSimulator {
    /// Creates a simulator from the engine configuration.
    #[must_use]
    pub const fn new(config: &LeagueConfig) -> Self {
        Self {
            home_advantage: config.home_advantage,
            min_possession: config.min_possession,
            max_possession: config.max_possession,
        }
    }

    /// Returns the configured home advantage.
    #[must_use]
    pub const fn home_advantage(&self) -> f64 {
        self.home_advantage
    }

    /// Computes both Poisson means with the configured home advantage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStrength` for a non-positive or
    /// non-finite rating.
    pub fn expected_goals(&self, home: &Strength, away: &Strength) -> Result<ExpectedGoals, CoreError> {
        expected_goals_with(home, away, self.home_advantage)
    }

    /// Simulates a match with the configured home advantage.
    ///
    /// # Errors
    ///
    /// Returns an error if either strength is invalid.
    pub fn simulate<R: RandomSource>(
        &self,
        home: &Strength,
        away: &Strength,
        rng: &mut R,
    ) -> Result<SimulatedMatch, CoreError> {
        self.simulate_with_advantage(home, away, self.home_advantage, rng)
    }

    /// Simulates a match with an explicit home-advantage factor.
    ///
    /// # Arguments
    ///
    /// * `home` - Home side ratings
    /// * `away` - Away side ratings
    /// * `home_advantage` - Multiplier favouring the home side
    /// * `rng` - Source of randomness
    ///
    /// # Errors
    ///
    /// Returns an error if either strength or the factor is invalid.
    pub fn simulate_with_advantage<R: RandomSource>(
        &self,
        home: &Strength,
        away: &Strength,
        home_advantage: f64,
        rng: &mut R,
    ) -> Result<SimulatedMatch, CoreError> {
        let expected: ExpectedGoals = expected_goals_with(home, away, home_advantage)?;
        let home_goals: Goals = poisson_goals(expected.home, rng);
        let away_goals: Goals = poisson_goals(expected.away, rng);
        let statistics: MatchStatistics =
            self.generate_statistics(home_goals, away_goals, home.attack(), away.attack(), rng)?;
        Ok(SimulatedMatch {
            home_goals,
            away_goals,
            statistics,
        })
    }

    /// Simulates an unplayed fixture; a played one is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a simulation is needed and a strength is invalid.
    pub fn resolve_fixture<R: RandomSource>(
        &self,
        fixture: &Fixture,
        home: &Strength,
        away: &Strength,
        rng: &mut R,
    ) -> Result<FixtureResolution, CoreError> {
        if let Some((home_goals, away_goals)) = fixture.score() {
            return Ok(FixtureResolution::AlreadyPlayed {
                home_goals,
                away_goals,
                statistics: fixture.statistics,
            });
        }
        self.simulate(home, away, rng).map(FixtureResolution::Simulated)
    }

    /// Derives plausible match statistics for a known score.
    ///
    /// Shots on target never fall below the goals scored, and possession
    /// always sums to 100.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configured possession bounds exceed 100.
    pub fn generate_statistics<R: RandomSource>(
        &self,
        home_goals: Goals,
        away_goals: Goals,
        home_attack: f64,
        away_attack: f64,
        rng: &mut R,
    ) -> Result<MatchStatistics, CoreError> {
        let home_possession: u32 = self.home_possession(home_attack, away_attack, rng);
        let away_possession: u32 = 100_u32.saturating_sub(home_possession);

        let home_shots: u32 = shots(home_goals, home_possession, rng);
        let away_shots: u32 = shots(away_goals, away_possession, rng);
        let home_on_target: u32 = shots_on_target(home_shots, home_goals, rng);
        let away_on_target: u32 = shots_on_target(away_shots, away_goals, rng);

        let home: SideStatistics = SideStatistics {
            shots: home_shots,
            shots_on_target: home_on_target,
            possession: home_possession,
            corners: draw_count(rng, 2, 12),
            fouls: draw_count(rng, 8, 20),
        };
        let away: SideStatistics = SideStatistics {
            shots: away_shots,
            shots_on_target: away_on_target,
            possession: away_possession,
            corners: draw_count(rng, 2, 12),
            fouls: draw_count(rng, 8, 20),
        };
        Ok(MatchStatistics::new(home, away)?)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn home_possession<R: RandomSource>(&self, home_attack: f64, away_attack: f64, rng: &mut R) -> u32 {
        let total: f64 = home_attack + away_attack;
        let strength_ratio: f64 = if total > 0.0 { home_attack / total } else { 0.5 };
        // base lies in [40, 60]
        let base: i32 = 20.0f64.mul_add(strength_ratio, 40.0).round() as i32;
        let jittered: i32 = base + rng.int_in(-10, 10);
        let min: i32 = i32::try_from(self.min_possession).unwrap_or(0);
        let max: i32 = i32::try_from(self.max_possession).unwrap_or(100).min(100);
        jittered.clamp(min, max.max(min)) as u32
    }
}

/// Draws a goal count from a Poisson distribution by inverse-CDF sampling.
///
/// The mean is clamped to `[MIN_EXPECTED_GOALS, MAX_EXPECTED_GOALS]` and the
/// result never exceeds [`MAX_GOALS_PER_SIDE`].
pub fn poisson_goals<R: RandomSource>(expected_goals: f64, rng: &mut R) -> Goals {
    let lambda: f64 = expected_goals.clamp(MIN_EXPECTED_GOALS, MAX_EXPECTED_GOALS);
    let mut goals: u32 = 0;
    let mut probability: f64 = (-lambda).exp();
    let mut cumulative: f64 = probability;
    let draw: f64 = rng.uniform();

    while draw > cumulative && goals < MAX_GOALS_PER_SIDE {
        goals += 1;
        probability *= lambda / f64::from(goals);
        cumulative += probability;
    }
    Goals::new(goals)
}

fn expected_goals_with(
    home: &Strength,
    away: &Strength,
    home_advantage: f64,
) -> Result<ExpectedGoals, CoreError> {
    validate_strength_for_simulation(home)?;
    validate_strength_for_simulation(away)?;
    if !home_advantage.is_finite() || home_advantage <= 0.0 {
        return Err(CoreError::InvalidConfiguration {
            parameter: "home_advantage",
            reason: format!("must be finite and positive, got {home_advantage}"),
        });
    }
    Ok(ExpectedGoals {
        home: (home.attack() * home_advantage) / away.defense(),
        away: away.attack() / (home.defense() * home_advantage),
    })
}

fn draw_count<R: RandomSource>(rng: &mut R, low: i32, high: i32) -> u32 {
    u32::try_from(rng.int_in(low, high)).unwrap_or(0)
}

fn shots<R: RandomSource>(goals: Goals, possession: u32, rng: &mut R) -> u32 {
    let raw: u32 = goals.value() * 3 + draw_count(rng, 3, 8) + possession / 10;
    raw.max(5)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn shots_on_target<R: RandomSource>(shots: u32, goals: Goals, rng: &mut R) -> u32 {
    let fraction: f64 = 0.3 + f64::from(rng.int_in(0, 20)) / 100.0;
    let on_target: u32 = (f64::from(shots) * fraction).floor() as u32;
    on_target.max(1).max(goals.value())
}
