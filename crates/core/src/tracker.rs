// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::LeagueConfig;
use crate::error::CoreError;
use crate::standings::build_table;
use league_sim_domain::{
    DomainError, Form, FormResult, Goals, LeagueTableEntry, MatchResult, SideStatistics, TeamName,
    TeamStatistics,
};

/// Aggregate state of one season-analysis pass.
///
/// Holds each team's running statistics in the order teams were attached,
/// plus the ordered log of every recorded result. Nothing here is shared
/// across passes; callers own it and discard or persist it explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonStatistics {
    teams: Vec<TeamStatistics>,
    results: Vec<MatchResult>,
}

impl SeasonStatistics {
    /// Creates an empty state with no teams.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            teams: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Attaches a team with zeroed statistics.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateTeam` if the team is already attached.
    pub fn attach_team(&mut self, statistics: TeamStatistics) -> Result<(), DomainError> {
        if self.index_of(&statistics.team).is_some() {
            return Err(DomainError::DuplicateTeam(statistics.team.to_string()));
        }
        self.teams.push(statistics);
        Ok(())
    }

    /// Returns the statistics of one team.
    #[must_use]
    pub fn statistics(&self, team: &TeamName) -> Option<&TeamStatistics> {
        self.teams.iter().find(|stats| &stats.team == team)
    }

    /// Returns every team's statistics in attachment order.
    #[must_use]
    pub fn all_statistics(&self) -> &[TeamStatistics] {
        &self.teams
    }

    /// Returns every recorded result in the order it was recorded.
    #[must_use]
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// Returns the ranked league table.
    #[must_use]
    pub fn league_table(&self) -> Vec<LeagueTableEntry> {
        build_table(&self.teams)
    }

    /// Returns up to `count` of the team's most recent results, oldest first.
    #[must_use]
    pub fn recent_results(&self, team: &TeamName, count: usize) -> Vec<&MatchResult> {
        let involved: Vec<&MatchResult> =
            self.results.iter().filter(|r| r.involves(team)).collect();
        let skip: usize = involved.len().saturating_sub(count);
        involved.into_iter().skip(skip).collect()
    }

    fn index_of(&self, team: &TeamName) -> Option<usize> {
        self.teams.iter().position(|stats| &stats.team == team)
    }

    fn require(&self, team: &TeamName) -> Result<usize, DomainError> {
        self.index_of(team)
            .ok_or_else(|| DomainError::TeamNotFound(team.to_string()))
    }
}

/// Folds results into a [`SeasonStatistics`] and smooths strength ratings.
#[derive(Debug, Clone)]
pub struct TeamStatisticsTracker {
    learning_rate: f64,
    strength_window: usize,
    form_length: usize,
    initial_strength: f64,
}

impl TeamStatisticsTracker {
    /// Creates a tracker from the engine configuration.
    #[must_use]
    pub const fn new(config: &LeagueConfig) -> Self {
        Self {
            learning_rate: config.learning_rate,
            strength_window: config.strength_window,
            form_length: config.form_length,
            initial_strength: config.initial_strength,
        }
    }

    /// Returns the smoothing learning rate.
    #[must_use]
    pub const fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Creates a state for the given teams, all at the initial strength.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateTeam` if a team appears twice.
    pub fn start_season<'a, I>(&self, teams: I) -> Result<SeasonStatistics, CoreError>
    where
        I: IntoIterator<Item = &'a TeamName>,
    {
        let mut state: SeasonStatistics = SeasonStatistics::new();
        for team in teams {
            state.attach_team(self.fresh_statistics(team.clone()))?;
        }
        Ok(state)
    }

    /// Creates zeroed statistics at the initial strength.
    #[must_use]
    pub fn fresh_statistics(&self, team: TeamName) -> TeamStatistics {
        TeamStatistics::new(
            team,
            self.initial_strength,
            self.initial_strength,
            self.form_length,
        )
    }

    /// Folds one result into both teams' statistics.
    ///
    /// Strengths are not touched; see [`Self::update_strengths`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TeamNotFound` if either team is not attached.
    /// The state is unchanged on error.
    pub fn record_match(
        &self,
        state: &mut SeasonStatistics,
        result: MatchResult,
    ) -> Result<(), CoreError> {
        let home: usize = state.require(&result.home_team)?;
        let away: usize = state.require(&result.away_team)?;

        fold_result(
            &mut state.teams[home],
            result.home_goals,
            result.away_goals,
            result.statistics.home(),
        );
        fold_result(
            &mut state.teams[away],
            result.away_goals,
            result.home_goals,
            result.statistics.away(),
        );
        state.results.push(result);
        Ok(())
    }

    /// Records a result, then smooths every team's ratings.
    ///
    /// # Errors
    ///
    /// Same as [`Self::record_match`].
    pub fn record_and_smooth(
        &self,
        state: &mut SeasonStatistics,
        result: MatchResult,
    ) -> Result<(), CoreError> {
        self.record_match(state, result)?;
        self.update_strengths(state);
        Ok(())
    }

    /// Exactly undoes a previously recorded result.
    ///
    /// The most recent logged result between `home` and `away` is removed.
    /// Counters are decremented, running averages are refolded from the
    /// remaining log and both teams' form is rebuilt from it. Strength
    /// ratings are left as they are.
    ///
    /// # Returns
    ///
    /// The result that was removed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MatchNotRecorded` if no such result was logged,
    /// or `DomainError::AggregateUnderflow` if the aggregates are
    /// inconsistent with the log. The state is unchanged on error.
    pub fn revert_match(
        &self,
        state: &mut SeasonStatistics,
        home: &TeamName,
        away: &TeamName,
    ) -> Result<MatchResult, CoreError> {
        let home_index: usize = state.require(home)?;
        let away_index: usize = state.require(away)?;
        let log_index: usize = state
            .results
            .iter()
            .rposition(|r| &r.home_team == home && &r.away_team == away)
            .ok_or_else(|| DomainError::MatchNotRecorded {
                home: home.to_string(),
                away: away.to_string(),
            })?;

        let removed: MatchResult = state.results[log_index].clone();
        let mut remaining: Vec<MatchResult> = state.results.clone();
        remaining.remove(log_index);

        let new_home: TeamStatistics = self.unfold_result(
            &state.teams[home_index],
            removed.home_goals,
            removed.away_goals,
            &remaining,
        )?;
        let new_away: TeamStatistics = self.unfold_result(
            &state.teams[away_index],
            removed.away_goals,
            removed.home_goals,
            &remaining,
        )?;

        state.teams[home_index] = new_home;
        state.teams[away_index] = new_away;
        state.results = remaining;
        Ok(removed)
    }

    /// Replaces a recorded result with a corrected one.
    ///
    /// The old contribution is fully reverted before the new one is
    /// recorded and ratings are smoothed.
    ///
    /// # Errors
    ///
    /// Returns an error if the old result cannot be reverted or the new
    /// result names different teams. The state is unchanged on error.
    pub fn correct_match(
        &self,
        state: &mut SeasonStatistics,
        corrected: MatchResult,
    ) -> Result<MatchResult, CoreError> {
        let home: TeamName = corrected.home_team.clone();
        let away: TeamName = corrected.away_team.clone();
        let mut working: SeasonStatistics = state.clone();
        let previous: MatchResult = self.revert_match(&mut working, &home, &away)?;
        self.record_and_smooth(&mut working, corrected)?;
        *state = working;
        Ok(previous)
    }

    /// Smooths every team's attack and defense ratings.
    ///
    /// Each rating moves towards the team's performance over its last
    /// `strength_window` matches by `learning_rate`, then is clamped into
    /// `[0.1, 3.0]`. Teams that have not played are unchanged.
    pub fn update_strengths(&self, state: &mut SeasonStatistics) {
        let updates: Vec<Option<(f64, f64)>> = state
            .teams
            .iter()
            .map(|stats| self.smoothed_strengths(state, stats))
            .collect();

        for (stats, update) in state.teams.iter_mut().zip(updates) {
            if let Some((attack, defense)) = update {
                stats.attack_strength = attack;
                stats.defense_strength = defense;
            }
        }
    }

    fn smoothed_strengths(
        &self,
        state: &SeasonStatistics,
        stats: &TeamStatistics,
    ) -> Option<(f64, f64)> {
        let recent: Vec<&MatchResult> = state.recent_results(&stats.team, self.strength_window);
        if recent.is_empty() {
            return None;
        }

        let mut attack_total: f64 = 0.0;
        let mut defense_total: f64 = 0.0;
        for result in &recent {
            let scored: u32 = result.goals_for(&stats.team).map_or(0, Goals::value);
            let conceded: u32 = result.goals_against(&stats.team).map_or(0, Goals::value);
            attack_total += f64::from(scored);
            defense_total += f64::from(3_u32.saturating_sub(conceded));
        }
        let count: f64 = f64::from(u32::try_from(recent.len()).unwrap_or(u32::MAX));

        Some((
            self.smooth(stats.attack_strength, attack_total / count),
            self.smooth(stats.defense_strength, defense_total / count),
        ))
    }

    fn smooth(&self, current: f64, performance: f64) -> f64 {
        let smoothed: f64 =
            (1.0 - self.learning_rate).mul_add(current, self.learning_rate * performance);
        smoothed.clamp(0.1, 3.0)
    }

    fn unfold_result(
        &self,
        stats: &TeamStatistics,
        goals_for: Goals,
        goals_against: Goals,
        remaining: &[MatchResult],
    ) -> Result<TeamStatistics, CoreError> {
        let team: String = stats.team.to_string();
        let underflow = |field: &'static str| DomainError::AggregateUnderflow {
            team: team.clone(),
            field,
        };
        let result: FormResult = FormResult::from_goals(goals_for, goals_against);

        let mut reverted: TeamStatistics = stats.clone();
        reverted.games_played = stats
            .games_played
            .checked_sub(1)
            .ok_or_else(|| underflow("games_played"))?;
        match result {
            FormResult::Win => {
                reverted.won = stats.won.checked_sub(1).ok_or_else(|| underflow("won"))?;
            }
            FormResult::Draw => {
                reverted.drawn = stats.drawn.checked_sub(1).ok_or_else(|| underflow("drawn"))?;
            }
            FormResult::Loss => {
                reverted.lost = stats.lost.checked_sub(1).ok_or_else(|| underflow("lost"))?;
            }
        }
        reverted.points = stats
            .points
            .checked_sub(result.points())
            .ok_or_else(|| underflow("points"))?;
        reverted.goals_scored = stats
            .goals_scored
            .checked_sub(goals_for)
            .ok_or_else(|| underflow("goals_scored"))?;
        reverted.goals_conceded = stats
            .goals_conceded
            .checked_sub(goals_against)
            .ok_or_else(|| underflow("goals_conceded"))?;

        // Refold averages and form in log order so the result is identical
        // to the match never having been recorded.
        reverted.shots_per_game = 0.0;
        reverted.shots_on_target_per_game = 0.0;
        reverted.average_possession = 0.0;
        let mut form: Form = Form::new(self.form_length);
        let mut count: u32 = 0;
        for logged in remaining.iter().filter(|r| r.involves(&stats.team)) {
            let (side, scored, conceded): (&SideStatistics, Goals, Goals) =
                if logged.home_team == stats.team {
                    (logged.statistics.home(), logged.home_goals, logged.away_goals)
                } else {
                    (logged.statistics.away(), logged.away_goals, logged.home_goals)
                };
            fold_averages(&mut reverted, side, count);
            form.push(FormResult::from_goals(scored, conceded));
            count += 1;
        }
        reverted.form = form;
        Ok(reverted)
    }
}

fn fold_result(
    stats: &mut TeamStatistics,
    goals_for: Goals,
    goals_against: Goals,
    side: &SideStatistics,
) {
    let result: FormResult = FormResult::from_goals(goals_for, goals_against);
    // averages use the pre-match count
    fold_averages(stats, side, stats.games_played);
    stats.games_played += 1;
    match result {
        FormResult::Win => stats.won += 1,
        FormResult::Draw => stats.drawn += 1,
        FormResult::Loss => stats.lost += 1,
    }
    stats.points += result.points();
    stats.goals_scored += goals_for;
    stats.goals_conceded += goals_against;
    stats.form.push(result);
}

fn fold_averages(stats: &mut TeamStatistics, side: &SideStatistics, previous_count: u32) {
    stats.shots_per_game =
        incremental_mean(stats.shots_per_game, f64::from(side.shots), previous_count);
    stats.shots_on_target_per_game = incremental_mean(
        stats.shots_on_target_per_game,
        f64::from(side.shots_on_target),
        previous_count,
    );
    stats.average_possession = incremental_mean(
        stats.average_possession,
        f64::from(side.possession),
        previous_count,
    );
}

/// `(average * previous_count + value) / (previous_count + 1)`.
#[must_use]
pub fn incremental_mean(average: f64, value: f64, previous_count: u32) -> f64 {
    let previous: f64 = f64::from(previous_count);
    average.mul_add(previous, value) / (previous + 1.0)
}
