// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every state-changing handler runs inside a single store transaction, so
//! a failure part-way through leaves the season exactly as it was.

use league_sim::{
    ChampionshipProjector, FixtureResolution, LeagueConfig, MatchOutcomeSimulator,
    PredictionHistory, RandomSource, ScheduleGenerator, ScheduledFixture, SeasonStatistics,
    TeamAnalysis, TeamProgression, TeamStatisticsTracker, round_to,
};
use league_sim_domain::{
    DomainError, Fixture, Form, FormResult, Goals, MatchResult, MatchStatistics,
    PredictionSnapshot, Probability, Season, SeasonStatus, SideStatistics, Team, TeamName,
    TeamSeason, TeamStatistics, validate_goals, validate_week,
};
use league_sim_persistence::{LeagueRead, LeagueStore};
use num_traits::cast::ToPrimitive;
use std::collections::{BTreeMap, BTreeSet};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CreateSeasonRequest, CreateSeasonResponse, GenerateFixturesResponse, HistoryEntry,
    ListTeamsResponse, MatchInfo, PlayWeekResponse, PredictionsResponse, ProbabilitiesResponse,
    SeasonAnalysis, SeasonInfo, SeasonPhase, SimulateAllResponse, StandingRow, StandingsResponse,
    TeamInfo, TeamPrediction, TeamProbability, UpdateMatchRequest, WeekMatches,
};

/// Weeks before which a season counts as early.
const EARLY_SEASON_WEEKS: u32 = 4;

/// Leader percentage above which the title has a clear favorite.
const CLEAR_FAVORITE_PERCENTAGE: f64 = 60.0;

/// Gap in percentage points under which the title race is close.
const CLOSE_RACE_MARGIN: f64 = 10.0;

/// Lists every stored team.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_teams<S: LeagueRead>(store: &S) -> Result<ListTeamsResponse, ApiError> {
    let teams: Vec<TeamInfo> = store
        .list_teams()?
        .iter()
        .filter_map(|team| team.team_id().map(|team_id| TeamInfo::from_team(team_id, team)))
        .collect();
    Ok(ListTeamsResponse { teams })
}

/// Returns a single team.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown team.
pub fn get_team<S: LeagueRead>(store: &S, team_id: i64) -> Result<TeamInfo, ApiError> {
    let team: Team = store.find_team(team_id)?;
    Ok(TeamInfo::from_team(team_id, &team))
}

/// Lists every season.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_seasons<S: LeagueRead>(store: &S) -> Result<Vec<SeasonInfo>, ApiError> {
    Ok(store.list_seasons()?.iter().map(SeasonInfo::from).collect())
}

/// Returns a single season.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown season.
pub fn get_season<S: LeagueRead>(store: &S, season_id: i64) -> Result<SeasonInfo, ApiError> {
    Ok(SeasonInfo::from(&store.find_season(season_id)?))
}

/// Creates a pending season with its teams and full fixture list.
///
/// The first `required_team_count` teams take part, in identifier order,
/// each starting from a uniform championship probability.
///
/// # Arguments
///
/// * `store` - The league store
/// * `config` - Engine configuration
/// * `request` - The season to create
///
/// # Errors
///
/// Returns an error if:
/// - The configuration does not fit the schedule
/// - Fewer teams exist than the season requires
/// - The season name is invalid or already taken
pub fn create_season<S: LeagueStore>(
    store: &mut S,
    config: &LeagueConfig,
    request: &CreateSeasonRequest,
) -> Result<CreateSeasonResponse, ApiError> {
    config.validate().map_err(translate_core_error)?;
    store.transaction(|tx: &mut S| -> Result<CreateSeasonResponse, ApiError> {
        let teams: Vec<Team> = tx.list_teams()?;
        if teams.len() < config.required_team_count {
            return Err(translate_domain_error(DomainError::InsufficientTeams {
                required: config.required_team_count,
                available: teams.len(),
            }));
        }
        let selected: Vec<Team> = teams
            .into_iter()
            .take(config.required_team_count)
            .collect();

        let season: Season = tx.create_season(&request.name, config.total_weeks)?;
        let probability: Probability = uniform_probability(selected.len());

        let mut participants: Vec<TeamInfo> = Vec::with_capacity(selected.len());
        let mut team_ids: Vec<i64> = Vec::with_capacity(selected.len());
        for team in &selected {
            let team_id: i64 = team.team_id().ok_or_else(|| ApiError::Internal {
                message: format!("Team {} has no identifier", team.name()),
            })?;
            tx.attach_team(season.season_id, team_id, probability, config.form_length)?;
            participants.push(TeamInfo::from_team(team_id, team));
            team_ids.push(team_id);
        }

        let schedule: Vec<ScheduledFixture<i64>> = ScheduleGenerator
            .generate(&team_ids)
            .map_err(translate_core_error)?;
        for scheduled in &schedule {
            tx.insert_fixture(season.season_id, scheduled.week, scheduled.home, scheduled.away)?;
        }

        info!(
            season_id = season.season_id,
            name = %season.name,
            teams = participants.len(),
            fixtures = schedule.len(),
            "Created season"
        );

        Ok(CreateSeasonResponse {
            season: SeasonInfo::from(&season),
            teams: participants,
            fixtures_created: schedule.len(),
            message: format!("Season '{}' created", season.name),
        })
    })
}

/// Moves a pending season to active.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` unless the season is pending.
pub fn start_season<S: LeagueStore>(store: &mut S, season_id: i64) -> Result<SeasonInfo, ApiError> {
    store.transaction(|tx: &mut S| -> Result<SeasonInfo, ApiError> {
        let mut season: Season = tx.find_season(season_id)?;
        season
            .transition_to(SeasonStatus::Active)
            .map_err(translate_domain_error)?;
        tx.save_season(&season)?;
        info!(season_id, name = %season.name, "Started season");
        Ok(SeasonInfo::from(&season))
    })
}

/// Inserts any fixtures of the full schedule the season does not hold yet.
///
/// Running it twice never duplicates a (home, away) pairing.
///
/// # Errors
///
/// Returns an error if:
/// - The season does not exist or is completed
/// - The season does not have exactly four teams
pub fn generate_fixtures<S: LeagueStore>(
    store: &mut S,
    season_id: i64,
) -> Result<GenerateFixturesResponse, ApiError> {
    store.transaction(|tx: &mut S| -> Result<GenerateFixturesResponse, ApiError> {
        let season: Season = tx.find_season(season_id)?;
        if season.status == SeasonStatus::Completed {
            return Err(translate_domain_error(DomainError::SeasonAlreadyCompleted(
                season.name,
            )));
        }

        let team_ids: Vec<i64> = slot_order(tx, season_id)?;
        let schedule: Vec<ScheduledFixture<i64>> = ScheduleGenerator
            .generate(&team_ids)
            .map_err(translate_core_error)?;
        let existing: BTreeSet<(i64, i64)> = tx
            .list_fixtures(season_id)?
            .iter()
            .map(|fixture| (fixture.home_team_id, fixture.away_team_id))
            .collect();

        let mut created: usize = 0;
        for scheduled in schedule
            .iter()
            .filter(|scheduled| !existing.contains(&(scheduled.home, scheduled.away)))
        {
            tx.insert_fixture(season_id, scheduled.week, scheduled.home, scheduled.away)?;
            created += 1;
        }
        let total: usize = tx.list_fixtures(season_id)?.len();

        info!(season_id, created, total, "Generated fixtures");
        Ok(GenerateFixturesResponse {
            season_id,
            created,
            total,
        })
    })
}

/// Returns a week's fixtures, creating them from the schedule if the week
/// has none yet.
///
/// # Errors
///
/// Returns an error if:
/// - The week lies outside the season
/// - The season does not have exactly four teams
/// - A pairing of the week already exists in another week
pub fn generate_week_fixtures<S: LeagueStore>(
    store: &mut S,
    season_id: i64,
    week: u32,
) -> Result<WeekMatches, ApiError> {
    store.transaction(|tx: &mut S| -> Result<WeekMatches, ApiError> {
        let season: Season = tx.find_season(season_id)?;
        validate_week(week, season.total_weeks).map_err(translate_domain_error)?;

        let mut fixtures: Vec<Fixture> = tx.list_fixtures_for_week(season_id, week)?;
        if fixtures.is_empty() {
            let team_ids: Vec<i64> = slot_order(tx, season_id)?;
            let pairings: Vec<ScheduledFixture<i64>> = ScheduleGenerator
                .week(&team_ids, week)
                .map_err(translate_core_error)?;
            for scheduled in &pairings {
                fixtures.push(tx.insert_fixture(
                    season_id,
                    scheduled.week,
                    scheduled.home,
                    scheduled.away,
                )?);
            }
            info!(season_id, week, created = fixtures.len(), "Generated week fixtures");
        }

        let names: BTreeMap<i64, String> = team_names(tx)?;
        Ok(WeekMatches {
            week,
            matches: match_infos(&fixtures, &names)?,
        })
    })
}

/// Lists a season's fixtures grouped by week.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown season.
pub fn list_matches_by_week<S: LeagueRead>(
    store: &S,
    season_id: i64,
) -> Result<Vec<WeekMatches>, ApiError> {
    let names: BTreeMap<i64, String> = team_names(store)?;
    let mut weeks: BTreeMap<u32, Vec<MatchInfo>> = BTreeMap::new();
    for fixture in store.list_fixtures(season_id)? {
        weeks
            .entry(fixture.week)
            .or_default()
            .push(match_info(&fixture, &names)?);
    }
    Ok(weeks
        .into_iter()
        .map(|(week, matches)| WeekMatches { week, matches })
        .collect())
}

/// Returns the fixtures of one week.
///
/// # Errors
///
/// Returns an error if the season does not exist or the week lies
/// outside it.
pub fn get_week_matches<S: LeagueRead>(
    store: &S,
    season_id: i64,
    week: u32,
) -> Result<WeekMatches, ApiError> {
    let season: Season = store.find_season(season_id)?;
    validate_week(week, season.total_weeks).map_err(translate_domain_error)?;
    let names: BTreeMap<i64, String> = team_names(store)?;
    let fixtures: Vec<Fixture> = store.list_fixtures_for_week(season_id, week)?;
    Ok(WeekMatches {
        week,
        matches: match_infos(&fixtures, &names)?,
    })
}

/// Plays the unplayed fixtures of the next week.
///
/// Results are folded into the team-season aggregates, the week advances
/// (completing the season after the last one) and championship
/// probabilities are refreshed.
///
/// # Arguments
///
/// * `store` - The league store
/// * `config` - Engine configuration
/// * `rng` - Source of randomness for the simulations
/// * `season_id` - The season to advance
///
/// # Errors
///
/// Returns an error if:
/// - The season is not active, or is already completed
/// - The next week has no unplayed fixtures
pub fn play_next_week<S: LeagueStore, R: RandomSource>(
    store: &mut S,
    config: &LeagueConfig,
    rng: &mut R,
    season_id: i64,
) -> Result<PlayWeekResponse, ApiError> {
    store.transaction(|tx: &mut S| -> Result<PlayWeekResponse, ApiError> {
        let mut season: Season = tx.find_season(season_id)?;
        require_active(&season)?;

        let week: u32 = season.current_week + 1;
        let pending: Vec<Fixture> = tx
            .list_fixtures_for_week(season_id, week)?
            .into_iter()
            .filter(|fixture| !fixture.is_played())
            .collect();
        if pending.is_empty() {
            return Err(translate_domain_error(DomainError::NoMatchesForWeek { week }));
        }

        let simulator: MatchOutcomeSimulator = MatchOutcomeSimulator::new(config);
        let played_at: OffsetDateTime = OffsetDateTime::now_utc();
        for fixture in &pending {
            play_fixture(tx, &simulator, fixture, rng, played_at)?;
        }

        season.advance_week();
        tx.save_season(&season)?;
        update_probabilities(tx, config, &season)?;

        info!(
            season_id,
            week,
            matches = pending.len(),
            status = %season.status,
            "Played week"
        );

        let names: BTreeMap<i64, String> = team_names(tx)?;
        let fixtures: Vec<Fixture> = tx.list_fixtures_for_week(season_id, week)?;
        Ok(PlayWeekResponse {
            week,
            matches: match_infos(&fixtures, &names)?,
            season: SeasonInfo::from(&season),
            standings: standing_rows(tx, season_id)?,
        })
    })
}

/// Plays every remaining fixture in week order and completes the season.
///
/// # Errors
///
/// Returns an error if:
/// - The season is not active, or is already completed
/// - No unplayed fixtures remain
pub fn simulate_all<S: LeagueStore, R: RandomSource>(
    store: &mut S,
    config: &LeagueConfig,
    rng: &mut R,
    season_id: i64,
) -> Result<SimulateAllResponse, ApiError> {
    store.transaction(|tx: &mut S| -> Result<SimulateAllResponse, ApiError> {
        let mut season: Season = tx.find_season(season_id)?;
        require_active(&season)?;

        let pending: Vec<Fixture> = tx
            .list_fixtures(season_id)?
            .into_iter()
            .filter(|fixture| !fixture.is_played())
            .collect();
        if pending.is_empty() {
            return Err(translate_domain_error(DomainError::NoMatchesForWeek {
                week: season.current_week + 1,
            }));
        }

        let simulator: MatchOutcomeSimulator = MatchOutcomeSimulator::new(config);
        let played_at: OffsetDateTime = OffsetDateTime::now_utc();
        for fixture in &pending {
            play_fixture(tx, &simulator, fixture, rng, played_at)?;
        }

        season.current_week = season.total_weeks;
        season
            .transition_to(SeasonStatus::Completed)
            .map_err(translate_domain_error)?;
        tx.save_season(&season)?;
        update_probabilities(tx, config, &season)?;

        info!(
            season_id,
            matches = pending.len(),
            "Simulated remaining season"
        );

        Ok(SimulateAllResponse {
            matches_simulated: pending.len(),
            season: SeasonInfo::from(&season),
            standings: standing_rows(tx, season_id)?,
        })
    })
}

/// Corrects the score of a fixture.
///
/// A previously recorded result is reverted from both aggregates before
/// the new score is applied. Both teams' form is rebuilt from the
/// season's results in play order. The fixture keeps its place in that
/// order.
///
/// # Arguments
///
/// * `store` - The league store
/// * `config` - Engine configuration
/// * `rng` - Used only to derive statistics when the request has none
/// * `fixture_id` - The fixture to correct
/// * `request` - The corrected score and optional statistics
///
/// # Errors
///
/// Returns an error if:
/// - The score exceeds the configured maximum
/// - The fixture does not exist
/// - The season is completed
pub fn update_match<S: LeagueStore, R: RandomSource>(
    store: &mut S,
    config: &LeagueConfig,
    rng: &mut R,
    fixture_id: i64,
    request: &UpdateMatchRequest,
) -> Result<MatchInfo, ApiError> {
    validate_goals(
        request.home_goals,
        request.away_goals,
        config.max_goals_per_match,
    )
    .map_err(translate_domain_error)?;

    store.transaction(|tx: &mut S| -> Result<MatchInfo, ApiError> {
        let fixture: Fixture = tx.find_fixture(fixture_id)?;
        let season: Season = tx.find_season(fixture.season_id)?;
        if season.status == SeasonStatus::Completed {
            return Err(translate_domain_error(DomainError::MatchEditForbidden {
                fixture_id,
            }));
        }

        let home_team: Team = tx.find_team(fixture.home_team_id)?;
        let away_team: Team = tx.find_team(fixture.away_team_id)?;
        let mut home_row: TeamSeason =
            tx.find_team_season(fixture.season_id, fixture.home_team_id)?;
        let mut away_row: TeamSeason =
            tx.find_team_season(fixture.season_id, fixture.away_team_id)?;

        if let Some((old_home, old_away)) = fixture.score() {
            home_row
                .revert_result(home_team.name().as_str(), old_home, old_away)
                .map_err(translate_domain_error)?;
            away_row
                .revert_result(away_team.name().as_str(), old_away, old_home)
                .map_err(translate_domain_error)?;
        }

        let home_goals: Goals = Goals::new(request.home_goals);
        let away_goals: Goals = Goals::new(request.away_goals);
        let statistics: MatchStatistics = match request.statistics {
            Some(statistics) => statistics,
            None => MatchOutcomeSimulator::new(config)
                .generate_statistics(
                    home_goals,
                    away_goals,
                    home_team.strength().attack(),
                    away_team.strength().attack(),
                    rng,
                )
                .map_err(translate_core_error)?,
        };

        let updated: Fixture = tx.record_fixture_result(
            fixture_id,
            home_goals,
            away_goals,
            statistics,
            OffsetDateTime::now_utc(),
        )?;
        home_row.apply_result(home_goals, away_goals);
        away_row.apply_result(away_goals, home_goals);

        let played: Vec<Fixture> = played_in_order(tx, fixture.season_id)?;
        home_row.form = rebuild_form(&played, home_row.team_id, home_row.form.capacity());
        away_row.form = rebuild_form(&played, away_row.team_id, away_row.form.capacity());
        tx.save_team_season(&home_row)?;
        tx.save_team_season(&away_row)?;

        update_probabilities(tx, config, &season)?;

        info!(
            fixture_id,
            season_id = fixture.season_id,
            home = %home_team.name(),
            away = %away_team.name(),
            home_goals = request.home_goals,
            away_goals = request.away_goals,
            "Updated match result"
        );

        let names: BTreeMap<i64, String> = team_names(tx)?;
        match_info(&updated, &names)
    })
}

/// Returns a season to its initial state.
///
/// Fixtures stay in place with their results cleared. Aggregates, the
/// prediction timeline, the week counter and the status are reset.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` for a completed season.
pub fn reset_season<S: LeagueStore>(store: &mut S, season_id: i64) -> Result<SeasonInfo, ApiError> {
    store.transaction(|tx: &mut S| -> Result<SeasonInfo, ApiError> {
        let team_count: usize = tx.list_team_seasons(season_id)?.len();
        let season: Season = tx.reset_season(season_id, uniform_probability(team_count))?;
        info!(season_id, name = %season.name, "Reset season");
        Ok(SeasonInfo::from(&season))
    })
}

/// Returns the league table of a season.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown season.
pub fn get_standings<S: LeagueRead>(
    store: &S,
    season_id: i64,
) -> Result<StandingsResponse, ApiError> {
    let season: Season = store.find_season(season_id)?;
    Ok(StandingsResponse {
        season: SeasonInfo::from(&season),
        standings: standing_rows(store, season_id)?,
    })
}

/// Recomputes and stores championship probabilities.
///
/// Before any match is played nothing is recomputed and no snapshot is
/// appended; the stored probabilities are returned unchanged.
///
/// # Errors
///
/// Returns an error if the season does not exist.
pub fn refresh_probabilities<S: LeagueStore>(
    store: &mut S,
    config: &LeagueConfig,
    season_id: i64,
) -> Result<ProbabilitiesResponse, ApiError> {
    store.transaction(|tx: &mut S| -> Result<ProbabilitiesResponse, ApiError> {
        let season: Season = tx.find_season(season_id)?;
        let updated: bool = update_probabilities(tx, config, &season)?;

        let mut probabilities: Vec<TeamProbability> = season_teams(tx, season_id)?
            .into_iter()
            .map(|(team, row)| TeamProbability {
                team: team.name().to_string(),
                probability: round_to(row.championship_probability.percentage(), 2),
            })
            .collect();
        probabilities.sort_by(|a, b| b.probability.total_cmp(&a.probability));

        Ok(ProbabilitiesResponse {
            season_id,
            week: season.current_week,
            updated,
            probabilities,
        })
    })
}

/// Returns championship predictions with their history and analysis.
///
/// # Errors
///
/// Returns an error if:
/// - The season does not exist
/// - No week has been played yet
pub fn get_predictions<S: LeagueRead>(
    store: &S,
    config: &LeagueConfig,
    season_id: i64,
) -> Result<PredictionsResponse, ApiError> {
    let season: Season = store.find_season(season_id)?;
    if season.current_week == 0 {
        return Err(translate_domain_error(DomainError::NoPredictionsAvailable));
    }

    let projector: ChampionshipProjector = ChampionshipProjector::new(config);
    let mut rows: Vec<(Team, TeamSeason)> = store.standings(season_id)?;
    rows.sort_by(|(_, a), (_, b)| {
        b.championship_probability
            .value()
            .total_cmp(&a.championship_probability.value())
    });

    // Projections come from the same replay the stored probabilities were
    // built from, so a higher projection never pairs with a lower probability.
    let replay: SeasonStatistics = replay_season(store, config, season_id)?;
    let predictions: Vec<TeamPrediction> = rows
        .iter()
        .map(|(team, row)| -> Result<TeamPrediction, ApiError> {
            let stats: &TeamStatistics =
                replay
                    .statistics(team.name())
                    .ok_or_else(|| ApiError::Internal {
                        message: format!("Team {} missing from season replay", team.name()),
                    })?;
            Ok(TeamPrediction {
                team: team.name().to_string(),
                current_points: row.points.value(),
                championship_probability: round_to(row.championship_probability.percentage(), 2),
                betting_odds: round_to(ChampionshipProjector::odds(row.championship_probability), 2),
                projected_points: round_to(projector.projected_points(stats), 1),
                remaining_matches: row.remaining_matches(season.total_weeks),
                points_per_game: round_to(row.points_per_game().unwrap_or(0.0), 2),
                attack_strength: team.strength().attack(),
                defense_strength: team.strength().defense(),
                recent_form: row.form.to_string(),
            })
        })
        .collect::<Result<Vec<TeamPrediction>, ApiError>>()?;

    let snapshots: Vec<PredictionSnapshot> = store.prediction_history(season_id)?;
    let history: Vec<HistoryEntry> = snapshots.iter().map(history_entry).collect();
    let progression: BTreeMap<String, TeamProgression> = projector
        .progression_summary(&PredictionHistory::from_snapshots(
            config.history_limit,
            snapshots,
        ))
        .into_iter()
        .map(|(team, progression)| (team.to_string(), progression))
        .collect();

    let detailed_analysis: Vec<TeamAnalysis> =
        projector.detailed_analysis(replay.all_statistics());

    debug!(season_id, week = season.current_week, "Built predictions");

    Ok(PredictionsResponse {
        analysis: season_analysis(&season, &predictions),
        season: SeasonInfo::from(&season),
        predictions,
        history,
        detailed_analysis,
        progression,
    })
}

/// Simulates one fixture and folds the result into both aggregates.
///
/// An already played fixture is left untouched.
fn play_fixture<S: LeagueStore, R: RandomSource>(
    store: &mut S,
    simulator: &MatchOutcomeSimulator,
    fixture: &Fixture,
    rng: &mut R,
    played_at: OffsetDateTime,
) -> Result<(), ApiError> {
    let home: Team = store.find_team(fixture.home_team_id)?;
    let away: Team = store.find_team(fixture.away_team_id)?;
    let resolution: FixtureResolution = simulator
        .resolve_fixture(
            fixture,
            &home.strength().clamp_to_simulation_range(),
            &away.strength().clamp_to_simulation_range(),
            rng,
        )
        .map_err(translate_core_error)?;
    let FixtureResolution::Simulated(simulated) = resolution else {
        debug!(fixture_id = fixture.fixture_id, "Fixture already played");
        return Ok(());
    };

    store.record_fixture_result(
        fixture.fixture_id,
        simulated.home_goals,
        simulated.away_goals,
        simulated.statistics,
        played_at,
    )?;

    let mut home_row: TeamSeason = store.find_team_season(fixture.season_id, fixture.home_team_id)?;
    home_row.apply_result(simulated.home_goals, simulated.away_goals);
    store.save_team_season(&home_row)?;

    let mut away_row: TeamSeason = store.find_team_season(fixture.season_id, fixture.away_team_id)?;
    away_row.apply_result(simulated.away_goals, simulated.home_goals);
    store.save_team_season(&away_row)?;

    debug!(
        fixture_id = fixture.fixture_id,
        week = fixture.week,
        home = %home.name(),
        away = %away.name(),
        home_goals = simulated.home_goals.value(),
        away_goals = simulated.away_goals.value(),
        "Simulated fixture"
    );
    Ok(())
}

/// Replays the season and stores fresh probabilities plus a snapshot.
///
/// Returns `false` without writing anything when no match has been played.
fn update_probabilities<S: LeagueStore>(
    store: &mut S,
    config: &LeagueConfig,
    season: &Season,
) -> Result<bool, ApiError> {
    let replay: SeasonStatistics = replay_season(store, config, season.season_id)?;
    if replay.results().is_empty() {
        debug!(season_id = season.season_id, "No results to project from");
        return Ok(false);
    }

    let probabilities: BTreeMap<TeamName, Probability> =
        ChampionshipProjector::new(config).project_probabilities(replay.all_statistics());
    for (team, row) in season_teams(store, season.season_id)? {
        if let Some(probability) = probabilities.get(team.name()) {
            store.set_championship_probability(season.season_id, row.team_id, *probability)?;
        }
    }
    store.append_prediction(
        season.season_id,
        PredictionSnapshot::new(season.current_week, OffsetDateTime::now_utc(), probabilities),
    )?;

    debug!(
        season_id = season.season_id,
        week = season.current_week,
        "Updated championship probabilities"
    );
    Ok(true)
}

/// Rebuilds engine statistics by replaying played fixtures in play order
/// through a fresh tracker.
fn replay_season<S: LeagueRead>(
    store: &S,
    config: &LeagueConfig,
    season_id: i64,
) -> Result<SeasonStatistics, ApiError> {
    let tracker: TeamStatisticsTracker = TeamStatisticsTracker::new(config);
    let participants: Vec<(Team, TeamSeason)> = season_teams(store, season_id)?;
    let mut state: SeasonStatistics = tracker
        .start_season(participants.iter().map(|(team, _)| team.name()))
        .map_err(translate_core_error)?;
    let names: BTreeMap<i64, TeamName> = participants
        .iter()
        .map(|(team, row)| (row.team_id, team.name().clone()))
        .collect();

    for fixture in played_in_order(store, season_id)? {
        let Some((home_goals, away_goals)) = fixture.score() else {
            continue;
        };
        let statistics: MatchStatistics = match fixture.statistics {
            Some(statistics) => statistics,
            None => fallback_statistics()?,
        };
        let result: MatchResult = MatchResult {
            home_team: replay_name(&names, fixture.home_team_id)?,
            away_team: replay_name(&names, fixture.away_team_id)?,
            home_goals,
            away_goals,
            statistics,
            played_at: fixture.played_at.unwrap_or(OffsetDateTime::UNIX_EPOCH),
        };
        tracker
            .record_and_smooth(&mut state, result)
            .map_err(translate_core_error)?;
    }
    Ok(state)
}

fn replay_name(names: &BTreeMap<i64, TeamName>, team_id: i64) -> Result<TeamName, ApiError> {
    names
        .get(&team_id)
        .cloned()
        .ok_or_else(|| translate_domain_error(DomainError::TeamNotFound(team_id.to_string())))
}

/// Statistics assumed for a result stored without any.
fn fallback_statistics() -> Result<MatchStatistics, ApiError> {
    let side: SideStatistics = SideStatistics {
        shots: 10,
        shots_on_target: 5,
        possession: 50,
        ..SideStatistics::default()
    };
    MatchStatistics::new(side, side).map_err(translate_domain_error)
}

fn played_in_order<S: LeagueRead>(store: &S, season_id: i64) -> Result<Vec<Fixture>, ApiError> {
    let mut played: Vec<Fixture> = store
        .list_fixtures(season_id)?
        .into_iter()
        .filter(Fixture::is_played)
        .collect();
    played.sort_by_key(|fixture| fixture.played_order);
    Ok(played)
}

fn rebuild_form(played: &[Fixture], team_id: i64, capacity: usize) -> Form {
    Form::from_results(
        capacity,
        played.iter().filter_map(|fixture| {
            let (home_goals, away_goals) = fixture.score()?;
            if fixture.home_team_id == team_id {
                Some(FormResult::from_goals(home_goals, away_goals))
            } else if fixture.away_team_id == team_id {
                Some(FormResult::from_goals(away_goals, home_goals))
            } else {
                None
            }
        }),
    )
}

fn season_teams<S: LeagueRead>(
    store: &S,
    season_id: i64,
) -> Result<Vec<(Team, TeamSeason)>, ApiError> {
    store
        .list_team_seasons(season_id)?
        .into_iter()
        .map(|row| -> Result<(Team, TeamSeason), ApiError> {
            Ok((store.find_team(row.team_id)?, row))
        })
        .collect()
}

/// Team identifiers in schedule slot order.
fn slot_order<S: LeagueRead>(store: &S, season_id: i64) -> Result<Vec<i64>, ApiError> {
    Ok(store
        .list_team_seasons(season_id)?
        .iter()
        .map(|row| row.team_id)
        .collect())
}

fn require_active(season: &Season) -> Result<(), ApiError> {
    match season.status {
        SeasonStatus::Active => Ok(()),
        SeasonStatus::Completed => Err(translate_domain_error(
            DomainError::SeasonAlreadyCompleted(season.name.clone()),
        )),
        SeasonStatus::Pending => Err(translate_domain_error(DomainError::SeasonNotActive {
            season: season.name.clone(),
            status: season.status,
        })),
    }
}

fn uniform_probability(team_count: usize) -> Probability {
    let count: f64 = team_count.max(1).to_f64().unwrap_or(1.0);
    Probability::clamped(1.0 / count)
}

fn team_names<S: LeagueRead>(store: &S) -> Result<BTreeMap<i64, String>, ApiError> {
    Ok(store
        .list_teams()?
        .into_iter()
        .filter_map(|team| team.team_id().map(|team_id| (team_id, team.name().to_string())))
        .collect())
}

fn match_info(fixture: &Fixture, names: &BTreeMap<i64, String>) -> Result<MatchInfo, ApiError> {
    let name = |team_id: i64| -> Result<String, ApiError> {
        names.get(&team_id).cloned().ok_or_else(|| {
            translate_domain_error(DomainError::TeamNotFound(team_id.to_string()))
        })
    };
    Ok(MatchInfo {
        fixture_id: fixture.fixture_id,
        week: fixture.week,
        home_team: name(fixture.home_team_id)?,
        away_team: name(fixture.away_team_id)?,
        home_goals: fixture.home_goals.map(Goals::value),
        away_goals: fixture.away_goals.map(Goals::value),
        is_played: fixture.is_played(),
        statistics: fixture.statistics,
        played_at: fixture.played_at,
    })
}

fn match_infos(
    fixtures: &[Fixture],
    names: &BTreeMap<i64, String>,
) -> Result<Vec<MatchInfo>, ApiError> {
    fixtures
        .iter()
        .map(|fixture| match_info(fixture, names))
        .collect()
}

fn standing_rows<S: LeagueRead>(store: &S, season_id: i64) -> Result<Vec<StandingRow>, ApiError> {
    Ok(store
        .standings(season_id)?
        .into_iter()
        .enumerate()
        .map(|(index, (team, row))| StandingRow {
            position: index + 1,
            team: team.name().to_string(),
            played: row.played,
            won: row.won,
            drawn: row.drawn,
            lost: row.lost,
            goals_for: row.goals_for.value(),
            goals_against: row.goals_against.value(),
            goal_difference: row.goal_difference(),
            points: row.points.value(),
            championship_probability: round_to(row.championship_probability.percentage(), 2),
            form: row.form.to_string(),
        })
        .collect())
}

fn history_entry(snapshot: &PredictionSnapshot) -> HistoryEntry {
    HistoryEntry {
        week: snapshot.week,
        recorded_at: snapshot.recorded_at,
        probabilities: snapshot
            .probabilities
            .iter()
            .map(|(team, probability)| (team.to_string(), round_to(probability.percentage(), 2)))
            .collect(),
    }
}

/// Reads the season phase and the shape of the title race.
///
/// `predictions` must be ordered by probability, highest first.
fn season_analysis(season: &Season, predictions: &[TeamPrediction]) -> SeasonAnalysis {
    let (phase, message): (SeasonPhase, &str) = if season.current_week < EARLY_SEASON_WEEKS {
        (
            SeasonPhase::Early,
            "Early season - predictions are highly volatile",
        )
    } else if season.remaining_weeks() > 0 {
        (SeasonPhase::Mid, "Mid-season - patterns are emerging")
    } else {
        (SeasonPhase::Final, "Season complete - final standings")
    };

    let favorite: Option<String> = match predictions {
        [leader, ..] if leader.championship_probability > CLEAR_FAVORITE_PERCENTAGE => {
            Some(format!("{} is the clear favorite", leader.team))
        }
        [leader, runner_up, ..]
            if leader.championship_probability - runner_up.championship_probability
                < CLOSE_RACE_MARGIN =>
        {
            Some(String::from("Title race is very close"))
        }
        _ => None,
    };

    SeasonAnalysis {
        phase,
        message: message.to_string(),
        favorite,
    }
}
