// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of simulator output.

use league_sim::SimulatedMatch;
use league_sim_api::{MatchInfo, PlayWeekResponse, PredictionsResponse, StandingRow};
use league_sim_domain::SideStatistics;
use std::fmt::{Error, Write};

/// Renders the league table.
///
/// # Errors
///
/// Returns an error only if writing to the buffer fails.
pub fn standings_table(rows: &[StandingRow]) -> Result<String, Error> {
    let mut out: String = String::new();
    writeln!(
        out,
        "{:>3}  {:<18}{:>3}{:>3}{:>3}{:>3}{:>4}{:>4}{:>5}{:>5}{:>8}  Form",
        "Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts", "Title%"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:>3}  {:<18}{:>3}{:>3}{:>3}{:>3}{:>4}{:>4}{:>+5}{:>5}{:>8.2}  {}",
            row.position,
            row.team,
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            row.points,
            row.championship_probability,
            row.form
        )?;
    }
    Ok(out)
}

/// Renders one line per fixture, e.g. `Arsenal 2 - 1 Chelsea`.
///
/// # Errors
///
/// Returns an error only if writing to the buffer fails.
pub fn match_lines(matches: &[MatchInfo]) -> Result<String, Error> {
    let mut out: String = String::new();
    for info in matches {
        match (info.home_goals, info.away_goals) {
            (Some(home_goals), Some(away_goals)) => writeln!(
                out,
                "  {} {home_goals} - {away_goals} {}",
                info.home_team, info.away_team
            )?,
            _ => writeln!(out, "  {} v {}", info.home_team, info.away_team)?,
        }
    }
    Ok(out)
}

/// Renders a played week: its results followed by the table.
///
/// # Errors
///
/// Returns an error only if writing to the buffer fails.
pub fn week_report(response: &PlayWeekResponse) -> Result<String, Error> {
    let mut out: String = String::new();
    writeln!(out, "Week {}", response.week)?;
    out.push_str(&match_lines(&response.matches)?);
    writeln!(out)?;
    out.push_str(&standings_table(&response.standings)?);
    writeln!(out)?;
    Ok(out)
}

/// Renders championship predictions and the season analysis.
///
/// # Errors
///
/// Returns an error only if writing to the buffer fails.
pub fn predictions_table(response: &PredictionsResponse) -> Result<String, Error> {
    let mut out: String = String::new();
    writeln!(
        out,
        "Predictions after week {} of {}",
        response.season.current_week, response.season.total_weeks
    )?;
    writeln!(
        out,
        "  {:<18}{:>5}{:>9}{:>8}{:>11}{:>6}",
        "Team", "Pts", "Title%", "Odds", "Projected", "Left"
    )?;
    for prediction in &response.predictions {
        writeln!(
            out,
            "  {:<18}{:>5}{:>9.2}{:>8.2}{:>11.1}{:>6}",
            prediction.team,
            prediction.current_points,
            prediction.championship_probability,
            prediction.betting_odds,
            prediction.projected_points,
            prediction.remaining_matches
        )?;
    }
    writeln!(out, "{}", response.analysis.message)?;
    if let Some(favorite) = &response.analysis.favorite {
        writeln!(out, "{favorite}")?;
    }
    Ok(out)
}

/// Renders a single simulated match with both sides' statistics.
///
/// # Errors
///
/// Returns an error only if writing to the buffer fails.
pub fn match_summary(simulated: &SimulatedMatch) -> Result<String, Error> {
    let mut out: String = String::new();
    writeln!(
        out,
        "Home {} - {} Away",
        simulated.home_goals, simulated.away_goals
    )?;
    side_line(&mut out, "Home", simulated.statistics.home())?;
    side_line(&mut out, "Away", simulated.statistics.away())?;
    Ok(out)
}

fn side_line(out: &mut String, label: &str, side: &SideStatistics) -> Result<(), Error> {
    writeln!(
        out,
        "  {label}: {} shots ({} on target), {}% possession, {} corners, {} fouls",
        side.shots, side.shots_on_target, side.possession, side.corners, side.fouls
    )
}
