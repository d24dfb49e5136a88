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
#![allow(clippy::multiple_crate_versions)]

mod render;

#[cfg(test)]
mod tests;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use league_sim::{LeagueConfig, MatchOutcomeSimulator, RandomSource, RngSource, SimulatedMatch};
use league_sim_api::{
    CreateSeasonRequest, CreateSeasonResponse, PlayWeekResponse, PredictionsResponse,
    SimulateAllResponse, StandingsResponse, create_season, get_predictions, get_standings,
    play_next_week, simulate_all, start_season,
};
use league_sim_domain::Strength;
use league_sim_persistence::Persistence;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.log_level());

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// `RUST_LOG` wins over the verbosity flags when it is set.
fn init_tracing(level: LevelFilter) {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Football league simulator
#[derive(Debug, Parser)]
#[command(name = "league-sim", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON file overriding any subset of the engine configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Home advantage multiplier
    #[arg(long, global = true)]
    home_advantage: Option<f64>,

    /// Strength smoothing learning rate
    #[arg(long, global = true)]
    learning_rate: Option<f64>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        let config: LeagueConfig = self.league_config()?;
        debug!(?config, "Resolved configuration");
        match self.command {
            Command::Season(options) => run_season(&config, &options),
            Command::Match(options) => run_match(&config, &options),
            Command::Trials(options) => run_trials(&config, &options),
        }
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// Defaults, then the config file, then flag overrides, then validation.
    fn league_config(&self) -> Result<LeagueConfig> {
        let mut config: LeagueConfig = match &self.config {
            Some(path) => {
                let text: String = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
                serde_json::from_str(&text)
                    .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => LeagueConfig::default(),
        };
        if let Some(home_advantage) = self.home_advantage {
            config.home_advantage = home_advantage;
        }
        if let Some(learning_rate) = self.learning_rate {
            config.learning_rate = learning_rate;
        }
        config.validate().wrap_err("Invalid configuration")?;
        Ok(config)
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Play a full season with the default clubs
    #[command(visible_alias = "s")]
    Season(SeasonArgs),

    /// Simulate a single match
    #[command(visible_alias = "m")]
    Match(MatchArgs),

    /// Simulate the same match many times and report average goals
    #[command(visible_alias = "t")]
    Trials(TrialsArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Debug, ClapArgs)]
struct SeasonArgs {
    /// Season name
    #[arg(long, default_value = "Season 1")]
    name: String,

    /// Seed for a reproducible season
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate every remaining week in one step
    #[arg(long)]
    all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ClapArgs)]
struct StrengthArgs {
    /// Home attack rating
    #[arg(long, default_value_t = 1.0)]
    home_attack: f64,

    /// Home defense rating
    #[arg(long, default_value_t = 1.0)]
    home_defense: f64,

    /// Away attack rating
    #[arg(long, default_value_t = 1.0)]
    away_attack: f64,

    /// Away defense rating
    #[arg(long, default_value_t = 1.0)]
    away_defense: f64,
}

impl StrengthArgs {
    fn strengths(&self) -> Result<(Strength, Strength)> {
        let home: Strength =
            Strength::new(self.home_attack, self.home_defense).wrap_err("Invalid home strength")?;
        let away: Strength =
            Strength::new(self.away_attack, self.away_defense).wrap_err("Invalid away strength")?;
        Ok((home, away))
    }
}

#[derive(Clone, Debug, ClapArgs)]
struct MatchArgs {
    #[command(flatten)]
    strengths: StrengthArgs,

    /// Seed for a reproducible match
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Debug, ClapArgs)]
struct TrialsArgs {
    #[command(flatten)]
    strengths: StrengthArgs,

    /// Number of matches to simulate
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    trials: u32,

    /// Seed for reproducible trials
    #[arg(long)]
    seed: Option<u64>,
}

fn run_season(config: &LeagueConfig, options: &SeasonArgs) -> Result<()> {
    let mut store: Persistence = Persistence::with_history_limit(config.history_limit);
    store.seed_default_teams()?;
    let mut rng = options
        .seed
        .map_or_else(RngSource::from_entropy, RngSource::seeded);

    let created: CreateSeasonResponse = create_season(
        &mut store,
        config,
        &CreateSeasonRequest {
            name: options.name.clone(),
        },
    )?;
    let season_id: i64 = created.season.season_id;
    start_season(&mut store, season_id)?;
    info!(season_id, seed = ?options.seed, "Season started");

    if options.all {
        let response: SimulateAllResponse = simulate_all(&mut store, config, &mut rng, season_id)?;
        match options.format {
            OutputFormat::Table => print!("{}", render::standings_table(&response.standings)?),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        }
    } else {
        for _ in 0..created.season.total_weeks {
            let response: PlayWeekResponse =
                play_next_week(&mut store, config, &mut rng, season_id)?;
            match options.format {
                OutputFormat::Table => print!("{}", render::week_report(&response)?),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
            }
        }
    }

    let predictions: PredictionsResponse = get_predictions(&store, config, season_id)?;
    match options.format {
        OutputFormat::Table => print!("{}", render::predictions_table(&predictions)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&predictions)?),
    }

    let standings: StandingsResponse = get_standings(&store, season_id)?;
    let champion: &str = standings
        .standings
        .first()
        .map_or("nobody", |row| row.team.as_str());
    info!(season_id, champion, "Season finished");
    Ok(())
}

fn run_match(config: &LeagueConfig, options: &MatchArgs) -> Result<()> {
    let (home, away): (Strength, Strength) = options.strengths.strengths()?;
    let mut rng = options
        .seed
        .map_or_else(RngSource::from_entropy, RngSource::seeded);

    let simulated: SimulatedMatch =
        MatchOutcomeSimulator::new(config).simulate(&home, &away, &mut rng)?;
    print!("{}", render::match_summary(&simulated)?);
    Ok(())
}

fn run_trials(config: &LeagueConfig, options: &TrialsArgs) -> Result<()> {
    let (home, away): (Strength, Strength) = options.strengths.strengths()?;
    let mut rng = options
        .seed
        .map_or_else(RngSource::from_entropy, RngSource::seeded);

    let (home_average, away_average): (f64, f64) =
        average_goals(config, &home, &away, options.trials, &mut rng)?;
    println!("Trials:             {}", options.trials);
    println!("Home goals/match:   {home_average:.2}");
    println!("Away goals/match:   {away_average:.2}");
    Ok(())
}

/// Average goals per side over `trials` simulations.
fn average_goals<R: RandomSource>(
    config: &LeagueConfig,
    home: &Strength,
    away: &Strength,
    trials: u32,
    rng: &mut R,
) -> Result<(f64, f64)> {
    if trials == 0 {
        return Err(eyre!("At least one trial is required"));
    }
    let simulator: MatchOutcomeSimulator = MatchOutcomeSimulator::new(config);
    let mut home_total: f64 = 0.0;
    let mut away_total: f64 = 0.0;
    for _ in 0..trials {
        let simulated: SimulatedMatch = simulator.simulate(home, away, rng)?;
        home_total += f64::from(simulated.home_goals.value());
        away_total += f64::from(simulated.away_goals.value());
    }
    let count: f64 = f64::from(trials);
    Ok((home_total / count, away_total / count))
}
