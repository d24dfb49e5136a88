// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod fixture_tests;
mod history_tests;
mod season_tests;
mod team_tests;
mod transaction_tests;

use crate::{LeagueRead, Persistence, SeasonStateWrite};
use league_sim_domain::{Probability, Season, Team};

pub fn create_test_store() -> Persistence {
    let mut store: Persistence = Persistence::new_in_memory();
    store.seed_default_teams().unwrap();
    store
}

/// Creates a season with every default team attached at 25%.
pub fn create_test_season(store: &mut Persistence, name: &str) -> Season {
    let season: Season = store.create_season(name, 6).unwrap();
    let teams: Vec<Team> = store.list_teams().unwrap();
    for team in teams {
        store
            .attach_team(
                season.season_id,
                team.team_id().unwrap(),
                Probability::new(0.25).unwrap(),
                5,
            )
            .unwrap();
    }
    season
}

pub fn team_id(store: &Persistence, name: &str) -> i64 {
    store
        .find_team_by_name(&league_sim_domain::TeamName::new(name).unwrap())
        .and_then(|team| team.team_id())
        .unwrap()
}
