// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_sim::LeagueConfig;
use league_sim_domain::{MatchStatistics, SideStatistics};
use league_sim_persistence::Persistence;

use crate::{CreateSeasonRequest, CreateSeasonResponse, create_season, start_season};

pub fn create_test_store() -> Persistence {
    let mut store: Persistence = Persistence::new_in_memory();
    store
        .seed_default_teams()
        .expect("Failed to seed default teams");
    store
}

pub fn create_test_config() -> LeagueConfig {
    LeagueConfig::default()
}

pub fn create_request(name: &str) -> CreateSeasonRequest {
    CreateSeasonRequest {
        name: String::from(name),
    }
}

/// Creates a pending season and returns its identifier.
pub fn create_pending_season(store: &mut Persistence, config: &LeagueConfig, name: &str) -> i64 {
    let response: CreateSeasonResponse =
        create_season(store, config, &create_request(name)).expect("Failed to create season");
    response.season.season_id
}

/// Creates and starts a season and returns its identifier.
pub fn create_active_season(store: &mut Persistence, config: &LeagueConfig, name: &str) -> i64 {
    let season_id: i64 = create_pending_season(store, config, name);
    start_season(store, season_id).expect("Failed to start season");
    season_id
}

pub fn create_test_statistics(home_possession: u32) -> MatchStatistics {
    let home: SideStatistics = SideStatistics {
        shots: 14,
        shots_on_target: 6,
        possession: home_possession,
        corners: 7,
        fouls: 10,
    };
    let away: SideStatistics = SideStatistics {
        shots: 6,
        shots_on_target: 2,
        possession: 100 - home_possession,
        corners: 3,
        fouls: 13,
    };
    MatchStatistics::new(home, away).expect("Failed to build statistics")
}
