// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the wire shape of request and response records.

use league_sim_domain::{Season, SeasonStatus};
use serde_json::{Value, json};

use crate::{SeasonInfo, SeasonPhase, UpdateMatchRequest};

#[test]
fn test_season_info_serializes_status_as_snake_case() {
    let mut season: Season = Season::new(3, String::from("2026/27"), 6);
    season.status = SeasonStatus::Active;
    season.current_week = 2;

    let value: Value = serde_json::to_value(SeasonInfo::from(&season)).unwrap();

    assert_eq!(
        value,
        json!({
            "season_id": 3,
            "name": "2026/27",
            "status": "active",
            "current_week": 2,
            "total_weeks": 6,
        })
    );
}

#[test]
fn test_update_request_statistics_are_optional() {
    let request: UpdateMatchRequest =
        serde_json::from_value(json!({ "home_goals": 2, "away_goals": 1 })).unwrap();

    assert_eq!(request.home_goals, 2);
    assert_eq!(request.away_goals, 1);
    assert!(request.statistics.is_none());
}

#[test]
fn test_update_request_rejects_invalid_possession() {
    let side = |possession: u32| {
        json!({
            "shots": 10,
            "shots_on_target": 4,
            "possession": possession,
            "corners": 5,
            "fouls": 11,
        })
    };
    let result: Result<UpdateMatchRequest, serde_json::Error> = serde_json::from_value(json!({
        "home_goals": 1,
        "away_goals": 1,
        "statistics": { "home": side(60), "away": side(30) },
    }));

    assert!(result.is_err());
}

#[test]
fn test_season_phase_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(SeasonPhase::Early).unwrap(),
        json!("early")
    );
}
