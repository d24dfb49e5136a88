// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, LeagueConfig};

#[test]
fn test_defaults_match_league_rules() {
    let config: LeagueConfig = LeagueConfig::default();

    assert!((config.home_advantage - 1.2).abs() < f64::EPSILON);
    assert_eq!(config.total_weeks, 6);
    assert_eq!(config.required_team_count, 4);
    assert_eq!((config.min_possession, config.max_possession), (25, 75));
    assert!((config.learning_rate - 0.3).abs() < f64::EPSILON);
    assert_eq!(config.history_limit, 20);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_overrides_only_given_fields() {
    let config: LeagueConfig =
        serde_json::from_str(r#"{"home_advantage": 1.5, "history_limit": 5}"#).unwrap();

    assert!((config.home_advantage - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.history_limit, 5);
    assert_eq!(config.total_weeks, 6);
}

#[test]
fn test_validate_rejects_bad_values() {
    let bad_rate: LeagueConfig = LeagueConfig {
        learning_rate: 0.0,
        ..LeagueConfig::default()
    };
    assert!(matches!(
        bad_rate.validate(),
        Err(CoreError::InvalidConfiguration {
            parameter: "learning_rate",
            ..
        })
    ));

    let inverted: LeagueConfig = LeagueConfig {
        min_possession: 80,
        max_possession: 20,
        ..LeagueConfig::default()
    };
    assert!(inverted.validate().is_err());

    let no_advantage: LeagueConfig = LeagueConfig {
        home_advantage: f64::NAN,
        ..LeagueConfig::default()
    };
    assert!(matches!(
        no_advantage.validate(),
        Err(CoreError::InvalidConfiguration {
            parameter: "home_advantage",
            ..
        })
    ));

    let no_history: LeagueConfig = LeagueConfig {
        history_limit: 0,
        ..LeagueConfig::default()
    };
    assert!(no_history.validate().is_err());
}

#[test]
fn test_validate_rejects_season_length_the_schedule_cannot_serve() {
    for total_weeks in [4, 8] {
        let config: LeagueConfig = LeagueConfig {
            total_weeks,
            ..LeagueConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfiguration {
                parameter: "total_weeks",
                ..
            })
        ));
    }
}

#[test]
fn test_validate_rejects_team_count_the_schedule_cannot_serve() {
    let config: LeagueConfig = LeagueConfig {
        required_team_count: 3,
        ..LeagueConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(CoreError::InvalidConfiguration {
            parameter: "required_team_count",
            ..
        })
    ));
}
