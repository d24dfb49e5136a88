// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_store;
use crate::{LeagueRead, Persistence, PersistenceError};
use league_sim_domain::{DomainError, Strength, Team};

#[test]
fn test_seed_default_teams_creates_four_clubs() {
    let store: Persistence = create_test_store();

    let teams: Vec<Team> = store.list_teams().unwrap();

    assert_eq!(teams.len(), 4);
    assert_eq!(teams[0].name().as_str(), "Arsenal");
    assert!((teams[0].strength().attack() - 2.2).abs() < f64::EPSILON);
    assert!((teams[0].strength().defense() - 1.8).abs() < f64::EPSILON);
    assert_eq!(teams[3].name().as_str(), "Manchester City");
    assert!((teams[3].strength().attack() - 2.5).abs() < f64::EPSILON);
}

#[test]
fn test_seed_default_teams_is_idempotent() {
    let mut store: Persistence = create_test_store();

    let again: Vec<Team> = store.seed_default_teams().unwrap();

    assert_eq!(again.len(), 4);
    assert_eq!(store.list_teams().unwrap().len(), 4);
}

#[test]
fn test_create_team_rejects_duplicate_name() {
    let mut store: Persistence = create_test_store();

    let err: PersistenceError = store
        .create_team("  Arsenal ", Strength::uniform(1.0).unwrap())
        .unwrap_err();

    assert_eq!(
        err,
        PersistenceError::DomainViolation(DomainError::DuplicateTeam(String::from("Arsenal")))
    );
}

#[test]
fn test_create_team_rejects_blank_name() {
    let mut store: Persistence = Persistence::new_in_memory();

    let err: PersistenceError = store
        .create_team("   ", Strength::uniform(1.0).unwrap())
        .unwrap_err();

    assert!(matches!(
        err,
        PersistenceError::DomainViolation(DomainError::InvalidTeamName(_))
    ));
}

#[test]
fn test_find_unknown_team_is_lookup_failure() {
    let store: Persistence = create_test_store();

    let err: PersistenceError = store.find_team(99).unwrap_err();

    assert_eq!(
        err,
        PersistenceError::DomainViolation(DomainError::TeamNotFound(String::from("99")))
    );
}
