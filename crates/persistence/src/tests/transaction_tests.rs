// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_store;
use crate::{LeagueRead, Persistence, PersistenceError, SeasonStateWrite, Transactional};
use league_sim_domain::{DomainError, Season};

#[test]
fn test_committed_writes_are_visible() {
    let mut store: Persistence = create_test_store();

    let season: Season = store
        .transaction(|tx| tx.create_season("League", 6))
        .unwrap();

    assert_eq!(store.find_season(season.season_id).unwrap().name, "League");
}

#[test]
fn test_failed_transaction_rolls_back_every_write() {
    let mut store: Persistence = create_test_store();

    let result: Result<(), PersistenceError> = store.transaction(|tx| {
        tx.create_season("League", 6)?;
        tx.create_season("League", 6)?;
        Ok(())
    });

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::DomainViolation(DomainError::DuplicateSeasonName(String::from("League")))
    );
    assert!(store.list_seasons().unwrap().is_empty());
    // identifiers handed out inside the failed transaction are reused
    let season: Season = store.create_season("League", 6).unwrap();
    assert_eq!(season.season_id, 1);
}

#[test]
fn test_nested_transaction_is_rejected() {
    let mut store: Persistence = create_test_store();

    let result: Result<(), PersistenceError> =
        store.transaction(|tx| tx.transaction(|_| Ok::<(), PersistenceError>(())));

    assert!(matches!(
        result.unwrap_err(),
        PersistenceError::TransactionFailed(_)
    ));
}
