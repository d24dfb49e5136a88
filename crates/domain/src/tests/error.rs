// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, ErrorClass, SeasonStatus, StrengthType};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidWeek {
        week: 7,
        total_weeks: 6,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid week 7. Week must be between 1 and 6"
    );

    let err: DomainError = DomainError::NoMatchesForWeek { week: 3 };
    assert_eq!(format!("{err}"), "No matches found for week 3");

    let err: DomainError = DomainError::InvalidStrength {
        strength_type: StrengthType::Defense,
        value: -1.0,
    };
    assert_eq!(format!("{err}"), "Invalid defense strength: -1");

    let err: DomainError = DomainError::SeasonNotActive {
        season: String::from("2026"),
        status: SeasonStatus::Pending,
    };
    assert_eq!(
        format!("{err}"),
        "Season '2026' is not active (status: pending)"
    );

    let err: DomainError = DomainError::InsufficientTeams {
        required: 4,
        available: 2,
    };
    assert_eq!(
        format!("{err}"),
        "Insufficient teams. Required: 4, Available: 2"
    );

    let err: DomainError = DomainError::SeasonNotFound(9);
    assert_eq!(format!("{err}"), "Season 9 not found");
}

#[test]
fn test_error_classes_cover_the_three_failure_families() {
    assert_eq!(
        DomainError::InvalidTeamCount {
            required: 4,
            actual: 3
        }
        .class(),
        ErrorClass::Precondition
    );
    assert_eq!(
        DomainError::NoPredictionsAvailable.class(),
        ErrorClass::Precondition
    );
    assert_eq!(
        DomainError::MatchEditForbidden { fixture_id: 1 }.class(),
        ErrorClass::StateConflict
    );
    assert_eq!(
        DomainError::SeasonAlreadyCompleted(String::from("2026")).class(),
        ErrorClass::StateConflict
    );
    assert_eq!(
        DomainError::TeamNotFound(String::from("Arsenal")).class(),
        ErrorClass::Lookup
    );
    assert_eq!(DomainError::FixtureNotFound(3).class(), ErrorClass::Lookup);
}
