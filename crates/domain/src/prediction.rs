// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::values::{Probability, TeamName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// The championship probabilities recorded after one recalculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSnapshot {
    /// The week the snapshot was taken after.
    pub week: u32,
    /// When the snapshot was taken.
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
    /// Probability per team.
    pub probabilities: BTreeMap<TeamName, Probability>,
}

impl PredictionSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(
        week: u32,
        recorded_at: OffsetDateTime,
        probabilities: BTreeMap<TeamName, Probability>,
    ) -> Self {
        Self {
            week,
            recorded_at,
            probabilities,
        }
    }

    /// Returns the probability recorded for `team`.
    #[must_use]
    pub fn probability_of(&self, team: &TeamName) -> Option<Probability> {
        self.probabilities.get(team).copied()
    }
}
