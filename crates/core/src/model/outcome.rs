use chrono::{DateTime, Utc};

use crate::model::country::Country;

//
// ─── TURN OUTCOME ─────────────────────────────────────────────────────────────
//

/// How a single answered question went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player tapped the target's flag.
    Correct { country: Country },
    /// The player tapped `picked` while `correct` was the target.
    Wrong { picked: Country, correct: Country },
}

impl TurnOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// Score adjustment for this outcome. Wrong answers cost a point, so
    /// the running total can go negative.
    #[must_use]
    pub fn score_delta(&self) -> i32 {
        match self {
            Self::Correct { .. } => 1,
            Self::Wrong { .. } => -1,
        }
    }

    /// The flag the player actually tapped.
    #[must_use]
    pub fn picked(&self) -> Country {
        match self {
            Self::Correct { country } => *country,
            Self::Wrong { picked, .. } => *picked,
        }
    }
}

//
// ─── TURN RECORD ──────────────────────────────────────────────────────────────
//

/// One answered question with the moment it was answered.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    pub outcome: TurnOutcome,
    pub answered_at: DateTime<Utc>,
}

impl TurnRecord {
    #[must_use]
    pub fn new(outcome: TurnOutcome, answered_at: DateTime<Utc>) -> Self {
        Self {
            outcome,
            answered_at,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
