use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::outcome::TurnRecord;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while summarising a finished game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completion time precedes the game start")]
    InvalidTimeRange,

    #[error("turn log of {len} entries does not fit a summary")]
    TooManyTurns { len: usize },

    #[error("final score {score} does not match the turn tally {tally}")]
    ScoreMismatch { score: i32, tally: i32 },
}

//
// ─── GAME SUMMARY ─────────────────────────────────────────────────────────────
//

/// Aggregated result of one completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    final_score: i32,
    turns_played: u32,
    correct: u32,
    wrong: u32,
}

impl GameSummary {
    /// Builds a summary from the per-turn log, cross-checking the reported
    /// score against the tally of the recorded outcomes.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` when `completed_at` precedes
    /// `started_at`, `SummaryError::TooManyTurns` when the log length cannot
    /// be counted, and `SummaryError::ScoreMismatch` when the log does not
    /// add up to `final_score`.
    pub fn from_records(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        final_score: i32,
        records: &[TurnRecord],
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let turns_played =
            u32::try_from(records.len()).map_err(|_| SummaryError::TooManyTurns {
                len: records.len(),
            })?;

        let mut correct: u32 = 0;
        let mut wrong: u32 = 0;
        let mut tally: i32 = 0;
        for record in records {
            if record.outcome.is_correct() {
                correct = correct.saturating_add(1);
            } else {
                wrong = wrong.saturating_add(1);
            }
            tally = tally.saturating_add(record.outcome.score_delta());
        }
        if tally != final_score {
            return Err(SummaryError::ScoreMismatch {
                score: final_score,
                tally,
            });
        }

        Ok(Self {
            started_at,
            completed_at,
            final_score,
            turns_played,
            correct,
            wrong,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn final_score(&self) -> i32 {
        self.final_score
    }

    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    /// Wall-clock time the game took.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at.signed_duration_since(self.started_at)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::country::Country;
    use crate::model::outcome::TurnOutcome;
    use crate::time::fixed_now;

    fn build_records() -> Vec<TurnRecord> {
        let now = fixed_now();
        vec![
            TurnRecord::new(
                TurnOutcome::Correct {
                    country: Country::France,
                },
                now,
            ),
            TurnRecord::new(
                TurnOutcome::Wrong {
                    picked: Country::Spain,
                    correct: Country::Italy,
                },
                now,
            ),
            TurnRecord::new(
                TurnOutcome::Correct {
                    country: Country::Ukraine,
                },
                now,
            ),
        ]
    }

    #[test]
    fn summary_counts_correct_and_wrong_turns() {
        let started = fixed_now();
        let completed = started + Duration::seconds(42);
        let summary = GameSummary::from_records(started, completed, 1, &build_records()).unwrap();

        assert_eq!(summary.turns_played(), 3);
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.wrong(), 1);
        assert_eq!(summary.final_score(), 1);
        assert_eq!(summary.elapsed(), Duration::seconds(42));
    }

    #[test]
    fn mismatched_score_is_rejected() {
        let started = fixed_now();
        let err =
            GameSummary::from_records(started, started, 5, &build_records()).unwrap_err();
        assert_eq!(err, SummaryError::ScoreMismatch { score: 5, tally: 1 });
    }

    #[test]
    fn completion_before_start_is_rejected() {
        let started = fixed_now();
        let completed = started - Duration::seconds(1);
        let err = GameSummary::from_records(started, completed, 1, &build_records()).unwrap_err();
        assert_eq!(err, SummaryError::InvalidTimeRange);
    }

    #[test]
    fn empty_log_summarises_to_zeroes() {
        let started = fixed_now();
        let summary = GameSummary::from_records(started, started, 0, &[]).unwrap();
        assert_eq!(summary.turns_played(), 0);
        assert_eq!(summary.correct(), 0);
        assert_eq!(summary.wrong(), 0);
        assert_eq!(summary.elapsed(), Duration::zero());
    }
}
