use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::Dealer;
use quiz_core::model::{
    Country, GameSettings, GameSummary, OPTIONS_PER_ROUND, Round, TurnOutcome, TurnRecord,
};

use super::progress::GameProgress;
use crate::error::SessionError;

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// In-memory state machine for one flag game.
///
/// Holds the current round, the running score and the turn budget, and steps
/// through questions as answers come in. The session never advances on its
/// own: `submit_answer` records the turn and `start_question` deals the next
/// round when the caller is ready.
pub struct QuizSession {
    dealer: Dealer,
    settings: GameSettings,
    round: Round,
    score: i32,
    turns_remaining: u32,
    last_outcome: Option<TurnOutcome>,
    records: Vec<TurnRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a new session and deal its opening round.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Round` if the dealer cannot produce a valid
    /// opening round.
    pub fn new(
        mut dealer: Dealer,
        settings: GameSettings,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let round = dealer.deal_round()?;
        let turns_remaining = settings.turns_per_game();

        Ok(Self {
            dealer,
            settings,
            round,
            score: 0,
            turns_remaining,
            last_outcome: None,
            records: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The three flags currently on the board.
    #[must_use]
    pub fn options(&self) -> [Country; OPTIONS_PER_ROUND] {
        self.round.options()
    }

    /// The country the player is currently asked to find.
    #[must_use]
    pub fn target(&self) -> Country {
        self.round.target()
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// Outcome of the most recent answer, cleared when a new round is dealt.
    #[must_use]
    pub fn last_outcome(&self) -> Option<TurnOutcome> {
        self.last_outcome
    }

    #[must_use]
    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.settings.turns_per_game().saturating_sub(self.turns_remaining)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turns_remaining == 0
    }

    /// Returns a summary of the current game progress.
    #[must_use]
    pub fn progress(&self) -> GameProgress {
        GameProgress {
            score: self.score,
            turns_played: self.turns_played(),
            turns_remaining: self.turns_remaining,
            is_over: self.is_over(),
        }
    }

    /// Deal the next round and clear the previous outcome.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Ended` if the game is already over, and
    /// `SessionError::Round` if dealing fails.
    pub fn start_question(&mut self) -> Result<(), SessionError> {
        if self.is_over() {
            return Err(SessionError::Ended);
        }

        self.round = self.dealer.deal_round()?;
        self.last_outcome = None;
        Ok(())
    }

    /// Apply an answer to the current round.
    ///
    /// Scores the tapped flag, consumes a turn and records the outcome. The
    /// round on the board stays in place so the caller can present the
    /// result before dealing the next question. Once the game is over,
    /// further answers are ignored and the final record is returned again.
    ///
    /// `answered_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidChoice` if `choice` does not name one
    /// of the flags on the board.
    pub fn submit_answer(
        &mut self,
        choice: usize,
        answered_at: DateTime<Utc>,
    ) -> Result<&TurnRecord, SessionError> {
        if choice >= OPTIONS_PER_ROUND {
            return Err(SessionError::InvalidChoice { provided: choice });
        }
        if self.is_over() {
            return self.records.last().ok_or(SessionError::Ended);
        }

        let outcome = if self.round.is_correct(choice) {
            TurnOutcome::Correct {
                country: self.round.target(),
            }
        } else {
            TurnOutcome::Wrong {
                picked: self.round.options()[choice],
                correct: self.round.target(),
            }
        };

        self.score = self.score.saturating_add(outcome.score_delta());
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
        self.last_outcome = Some(outcome);
        self.records.push(TurnRecord::new(outcome, answered_at));

        if self.turns_remaining == 0 {
            self.completed_at = Some(answered_at);
        }

        self.records.last().ok_or(SessionError::Ended)
    }

    /// Restart the game in place: zero the score, refill the turn budget
    /// and deal a fresh opening round.
    ///
    /// `now` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Round` if dealing the opening round fails.
    pub fn reset(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.round = self.dealer.deal_round()?;
        self.score = 0;
        self.turns_remaining = self.settings.turns_per_game();
        self.last_outcome = None;
        self.records.clear();
        self.started_at = now;
        self.completed_at = None;
        Ok(())
    }

    pub(crate) fn build_summary(&self) -> Result<GameSummary, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::Active)?;
        Ok(GameSummary::from_records(
            self.started_at,
            completed_at,
            self.score,
            &self.records,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("target", &self.round.target())
            .field("score", &self.score)
            .field("turns_remaining", &self.turns_remaining)
            .field("records_len", &self.records.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
