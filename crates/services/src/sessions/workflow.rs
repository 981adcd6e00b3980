use quiz_core::model::{GameSettings, GameSummary, TurnOutcome};
use quiz_core::{Clock, Dealer};

use super::service::QuizSession;
use crate::error::SessionError;

/// Result of answering a single question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerReport {
    pub outcome: TurnOutcome,
    pub score: i32,
    pub turns_remaining: u32,
    pub is_over: bool,
}

/// Orchestrates game start and the answer, advance and reset loop.
///
/// The service itself is cheap to clone and holds no game state; each
/// started game lives in its own `QuizSession`.
#[derive(Debug, Clone)]
pub struct GameLoopService {
    clock: Clock,
    settings: GameSettings,
    seed: Option<u64>,
}

impl GameLoopService {
    #[must_use]
    pub fn new(clock: Clock, settings: GameSettings) -> Self {
        Self {
            clock,
            settings,
            seed: None,
        }
    }

    /// Pin the dealer to a seed so every started game replays the same
    /// sequence of rounds.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Start a new game with an opening round on the board.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the opening round cannot be dealt.
    pub fn start_game(&self) -> Result<QuizSession, SessionError> {
        let dealer = match self.seed {
            Some(seed) => Dealer::seeded(seed),
            None => Dealer::new(),
        };
        QuizSession::new(dealer, self.settings.clone(), self.clock.now())
    }

    /// Answer the current question and report the updated standing.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidChoice` if `choice` does not name one
    /// of the flags on the board.
    pub fn answer(
        &self,
        session: &mut QuizSession,
        choice: usize,
    ) -> Result<AnswerReport, SessionError> {
        let answered_at = self.clock.now();
        let outcome = session.submit_answer(choice, answered_at)?.outcome;

        Ok(AnswerReport {
            outcome,
            score: session.score(),
            turns_remaining: session.turns_remaining(),
            is_over: session.is_over(),
        })
    }

    /// Deal the next question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Ended` if the game is already over.
    pub fn next_question(&self, session: &mut QuizSession) -> Result<(), SessionError> {
        session.start_question()
    }

    /// Restart the game in place.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the fresh opening round cannot be dealt.
    pub fn reset(&self, session: &mut QuizSession) -> Result<(), SessionError> {
        session.reset(self.clock.now())
    }

    /// Summary of a finished game.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Active` while the game is still in progress.
    pub fn summary(&self, session: &QuizSession) -> Result<GameSummary, SessionError> {
        session.build_summary()
    }
}
