use quiz_core::model::{Country, GameSummary, OPTIONS_PER_ROUND};
use services::{AnswerReport, GameLoopService, QuizSession};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameIntent {
    Tap(usize),
    Continue,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Question,
    Pending { picked: usize },
    Reveal { picked: usize },
}

/// View-model for the game screen.
///
/// Wraps the session with a presentation phase: a tap answers immediately
/// but the result panel only opens once the reveal pause elapses. The
/// `epoch` counter fences the deferred reveal; any tap, continue or reset
/// bumps it, so a timer started for an earlier turn can no longer fire.
pub struct GameVm {
    session: QuizSession,
    phase: GamePhase,
    report: Option<AnswerReport>,
    epoch: u64,
}

impl GameVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            phase: GamePhase::Question,
            report: None,
            epoch: 0,
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the game cannot be started.
    pub fn start(game_loop: &GameLoopService) -> Result<Self, ViewError> {
        let session = game_loop.start_game().map_err(|_| ViewError::Unknown)?;
        Ok(Self::new(session))
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn options(&self) -> [Country; OPTIONS_PER_ROUND] {
        self.session.options()
    }

    #[must_use]
    pub fn target(&self) -> Country {
        self.session.target()
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.session.score()
    }

    #[must_use]
    pub fn turns_remaining(&self) -> u32 {
        self.session.turns_remaining()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// The flag slot the player tapped, while a result is pending or shown.
    #[must_use]
    pub fn picked(&self) -> Option<usize> {
        match self.phase {
            GamePhase::Question => None,
            GamePhase::Pending { picked } | GamePhase::Reveal { picked } => Some(picked),
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<&AnswerReport> {
        self.report.as_ref()
    }

    /// Answer the current question with the tapped flag.
    ///
    /// Moves to the pending phase and returns the epoch the caller should
    /// hand back via `reveal` once the reveal pause elapses. Taps outside
    /// the question phase are ignored and return `None`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub fn tap(
        &mut self,
        game_loop: &GameLoopService,
        choice: usize,
    ) -> Result<Option<u64>, ViewError> {
        if self.phase != GamePhase::Question {
            return Ok(None);
        }

        let report = game_loop
            .answer(&mut self.session, choice)
            .map_err(|_| ViewError::Unknown)?;
        self.report = Some(report);
        self.epoch += 1;
        self.phase = GamePhase::Pending { picked: choice };
        Ok(Some(self.epoch))
    }

    /// Open the result panel for the pending answer. Stale epochs, left
    /// behind by a reset or a newer turn, are ignored.
    pub fn reveal(&mut self, epoch: u64) {
        if epoch != self.epoch {
            return;
        }
        if let GamePhase::Pending { picked } = self.phase {
            self.phase = GamePhase::Reveal { picked };
        }
    }

    /// Deal the next question after a revealed result. Ignored while the
    /// result panel is closed or once the game is over.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub fn advance(&mut self, game_loop: &GameLoopService) -> Result<(), ViewError> {
        if !matches!(self.phase, GamePhase::Reveal { .. }) || self.is_over() {
            return Ok(());
        }

        game_loop
            .next_question(&mut self.session)
            .map_err(|_| ViewError::Unknown)?;
        self.report = None;
        self.epoch += 1;
        self.phase = GamePhase::Question;
        Ok(())
    }

    /// Restart the game from the first turn.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub fn reset_game(&mut self, game_loop: &GameLoopService) -> Result<(), ViewError> {
        game_loop
            .reset(&mut self.session)
            .map_err(|_| ViewError::Unknown)?;
        self.report = None;
        self.epoch += 1;
        self.phase = GamePhase::Question;
        Ok(())
    }

    /// Summary of the finished game, `None` while it is still running.
    #[must_use]
    pub fn game_over_summary(&self, game_loop: &GameLoopService) -> Option<GameSummary> {
        game_loop.summary(&self.session).ok()
    }
}
