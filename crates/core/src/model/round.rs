use thiserror::Error;

use crate::model::country::Country;

/// Number of flags shown per question.
pub const OPTIONS_PER_ROUND: usize = 3;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while assembling a round.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("correct index {0} is out of range for a round")]
    IndexOutOfRange(usize),

    #[error("round options must be pairwise distinct")]
    DuplicateOption,
}

//
// ─── ROUND ────────────────────────────────────────────────────────────────────
//

/// One question: three candidate flags and the correct slot.
///
/// The correct index itself stays private. Callers that need it (the prompt,
/// tests forcing a right or wrong tap) compare `options()` against
/// `target()` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    options: [Country; OPTIONS_PER_ROUND],
    correct: usize,
}

impl Round {
    /// Builds a validated round.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::IndexOutOfRange` if `correct` is not below
    /// `OPTIONS_PER_ROUND`, and `RoundError::DuplicateOption` if the same
    /// country appears twice.
    pub fn new(options: [Country; OPTIONS_PER_ROUND], correct: usize) -> Result<Self, RoundError> {
        if correct >= OPTIONS_PER_ROUND {
            return Err(RoundError::IndexOutOfRange(correct));
        }
        for first in 0..OPTIONS_PER_ROUND {
            for second in (first + 1)..OPTIONS_PER_ROUND {
                if options[first] == options[second] {
                    return Err(RoundError::DuplicateOption);
                }
            }
        }

        Ok(Self { options, correct })
    }

    /// The three flags on the board, in display order.
    #[must_use]
    pub fn options(&self) -> [Country; OPTIONS_PER_ROUND] {
        self.options
    }

    /// The country the player is asked to find.
    #[must_use]
    pub fn target(&self) -> Country {
        self.options[self.correct]
    }

    /// Whether tapping `choice` answers this round correctly.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
