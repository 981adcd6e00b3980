use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Turns in a classic game.
pub const DEFAULT_TURNS_PER_GAME: u32 = 8;
/// Pause before the answer is revealed, in milliseconds.
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 1_000;
/// Upper bound on configurable game length.
pub const MAX_TURNS_PER_GAME: u32 = 1_000;
/// Upper bound on the reveal pause.
pub const MAX_REVEAL_DELAY_MS: u32 = 10_000;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while validating game settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("turns per game {0} must be between 1 and 1000")]
    InvalidTurnsPerGame(u32),

    #[error("reveal delay {0} ms exceeds the 10000 ms maximum")]
    InvalidRevealDelay(u32),
}

//
// ─── GAME SETTINGS ────────────────────────────────────────────────────────────
//

/// Tunable parameters for one game.
///
/// A zero reveal delay is valid and makes answers show immediately, which
/// test harnesses rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    turns_per_game: u32,
    reveal_delay_ms: u32,
}

impl GameSettings {
    /// Builds validated settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidTurnsPerGame` when `turns_per_game` is
    /// zero or above the maximum, and `SettingsError::InvalidRevealDelay`
    /// when the delay exceeds its maximum.
    pub fn new(turns_per_game: u32, reveal_delay_ms: u32) -> Result<Self, SettingsError> {
        if !(1..=MAX_TURNS_PER_GAME).contains(&turns_per_game) {
            return Err(SettingsError::InvalidTurnsPerGame(turns_per_game));
        }
        if reveal_delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(SettingsError::InvalidRevealDelay(reveal_delay_ms));
        }

        Ok(Self {
            turns_per_game,
            reveal_delay_ms,
        })
    }

    /// The classic eight-turn game with a one second reveal pause.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            turns_per_game: DEFAULT_TURNS_PER_GAME,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }

    #[must_use]
    pub fn turns_per_game(&self) -> u32 {
        self.turns_per_game
    }

    #[must_use]
    pub fn reveal_delay_ms(&self) -> u32 {
        self.reveal_delay_ms
    }

    /// Copy of these settings with a different game length.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidTurnsPerGame` for zero or oversized
    /// values.
    pub fn with_turns_per_game(&self, turns_per_game: u32) -> Result<Self, SettingsError> {
        Self::new(turns_per_game, self.reveal_delay_ms)
    }

    /// Copy of these settings with a different reveal pause.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidRevealDelay` for oversized values.
    pub fn with_reveal_delay_ms(&self, reveal_delay_ms: u32) -> Result<Self, SettingsError> {
        Self::new(self.turns_per_game, reveal_delay_ms)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::classic()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
