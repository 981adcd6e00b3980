//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{RoundError, SummaryError};

/// Errors emitted by the game session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("answer index {provided} is out of range")]
    InvalidChoice { provided: usize },
    #[error("game is already over")]
    Ended,
    #[error("game is still in progress")]
    Active,
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
