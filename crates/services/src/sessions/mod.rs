mod progress;
mod service;
mod workflow;

// Public API of the game session subsystem.
pub use crate::error::SessionError;
pub use progress::GameProgress;
pub use service::QuizSession;
pub use workflow::{AnswerReport, GameLoopService};
