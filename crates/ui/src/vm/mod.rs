mod feedback_vm;
mod flags;
mod game_vm;
mod time_fmt;

pub use feedback_vm::{ResultFeedbackVm, map_result_feedback};
pub use flags::flag_glyph;
pub use game_vm::{GameIntent, GamePhase, GameVm};
pub use time_fmt::format_elapsed;
