mod country;
mod outcome;
mod round;
mod settings;
mod summary;

pub use country::{Country, ParseCountryError};
pub use outcome::{TurnOutcome, TurnRecord};
pub use round::{OPTIONS_PER_ROUND, Round, RoundError};
pub use settings::{GameSettings, SettingsError};
pub use summary::{GameSummary, SummaryError};
