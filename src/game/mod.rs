//! Game sessions
//!
//! One `GameSession` per puzzle attempt, configured by a `GameConfig`. Once a
//! session ends, its `GameOutcome` is handed to the stores by the caller.

mod config;
mod outcome;
mod session;

pub use config::{ConfigError, GameConfig};
pub use outcome::{GameOutcome, report_outcome};
pub use session::{
    GameSession, GuessError, GuessFeedback, HintError, HintFeedback, SessionState,
};
