//! Play modes
//!
//! Decides which word a session plays and how it starts.

mod selector;

pub use selector::{GameMode, Level, ModeSelector, SelectError, hint_positions};
