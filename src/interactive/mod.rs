//! Interactive TUI for playing one mode game after game

pub mod app;
pub mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
