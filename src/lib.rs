//! Word Hangman
//!
//! A hangman word-guessing game with topic word lists, a review list of missed
//! words and persisted play statistics.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_hangman::core::Word;
//! use word_hangman::game::{GameConfig, GameSession, GuessFeedback};
//!
//! let mut session = GameSession::new(Word::new("kiwi").unwrap(), &GameConfig::default());
//! let feedback = session.submit_guess("i").unwrap();
//! assert!(matches!(feedback, GuessFeedback::Hit { revealed: 2, .. }));
//! ```

// Core domain types
pub mod core;

// Session state machine and rules
pub mod game;

// Word selection per play mode
pub mod modes;

// Word lists, meanings, review list and statistics on disk
pub mod store;

// Built-in word list
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
