//! Core domain types for Hangman
//!
//! This module contains the fundamental validated values shared by the game and the stores.
//! All types here are pure and testable.

mod letter;
mod word;

pub use letter::Letter;
pub use word::{Word, WordError};
