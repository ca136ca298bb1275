//! Terminal output formatting
//!
//! Display utilities for game screens and store views.

pub mod display;
pub mod formatters;

pub use display::{
    print_all_words, print_board, print_guess_feedback, print_hint_feedback, print_how_to_play,
    print_meaning, print_numbered, print_result, print_summary,
};
