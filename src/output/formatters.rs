//! Formatting utilities for terminal output

use crate::core::Letter;

/// Gallows drawings, from empty to complete
pub const GALLOWS: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Gallows drawing for the attempts used so far
///
/// Scales to any attempt budget: the drawing is complete exactly when every
/// attempt is spent.
#[must_use]
pub fn gallows_stage(attempts_used: u32, max_attempts: u32) -> &'static str {
    let last = GALLOWS.len() - 1;
    if max_attempts == 0 || attempts_used >= max_attempts {
        return GALLOWS[last];
    }
    // Cast is safe: result is below `last`
    let stage = (attempts_used as usize * last) / max_attempts as usize;
    GALLOWS[stage.min(last)]
}

/// Show a partially revealed word, blanks as underscores
#[must_use]
pub fn render_revealed(revealed: &[Option<char>]) -> String {
    revealed
        .iter()
        .map(|slot| slot.unwrap_or('_').to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comma-separated letter list
#[must_use]
pub fn format_letters(letters: impl IntoIterator<Item = Letter>) -> String {
    letters
        .into_iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable duration: seconds with two decimals under a minute,
/// whole minutes and seconds above
#[must_use]
pub fn format_elapsed(seconds: f64) -> String {
    let rounded = (seconds * 100.0).round() / 100.0;
    if rounded < 60.0 {
        return format!("{rounded:.2}s");
    }
    let total = rounded as u64;
    format!("{}m {}s", total / 60, total % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
