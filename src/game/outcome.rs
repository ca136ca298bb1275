//! Session outcomes and their hand-off to the stores

use crate::store::{StatsStore, StoreError, WordStore};
use std::time::Duration;
use tracing::warn;

/// Read-only summary of a finished session
#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    pub word: String,
    pub won: bool,
    /// Time taken to win; `None` for losses
    pub elapsed: Option<Duration>,
}

impl GameOutcome {
    #[must_use]
    pub fn elapsed_seconds(&self) -> Option<f64> {
        self.elapsed.map(|d| d.as_secs_f64())
    }
}

/// Persist a finished session
///
/// Records the game in `stats` and, for losses, adds the word to the missed-word
/// list. The two writes are independent: both are attempted even if the first fails.
///
/// # Errors
///
/// Returns the first `StoreError` encountered.
pub fn report_outcome(
    outcome: &GameOutcome,
    stats: &StatsStore,
    words: &WordStore,
) -> Result<(), StoreError> {
    let recorded = stats.record_game(&outcome.word, outcome.won, outcome.elapsed_seconds());
    if let Err(err) = &recorded {
        warn!(error = %err, word = %outcome.word, "failed to record game");
    }

    let missed = if outcome.won {
        Ok(())
    } else {
        words.add_missed_word(&outcome.word).map(|_| ())
    };
    if let Err(err) = &missed {
        warn!(error = %err, word = %outcome.word, "failed to save missed word");
    }

    recorded.and(missed)
}
