//! Persistent stores
//!
//! All game data lives under one data directory:
//!
//! ```text
//! <data dir>/
//!   word_lists/<topic>.txt   one word per line
//!   word_meanings.json       word -> {meaning, example}
//!   missed_words.json        ["word", ...]
//!   game_records.json        {total_games, wins, best_time, history}
//! ```
//!
//! Writes replace whole files atomically. Missing or corrupt files read as empty.

mod file;
pub mod stats;
pub mod words;

pub use stats::{GameResult, HISTORY_LIMIT, HistoryEntry, StatsRecord, StatsStore, StatsSummary};
pub use words::{Meaning, WordStore};

use crate::core::WordError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const WORD_LISTS_DIR: &str = "word_lists";
pub const MEANINGS_FILE: &str = "word_meanings.json";
pub const MISSED_WORDS_FILE: &str = "missed_words.json";
pub const RECORDS_FILE: &str = "game_records.json";

/// Error type for store operations
///
/// Lookup variants leave storage untouched; `StorageWriteFailed` means the
/// current operation was aborted.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Topic names must be letters only: '{0}'")]
    InvalidTopicName(String),
    #[error("'{word}' is not a valid word: {source}")]
    InvalidWord { word: String, source: WordError },
    #[error("Topic '{0}' already exists")]
    TopicExists(String),
    #[error("Topic '{0}' not found")]
    TopicNotFound(String),
    #[error("'{word}' is already in topic '{topic}'")]
    DuplicateWord { topic: String, word: String },
    #[error("'{word}' is not in topic '{topic}'")]
    WordNotFound { topic: String, word: String },
    #[error("Failed to save {}: {source}", path.display())]
    StorageWriteFailed { path: PathBuf, source: io::Error },
}

/// Root of the on-disk layout
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn word_store(&self) -> WordStore {
        WordStore::new(
            self.root.join(WORD_LISTS_DIR),
            self.root.join(MEANINGS_FILE),
            self.root.join(MISSED_WORDS_FILE),
        )
    }

    #[must_use]
    pub fn stats_store(&self) -> StatsStore {
        StatsStore::new(self.root.join(RECORDS_FILE))
    }
}
