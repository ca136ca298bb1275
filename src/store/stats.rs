//! Play statistics
//!
//! Aggregate counters, best winning time and a bounded newest-first history,
//! stored together as one JSON record.

use super::StoreError;
use super::file::{read_json_or_default, write_json};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Maximum number of history entries kept
pub const HISTORY_LIMIT: usize = 20;

/// How a recorded game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => f.write_str("win"),
            Self::Loss => f.write_str("loss"),
        }
    }
}

/// One line of play history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    #[serde(rename = "result")]
    pub outcome: GameResult,
    #[serde(rename = "time")]
    pub timestamp: DateTime<Local>,
}

/// The persisted statistics record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsRecord {
    #[serde(default)]
    pub total_games: u64,
    #[serde(default)]
    pub wins: u64,
    /// Fastest win in seconds, rounded to hundredths
    #[serde(default)]
    pub best_time: Option<f64>,
    /// Newest first
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl StatsRecord {
    fn apply(&mut self, word: &str, won: bool, elapsed_seconds: Option<f64>, at: DateTime<Local>) {
        self.total_games += 1;
        if won {
            self.wins += 1;
            if let Some(elapsed) = elapsed_seconds
                && self.best_time.is_none_or(|best| elapsed < best)
            {
                self.best_time = Some(round_hundredths(elapsed));
            }
        }

        self.history.insert(
            0,
            HistoryEntry {
                word: word.to_string(),
                outcome: if won { GameResult::Win } else { GameResult::Loss },
                timestamp: at,
            },
        );
        self.history.truncate(HISTORY_LIMIT);
    }
}

/// Read-only view for the records screen
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_games: u64,
    pub wins: u64,
    /// Percentage of games won, 0 when nothing was played
    pub win_rate: f64,
    pub best_time: Option<f64>,
    pub history: Vec<HistoryEntry>,
}

/// Persistent statistics storage
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Record a finished game now
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageWriteFailed` if the record cannot be written.
    pub fn record_game(
        &self,
        word: &str,
        won: bool,
        elapsed_seconds: Option<f64>,
    ) -> Result<(), StoreError> {
        self.record_game_at(word, won, elapsed_seconds, Local::now())
    }

    /// Record a finished game with an explicit timestamp
    ///
    /// Wins with an elapsed time replace the best time when strictly faster. The
    /// comparison uses the unrounded value; the stored value is rounded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageWriteFailed` if the record cannot be written.
    pub fn record_game_at(
        &self,
        word: &str,
        won: bool,
        elapsed_seconds: Option<f64>,
        at: DateTime<Local>,
    ) -> Result<(), StoreError> {
        let mut record = self.load();
        record.apply(word, won, elapsed_seconds, at);
        write_json(&self.path, &record)?;
        info!(
            word,
            won,
            total_games = record.total_games,
            "game recorded"
        );
        Ok(())
    }

    /// Current record, or the empty record if missing or corrupt
    ///
    /// A stored win count above the game count is capped at the game count.
    #[must_use]
    pub fn load(&self) -> StatsRecord {
        let mut record: StatsRecord = read_json_or_default(&self.path);
        if record.wins > record.total_games {
            warn!(
                path = %self.path.display(),
                wins = record.wins,
                total_games = record.total_games,
                "more wins than games, capping wins"
            );
            record.wins = record.total_games;
        }
        record
    }

    #[must_use]
    pub fn summary(&self) -> StatsSummary {
        let record = self.load();
        let win_rate = if record.total_games == 0 {
            0.0
        } else {
            record.wins as f64 / record.total_games as f64 * 100.0
        };
        StatsSummary {
            total_games: record.total_games,
            wins: record.wins,
            win_rate,
            best_time: record.best_time,
            history: record.history,
        }
    }
}

fn round_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataDir;
    use chrono::{Duration, TimeZone};
    use std::fs;

    fn store() -> (tempfile::TempDir, StatsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DataDir::new(dir.path()).stats_store();
        (dir, store)
    }

    fn words(summary: &StatsSummary) -> Vec<&str> {
        summary.history.iter().map(|h| h.word.as_str()).collect()
    }

    #[test]
    fn empty_summary() {
        let (_dir, store) = store();
        let summary = store.summary();
        assert_eq!(summary.total_games, 0);
        assert_eq!(summary.wins, 0);
        assert!(summary.win_rate.abs() < f64::EPSILON);
        assert_eq!(summary.best_time, None);
        assert!(summary.history.is_empty());
    }

    #[test]
    fn first_win_sets_rounded_best_time() {
        let (_dir, store) = store();
        store.record_game("apple", true, Some(12.345)).unwrap();

        let summary = store.summary();
        assert_eq!(summary.total_games, 1);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.best_time, Some(12.35));
        assert_eq!(words(&summary), vec!["apple"]);
        assert_eq!(summary.history[0].outcome, GameResult::Win);
    }

    #[test]
    fn faster_win_replaces_best_time() {
        let (_dir, store) = store();
        store.record_game("apple", true, Some(12.345)).unwrap();
        store.record_game("kiwi", true, Some(5.0)).unwrap();

        let summary = store.summary();
        assert_eq!(summary.best_time, Some(5.0));
        assert_eq!(words(&summary), vec!["kiwi", "apple"]);
    }

    #[test]
    fn slower_win_keeps_best_time() {
        let (_dir, store) = store();
        store.record_game("kiwi", true, Some(5.0)).unwrap();
        store.record_game("apple", true, Some(9.5)).unwrap();
        assert_eq!(store.summary().best_time, Some(5.0));
    }

    #[test]
    fn unrounded_time_compared() {
        let (_dir, store) = store();
        store.record_game("kiwi", true, Some(5.004)).unwrap();
        assert_eq!(store.summary().best_time, Some(5.0));

        // Faster than the stored 5.0, and rounds back to it
        store.record_game("fig", true, Some(4.999)).unwrap();
        assert_eq!(store.summary().best_time, Some(5.0));
        assert_eq!(store.summary().history[0].word, "fig");
    }

    #[test]
    fn losses_do_not_touch_best_time() {
        let (_dir, store) = store();
        store.record_game("cat", false, Some(1.0)).unwrap();
        store.record_game("dog", true, None).unwrap();

        let summary = store.summary();
        assert_eq!(summary.total_games, 2);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.best_time, None);
        assert!((summary.win_rate - 50.0).abs() < f64::EPSILON);
        assert_eq!(summary.history[1].outcome, GameResult::Loss);
    }

    #[test]
    fn history_keeps_twenty_newest() {
        let (_dir, store) = store();
        let start = Local.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
        for i in 0..21_i64 {
            let word = format!("word{}", char::from(b'a' + i as u8));
            store
                .record_game_at(&word, i % 2 == 0, Some(10.0), start + Duration::minutes(i))
                .unwrap();
        }

        let summary = store.summary();
        assert_eq!(summary.total_games, 21);
        assert_eq!(summary.history.len(), HISTORY_LIMIT);
        assert_eq!(summary.history[0].word, "wordu");
        assert_eq!(summary.history[19].word, "wordb");
        assert!(
            summary
                .history
                .windows(2)
                .all(|pair| pair[0].timestamp > pair[1].timestamp)
        );
    }

    #[test]
    fn corrupt_record_starts_over() {
        let (dir, store) = store();
        fs::write(dir.path().join("game_records.json"), "{\"total_games\": ").unwrap();

        assert_eq!(store.summary().total_games, 0);
        store.record_game("apple", false, None).unwrap();
        assert_eq!(store.summary().total_games, 1);
    }

    #[test]
    fn missing_fields_default() {
        let (dir, store) = store();
        fs::write(
            dir.path().join("game_records.json"),
            r#"{"total_games": 4, "wins": 1}"#,
        )
        .unwrap();

        let summary = store.summary();
        assert_eq!(summary.total_games, 4);
        assert_eq!(summary.best_time, None);
        assert!(summary.history.is_empty());
        assert!((summary.win_rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wins_never_exceed_games() {
        let (dir, store) = store();
        fs::write(
            dir.path().join("game_records.json"),
            r#"{"total_games": 2, "wins": 5}"#,
        )
        .unwrap();

        let summary = store.summary();
        assert_eq!(summary.wins, 2);
        assert!((summary.win_rate - 100.0).abs() < f64::EPSILON);

        store.record_game("kiwi", false, None).unwrap();
        let record = store.load();
        assert_eq!(record.total_games, 3);
        assert_eq!(record.wins, 2);
    }

    #[test]
    fn record_shape_on_disk() {
        let (dir, store) = store();
        store.record_game("apple", true, Some(3.0)).unwrap();

        let raw = fs::read_to_string(dir.path().join("game_records.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["total_games"], 1);
        assert_eq!(value["wins"], 1);
        assert_eq!(value["best_time"], 3.0);
        assert_eq!(value["history"][0]["word"], "apple");
        assert_eq!(value["history"][0]["result"], "win");
        assert!(value["history"][0]["time"].is_string());
    }
}
