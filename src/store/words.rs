//! Topic word lists, word meanings and the missed-word list
//!
//! Each topic is a text file with one word per line. Meanings live in a single
//! JSON map shared by all topics, and missed words in a JSON array. Every
//! operation reads the current file content, so several handles on the same
//! data directory always agree.

use super::StoreError;
use super::file::{read_json_or_default, read_lines, write_json, write_lines};
use crate::core::Word;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const TOPIC_EXTENSION: &str = "txt";

/// Meaning and usage example recorded for a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub meaning: String,
    pub example: String,
}

type MeaningMap = BTreeMap<String, Meaning>;

/// Persistent word storage
#[derive(Debug, Clone)]
pub struct WordStore {
    lists_dir: PathBuf,
    meanings_path: PathBuf,
    missed_path: PathBuf,
}

impl WordStore {
    /// Open a store over the given locations
    ///
    /// Nothing is touched on disk until the first write; missing locations read as empty.
    #[must_use]
    pub fn new(
        lists_dir: impl Into<PathBuf>,
        meanings_path: impl Into<PathBuf>,
        missed_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            lists_dir: lists_dir.into(),
            meanings_path: meanings_path.into(),
            missed_path: missed_path.into(),
        }
    }

    /// Known topic names, sorted
    #[must_use]
    pub fn list_topics(&self) -> Vec<String> {
        self.topic_files().into_keys().collect()
    }

    /// Create an empty topic
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidTopicName` unless the name is non-empty and letters only
    /// - `StoreError::TopicExists` if the topic is already present
    /// - `StoreError::StorageWriteFailed` if the list file cannot be written
    pub fn create_topic(&self, name: &str) -> Result<(), StoreError> {
        let topic = normalize_topic(name)?;
        if self.topic_files().contains_key(&topic) {
            return Err(StoreError::TopicExists(topic));
        }
        write_lines(&self.topic_path(&topic), &[])?;
        info!(topic = %topic, "topic created");
        Ok(())
    }

    /// Delete a topic's word list
    ///
    /// Meanings recorded for its words stay in the shared meaning map.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidTopicName` / `StoreError::TopicNotFound`
    /// - `StoreError::StorageWriteFailed` if the file cannot be removed
    pub fn delete_topic(&self, name: &str) -> Result<(), StoreError> {
        let topic = normalize_topic(name)?;
        let Some(path) = self.topic_files().remove(&topic) else {
            return Err(StoreError::TopicNotFound(topic));
        };
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(topic = %topic, "topic deleted");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::TopicNotFound(topic)),
            Err(source) => Err(StoreError::StorageWriteFailed { path, source }),
        }
    }

    /// Words of one topic, in stored order
    ///
    /// # Errors
    ///
    /// `StoreError::InvalidTopicName` / `StoreError::TopicNotFound`
    pub fn topic_words(&self, name: &str) -> Result<Vec<String>, StoreError> {
        let topic = normalize_topic(name)?;
        self.read_topic(&topic)
            .ok_or(StoreError::TopicNotFound(topic))
    }

    /// Every non-empty topic with its words, sorted by topic name
    #[must_use]
    pub fn all_words_by_topic(&self) -> Vec<(String, Vec<String>)> {
        self.list_topics()
            .into_iter()
            .filter_map(|topic| {
                let words = self.read_topic(&topic)?;
                (!words.is_empty()).then_some((topic, words))
            })
            .collect()
    }

    /// Union of every topic's words without duplicates, sorted
    #[must_use]
    pub fn all_words(&self) -> Vec<String> {
        let unique: FxHashSet<String> = self
            .list_topics()
            .iter()
            .filter_map(|topic| self.read_topic(topic))
            .flatten()
            .collect();
        let mut words: Vec<String> = unique.into_iter().collect();
        words.sort();
        words
    }

    /// Add a word to a topic and record its meaning
    ///
    /// The meaning entry is shared across topics: a later insert of the same word
    /// anywhere overwrites it.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidWord` unless the word is letters only
    /// - `StoreError::InvalidTopicName` / `StoreError::TopicNotFound`
    /// - `StoreError::DuplicateWord` if the topic already holds the word
    /// - `StoreError::StorageWriteFailed` if either file cannot be written
    pub fn add_word(
        &self,
        topic: &str,
        word: &str,
        meaning: &str,
        example: &str,
    ) -> Result<(), StoreError> {
        let word = validate_word(word)?;
        let topic = normalize_topic(topic)?;
        let mut words = self
            .read_topic(&topic)
            .ok_or_else(|| StoreError::TopicNotFound(topic.clone()))?;
        if words.contains(&word) {
            return Err(StoreError::DuplicateWord { topic, word });
        }

        words.push(word.clone());
        write_lines(&self.topic_path(&topic), &words)?;

        let mut meanings: MeaningMap = read_json_or_default(&self.meanings_path);
        meanings.insert(
            word.clone(),
            Meaning {
                meaning: meaning.to_string(),
                example: example.to_string(),
            },
        );
        write_json(&self.meanings_path, &meanings)?;
        info!(topic = %topic, word = %word, "word added");
        Ok(())
    }

    /// Remove a word from a topic and drop its meaning
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidTopicName` / `StoreError::TopicNotFound`
    /// - `StoreError::WordNotFound` if the topic does not hold the word
    /// - `StoreError::StorageWriteFailed` if either file cannot be written
    pub fn delete_word(&self, topic: &str, word: &str) -> Result<(), StoreError> {
        let topic = normalize_topic(topic)?;
        let word = word.trim().to_lowercase();
        let mut words = self
            .read_topic(&topic)
            .ok_or_else(|| StoreError::TopicNotFound(topic.clone()))?;
        let Some(index) = words.iter().position(|w| *w == word) else {
            return Err(StoreError::WordNotFound { topic, word });
        };

        words.remove(index);
        write_lines(&self.topic_path(&topic), &words)?;

        let mut meanings: MeaningMap = read_json_or_default(&self.meanings_path);
        if meanings.remove(&word).is_some() {
            write_json(&self.meanings_path, &meanings)?;
        }
        info!(topic = %topic, word = %word, "word deleted");
        Ok(())
    }

    /// Meaning recorded for a word, case-insensitive
    #[must_use]
    pub fn meaning(&self, word: &str) -> Option<Meaning> {
        let mut meanings: MeaningMap = read_json_or_default(&self.meanings_path);
        meanings.remove(&word.trim().to_lowercase())
    }

    /// Add a word to the missed-word list
    ///
    /// Returns `false` if the word was already listed.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidWord` unless the word is letters only
    /// - `StoreError::StorageWriteFailed` if the list cannot be written
    pub fn add_missed_word(&self, word: &str) -> Result<bool, StoreError> {
        let word = validate_word(word)?;
        let mut missed: Vec<String> = read_json_or_default(&self.missed_path);
        if missed.contains(&word) {
            return Ok(false);
        }
        missed.push(word);
        write_json(&self.missed_path, &missed)?;
        info!(count = missed.len(), "missed word saved");
        Ok(true)
    }

    /// Missed words, sorted
    #[must_use]
    pub fn list_missed_words(&self) -> Vec<String> {
        let mut missed: Vec<String> = read_json_or_default(&self.missed_path);
        missed.sort();
        missed.dedup();
        missed
    }

    /// Topic name to its list file
    ///
    /// File names match topics case-insensitively; when several spellings of one
    /// topic exist, the all-lowercase file wins.
    fn topic_files(&self) -> BTreeMap<String, PathBuf> {
        let entries = match fs::read_dir(&self.lists_dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!(dir = %self.lists_dir.display(), error = %e, "cannot list topics");
                }
                return BTreeMap::new();
            }
        };

        let mut files = BTreeMap::new();
        for path in entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == TOPIC_EXTENSION))
        {
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let Ok(topic) = normalize_topic(stem) else {
                continue;
            };
            let exact = stem == topic;
            match files.entry(topic) {
                Entry::Vacant(slot) => {
                    slot.insert(path);
                }
                Entry::Occupied(mut slot) => {
                    if exact {
                        slot.insert(path);
                    }
                }
            }
        }
        files
    }

    /// Existing list file of a topic, or where a new one goes
    fn topic_path(&self, topic: &str) -> PathBuf {
        self.topic_files()
            .remove(topic)
            .unwrap_or_else(|| self.lists_dir.join(format!("{topic}.{TOPIC_EXTENSION}")))
    }

    /// Valid, de-duplicated words of a topic; `None` if the topic has no file
    fn read_topic(&self, topic: &str) -> Option<Vec<String>> {
        let path = self.topic_path(topic);
        let lines = read_lines(&path)?;
        Some(clean_word_list(&path, lines))
    }
}

fn normalize_topic(name: &str) -> Result<String, StoreError> {
    let topic = name.trim().to_lowercase();
    if topic.is_empty() || !topic.bytes().all(|c| c.is_ascii_lowercase()) {
        return Err(StoreError::InvalidTopicName(name.trim().to_string()));
    }
    Ok(topic)
}

fn validate_word(word: &str) -> Result<String, StoreError> {
    Word::new(word)
        .map(|w| w.text().to_string())
        .map_err(|source| StoreError::InvalidWord {
            word: word.trim().to_string(),
            source,
        })
}

fn clean_word_list(path: &Path, lines: Vec<String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::with_capacity(lines.len());
    for line in lines {
        match Word::new(&line) {
            Ok(word) => {
                if seen.insert(word.text().to_string()) {
                    words.push(word.text().to_string());
                }
            }
            Err(e) => warn!(path = %path.display(), entry = %line, error = %e, "skipping invalid word"),
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataDir;

    fn store() -> (tempfile::TempDir, WordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DataDir::new(dir.path()).word_store();
        (dir, store)
    }

    #[test]
    fn empty_store_reads_empty() {
        let (_dir, store) = store();
        assert!(store.list_topics().is_empty());
        assert!(store.all_words().is_empty());
        assert!(store.list_missed_words().is_empty());
        assert_eq!(store.meaning("cat"), None);
    }

    #[test]
    fn topics_listed_sorted() {
        let (_dir, store) = store();
        store.create_topic("fruits").unwrap();
        store.create_topic("Animals").unwrap();
        store.create_topic("jobs").unwrap();

        assert_eq!(store.list_topics(), vec!["animals", "fruits", "jobs"]);
    }

    #[test]
    fn create_topic_validates_name() {
        let (_dir, store) = store();
        for name in ["", "  ", "my topic", "topic1", "../etc"] {
            assert!(matches!(
                store.create_topic(name),
                Err(StoreError::InvalidTopicName(_))
            ));
        }
        assert!(store.list_topics().is_empty());
    }

    #[test]
    fn create_topic_twice_fails() {
        let (_dir, store) = store();
        store.create_topic("animals").unwrap();
        assert!(matches!(
            store.create_topic("ANIMALS"),
            Err(StoreError::TopicExists(t)) if t == "animals"
        ));
    }

    #[test]
    fn delete_topic_removes_list_but_keeps_meanings() {
        let (_dir, store) = store();
        store.create_topic("animals").unwrap();
        store.add_word("animals", "cat", "a small feline", "The cat sleeps.").unwrap();

        store.delete_topic("animals").unwrap();
        assert!(store.list_topics().is_empty());
        assert!(matches!(
            store.topic_words("animals"),
            Err(StoreError::TopicNotFound(_))
        ));
        assert_eq!(store.meaning("cat").unwrap().meaning, "a small feline");
    }

    #[test]
    fn delete_missing_topic_fails() {
        let (_dir, store) = store();
        assert!(matches!(
            store.delete_topic("ghosts"),
            Err(StoreError::TopicNotFound(t)) if t == "ghosts"
        ));
    }

    #[test]
    fn add_word_records_meaning() {
        let (_dir, store) = store();
        store.create_topic("fruits").unwrap();
        store.add_word("fruits", "Apple", "a red fruit", "An apple a day.").unwrap();

        assert_eq!(store.topic_words("fruits").unwrap(), vec!["apple"]);
        assert_eq!(
            store.meaning("APPLE"),
            Some(Meaning {
                meaning: "a red fruit".to_string(),
                example: "An apple a day.".to_string(),
            })
        );
    }

    #[test]
    fn add_word_twice_is_rejected() {
        let (_dir, store) = store();
        store.create_topic("animals").unwrap();
        store.add_word("animals", "cat", "m", "e").unwrap();

        let err = store.add_word("animals", "CAT", "other", "other").unwrap_err();
        assert!(matches!(err, StoreError::DuplicateWord { .. }));
        assert_eq!(store.topic_words("animals").unwrap(), vec!["cat"]);
        assert_eq!(store.meaning("cat").unwrap().meaning, "m");
    }

    #[test]
    fn add_word_requires_topic_and_valid_word() {
        let (_dir, store) = store();
        assert!(matches!(
            store.add_word("animals", "cat", "m", "e"),
            Err(StoreError::TopicNotFound(_))
        ));

        store.create_topic("animals").unwrap();
        assert!(matches!(
            store.add_word("animals", "big cat", "m", "e"),
            Err(StoreError::InvalidWord { .. })
        ));
        assert!(store.topic_words("animals").unwrap().is_empty());
        assert_eq!(store.meaning("big cat"), None);
    }

    #[test]
    fn same_word_in_two_topics_last_meaning_wins() {
        let (_dir, store) = store();
        store.create_topic("animals").unwrap();
        store.create_topic("tech").unwrap();
        store.add_word("animals", "python", "a snake", "e1").unwrap();
        store.add_word("tech", "python", "a language", "e2").unwrap();

        assert_eq!(store.meaning("python").unwrap().meaning, "a language");
        assert_eq!(store.all_words(), vec!["python"]);
    }

    #[test]
    fn delete_word_drops_meaning() {
        let (_dir, store) = store();
        store.create_topic("animals").unwrap();
        store.add_word("animals", "cat", "m", "e").unwrap();
        store.add_word("animals", "lion", "m2", "e2").unwrap();

        store.delete_word("animals", "Cat").unwrap();
        assert_eq!(store.topic_words("animals").unwrap(), vec!["lion"]);
        assert_eq!(store.meaning("cat"), None);
        assert!(store.meaning("lion").is_some());
    }

    #[test]
    fn delete_word_errors() {
        let (_dir, store) = store();
        assert!(matches!(
            store.delete_word("animals", "cat"),
            Err(StoreError::TopicNotFound(_))
        ));
        store.create_topic("animals").unwrap();
        assert!(matches!(
            store.delete_word("animals", "cat"),
            Err(StoreError::WordNotFound { .. })
        ));
    }

    #[test]
    fn hand_edited_topic_file_is_cleaned() {
        let (dir, store) = store();
        let lists = dir.path().join("word_lists");
        fs::create_dir_all(&lists).unwrap();
        fs::write(lists.join("animals.txt"), "Cat\ncat\n\nno way\nlion\n").unwrap();
        fs::write(lists.join("notes.md"), "ignored").unwrap();

        assert_eq!(store.list_topics(), vec!["animals"]);
        assert_eq!(store.topic_words("animals").unwrap(), vec!["cat", "lion"]);
    }

    #[test]
    fn all_words_deduplicates_across_topics() {
        let (_dir, store) = store();
        store.create_topic("a").unwrap();
        store.create_topic("b").unwrap();
        store.create_topic("empty").unwrap();
        store.add_word("a", "cat", "", "").unwrap();
        store.add_word("a", "lion", "", "").unwrap();
        store.add_word("b", "cat", "", "").unwrap();

        assert_eq!(store.all_words(), vec!["cat", "lion"]);
        assert_eq!(
            store.all_words_by_topic(),
            vec![
                ("a".to_string(), vec!["cat".to_string(), "lion".to_string()]),
                ("b".to_string(), vec!["cat".to_string()]),
            ]
        );
    }

    #[test]
    fn missed_words_are_unique_and_sorted() {
        let (_dir, store) = store();
        assert!(store.add_missed_word("zebra").unwrap());
        assert!(store.add_missed_word("apple").unwrap());
        assert!(!store.add_missed_word("zebra").unwrap());
        assert!(!store.add_missed_word("Apple").unwrap());

        assert_eq!(store.list_missed_words(), vec!["apple", "zebra"]);
    }

    #[test]
    fn corrupt_missed_list_starts_over() {
        let (dir, store) = store();
        fs::write(dir.path().join("missed_words.json"), "[\"half").unwrap();

        assert!(store.list_missed_words().is_empty());
        assert!(store.add_missed_word("kiwi").unwrap());
        assert_eq!(store.list_missed_words(), vec!["kiwi"]);
    }

    #[test]
    fn corrupt_meanings_start_over() {
        let (dir, store) = store();
        fs::write(dir.path().join("word_meanings.json"), "not json").unwrap();
        store.create_topic("fruits").unwrap();

        assert_eq!(store.meaning("apple"), None);
        store.add_word("fruits", "apple", "m", "e").unwrap();
        assert_eq!(store.meaning("apple").unwrap().example, "e");
    }

    #[test]
    fn mixed_case_topic_file_is_usable() {
        let (dir, store) = store();
        let lists = dir.path().join("word_lists");
        fs::create_dir_all(&lists).unwrap();
        fs::write(lists.join("Animals.txt"), "cat\nlion\n").unwrap();

        assert_eq!(store.list_topics(), vec!["animals"]);
        assert_eq!(store.topic_words("ANIMALS").unwrap(), vec!["cat", "lion"]);
        assert_eq!(store.all_words(), vec!["cat", "lion"]);
        assert!(matches!(
            store.create_topic("animals"),
            Err(StoreError::TopicExists(_))
        ));

        store.add_word("animals", "tiger", "big cat", "A tiger hunts.").unwrap();
        assert_eq!(
            fs::read_to_string(lists.join("Animals.txt")).unwrap(),
            "cat\nlion\ntiger\n"
        );
        let names: Vec<String> = fs::read_dir(&lists)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Animals.txt"]);

        store.delete_topic("animals").unwrap();
        assert!(store.list_topics().is_empty());
        assert!(fs::read_dir(&lists).unwrap().next().is_none());
    }
}
