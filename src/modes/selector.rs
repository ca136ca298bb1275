//! Target word selection for each play mode
//!
//! Every pick is a uniform choice over the exact candidate set of the mode.
//! Candidate lists are sorted before choosing so a seeded generator always
//! picks the same word.

use crate::core::Word;
use crate::game::{GameConfig, GameSession};
use crate::store::WordStore;
use crate::wordlists::DEFAULT_WORDS;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Difficulty bucket, defined by word length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Inclusive length bounds; `None` means unbounded
    #[must_use]
    pub const fn length_range(self) -> (usize, Option<usize>) {
        match self {
            Self::Beginner => (3, Some(5)),
            Self::Intermediate => (6, Some(8)),
            Self::Advanced => (9, None),
        }
    }

    #[must_use]
    pub const fn accepts(self, length: usize) -> bool {
        let (min, max) = self.length_range();
        length >= min
            && match max {
                Some(max) => length <= max,
                None => true,
            }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = SelectError;

    /// Accepts the level name or its menu number (1-3)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "beginner" => Ok(Self::Beginner),
            "2" | "intermediate" => Ok(Self::Intermediate),
            "3" | "advanced" => Ok(Self::Advanced),
            other => Err(SelectError::UnknownLevel(other.to_string())),
        }
    }
}

/// How a session's word and starting state are chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameMode {
    /// Any word whose length fits the level
    Difficulty(Level),
    /// Any word of one topic
    Topic(String),
    /// Any known word, or a built-in word when none exist
    Random,
    /// A word of one topic with a third of its letters shown up front
    HintStart(String),
    /// A random word against the clock
    Challenge,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Difficulty(level) => write!(f, "{level}"),
            Self::Topic(topic) => write!(f, "topic: {topic}"),
            Self::Random => f.write_str("random"),
            Self::HintStart(topic) => write!(f, "hint start: {topic}"),
            Self::Challenge => f.write_str("challenge"),
        }
    }
}

/// Error type for word selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("Topic '{0}' does not exist")]
    UnknownTopic(String),
    #[error("Topic '{0}' has no words yet")]
    EmptyTopic(String),
    #[error("No {0} words available")]
    NoEligibleWord(Level),
    #[error("Unknown difficulty '{0}'; choose beginner, intermediate or advanced")]
    UnknownLevel(String),
}

/// Picks target words from a `WordStore`
#[derive(Debug, Clone, Copy)]
pub struct ModeSelector<'a> {
    store: &'a WordStore,
}

impl<'a> ModeSelector<'a> {
    #[must_use]
    pub const fn new(store: &'a WordStore) -> Self {
        Self { store }
    }

    /// Build a ready-to-play session for `mode`
    ///
    /// Challenge mode replaces any time limit in `config` with the challenge limit;
    /// every other mode plays untimed.
    ///
    /// # Errors
    ///
    /// Propagates the selection error of the mode.
    pub fn start<R: Rng + ?Sized>(
        &self,
        mode: &GameMode,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<GameSession, SelectError> {
        let untimed = config.untimed();
        let session = match mode {
            GameMode::Difficulty(level) => {
                GameSession::new(self.pick_by_level(*level, rng)?, &untimed)
            }
            GameMode::Topic(topic) => GameSession::new(self.pick_by_topic(topic, rng)?, &untimed),
            GameMode::Random => GameSession::new(self.pick_random(rng), &untimed),
            GameMode::HintStart(topic) => {
                let word = self.pick_by_topic(topic, rng)?;
                let positions = hint_positions(word.len(), rng);
                GameSession::with_revealed(word, &untimed, &positions)
            }
            GameMode::Challenge => GameSession::new(
                self.pick_random(rng),
                &config.with_time_limit(GameConfig::CHALLENGE_TIME_LIMIT),
            ),
        };
        debug!(%mode, "session prepared");
        Ok(session)
    }

    /// Uniform pick among all known words whose length fits `level`
    ///
    /// # Errors
    ///
    /// Returns `SelectError::NoEligibleWord` if no word fits.
    pub fn pick_by_level<R: Rng + ?Sized>(
        &self,
        level: Level,
        rng: &mut R,
    ) -> Result<Word, SelectError> {
        let eligible: Vec<Word> = self
            .candidate_pool()
            .into_iter()
            .filter(|word| level.accepts(word.len()))
            .collect();
        eligible
            .choose(rng)
            .cloned()
            .ok_or(SelectError::NoEligibleWord(level))
    }

    /// Uniform pick among one topic's words
    ///
    /// # Errors
    ///
    /// - `SelectError::UnknownTopic` if the topic has no word list
    /// - `SelectError::EmptyTopic` if the list is empty
    pub fn pick_by_topic<R: Rng + ?Sized>(
        &self,
        topic: &str,
        rng: &mut R,
    ) -> Result<Word, SelectError> {
        let words = self
            .store
            .topic_words(topic)
            .map_err(|_| SelectError::UnknownTopic(topic.trim().to_string()))?;
        let words = to_words(words);
        words
            .choose(rng)
            .cloned()
            .ok_or_else(|| SelectError::EmptyTopic(topic.trim().to_lowercase()))
    }

    /// Uniform pick among all known words, never failing
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let pool = self.candidate_pool();
        match pool.choose(rng) {
            Some(word) => word.clone(),
            None => builtin_words()
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| unreachable!("built-in word list is never empty")),
        }
    }

    /// Every topic word without duplicates, or the built-in list if there are none
    fn candidate_pool(&self) -> Vec<Word> {
        let words = to_words(self.store.all_words());
        if words.is_empty() {
            info!("no topic words found, using the built-in word list");
            return builtin_words();
        }
        words
    }
}

/// `floor(length / 3)` distinct positions, chosen uniformly without replacement
pub fn hint_positions<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Vec<usize> {
    let mut positions = rand::seq::index::sample(rng, length, length / 3).into_vec();
    positions.sort_unstable();
    positions
}

fn to_words(words: Vec<String>) -> Vec<Word> {
    words.into_iter().filter_map(|w| Word::new(w).ok()).collect()
}

fn builtin_words() -> Vec<Word> {
    let mut words: Vec<Word> = DEFAULT_WORDS
        .iter()
        .filter_map(|&w| Word::new(w).ok())
        .collect();
    words.sort_by(|a, b| a.text().cmp(b.text()));
    words
}
