//! One puzzle attempt
//!
//! `GameSession` owns the transient state of a single play-through: which
//! positions are revealed, which letters were tried, and how many attempts and
//! hints remain. Terminal states are sticky; every call after the session ends
//! is rejected without touching state.

use super::config::GameConfig;
use super::outcome::GameOutcome;
use crate::core::{Letter, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Won,
    LostByAttempts,
    LostByTimeout,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Active => "in progress",
            Self::Won => "won",
            Self::LostByAttempts => "lost (out of attempts)",
            Self::LostByTimeout => "lost (time is up)",
        };
        f.write_str(text)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    /// The letter is in the word; `revealed` positions were uncovered
    Hit { letter: Letter, revealed: usize },
    /// The letter is absent; one attempt was consumed
    Miss { letter: Letter },
    /// The time limit had already passed; the guess was not evaluated
    TimedOut,
}

/// Result of an accepted hint request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintFeedback {
    Revealed { position: usize, letter: Letter },
    /// The time limit had already passed; no hint was spent
    TimedOut,
}

/// Rejected guess; session state is unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("'{0}' is not a single letter; enter one letter from a to z")]
    InvalidInput(String),
    #[error("You already tried '{0}'")]
    Duplicate(Letter),
    #[error("The game is already over ({0})")]
    GameOver(SessionState),
}

/// Rejected hint request; session state is unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("No hints left")]
    Exhausted,
    #[error("The game is already over ({0})")]
    GameOver(SessionState),
}

/// State machine for one puzzle attempt
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    revealed: Vec<bool>,
    guessed: BTreeSet<Letter>,
    max_attempts: u32,
    attempts_remaining: u32,
    hints_remaining: u32,
    time_limit: Option<Duration>,
    started_at: Instant,
    state: SessionState,
    elapsed: Option<Duration>,
}

impl GameSession {
    /// Start a session now with every position blank
    #[must_use]
    pub fn new(target: Word, config: &GameConfig) -> Self {
        Self::start_at(target, config, &[], Instant::now())
    }

    /// Start a session now with some positions already shown
    ///
    /// The letters at those positions count as already guessed.
    #[must_use]
    pub fn with_revealed(target: Word, config: &GameConfig, positions: &[usize]) -> Self {
        Self::start_at(target, config, positions, Instant::now())
    }

    /// Start a session with an explicit start instant
    ///
    /// Out-of-range positions are ignored.
    #[must_use]
    pub fn start_at(
        target: Word,
        config: &GameConfig,
        positions: &[usize],
        started_at: Instant,
    ) -> Self {
        let mut revealed = vec![false; target.len()];
        let mut guessed = BTreeSet::new();
        for &position in positions.iter().filter(|&&p| p < target.len()) {
            revealed[position] = true;
            guessed.insert(Letter::from_byte(target.char_at(position)));
        }

        let mut session = Self {
            target,
            revealed,
            guessed,
            max_attempts: config.max_attempts,
            attempts_remaining: config.max_attempts,
            hints_remaining: config.hints,
            time_limit: config.time_limit,
            started_at,
            state: SessionState::Active,
            elapsed: None,
        };
        debug!(
            length = session.target.len(),
            pre_revealed = positions.len(),
            timed = session.time_limit.is_some(),
            "session started"
        );
        session.evaluate(started_at);
        session
    }

    /// Submit raw user input as a guess, sampling the clock now
    ///
    /// # Errors
    ///
    /// See [`GameSession::submit_guess_at`].
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessFeedback, GuessError> {
        self.submit_guess_at(input, Instant::now())
    }

    /// Submit raw user input as a guess at instant `now`
    ///
    /// In timed sessions the clock is checked first: an expired session moves to
    /// `LostByTimeout` and the input is not evaluated.
    ///
    /// # Errors
    ///
    /// - `GuessError::GameOver` if the session already ended
    /// - `GuessError::InvalidInput` unless the input is exactly one letter
    /// - `GuessError::Duplicate` if the letter was already tried
    pub fn submit_guess_at(
        &mut self,
        input: &str,
        now: Instant,
    ) -> Result<GuessFeedback, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::GameOver(self.state));
        }
        if self.tick(now) {
            return Ok(GuessFeedback::TimedOut);
        }

        let letter =
            Letter::parse(input).ok_or_else(|| GuessError::InvalidInput(input.trim().to_string()))?;
        if self.guessed.contains(&letter) {
            return Err(GuessError::Duplicate(letter));
        }
        self.guessed.insert(letter);

        let positions = self.target.positions_of(letter.byte());
        let feedback = if positions.is_empty() {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessFeedback::Miss { letter }
        } else {
            let mut uncovered = 0;
            for &position in positions {
                if !self.revealed[position] {
                    self.revealed[position] = true;
                    uncovered += 1;
                }
            }
            GuessFeedback::Hit {
                letter,
                revealed: uncovered,
            }
        };
        debug!(?feedback, attempts_remaining = self.attempts_remaining, "guess evaluated");

        self.evaluate(now);
        Ok(feedback)
    }

    /// Reveal one random blank position, sampling the clock now
    ///
    /// # Errors
    ///
    /// See [`GameSession::request_hint_at`].
    pub fn request_hint<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<HintFeedback, HintError> {
        self.request_hint_at(rng, Instant::now())
    }

    /// Reveal one uniformly chosen blank position at instant `now`
    ///
    /// Spends a hint, never an attempt. Revealing the last blank wins the game, so
    /// a fully shown word is always reported as `HintError::GameOver`.
    ///
    /// # Errors
    ///
    /// - `HintError::GameOver` if the session already ended
    /// - `HintError::Exhausted` if no hints remain
    pub fn request_hint_at<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: Instant,
    ) -> Result<HintFeedback, HintError> {
        if self.state.is_terminal() {
            return Err(HintError::GameOver(self.state));
        }
        if self.tick(now) {
            return Ok(HintFeedback::TimedOut);
        }
        if self.hints_remaining == 0 {
            return Err(HintError::Exhausted);
        }

        let blanks: Vec<usize> = self.blank_positions().collect();
        // Active sessions always have a blank: the last reveal ends the game
        let Some(&position) = blanks.choose(rng) else {
            unreachable!("active session without blank positions");
        };

        self.revealed[position] = true;
        self.hints_remaining -= 1;
        let letter = Letter::from_byte(self.target.char_at(position));
        debug!(position, hints_remaining = self.hints_remaining, "hint revealed");

        self.evaluate(now);
        Ok(HintFeedback::Revealed { position, letter })
    }

    /// Enforce the time limit at instant `now`
    ///
    /// Returns true if this call moved the session to `LostByTimeout`.
    /// Untimed and already-finished sessions are never affected.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(limit) = self.time_limit else {
            return false;
        };
        if self.state.is_terminal() || now.saturating_duration_since(self.started_at) < limit {
            return false;
        }
        self.state = SessionState::LostByTimeout;
        debug!(word = %self.target, "session timed out");
        true
    }

    fn evaluate(&mut self, now: Instant) {
        if self.blanks_remaining() == 0 {
            self.state = SessionState::Won;
            self.elapsed = Some(now.saturating_duration_since(self.started_at));
            debug!(word = %self.target, elapsed = ?self.elapsed, "session won");
        } else if self.attempts_remaining == 0 {
            self.state = SessionState::LostByAttempts;
            debug!(word = %self.target, "session lost");
        }
    }

    fn blank_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed
            .iter()
            .enumerate()
            .filter_map(|(i, &shown)| (!shown).then_some(i))
    }

    /// Outcome to forward to the stores, once the session has ended
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.is_terminal().then(|| GameOutcome {
            word: self.target.text().to_string(),
            won: self.state.is_win(),
            elapsed: self.elapsed,
        })
    }

    /// Time left before the limit, if the session is timed
    #[must_use]
    pub fn remaining_time(&self, now: Instant) -> Option<Duration> {
        self.time_limit
            .map(|limit| limit.saturating_sub(now.saturating_duration_since(self.started_at)))
    }

    /// Each position: `Some(letter)` if shown, `None` if blank
    #[must_use]
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.revealed
            .iter()
            .enumerate()
            .map(|(i, &shown)| shown.then(|| self.target.char_at(i) as char))
            .collect()
    }

    #[must_use]
    pub fn blanks_remaining(&self) -> usize {
        self.revealed.iter().filter(|&&shown| !shown).count()
    }

    /// Letters tried so far, in alphabetical order
    pub fn guessed_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.guessed.iter().copied()
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    #[must_use]
    pub const fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[must_use]
    pub const fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Time taken to win, measured when the last blank was revealed
    #[must_use]
    pub const fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }
}
