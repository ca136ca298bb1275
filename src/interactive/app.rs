//! TUI application state and logic

use crate::game::{
    GameConfig, GameSession, GuessFeedback, HintFeedback, SessionState, report_outcome,
};
use crate::modes::{GameMode, ModeSelector, SelectError};
use crate::output::formatters::format_elapsed;
use crate::store::{StatsStore, StatsSummary, WordStore};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// How long to wait for a key before re-checking the clock
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: GameSession,
    pub mode: GameMode,
    pub config: GameConfig,
    pub messages: Vec<Message>,
    pub stats: StatsSummary,
    pub should_quit: bool,
    words: &'a WordStore,
    stats_store: &'a StatsStore,
    rng: StdRng,
    reported: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Start the first game of `mode`
    ///
    /// # Errors
    ///
    /// Returns the selection error if `mode` has no word to play.
    pub fn new(
        words: &'a WordStore,
        stats_store: &'a StatsStore,
        config: GameConfig,
        mode: GameMode,
        mut rng: StdRng,
    ) -> Result<Self, SelectError> {
        let session = ModeSelector::new(words).start(&mode, &config, &mut rng)?;
        let mut app = Self {
            session,
            mode,
            config,
            messages: Vec::new(),
            stats: stats_store.summary(),
            should_quit: false,
            words,
            stats_store,
            rng,
            reported: false,
        };
        app.announce_start();
        Ok(app)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.session.state().is_terminal()
    }

    /// React to one key press at instant `now`
    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter if self.is_over() => self.new_game(),
            KeyCode::Char('q') if self.is_over() => self.should_quit = true,
            KeyCode::Tab if !self.is_over() => self.hint(now),
            KeyCode::Char(c) if !self.is_over() => self.guess(c, now),
            _ => {}
        }
    }

    pub fn guess(&mut self, letter: char, now: Instant) {
        match self.session.submit_guess_at(&letter.to_string(), now) {
            Ok(GuessFeedback::Hit { letter, revealed }) => self.add_message(
                &format!("'{letter}' is in the word ({revealed} shown)"),
                MessageStyle::Success,
            ),
            Ok(GuessFeedback::Miss { letter }) => self.add_message(
                &format!(
                    "No '{letter}'. {} attempts left",
                    self.session.attempts_remaining()
                ),
                MessageStyle::Error,
            ),
            Ok(GuessFeedback::TimedOut) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.finish_if_over();
    }

    pub fn hint(&mut self, now: Instant) {
        match self.session.request_hint_at(&mut self.rng, now) {
            Ok(HintFeedback::Revealed { position, letter }) => self.add_message(
                &format!("Hint: letter {} is '{letter}'", position + 1),
                MessageStyle::Info,
            ),
            Ok(HintFeedback::TimedOut) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.finish_if_over();
    }

    /// Enforce the time limit between key presses
    pub fn tick(&mut self, now: Instant) {
        if self.session.tick(now) {
            self.finish_if_over();
        }
    }

    pub fn new_game(&mut self) {
        match ModeSelector::new(self.words).start(&self.mode, &self.config, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.reported = false;
                self.messages.clear();
                self.announce_start();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    fn announce_start(&mut self) {
        let text = format!(
            "New game ({}): {} letters. Type a letter to guess.",
            self.mode,
            self.session.target().len()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Report the outcome once per session
    fn finish_if_over(&mut self) {
        if self.reported {
            return;
        }
        let Some(outcome) = self.session.outcome() else {
            return;
        };
        self.reported = true;

        match self.session.state() {
            SessionState::Won => {
                let time = outcome
                    .elapsed_seconds()
                    .map(format_elapsed)
                    .unwrap_or_default();
                self.add_message(
                    &format!("🎉 You got '{}' in {time}!", outcome.word),
                    MessageStyle::Success,
                );
            }
            SessionState::LostByTimeout => self.add_message(
                &format!("⏰ Time is up! The word was '{}'", outcome.word),
                MessageStyle::Error,
            ),
            _ => self.add_message(
                &format!("💀 Out of attempts! The word was '{}'", outcome.word),
                MessageStyle::Error,
            ),
        }

        if let Err(err) = report_outcome(&outcome, self.stats_store, self.words) {
            self.add_message(&format!("Could not save: {err}"), MessageStyle::Error);
        }
        self.stats = self.stats_store.summary();
        info!(word = %outcome.word, won = outcome.won, "tui game finished");
        self.add_message("Enter: new game | q/Esc: quit", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app, Instant::now()))?;

        // Poll so the countdown keeps moving without input
        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key_at(key, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
