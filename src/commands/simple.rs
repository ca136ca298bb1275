//! Simple interactive CLI mode
//!
//! Numbered text menus for playing, reviewing words and managing the word lists.
//! Every recoverable error is printed and the menu re-prompts.

use super::play::play_session;
use super::read_input;
use crate::game::GameConfig;
use crate::modes::{GameMode, Level, ModeSelector};
use crate::output::{
    print_all_words, print_how_to_play, print_meaning, print_numbered, print_summary,
};
use crate::store::{StatsStore, WordStore};
use colored::Colorize;
use rand::Rng;
use std::fmt::Display;
use std::io::{self, BufRead};
use tracing::info;

/// Menu-driven shell over the stores
pub struct Shell<'a, R, G: ?Sized> {
    input: R,
    rng: &'a mut G,
    words: &'a WordStore,
    stats: &'a StatsStore,
    config: GameConfig,
}

/// What a submenu asks of its parent
enum Flow {
    Stay,
    Back,
    /// Input is exhausted; unwind every menu
    Quit,
}

impl<'a, R: BufRead, G: Rng + ?Sized> Shell<'a, R, G> {
    pub fn new(
        input: R,
        rng: &'a mut G,
        words: &'a WordStore,
        stats: &'a StatsStore,
        config: GameConfig,
    ) -> Self {
        Self {
            input,
            rng,
            words,
            stats,
            config,
        }
    }

    /// Rules used for the next game
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Run the main menu until the player quits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            println!("\n{}", "═".repeat(32).bright_cyan());
            println!("{}", "     🎯 HANGMAN WORD GAME 🎯".bright_cyan().bold());
            println!("{}", "═".repeat(32).bright_cyan());
            println!("1. Play");
            println!("2. Study");
            println!("3. Manage & settings");
            println!("4. Quit");

            let Some(choice) = self.prompt(">> Choose a menu")? else {
                return Ok(());
            };
            let flow = match choice.as_str() {
                "1" => self.play_menu()?,
                "2" => self.study_menu()?,
                "3" => self.manage_menu()?,
                "4" | "q" | "quit" => Flow::Quit,
                _ => {
                    invalid("Enter a number from 1 to 4.");
                    Flow::Stay
                }
            };
            if matches!(flow, Flow::Quit) {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }

    fn play_menu(&mut self) -> io::Result<Flow> {
        loop {
            println!("\n{}", "🎮 PLAY".bright_cyan().bold());
            println!("1. By difficulty (beginner / intermediate / advanced)");
            println!("2. By topic");
            println!("3. Hint start (some letters shown)");
            println!("4. Challenge (60 seconds)");
            println!("5. Back");

            let Some(choice) = self.prompt(">> Choose a mode")? else {
                return Ok(Flow::Quit);
            };
            let mode = match choice.as_str() {
                "1" => {
                    for (i, level) in Level::ALL.iter().enumerate() {
                        let (min, max) = level.length_range();
                        let range = max.map_or_else(|| format!("{min}+"), |max| format!("{min}-{max}"));
                        println!("{}. {level} ({range} letters)", i + 1);
                    }
                    let Some(raw) = self.prompt(">> Choose a difficulty")? else {
                        return Ok(Flow::Quit);
                    };
                    match raw.parse::<Level>() {
                        Ok(level) => Some(GameMode::Difficulty(level)),
                        Err(err) => {
                            invalid(err);
                            None
                        }
                    }
                }
                "2" => self.choose_topic(">> Choose a topic")?.map(GameMode::Topic),
                "3" => self.choose_topic(">> Choose a topic for hint start")?.map(GameMode::HintStart),
                "4" => Some(GameMode::Challenge),
                "5" => return Ok(Flow::Back),
                _ => {
                    invalid("Enter a number from 1 to 5.");
                    None
                }
            };

            if let Some(mode) = mode
                && matches!(self.play(&mode)?, Flow::Quit)
            {
                return Ok(Flow::Quit);
            }
        }
    }

    fn play(&mut self, mode: &GameMode) -> io::Result<Flow> {
        let selector = ModeSelector::new(self.words);
        let session = match selector.start(mode, &self.config, &mut *self.rng) {
            Ok(session) => session,
            Err(err) => {
                invalid(err);
                return Ok(Flow::Stay);
            }
        };
        match mode {
            GameMode::HintStart(_) => println!("✨ Hint start: some letters are already filled in!"),
            GameMode::Challenge => println!("⏱️ Challenge: guess the word within 60 seconds!"),
            _ => {}
        }
        info!(%mode, "game started");

        let outcome = play_session(session, &mut self.input, &mut *self.rng, self.words, self.stats)?;
        Ok(if outcome.is_some() { Flow::Stay } else { Flow::Quit })
    }

    fn study_menu(&mut self) -> io::Result<Flow> {
        loop {
            println!("\n{}", "🧠 STUDY".bright_cyan().bold());
            println!("1. Look up a word");
            println!("2. Review missed words");
            println!("3. Back");

            let Some(choice) = self.prompt(">> Choose")? else {
                return Ok(Flow::Quit);
            };
            match choice.as_str() {
                "1" => {
                    let Some(word) = self.prompt(">> Word to look up")? else {
                        return Ok(Flow::Quit);
                    };
                    print_meaning(&word, self.words.meaning(&word).as_ref());
                }
                "2" => {
                    if matches!(self.review_missed_words()?, Flow::Quit) {
                        return Ok(Flow::Quit);
                    }
                }
                "3" => return Ok(Flow::Back),
                _ => invalid("Enter a number from 1 to 3."),
            }
        }
    }

    fn review_missed_words(&mut self) -> io::Result<Flow> {
        let missed = self.words.list_missed_words();
        if missed.is_empty() {
            println!("\nYour review list is empty. Words you miss in a game are added here.");
            return Ok(Flow::Stay);
        }
        print_numbered("📚 Missed words", &missed);

        loop {
            let Some(choice) = self.prompt(">> Number to see its meaning ('q' to go back)")? else {
                return Ok(Flow::Quit);
            };
            if choice.eq_ignore_ascii_case("q") {
                return Ok(Flow::Stay);
            }
            match pick_numbered(&choice, &missed) {
                Some(word) => print_meaning(word, self.words.meaning(word).as_ref()),
                None => invalid("Enter a listed number or 'q'."),
            }
        }
    }

    fn manage_menu(&mut self) -> io::Result<Flow> {
        loop {
            println!("\n{}", "🛠️ MANAGE & SETTINGS".bright_cyan().bold());
            println!("1. How to play");
            println!("2. Manage words and topics");
            println!("3. Game records");
            println!("4. Settings");
            println!("5. Back");

            let Some(choice) = self.prompt(">> Choose")? else {
                return Ok(Flow::Quit);
            };
            let flow = match choice.as_str() {
                "1" => {
                    print_how_to_play();
                    Flow::Stay
                }
                "2" => self.words_menu()?,
                "3" => {
                    print_summary(&self.stats.summary());
                    Flow::Stay
                }
                "4" => self.settings()?,
                "5" => return Ok(Flow::Back),
                _ => {
                    invalid("Enter a number from 1 to 5.");
                    Flow::Stay
                }
            };
            if matches!(flow, Flow::Quit) {
                return Ok(Flow::Quit);
            }
        }
    }

    fn words_menu(&mut self) -> io::Result<Flow> {
        loop {
            println!("\n{}", "📖 WORDS & TOPICS".bright_cyan().bold());
            println!("1. Add a word");
            println!("2. Delete a word");
            println!("3. Show all words");
            println!("4. Add a topic");
            println!("5. Delete a topic");
            println!("6. Back");

            let Some(choice) = self.prompt(">> Choose")? else {
                return Ok(Flow::Quit);
            };
            let result = match choice.as_str() {
                "1" => {
                    let Some(fields) =
                        self.prompt_all(&["Topic", "Word", "Meaning", "Example sentence"])?
                    else {
                        continue;
                    };
                    self.words
                        .add_word(&fields[0], &fields[1], &fields[2], &fields[3])
                        .map(|()| format!("Added '{}' to '{}'.", fields[1], fields[0]))
                }
                "2" => {
                    let Some(fields) = self.prompt_all(&["Topic", "Word to delete"])? else {
                        continue;
                    };
                    self.words
                        .delete_word(&fields[0], &fields[1])
                        .map(|()| format!("Deleted '{}' from '{}'.", fields[1], fields[0]))
                }
                "3" => {
                    print_all_words(&self.words.all_words_by_topic());
                    continue;
                }
                "4" => {
                    let Some(fields) = self.prompt_all(&["New topic name (letters only)"])? else {
                        continue;
                    };
                    self.words
                        .create_topic(&fields[0])
                        .map(|()| format!("Topic '{}' created.", fields[0].to_lowercase()))
                }
                "5" => {
                    let topics = self.words.list_topics();
                    if topics.is_empty() {
                        invalid("There are no topics to delete.");
                        continue;
                    }
                    print_numbered("Topics", &topics);
                    let Some(fields) = self.prompt_all(&["Topic to delete"])? else {
                        continue;
                    };
                    self.words
                        .delete_topic(&fields[0])
                        .map(|()| format!("Topic '{}' deleted.", fields[0].to_lowercase()))
                }
                "6" => return Ok(Flow::Back),
                _ => {
                    invalid("Enter a number from 1 to 6.");
                    continue;
                }
            };

            match result {
                Ok(message) => println!("{}", format!("✅ {message}").green()),
                Err(err) => invalid(err),
            }
        }
    }

    fn settings(&mut self) -> io::Result<Flow> {
        println!("\n{}", "⚙️ SETTINGS".bright_cyan().bold());
        let Some(attempts) =
            self.prompt(&format!("Maximum attempts (now {})", self.config.max_attempts))?
        else {
            return Ok(Flow::Quit);
        };
        let Some(hints) = self.prompt(&format!("Hints per game (now {})", self.config.hints))?
        else {
            return Ok(Flow::Quit);
        };

        let (Ok(attempts), Ok(hints)) = (attempts.parse::<u32>(), hints.parse::<u32>()) else {
            invalid("Enter whole numbers only.");
            return Ok(Flow::Stay);
        };
        match GameConfig::new(attempts, hints) {
            Ok(config) => {
                self.config = config;
                info!(max_attempts = attempts, hints, "settings changed");
                println!("{}", "✨ Settings saved.".green());
            }
            Err(err) => invalid(err),
        }
        Ok(Flow::Stay)
    }

    /// Show the topic list and read a choice by number
    fn choose_topic(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let topics = self.words.list_topics();
        if topics.is_empty() {
            invalid("There are no topics yet. Add words first.");
            return Ok(None);
        }
        print_numbered("🎨 Topics", &topics);

        let Some(choice) = self.prompt(prompt)? else {
            return Ok(None);
        };
        let topic = pick_numbered(&choice, &topics).cloned();
        if topic.is_none() {
            invalid("Enter a number from the list.");
        }
        Ok(topic)
    }

    /// Ask each field in turn; an empty answer or closed input cancels
    fn prompt_all(&mut self, fields: &[&str]) -> io::Result<Option<Vec<String>>> {
        let mut answers = Vec::with_capacity(fields.len());
        for field in fields {
            match self.prompt(&format!("{field} (Enter to cancel)"))? {
                Some(answer) if !answer.is_empty() => answers.push(answer),
                _ => return Ok(None),
            }
        }
        Ok(Some(answers))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        read_input(&mut self.input, text)
    }
}

/// Resolve a 1-based menu number against a list
fn pick_numbered<'l>(choice: &str, items: &'l [String]) -> Option<&'l String> {
    let index = choice.trim().parse::<usize>().ok()?;
    items.get(index.checked_sub(1)?)
}

fn invalid(message: impl Display) {
    println!("{}", format!("⚠️ {message}").yellow());
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn run_simple<G: Rng + ?Sized>(
    rng: &mut G,
    words: &WordStore,
    stats: &StatsStore,
    config: GameConfig,
) -> io::Result<()> {
    let stdin = io::stdin();
    Shell::new(stdin.lock(), rng, words, stats, config).run()
}
