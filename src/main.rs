//! Word Hangman - CLI
//!
//! Hangman with topic word lists, a missed-word review list and persisted records.
//! Runs the text menu by default, a full-screen game with `play`, and one-shot
//! store commands for scripting.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_hangman::{
    commands::run_simple,
    game::GameConfig,
    interactive::{App, run_tui},
    modes::{GameMode, Level},
    output::{print_all_words, print_meaning, print_numbered, print_summary},
    store::{DataDir, StatsStore, WordStore},
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word game with topics, word meanings, a review list and records",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding word lists, meanings, the review list and records
    #[arg(
        short,
        long,
        global = true,
        env = "HANGMAN_DATA_DIR",
        default_value = "hangman_data"
    )]
    data_dir: PathBuf,

    /// Wrong guesses allowed per game
    #[arg(
        long,
        global = true,
        default_value_t = GameConfig::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_attempts: u32,

    /// Hints available per game
    #[arg(long, global = true, default_value_t = GameConfig::DEFAULT_HINTS)]
    hints: u32,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Text menu mode (default)
    Simple,

    /// Full-screen game, one round after another
    Play {
        /// How words are chosen
        #[arg(short, long, value_enum, default_value_t = ModeArg::Random)]
        mode: ModeArg,

        /// Topic for the topic and hint modes
        #[arg(short, long)]
        topic: Option<String>,

        /// Difficulty for the level mode: beginner, intermediate or advanced
        #[arg(short, long)]
        level: Option<String>,
    },

    /// Show game records
    Stats,

    /// Manage topics
    Topics {
        #[command(subcommand)]
        action: TopicAction,
    },

    /// Manage words
    Words {
        #[command(subcommand)]
        action: WordAction,
    },

    /// Look up the meaning of a word
    Meaning {
        /// Word to look up
        word: String,
    },

    /// Show the review list of missed words
    Missed,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Random,
    Topic,
    Level,
    Hint,
    Challenge,
}

#[derive(Subcommand)]
enum TopicAction {
    /// List topics
    List,
    /// Create an empty topic
    Add { name: String },
    /// Delete a topic and its word list
    Remove { name: String },
}

#[derive(Subcommand)]
enum WordAction {
    /// List the words of one topic, or of every topic
    List { topic: Option<String> },
    /// Add a word with its meaning to a topic
    Add {
        topic: String,
        word: String,
        /// What the word means
        #[arg(short, long, default_value = "")]
        meaning: String,
        /// An example sentence
        #[arg(short, long, default_value = "")]
        example: String,
    },
    /// Remove a word from a topic
    Remove { topic: String, word: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data = DataDir::new(&cli.data_dir);
    let words = data.word_store();
    let stats = data.stats_store();
    let config = GameConfig::new(cli.max_attempts, cli.hints)?;
    info!(data_dir = %data.root().display(), "starting");

    // Default to the text menu if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&mut rand::rng(), &words, &stats, config)
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::Play { mode, topic, level } => {
            run_play_command(mode, topic, level.as_deref(), &words, &stats, config)
        }
        Commands::Stats => {
            print_summary(&stats.summary());
            Ok(())
        }
        Commands::Topics { action } => run_topics_command(action, &words),
        Commands::Words { action } => run_words_command(action, &words),
        Commands::Meaning { word } => {
            print_meaning(&word, words.meaning(&word).as_ref());
            Ok(())
        }
        Commands::Missed => {
            let missed = words.list_missed_words();
            if missed.is_empty() {
                println!("Your review list is empty.");
            } else {
                print_numbered("📚 Missed words", &missed);
            }
            Ok(())
        }
    }
}

/// Log to stderr so menus on stdout stay readable
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_mode(mode: ModeArg, topic: Option<String>, level: Option<&str>) -> Result<GameMode> {
    Ok(match mode {
        ModeArg::Random => GameMode::Random,
        ModeArg::Challenge => GameMode::Challenge,
        ModeArg::Level => GameMode::Difficulty(level.unwrap_or("beginner").parse::<Level>()?),
        ModeArg::Topic | ModeArg::Hint => {
            let Some(topic) = topic else {
                bail!("--topic is required for the topic and hint modes");
            };
            if matches!(mode, ModeArg::Hint) {
                GameMode::HintStart(topic)
            } else {
                GameMode::Topic(topic)
            }
        }
    })
}

fn run_play_command(
    mode: ModeArg,
    topic: Option<String>,
    level: Option<&str>,
    words: &WordStore,
    stats: &StatsStore,
    config: GameConfig,
) -> Result<()> {
    let mode = resolve_mode(mode, topic, level)?;
    let app = App::new(words, stats, config, mode, StdRng::from_os_rng())?;
    run_tui(app)
}

fn run_topics_command(action: TopicAction, words: &WordStore) -> Result<()> {
    match action {
        TopicAction::List => {
            let topics = words.list_topics();
            if topics.is_empty() {
                println!("No topics yet.");
            } else {
                print_numbered("🎨 Topics", &topics);
            }
        }
        TopicAction::Add { name } => {
            words.create_topic(&name)?;
            println!("{}", format!("✅ Topic '{name}' created.").green());
        }
        TopicAction::Remove { name } => {
            words.delete_topic(&name)?;
            println!("{}", format!("✅ Topic '{name}' deleted.").green());
        }
    }
    Ok(())
}

fn run_words_command(action: WordAction, words: &WordStore) -> Result<()> {
    match action {
        WordAction::List { topic: Some(topic) } => {
            let list = words.topic_words(&topic)?;
            print_numbered(&format!("📖 {topic}"), &list);
        }
        WordAction::List { topic: None } => print_all_words(&words.all_words_by_topic()),
        WordAction::Add {
            topic,
            word,
            meaning,
            example,
        } => {
            words.add_word(&topic, &word, &meaning, &example)?;
            println!("{}", format!("✅ Added '{word}' to '{topic}'.").green());
        }
        WordAction::Remove { topic, word } => {
            words.delete_word(&topic, &word)?;
            println!("{}", format!("✅ Deleted '{word}' from '{topic}'.").green());
        }
    }
    Ok(())
}
