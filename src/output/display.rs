//! Display functions for game screens and store views

use super::formatters::{
    create_progress_bar, format_elapsed, format_letters, gallows_stage, render_revealed,
};
use crate::game::{GameSession, GuessFeedback, HintFeedback, SessionState};
use crate::store::{GameResult, Meaning, StatsSummary};
use colored::Colorize;
use std::time::Instant;

/// Print the board for the current turn
pub fn print_board(session: &GameSession, now: Instant) {
    let used = session.max_attempts() - session.attempts_remaining();
    println!("\n{}", gallows_stage(used, session.max_attempts()).bright_black());

    if let Some(remaining) = session.remaining_time(now) {
        println!(
            "{} {}s",
            "Time left:".yellow(),
            remaining.as_secs().to_string().yellow().bold()
        );
    }

    println!(
        "\nWord:     {}",
        render_revealed(&session.revealed()).bright_white().bold()
    );
    println!(
        "Attempts: {} | Hints: {} | Tried: {}",
        session.attempts_remaining().to_string().cyan(),
        session.hints_remaining().to_string().cyan(),
        format_letters(session.guessed_letters())
    );
}

/// Print the reaction to an accepted guess
pub fn print_guess_feedback(feedback: &GuessFeedback) {
    match feedback {
        GuessFeedback::Hit { letter, .. } => {
            println!("{}", format!("👍 '{letter}' is in the word!").green());
        }
        GuessFeedback::Miss { letter } => {
            println!("{}", format!("👎 '{letter}' is not in the word.").red());
        }
        GuessFeedback::TimedOut => {
            println!("{}", "⏳ Time is up!".red().bold());
        }
    }
}

/// Print the reaction to an accepted hint request
pub fn print_hint_feedback(feedback: &HintFeedback) {
    match feedback {
        HintFeedback::Revealed { position, letter } => println!(
            "{}",
            format!("💡 Hint: letter {} is '{letter}'.", position + 1).yellow()
        ),
        HintFeedback::TimedOut => println!("{}", "⏳ Time is up!".red().bold()),
    }
}

/// Print the closing message of a finished session
pub fn print_result(session: &GameSession) {
    let word = session.target().text();
    match session.state() {
        SessionState::Won => {
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!(
                "{}",
                format!("🎉 You got it! The word was '{word}'.")
                    .bright_green()
                    .bold()
            );
            if let Some(elapsed) = session.elapsed() {
                println!("Time taken: {}", format_elapsed(elapsed.as_secs_f64()));
            }
            println!("{}", "═".repeat(50).bright_cyan());
        }
        SessionState::LostByAttempts | SessionState::LostByTimeout => {
            let used = session.max_attempts() - session.attempts_remaining();
            println!("\n{}", gallows_stage(used, session.max_attempts()).red());
            println!(
                "{}",
                format!("GAME OVER. The word was '{word}'.").red().bold()
            );
            println!("It has been added to your review list.");
        }
        SessionState::Active => {}
    }
}

/// Print the records screen
pub fn print_summary(summary: &StatsSummary) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "🏆 GAME RECORDS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Games played:  {}", summary.total_games);
    println!("   Wins:          {}", summary.wins);
    println!(
        "   Win rate:      [{}] {}",
        create_progress_bar(summary.win_rate, 100.0, 20).green(),
        format!("{:.2}%", summary.win_rate).bright_yellow()
    );
    match summary.best_time {
        Some(best) => println!("   Best time:     {}", format_elapsed(best).bright_green()),
        None => println!("   Best time:     none yet"),
    }

    println!("\n{}", "Recent games:".bright_cyan().bold());
    if summary.history.is_empty() {
        println!("   No games played yet.");
        return;
    }
    for entry in &summary.history {
        let result = match entry.outcome {
            GameResult::Win => entry.outcome.to_string().green(),
            GameResult::Loss => entry.outcome.to_string().red(),
        };
        println!(
            "   [{}] {}: {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().bright_black(),
            entry.word.bright_white(),
            result
        );
    }
}

/// Print a word's meaning and example, or a not-found note
pub fn print_meaning(word: &str, meaning: Option<&Meaning>) {
    match meaning {
        Some(info) => {
            println!("\n--- {} ---", word.to_lowercase().bright_yellow().bold());
            println!("Meaning: {}", info.meaning);
            println!("Example: {}", info.example.italic());
        }
        None => println!("{}", format!("No information found for '{word}'.").yellow()),
    }
}

/// Print a numbered list
pub fn print_numbered(title: &str, items: &[String]) {
    println!("\n{}", title.bright_cyan().bold());
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().bright_black(), item);
    }
}

/// Print every topic with its words
pub fn print_all_words(topics: &[(String, Vec<String>)]) {
    if topics.is_empty() {
        println!("No words added yet.");
        return;
    }
    for (topic, words) in topics {
        println!("\n--- {} ---", topic.bright_cyan().bold());
        println!("{}", words.join(", "));
    }
}

/// Print the rules
pub fn print_how_to_play() {
    println!("\n{}", "📜 HOW TO PLAY".bright_cyan().bold());
    println!("1. A secret word is chosen and shown as blanks ('_').");
    println!("2. Guess one letter at a time.");
    println!("3. A correct letter is revealed everywhere it appears.");
    println!("4. A wrong letter costs one attempt.");
    println!("5. Type 'hint' to reveal a random letter; hints never cost attempts.");
    println!("6. Reveal the whole word to win; run out of attempts and you lose.");
    println!("7. Challenge mode gives you 60 seconds.");
}
