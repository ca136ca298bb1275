//! Text-mode session loop
//!
//! Drives one `GameSession` from line-based input until it ends, then hands the
//! outcome to the stores.

use super::read_input;
use crate::game::{GameOutcome, GameSession, GuessFeedback, report_outcome};
use crate::output::{print_board, print_guess_feedback, print_hint_feedback, print_result};
use crate::store::{StatsStore, WordStore};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead};
use std::time::Instant;
use tracing::debug;

const HINT_COMMANDS: [&str; 2] = ["hint", "?"];

/// Play one session to the end
///
/// Returns `None` if input ended before the session did; nothing is recorded then.
/// A failure to save the outcome is printed, not returned, so the caller's
/// menu keeps running.
///
/// # Errors
///
/// Returns an error only if reading input fails.
pub fn play_session<R: BufRead, G: Rng + ?Sized>(
    mut session: GameSession,
    input: &mut R,
    rng: &mut G,
    words: &WordStore,
    stats: &StatsStore,
) -> io::Result<Option<GameOutcome>> {
    println!(
        "\n✨ New game! The word has {} letters.",
        session.target().len().to_string().bright_yellow()
    );

    while !session.state().is_terminal() {
        let now = Instant::now();
        if session.tick(now) {
            print_guess_feedback(&GuessFeedback::TimedOut);
            break;
        }
        print_board(&session, now);

        let Some(line) = read_input(input, ">> Guess a letter (or 'hint')")? else {
            debug!("input closed mid-session");
            return Ok(None);
        };

        if HINT_COMMANDS.contains(&line.to_lowercase().as_str()) {
            match session.request_hint(rng) {
                Ok(feedback) => print_hint_feedback(&feedback),
                Err(err) => println!("{}", format!("⚠️ {err}").yellow()),
            }
            continue;
        }

        match session.submit_guess(&line) {
            Ok(feedback) => print_guess_feedback(&feedback),
            Err(err) => println!("{}", format!("⚠️ {err}").yellow()),
        }
    }

    let Some(outcome) = session.outcome() else {
        return Ok(None);
    };
    print_result(&session);
    if let Err(err) = report_outcome(&outcome, stats, words) {
        println!("{}", format!("⚠️ Could not save this game: {err}").red());
    }
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use crate::store::DataDir;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn fixture() -> (tempfile::TempDir, WordStore, StatsStore) {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDir::new(dir.path());
        (dir, data.word_store(), data.stats_store())
    }

    fn session(word: &str, config: &GameConfig) -> GameSession {
        GameSession::new(Word::new(word).unwrap(), config)
    }

    #[test]
    fn winning_game_is_recorded() {
        let (_dir, words, stats) = fixture();
        let mut input = Cursor::new("k\nk\n7\ni\nw\n");
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = play_session(
            session("kiwi", &GameConfig::default()),
            &mut input,
            &mut rng,
            &words,
            &stats,
        )
        .unwrap()
        .unwrap();

        assert!(outcome.won);
        let summary = stats.summary();
        assert_eq!(summary.total_games, 1);
        assert_eq!(summary.wins, 1);
        assert!(summary.best_time.is_some());
        assert!(words.list_missed_words().is_empty());
    }

    #[test]
    fn losing_game_adds_missed_word() {
        let (_dir, words, stats) = fixture();
        let config = GameConfig::new(2, 0).unwrap();
        let mut input = Cursor::new("hint\nx\nz\n");
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = play_session(session("kiwi", &config), &mut input, &mut rng, &words, &stats)
            .unwrap()
            .unwrap();

        assert!(!outcome.won);
        assert_eq!(stats.summary().wins, 0);
        assert_eq!(words.list_missed_words(), vec!["kiwi"]);
    }

    #[test]
    fn hints_can_finish_the_word() {
        let (_dir, words, stats) = fixture();
        let config = GameConfig::new(6, 2).unwrap();
        let mut input = Cursor::new("?\nhint\n");
        let mut rng = StdRng::seed_from_u64(4);

        let outcome = play_session(session("ox", &config), &mut input, &mut rng, &words, &stats)
            .unwrap()
            .unwrap();
        assert!(outcome.won);
    }

    #[test]
    fn closed_input_records_nothing() {
        let (_dir, words, stats) = fixture();
        let mut input = Cursor::new("k\n");
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = play_session(
            session("kiwi", &GameConfig::default()),
            &mut input,
            &mut rng,
            &words,
            &stats,
        )
        .unwrap();

        assert!(outcome.is_none());
        assert_eq!(stats.summary().total_games, 0);
    }
}
