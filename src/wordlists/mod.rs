//! Built-in word lists
//!
//! Provides the embedded fallback words compiled into the binary.

mod embedded;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

const _: () = assert!(DEFAULT_WORDS_COUNT > 0, "default word list must not be empty");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn defaults_are_valid_words() {
        for &word in DEFAULT_WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid word");
        }
    }

    #[test]
    fn defaults_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = DEFAULT_WORDS.iter().collect();
        assert_eq!(unique.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn expected_defaults() {
        assert_eq!(
            DEFAULT_WORDS,
            &["apple", "banana", "python", "game", "student", "teacher"]
        );
    }
}
