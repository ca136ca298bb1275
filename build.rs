//! Build script embedding the fallback word list
//!
//! Words are lowercased, de-duplicated and checked to be ASCII letters so the
//! library can build `Word` values from them without a runtime failure path.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const SOURCE: &str = "data/default_words.txt";

fn main() {
    println!("cargo:rerun-if-changed={SOURCE}");

    let raw = fs::read_to_string(SOURCE).unwrap_or_else(|e| panic!("Failed to read {SOURCE}: {e}"));
    let words = parse_words(&raw);
    assert!(!words.is_empty(), "{SOURCE} holds no words");

    let mut generated = String::from("// Generated from data/default_words.txt\n\n");
    generated.push_str("/// Fallback words used when no topic holds any word\n");
    generated.push_str("pub const DEFAULT_WORDS: &[&str] = &[\n");
    for word in &words {
        let _ = writeln!(generated, "    {word:?},");
    }
    generated.push_str("];\n\n/// Number of entries in `DEFAULT_WORDS`\n");
    let _ = writeln!(generated, "pub const DEFAULT_WORDS_COUNT: usize = {};", words.len());

    let out = PathBuf::from(env::var("OUT_DIR").unwrap()).join("default_words.rs");
    fs::write(&out, generated).unwrap_or_else(|e| panic!("Failed to write {}: {e}", out.display()));
}

/// Unique lowercase words in first-seen order
fn parse_words(raw: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut words = Vec::new();
    for (number, line) in raw.lines().enumerate() {
        let word = line.trim().to_ascii_lowercase();
        if word.is_empty() {
            continue;
        }
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "{SOURCE}:{}: '{word}' is not a letters-only word",
            number + 1
        );
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}
