//! Single-letter guesses
//!
//! A Letter is one ASCII alphabetic character, normalized to lowercase.

use std::fmt;

/// A normalized guess letter (`a`..=`z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Parse raw user input into a letter
    ///
    /// Surrounding whitespace is ignored. Returns `None` unless exactly one
    /// ASCII alphabetic character remains.
    ///
    /// # Examples
    /// ```
    /// use word_hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse(" A ").map(|l| l.as_char()), Some('a'));
    /// assert!(Letter::parse("ab").is_none());
    /// assert!(Letter::parse("7").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let ch = chars.next()?;
        if chars.next().is_some() || !ch.is_ascii_alphabetic() {
            return None;
        }
        Some(Self(ch.to_ascii_lowercase() as u8))
    }

    /// Build a letter from a byte already known to be lowercase ASCII
    #[inline]
    pub(crate) const fn from_byte(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_lowercase(), "Letter byte must be a-z");
        Self(byte)
    }

    /// Raw lowercase byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
