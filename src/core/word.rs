//! Puzzle word representation
//!
//! A Word stores a 5-letter uppercase word; per-letter counts support feedback
//! scoring with duplicate letters.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of letters in every puzzle word.
pub const WORD_LENGTH: usize = 5;

/// A 5-letter uppercase puzzle word
///
/// Input is normalized to uppercase ASCII on construction, so two words that
/// differ only in case compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-alphabetic or non-ASCII characters
    ///
    /// # Examples
    /// ```
    /// use physicle::core::Word;
    ///
    /// let word = Word::new("quark").unwrap();
    /// assert_eq!(word.text(), "QUARK");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("at0ms").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if text.len() != WORD_LENGTH || !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, b) in letters.iter_mut().zip(text.bytes()) {
            *slot = b.to_ascii_uppercase();
        }

        Ok(Self { letters })
    }

    /// Build a word from already-validated uppercase letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an uppercase
    /// ASCII letter.
    pub fn from_letters(letters: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        if !letters.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }
        Ok(Self { letters })
    }

    /// Get the word as an owned uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| b as char).collect()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &b in &self.letters {
            *counts.entry(b).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Saved sessions and override files carry words as plain strings.
impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text())
    }
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("quark").unwrap();
        assert_eq!(word.text(), "QUARK");
        assert_eq!(word.letters(), b"QUARK");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("force").unwrap();
        assert_eq!(word.text(), "FORCE");

        let word2 = Word::new("FoRcE").unwrap();
        assert_eq!(word2.text(), "FORCE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(Word::new("atom"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("at0ms").is_err()); // Number
        assert!(Word::new("ato s").is_err()); // Space
        assert!(Word::new("atom!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("FIELD").unwrap();
        assert_eq!(word.letter_at(0), b'F');
        assert_eq!(word.letter_at(1), b'I');
        assert_eq!(word.letter_at(2), b'E');
        assert_eq!(word.letter_at(3), b'L');
        assert_eq!(word.letter_at(4), b'D');
    }

    #[test]
    fn word_contains() {
        let word = Word::new("QUARK").unwrap();
        assert!(word.contains(b'Q'));
        assert!(word.contains(b'K'));
        assert!(word.contains(b'k')); // case-insensitive lookup
        assert!(!word.contains(b'Z'));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("ALLOW").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'A'), Some(&1));
        assert_eq!(counts.get(&b'L'), Some(&2));
        assert_eq!(counts.get(&b'O'), Some(&1));
        assert_eq!(counts.get(&b'W'), Some(&1));
        assert_eq!(counts.get(&b'Z'), None);
    }

    #[test]
    fn word_from_letters() {
        let word = Word::from_letters(*b"QUARK").unwrap();
        assert_eq!(word.text(), "QUARK");
        assert!(Word::from_letters(*b"quark").is_err());
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("quark").unwrap(), Word::new("QUARK").unwrap());
        assert_ne!(Word::new("QUARK").unwrap(), Word::new("FORCE").unwrap());
    }

    #[test]
    fn word_serde_round_trip() {
        let word = Word::new("FIELD").unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"FIELD\"");

        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);

        assert!(serde_json::from_str::<Word>("\"toolong\"").is_err());
    }
}
