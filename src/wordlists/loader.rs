//! Word list loading
//!
//! Loads the answer pool and the valid-guess list, from files when paths are
//! given and from the embedded lists otherwise. A missing or unreadable
//! answer file falls back to the embedded pool so generation always has a
//! domain to select from; a missing guess file degrades to an empty
//! validation set.

use crate::core::{WORD_LENGTH, Word};
use crate::wordlists::{ANSWERS, GUESSES};
use log::warn;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// The set of words accepted as guesses
///
/// An empty set accepts every well-formed 5-letter word: the only way to end
/// up empty is a failed guess-list load, and rejecting everything would make
/// the game unplayable.
#[derive(Debug, Clone, Default)]
pub struct ValidGuesses {
    words: FxHashSet<[u8; WORD_LENGTH]>,
}

impl ValidGuesses {
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        Self {
            words: words.iter().map(|w| *w.letters()).collect(),
        }
    }

    /// Whether a word may be submitted as a guess
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        self.words.is_empty() || self.words.contains(word.letters())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The two word pools the game runs on
#[derive(Debug, Clone)]
pub struct WordLists {
    /// Candidate secret words, in list order (order is significant for
    /// deterministic selection)
    pub answers: Vec<Word>,
    /// Guess validation set
    pub valid: ValidGuesses,
}

impl WordLists {
    /// Load word lists, preferring files over the embedded defaults
    ///
    /// `answers_path` failure falls back to the embedded answer pool;
    /// `guesses_path` failure degrades to an empty validation set. With no
    /// paths given, both embedded lists are used.
    #[must_use]
    pub fn load(answers_path: Option<&Path>, guesses_path: Option<&Path>) -> Self {
        let answers = match answers_path {
            Some(path) => match load_from_file(path) {
                Ok(words) if !words.is_empty() => words,
                Ok(_) => {
                    warn!("answer list {} is empty, using embedded pool", path.display());
                    words_from_slice(ANSWERS)
                }
                Err(e) => {
                    warn!("cannot load answer list {}: {e}, using embedded pool", path.display());
                    words_from_slice(ANSWERS)
                }
            },
            None => words_from_slice(ANSWERS),
        };

        let valid = match guesses_path {
            Some(path) => match load_from_file(path) {
                Ok(words) => ValidGuesses::from_words(&words),
                Err(e) => {
                    warn!("cannot load guess list {}: {e}, accepting all words", path.display());
                    ValidGuesses::default()
                }
            },
            None => ValidGuesses::from_words(&words_from_slice(GUESSES)),
        };

        Self { answers, valid }
    }
}

/// Load words from a newline-delimited file
///
/// Returns valid `Word` instances, skipping malformed lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
