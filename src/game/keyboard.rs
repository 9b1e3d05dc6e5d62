//! Per-letter best-status tracking
//!
//! The on-screen keyboard colors each letter by the best status observed
//! across all finalized guesses this session. Upgrades are monotonic:
//! `Absent < Present < Correct`, and a letter never downgrades.

use crate::core::{Feedback, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Best observed status per letter, position-independent
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    best: FxHashMap<u8, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finalized guess into the tracked statuses
    pub fn observe(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, &status) in feedback.statuses().iter().enumerate() {
            let entry = self
                .best
                .entry(guess.letter_at(i))
                .or_insert(LetterStatus::Absent);
            if status > *entry {
                *entry = status;
            }
        }
    }

    /// Best status seen so far for a letter, if it has been guessed
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        self.best.get(&letter.to_ascii_uppercase()).copied()
    }
}
