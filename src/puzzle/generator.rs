//! Daily puzzle generation
//!
//! A pure function of (date, version, word pool, catalog, overrides): the
//! same inputs always produce the same puzzle, with no wall clock and no
//! randomness. Hand-authored overrides win over generation; a letter without
//! catalog entries gets a placeholder clue; an empty word pool degrades to a
//! fixed fallback puzzle so the game is always playable.

use crate::catalog::{EquationCatalog, EquationEntry};
use crate::core::Word;
use crate::puzzle::overrides::{self, OverrideTable};
use crate::puzzle::seed::{clue_seed, index_from_seed, word_seed};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current generation version
///
/// Bump to invalidate puzzle history: every future date then selects a
/// different word and clue set, with the hashing shape unchanged.
pub const PUZZLE_VERSION: u32 = 0;

/// One positional clue: the letter it stands for and its equation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub letter: char,
    pub entry: EquationEntry,
}

/// The puzzle for one calendar date
///
/// Immutable once created; clues are in letter-position order, one per letter
/// of the secret word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPuzzle {
    pub date: NaiveDate,
    pub word: Word,
    pub clues: Vec<Clue>,
}

/// Produce the puzzle for a date
///
/// Overrides are consulted first by exact date; otherwise the secret word is
/// the pool entry at `word_seed(date, version) mod pool_len`, and each letter
/// position gets the catalog entry at `clue_seed(date, version, letter) mod
/// candidate_count`. Two occurrences of the same letter in one word share a
/// clue; the same letter on a different date may select a different one.
#[must_use]
pub fn generate(
    date: NaiveDate,
    version: u32,
    pool: &[Word],
    catalog: &EquationCatalog,
    overrides: &OverrideTable,
) -> DailyPuzzle {
    if let Some(authored) = overrides.get(date) {
        return DailyPuzzle {
            date,
            word: authored.word.clone(),
            clues: authored.clues.clone(),
        };
    }

    if pool.is_empty() {
        return fallback_puzzle(date);
    }

    let word = pool[index_from_seed(word_seed(date, version), pool.len())].clone();
    let clues = clues_for_word(date, version, &word, catalog);

    DailyPuzzle { date, word, clues }
}

/// Select one clue per letter position of `word`
fn clues_for_word(
    date: NaiveDate,
    version: u32,
    word: &Word,
    catalog: &EquationCatalog,
) -> Vec<Clue> {
    word.letters()
        .iter()
        .map(|&letter| {
            let candidates = catalog.candidates(letter);
            let entry = if candidates.is_empty() {
                EquationEntry::placeholder(letter)
            } else {
                candidates[index_from_seed(clue_seed(date, version, letter), candidates.len())]
                    .clone()
            };
            Clue {
                letter: letter as char,
                entry,
            }
        })
        .collect()
}

/// Fixed puzzle used when no word pool could be loaded at all
#[must_use]
pub fn fallback_puzzle(date: NaiveDate) -> DailyPuzzle {
    let authored = overrides::hand_authored(
        "QUARK",
        [
            (r"mc \Delta T", 'Q', "Heat gained or lost by a mass"),
            (r"mgh", 'U', "Gravitational potential energy"),
            (r"\frac{dv}{dt}", 'A', "Rate of change of velocity"),
            (r"\frac{V}{I}", 'R', "Ohm's law solved for resistance"),
            (r"\frac{1}{2}mv^2", 'K', "Kinetic energy"),
        ],
    );
    DailyPuzzle {
        date,
        word: authored.word,
        clues: authored.clues,
    }
}
