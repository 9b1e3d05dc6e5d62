//! Hand-authored daily puzzles
//!
//! A date-keyed table of explicit puzzles checked before the generator runs.
//! An override carries its own word and clue list and is returned verbatim,
//! unaffected by the word pool or the catalog. A few dates ship built in;
//! more can be loaded from a JSON file:
//!
//! ```json
//! {
//!     "2025-03-14": {
//!         "word": "LIGHT",
//!         "clues": [
//!             { "letter": "L", "expression": "\\vec{r} \\times \\vec{p}" },
//!             ...
//!         ]
//!     }
//! }
//! ```

use crate::catalog::EquationEntry;
use crate::core::{WORD_LENGTH, Word};
use crate::puzzle::Clue;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// A fully-specified hand-authored puzzle for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverridePuzzle {
    pub word: Word,
    pub clues: Vec<Clue>,
}

/// Errors from loading an override file
#[derive(Debug)]
pub enum OverrideError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    BadWord(String),
    WrongClueCount { date: NaiveDate, count: usize },
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read override file: {e}"),
            Self::Parse(e) => write!(f, "cannot parse override file: {e}"),
            Self::BadWord(e) => write!(f, "invalid override word: {e}"),
            Self::WrongClueCount { date, count } => {
                write!(f, "override for {date} has {count} clues, expected {WORD_LENGTH}")
            }
        }
    }
}

impl std::error::Error for OverrideError {}

impl From<std::io::Error> for OverrideError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for OverrideError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Date-keyed table of hand-authored puzzles
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    map: FxHashMap<NaiveDate, OverridePuzzle>,
}

#[derive(Deserialize)]
struct RawOverride {
    word: String,
    clues: Vec<RawClue>,
}

#[derive(Deserialize)]
struct RawClue {
    letter: char,
    expression: String,
    #[serde(default)]
    full_equation: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
}

impl OverrideTable {
    /// The built-in hand-authored puzzles
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::default();

        table.insert(
            ymd(2025, 2, 27),
            hand_authored(
                "QUARK",
                [
                    (r"mc \Delta T", 'Q', "Heat gained or lost by a mass"),
                    (r"mgh", 'U', "Gravitational potential energy"),
                    (r"\frac{dv}{dt}", 'A', "Rate of change of velocity"),
                    (r"\frac{V}{I}", 'R', "Ohm's law solved for resistance"),
                    (r"\frac{1}{2}mv^2", 'K', "Kinetic energy"),
                ],
            ),
        );

        table.insert(
            ymd(2025, 2, 28),
            hand_authored(
                "FORCE",
                [
                    (r"ma", 'F', "Newton's second law"),
                    (r"\omega r", 'O', "Tangential speed of circular motion"),
                    (r"\rho V g", 'R', "Buoyant force on a submerged volume"),
                    (r"\lambda f", 'C', "Wave speed from wavelength and frequency"),
                    (r"mc^2", 'E', "Mass-energy equivalence"),
                ],
            ),
        );

        table.insert(
            ymd(2025, 3, 1),
            hand_authored(
                "FIELD",
                [
                    (r"\oint \vec{E} \cdot d\vec{A}", 'F', "Electric flux through a closed surface"),
                    (r"\int_a^b f(x) dx", 'I', "Definite integral"),
                    (r"mc^2", 'E', "Mass-energy equivalence"),
                    (r"\frac{dL}{dt}", 'L', "Torque as change of angular momentum"),
                    (r"\frac{d^2x}{dt^2}", 'D', "Second derivative of position"),
                ],
            ),
        );

        table
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    /// Returns `OverrideError` when the file cannot be read or parsed, an
    /// override word is invalid, or a clue list is not exactly 5 long.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, OverrideError> {
        let content = fs::read_to_string(path)?;
        let raw: FxHashMap<NaiveDate, RawOverride> = serde_json::from_str(&content)?;

        let mut table = Self::default();
        for (date, entry) in raw {
            let word = Word::new(&entry.word).map_err(|e| OverrideError::BadWord(e.to_string()))?;
            if entry.clues.len() != WORD_LENGTH {
                return Err(OverrideError::WrongClueCount {
                    date,
                    count: entry.clues.len(),
                });
            }

            let clues = entry
                .clues
                .into_iter()
                .map(|c| {
                    let letter = c.letter.to_ascii_uppercase();
                    let full = c
                        .full_equation
                        .unwrap_or_else(|| format!("{letter} = {}", c.expression));
                    let note = c.explanation.unwrap_or_else(|| "Hand-authored clue".to_string());
                    Clue {
                        letter,
                        entry: EquationEntry::new(c.expression, full, note),
                    }
                })
                .collect();

            table.insert(date, OverridePuzzle { word, clues });
        }

        Ok(table)
    }

    /// Add or replace the puzzle for a date
    pub fn insert(&mut self, date: NaiveDate, puzzle: OverridePuzzle) {
        self.map.insert(date, puzzle);
    }

    /// Merge another table into this one; the other table wins on conflicts
    pub fn merge(&mut self, other: Self) {
        self.map.extend(other.map);
    }

    /// The hand-authored puzzle for a date, if one exists
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&OverridePuzzle> {
        self.map.get(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Build a fully-formed override from (expression, letter, explanation) rows
pub(crate) fn hand_authored(
    word: &str,
    rows: [(&str, char, &str); WORD_LENGTH],
) -> OverridePuzzle {
    let word = Word::new(word).expect("hand-authored words are valid");
    let clues = rows
        .into_iter()
        .map(|(expression, letter, note)| Clue {
            letter: letter.to_ascii_uppercase(),
            entry: EquationEntry::new(
                expression,
                format!("{} = {expression}", letter.to_ascii_uppercase()),
                note,
            ),
        })
        .collect();
    OverridePuzzle { word, clues }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("built-in override dates are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_three_puzzles() {
        let table = OverrideTable::builtin();
        assert_eq!(table.len(), 3);

        let quark = table.get(ymd(2025, 2, 27)).unwrap();
        assert_eq!(quark.word.text(), "QUARK");
        assert_eq!(quark.clues.len(), 5);
        assert_eq!(quark.clues[0].letter, 'Q');
        assert_eq!(quark.clues[0].entry.expression, r"mc \Delta T");
    }

    #[test]
    fn builtin_clue_letters_spell_the_word() {
        let table = OverrideTable::builtin();
        for date in [ymd(2025, 2, 27), ymd(2025, 2, 28), ymd(2025, 3, 1)] {
            let puzzle = table.get(date).unwrap();
            let spelled: String = puzzle.clues.iter().map(|c| c.letter).collect();
            assert_eq!(spelled, puzzle.word.text());
        }
    }

    #[test]
    fn missing_date_returns_none() {
        let table = OverrideTable::builtin();
        assert!(table.get(ymd(2030, 1, 1)).is_none());
    }

    #[test]
    fn load_file_round_trip() {
        let json = r#"{
            "2025-03-14": {
                "word": "light",
                "clues": [
                    { "letter": "L", "expression": "\\vec{r} \\times \\vec{p}" },
                    { "letter": "I", "expression": "\\frac{Q}{t}" },
                    { "letter": "G", "expression": "\\frac{G M_e}{R_{e}^2}" },
                    { "letter": "H", "expression": "6.626 \\times 10^{-34}~\\text{J s}" },
                    { "letter": "T", "expression": "R C", "explanation": "RC time constant" }
                ]
            }
        }"#;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        fs::write(&path, json).unwrap();

        let table = OverrideTable::load_file(&path).unwrap();
        let puzzle = table.get(ymd(2025, 3, 14)).unwrap();
        assert_eq!(puzzle.word.text(), "LIGHT");
        assert_eq!(puzzle.clues[0].entry.full_equation, r"L = \vec{r} \times \vec{p}");
        assert_eq!(puzzle.clues[4].entry.explanation, "RC time constant");
    }

    #[test]
    fn load_file_rejects_short_clue_list() {
        let json = r#"{
            "2025-03-14": {
                "word": "LIGHT",
                "clues": [ { "letter": "L", "expression": "x" } ]
            }
        }"#;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        fs::write(&path, json).unwrap();

        assert!(matches!(
            OverrideTable::load_file(&path),
            Err(OverrideError::WrongClueCount { count: 1, .. })
        ));
    }

    #[test]
    fn merge_prefers_the_merged_table() {
        let mut base = OverrideTable::builtin();
        let mut extra = OverrideTable::default();
        extra.insert(
            ymd(2025, 2, 27),
            hand_authored(
                "FORCE",
                [
                    (r"ma", 'F', ""),
                    (r"\omega r", 'O', ""),
                    (r"\rho V g", 'R', ""),
                    (r"\lambda f", 'C', ""),
                    (r"mc^2", 'E', ""),
                ],
            ),
        );

        base.merge(extra);
        assert_eq!(base.get(ymd(2025, 2, 27)).unwrap().word.text(), "FORCE");
    }
}
