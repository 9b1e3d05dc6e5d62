//! Equation catalog: letter → candidate clue equations
//!
//! Every puzzle clue is the right-hand side of a physics equation whose
//! left-hand side is the clued letter. The catalog maps each uppercase letter
//! to an ordered list of candidate equations; order is insertion order and is
//! significant, because the daily generator indexes into it deterministically.

mod builtin;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One candidate clue equation for a letter
///
/// `expression` is the displayed right-hand side only (LaTeX markup);
/// `full_equation` includes the letter being solved for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationEntry {
    pub expression: String,
    pub full_equation: String,
    pub explanation: String,
}

impl EquationEntry {
    #[must_use]
    pub fn new(
        expression: impl Into<String>,
        full_equation: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            expression: expression.into(),
            full_equation: full_equation.into(),
            explanation: explanation.into(),
        }
    }

    /// Stand-in clue for a letter with no catalog entries
    ///
    /// Generation must always succeed for any word in the pool, so a missing
    /// letter degrades to this rather than an error.
    #[must_use]
    pub fn placeholder(letter: u8) -> Self {
        let letter = letter.to_ascii_uppercase() as char;
        Self {
            expression: "?".to_string(),
            full_equation: format!("{letter} = ?"),
            explanation: format!("No equation is available for the letter {letter}"),
        }
    }
}

/// Read-only mapping from uppercase letter to its candidate equations
///
/// Built once at startup; the daily generator treats it as configuration.
#[derive(Debug, Clone, Default)]
pub struct EquationCatalog {
    entries: FxHashMap<u8, Vec<EquationEntry>>,
}

impl EquationCatalog {
    /// An empty catalog (every lookup falls back to placeholders)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in catalog, covering all 26 letters
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for &(letter, entries) in builtin::BUILTIN {
            for &(expression, full_equation, explanation) in entries {
                catalog.push(letter, EquationEntry::new(expression, full_equation, explanation));
            }
        }
        catalog
    }

    /// Append a candidate equation for a letter, preserving insertion order
    pub fn push(&mut self, letter: u8, entry: EquationEntry) {
        self.entries
            .entry(letter.to_ascii_uppercase())
            .or_default()
            .push(entry);
    }

    /// Candidate equations for a letter, in insertion order
    ///
    /// Returns an empty slice for letters with no entries.
    #[must_use]
    pub fn candidates(&self, letter: u8) -> &[EquationEntry] {
        self.entries
            .get(&letter.to_ascii_uppercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Number of letters with at least one entry
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.entries.len()
    }
}
