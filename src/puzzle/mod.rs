//! Daily puzzle generation
//!
//! Deterministic selection of a secret word and per-letter clue equations
//! from a calendar date, plus the hand-authored override table.

mod generator;
pub mod overrides;
pub mod seed;

pub use generator::{Clue, DailyPuzzle, PUZZLE_VERSION, fallback_puzzle, generate};
pub use overrides::{OverrideError, OverridePuzzle, OverrideTable};
