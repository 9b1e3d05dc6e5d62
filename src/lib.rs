//! Physicle
//!
//! Daily word puzzle where each letter of a 5-letter secret word is clued by
//! a physics equation. The puzzle for a date is a deterministic pure hash of
//! the date, so every player sees the same word and the same clues.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use physicle::catalog::EquationCatalog;
//! use physicle::core::{Feedback, Word};
//! use physicle::puzzle::{OverrideTable, PUZZLE_VERSION, generate};
//! use physicle::wordlists::{ANSWERS, loader::words_from_slice};
//!
//! let pool = words_from_slice(ANSWERS);
//! let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! let puzzle = generate(
//!     date,
//!     PUZZLE_VERSION,
//!     &pool,
//!     &EquationCatalog::builtin(),
//!     &OverrideTable::builtin(),
//! );
//!
//! // One clue per letter of the secret word
//! assert_eq!(puzzle.clues.len(), 5);
//!
//! // Evaluate a guess against the secret word
//! let feedback = Feedback::evaluate(&Word::new("QUARK").unwrap(), &puzzle.word);
//! assert_eq!(feedback.statuses().len(), 5);
//! ```

// Core domain types
pub mod core;

// Equation catalog
pub mod catalog;

// Daily puzzle generation
pub mod puzzle;

// Session state machine, keyboard tracking, streaks
pub mod game;

// Word lists
pub mod wordlists;

// Persisted state
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
