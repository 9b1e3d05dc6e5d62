//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with no I/O or UI
//! concerns. All types here are pure and have clear, testable properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
