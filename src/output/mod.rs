//! Terminal output formatting

pub mod formatters;

pub use formatters::{clue_line, elapsed, feedback_emoji, feedback_row, keyboard_rows, tile};
