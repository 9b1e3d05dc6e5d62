//! Small formatting helpers shared by the CLI commands

use crate::core::{Feedback, LetterStatus, Word};
use crate::game::KeyboardState;
use crate::puzzle::Clue;
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One colored letter tile
#[must_use]
pub fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        LetterStatus::Correct => text.black().on_green(),
        LetterStatus::Present => text.black().on_yellow(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// A finalized guess as a row of colored tiles
#[must_use]
pub fn feedback_row(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| tile(letter as char, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spoiler-free share form of a feedback row
#[must_use]
pub fn feedback_emoji(feedback: &Feedback) -> String {
    feedback
        .statuses()
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬛',
        })
        .collect()
}

/// The letter tracker as three QWERTY rows, colored by best status
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> [String; 3] {
    KEYBOARD_ROWS.map(|row| {
        row.chars()
            .map(|letter| match keyboard.status(letter as u8) {
                Some(status) => tile(letter, status).to_string(),
                None => format!(" {letter} "),
            })
            .collect::<Vec<_>>()
            .join("")
    })
}

/// One numbered clue line: the displayed right-hand-side expression
#[must_use]
pub fn clue_line(index: usize, clue: &Clue) -> String {
    format!("  {}.  {}", index + 1, clue.entry.expression.cyan())
}

/// Elapsed play time as m:ss
#[must_use]
pub fn elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formats_minutes_and_seconds() {
        assert_eq!(elapsed(0), "0:00");
        assert_eq!(elapsed(59), "0:59");
        assert_eq!(elapsed(60), "1:00");
        assert_eq!(elapsed(754), "12:34");
    }

    #[test]
    fn emoji_row_matches_feedback() {
        let guess = Word::new("LLAMA").unwrap();
        let secret = Word::new("ALLOW").unwrap();
        let feedback = Feedback::evaluate(&guess, &secret);
        assert_eq!(feedback_emoji(&feedback), "🟨🟩🟨⬛⬛");
    }

    #[test]
    fn keyboard_rows_cover_all_letters() {
        let rows = keyboard_rows(&KeyboardState::new());
        let joined = rows.join("");
        for letter in 'A'..='Z' {
            assert!(joined.contains(letter), "missing {letter}");
        }
    }
}
