//! Print the clue set for a date
//!
//! Spoiler-free by default; `--reveal` also prints the secret word, the full
//! equations, and their explanations.

use crate::catalog::EquationCatalog;
use crate::core::Word;
use crate::output::clue_line;
use crate::puzzle::{OverrideTable, generate};
use chrono::NaiveDate;
use colored::Colorize;

/// Print the puzzle for `date`
pub fn run_preview(
    date: NaiveDate,
    version: u32,
    reveal: bool,
    pool: &[Word],
    catalog: &EquationCatalog,
    overrides: &OverrideTable,
) {
    let puzzle = generate(date, version, pool, catalog, overrides);
    let authored = overrides.get(date).is_some();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Physicle for {}{}",
        puzzle.date.format("%B %-d, %Y").to_string().bright_yellow().bold(),
        if authored { " (hand-authored)" } else { "" }
    );
    println!("{}\n", "─".repeat(60).cyan());

    for (i, clue) in puzzle.clues.iter().enumerate() {
        println!("{}", clue_line(i, clue));
    }

    if reveal {
        println!("\nSecret word: {}\n", puzzle.word.text().green().bold());
        for clue in &puzzle.clues {
            println!("  {} — {}", clue.entry.full_equation.cyan(), clue.entry.explanation);
        }
    }
    println!();
}
