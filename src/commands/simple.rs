//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI. Practice mode: nothing is persisted
//! and the streak is untouched.

use crate::core::WORD_LENGTH;
use crate::game::{GameState, MAX_GUESSES, Session, SubmitOutcome};
use crate::output::{clue_line, feedback_row, keyboard_rows};
use crate::puzzle::DailyPuzzle;
use crate::wordlists::ValidGuesses;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple line-based game
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(puzzle: DailyPuzzle, valid: &ValidGuesses) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 PHYSICLE - Daily Physics Puzzle              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Each equation below is the right-hand side of a physics equation.");
    println!("The letters it solves for spell a 5-letter word, in order.\n");
    println!("Clues for {}:\n", puzzle.date.format("%B %-d, %Y"));

    for (i, clue) in puzzle.clues.iter().enumerate() {
        println!("{}", clue_line(i, clue));
    }
    println!("\nYou have {MAX_GUESSES} guesses. Type 'quit' to give up.\n");

    let mut session = Session::new(puzzle);

    while session.state() == GameState::InProgress {
        let turn = session.attempts().len() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_GUESSES}"))?;

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThe word was: {}\n", session.puzzle().word.text().bold());
                return Ok(());
            }
            guess if guess.len() != WORD_LENGTH => {
                println!("Enter exactly {WORD_LENGTH} letters.\n");
                continue;
            }
            guess => {
                while session.apply_backspace() {}
                for key in guess.chars() {
                    session.apply_letter(key);
                }
            }
        }

        match session.submit_guess(valid) {
            SubmitOutcome::Accepted { .. } => {
                let attempt = session.attempts().last().expect("just accepted");
                println!("\n{}\n", feedback_row(&attempt.word, &attempt.feedback));
                for row in keyboard_rows(session.keyboard()) {
                    println!("  {row}");
                }
                println!();
            }
            SubmitOutcome::NotAWord => {
                println!("{}\n", "Not a valid word".yellow());
            }
            SubmitOutcome::Incomplete => {
                println!("Letters only, please.\n");
            }
            SubmitOutcome::Finished => break,
        }
    }

    match session.state() {
        GameState::Won => {
            let used = session.attempts().len();
            println!(
                "{}",
                format!("✅ Solved today's Physicle in {used}/{MAX_GUESSES} guesses!")
                    .green()
                    .bold()
            );
        }
        GameState::Lost => {
            println!(
                "{}",
                format!("❌ Out of guesses. The word was: {}", session.puzzle().word.text())
                    .red()
                    .bold()
            );
            println!("\nThe equations were:");
            for clue in &session.puzzle().clues {
                println!("  {} — {}", clue.entry.full_equation.cyan(), clue.entry.explanation);
            }
        }
        GameState::InProgress => {}
    }
    println!();

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_lowercase())
}
