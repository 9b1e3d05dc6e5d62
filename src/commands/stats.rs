//! Print the persisted streak record

use crate::storage::StateStore;
use colored::Colorize;

/// Print streak statistics from the store
pub fn run_stats(store: &dyn StateStore) {
    let streak = store.load_streak();

    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "PHYSICLE STREAK".bright_cyan().bold());
    println!("{}\n", "═".repeat(40).cyan());

    println!("  Current streak: {}", streak.current.to_string().green().bold());
    println!("  Best streak:    {}", streak.best.to_string().bright_yellow());
    match streak.last_solved {
        Some(date) => println!("  Last solved:    {}", date.format("%B %-d, %Y")),
        None => println!("  Last solved:    never"),
    }
    println!();
}
