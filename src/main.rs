//! Physicle - CLI
//!
//! Daily physics-equation word puzzle with TUI and plain CLI modes.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use physicle::{
    catalog::EquationCatalog,
    commands::{run_preview, run_simple, run_stats},
    game::{Session, resume_for},
    interactive::{App, run_tui},
    puzzle::{OverrideTable, PUZZLE_VERSION, generate},
    storage::{JsonStore, StateStore},
    wordlists::WordLists,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "physicle",
    about = "Daily word puzzle where every letter is clued by a physics equation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer word list file (falls back to the embedded pool)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Valid-guess word list file (falls back to the embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Extra hand-authored puzzles, JSON keyed by date
    #[arg(long, global = true)]
    overrides: Option<PathBuf>,

    /// State directory for the saved session and streak
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default) with session resume and streaks
    Play,

    /// Plain line-based mode; nothing is persisted
    Simple,

    /// Print the clue set for a date
    Preview {
        /// Date to preview, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Generation version to preview with
        #[arg(long, default_value_t = PUZZLE_VERSION)]
        seed_version: u32,

        /// Also print the secret word and explanations
        #[arg(short, long)]
        reveal: bool,
    },

    /// Show streak statistics
    Stats,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lists = WordLists::load(cli.answers.as_deref(), cli.guesses.as_deref());
    let catalog = EquationCatalog::builtin();

    let mut overrides = OverrideTable::builtin();
    if let Some(path) = &cli.overrides {
        let extra = OverrideTable::load_file(path)
            .with_context(|| format!("loading overrides from {}", path.display()))?;
        overrides.merge(extra);
    }

    let store = JsonStore::new(cli.state_dir.clone().unwrap_or_else(JsonStore::default_dir));
    let today = Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(today, &lists, &catalog, &overrides, &store),
        Commands::Simple => {
            let puzzle = generate(today, PUZZLE_VERSION, &lists.answers, &catalog, &overrides);
            run_simple(puzzle, &lists.valid).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Preview {
            date,
            seed_version,
            reveal,
        } => {
            run_preview(
                date.unwrap_or(today),
                seed_version,
                reveal,
                &lists.answers,
                &catalog,
                &overrides,
            );
            Ok(())
        }
        Commands::Stats => {
            run_stats(&store);
            Ok(())
        }
    }
}

/// Resume today's saved game if one exists, otherwise start fresh
fn run_play_command(
    today: NaiveDate,
    lists: &WordLists,
    catalog: &EquationCatalog,
    overrides: &OverrideTable,
    store: &JsonStore,
) -> Result<()> {
    let (session, elapsed_secs) = match resume_for(store.load_session(), today) {
        Some(resumed) => resumed,
        None => {
            let puzzle = generate(today, PUZZLE_VERSION, &lists.answers, catalog, overrides);
            (Session::new(puzzle), 0)
        }
    };

    let app = App::new(session, elapsed_secs, &lists.valid, store);
    run_tui(app)
}
