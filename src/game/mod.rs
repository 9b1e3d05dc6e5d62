//! Game session state
//!
//! The session value object and its pure transitions, keyboard letter
//! tracking, and solve-streak arithmetic.

mod keyboard;
mod session;
mod streak;

pub use keyboard::KeyboardState;
pub use session::{
    Attempt, GameState, MAX_GUESSES, SavedSession, Session, SubmitOutcome, resume_for,
};
pub use streak::StreakRecord;
