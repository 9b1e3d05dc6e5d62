//! Persisted state
//!
//! Session and streak records live behind the `StateStore` port so the game
//! logic never touches the filesystem directly; the TUI drives whichever
//! store it is handed, and tests can use an in-memory one.

mod json;

pub use json::JsonStore;

use crate::game::{SavedSession, StreakRecord};
use std::io;

/// Storage port for the two persisted records
///
/// Loads are infallible by design: a missing or unreadable record is the same
/// as no record (logged by the implementation, never surfaced as an error).
pub trait StateStore {
    /// The saved session, if one exists and parses
    fn load_session(&self) -> Option<SavedSession>;

    /// Persist the session snapshot
    ///
    /// # Errors
    /// Returns an I/O error if the record cannot be written.
    fn save_session(&self, session: &SavedSession) -> io::Result<()>;

    /// The streak record, defaulting to zeroes when absent
    fn load_streak(&self) -> StreakRecord;

    /// Persist the streak record
    ///
    /// # Errors
    /// Returns an I/O error if the record cannot be written.
    fn save_streak(&self, streak: &StreakRecord) -> io::Result<()>;
}
