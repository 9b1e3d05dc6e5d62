//! JSON file store
//!
//! One JSON file per record in a state directory. Writes go through a
//! temporary file in the same directory and an atomic rename, so a crash
//! mid-write can never leave a half-written record. A record that fails to
//! parse is logged and treated as absent, and the game starts fresh.

use super::StateStore;
use crate::game::{SavedSession, StreakRecord};
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const SESSION_FILE: &str = "session.json";
const STREAK_FILE: &str = "streak.json";

/// File-backed store rooted at a state directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default state directory: `$PHYSICLE_STATE_DIR`, or `.physicle`
    #[must_use]
    pub fn default_dir() -> PathBuf {
        std::env::var_os("PHYSICLE_STATE_DIR")
            .map_or_else(|| PathBuf::from(".physicle"), PathBuf::from)
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.dir.join(file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("cannot read {}: {e}", path.display());
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("discarding unparseable {}: {e}", path.display());
                None
            }
        }
    }

    fn save<T: Serialize>(&self, file: &str, value: &T) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_vec_pretty(value).map_err(io::Error::other)?;
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(&json)?;
        temp.persist(self.dir.join(file))?;
        Ok(())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StateStore for JsonStore {
    fn load_session(&self) -> Option<SavedSession> {
        self.load(SESSION_FILE)
    }

    fn save_session(&self, session: &SavedSession) -> io::Result<()> {
        self.save(SESSION_FILE, session)
    }

    fn load_streak(&self) -> StreakRecord {
        self.load(STREAK_FILE).unwrap_or_default()
    }

    fn save_streak(&self, streak: &StreakRecord) -> io::Result<()> {
        self.save(STREAK_FILE, streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EquationCatalog;
    use crate::game::Session;
    use crate::puzzle::{OverrideTable, generate};
    use crate::wordlists::loader::words_from_slice;
    use chrono::NaiveDate;

    fn saved_session() -> SavedSession {
        let pool = words_from_slice(&["QUARK"]);
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let puzzle = generate(date, 0, &pool, &EquationCatalog::builtin(), &OverrideTable::default());
        Session::new(puzzle).to_saved(0)
    }

    #[test]
    fn missing_records_load_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        assert!(store.load_session().is_none());
        assert_eq!(store.load_streak(), StreakRecord::default());
    }

    #[test]
    fn session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let saved = saved_session();
        store.save_session(&saved).unwrap();
        assert_eq!(store.load_session(), Some(saved));
    }

    #[test]
    fn streak_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let mut streak = StreakRecord::default();
        streak.record_win(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        store.save_streak(&streak).unwrap();
        assert_eq!(store.load_streak(), streak);
    }

    #[test]
    fn corrupt_record_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        fs::write(dir.path().join(SESSION_FILE), "{not json").unwrap();
        fs::write(dir.path().join(STREAK_FILE), "[]").unwrap();

        assert!(store.load_session().is_none());
        assert_eq!(store.load_streak(), StreakRecord::default());
    }

    #[test]
    fn save_creates_the_state_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nested/state"));

        store.save_streak(&StreakRecord::default()).unwrap();
        assert!(store.dir().join(STREAK_FILE).exists());
    }
}
