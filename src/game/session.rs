//! Game session state machine
//!
//! Session state is an explicit value object with pure transition methods
//! (`apply_letter`, `apply_backspace`, `submit_guess`), so the whole game
//! flow is unit-testable without any terminal or storage attached. The UI
//! layer renders the session and persists its saved form after each change.

use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::game::keyboard::KeyboardState;
use crate::puzzle::DailyPuzzle;
use crate::wordlists::ValidGuesses;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum number of finalized guesses per puzzle
pub const MAX_GUESSES: usize = 4;

/// Whether the game is still accepting input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One finalized guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of a submit transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess was finalized; `state` is the state after evaluation
    Accepted { feedback: Feedback, state: GameState },
    /// Rejected: not in the valid-guess list. No attempt is consumed.
    NotAWord,
    /// Ignored: fewer than 5 letters filled
    Incomplete,
    /// Ignored: the game is already over
    Finished,
}

/// Live state of one game against one daily puzzle
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: DailyPuzzle,
    attempts: Vec<Attempt>,
    pending: Vec<u8>,
    state: GameState,
    keyboard: KeyboardState,
}

impl Session {
    /// Start a fresh game for a puzzle
    #[must_use]
    pub fn new(puzzle: DailyPuzzle) -> Self {
        Self {
            puzzle,
            attempts: Vec::new(),
            pending: Vec::new(),
            state: GameState::InProgress,
            keyboard: KeyboardState::new(),
        }
    }

    #[must_use]
    pub fn puzzle(&self) -> &DailyPuzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Letters typed into the active row so far
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_GUESSES - self.attempts.len()
    }

    /// Type a letter into the active row
    ///
    /// Returns true if the row changed. Non-letters, a full row, and a
    /// finished game are all ignored.
    pub fn apply_letter(&mut self, key: char) -> bool {
        if self.state.is_over() || self.pending.len() >= WORD_LENGTH || !key.is_ascii_alphabetic() {
            return false;
        }
        self.pending.push((key as u8).to_ascii_uppercase());
        true
    }

    /// Delete the last letter of the active row
    ///
    /// Returns true if the row changed.
    pub fn apply_backspace(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }
        self.pending.pop().is_some()
    }

    /// Finalize the active row
    ///
    /// An incomplete row is silently ignored; a word outside the valid-guess
    /// list is rejected without consuming an attempt. An accepted guess is
    /// evaluated, folded into the keyboard state, and may end the game.
    pub fn submit_guess(&mut self, valid: &ValidGuesses) -> SubmitOutcome {
        if self.state.is_over() {
            return SubmitOutcome::Finished;
        }
        if self.pending.len() < WORD_LENGTH {
            return SubmitOutcome::Incomplete;
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(&self.pending);
        let word = Word::from_letters(letters).expect("pending letters are validated uppercase");

        if !valid.accepts(&word) {
            return SubmitOutcome::NotAWord;
        }

        let feedback = Feedback::evaluate(&word, &self.puzzle.word);
        self.keyboard.observe(&word, &feedback);
        self.attempts.push(Attempt { word, feedback });
        self.pending.clear();

        if feedback.is_win() {
            self.state = GameState::Won;
        } else if self.attempts.len() >= MAX_GUESSES {
            self.state = GameState::Lost;
        }

        SubmitOutcome::Accepted {
            feedback,
            state: self.state,
        }
    }

    /// Snapshot for persistence
    #[must_use]
    pub fn to_saved(&self, elapsed_secs: u64) -> SavedSession {
        SavedSession {
            date: self.puzzle.date,
            puzzle: self.puzzle.clone(),
            guesses: self.attempts.iter().map(|a| a.word.text()).collect(),
            pending: self.pending.iter().map(|&b| b as char).collect(),
            complete: self.state.is_over(),
            elapsed_secs,
        }
    }

    /// Rebuild a session from its saved form
    ///
    /// Feedback and keyboard state are recomputed from the stored guesses, so
    /// the completion state cannot disagree with the grid. Returns `None` for
    /// snapshots that do not describe a reachable session.
    #[must_use]
    pub fn restore(saved: &SavedSession) -> Option<(Self, u64)> {
        if saved.guesses.len() > MAX_GUESSES || saved.pending.len() > WORD_LENGTH {
            return None;
        }

        let mut session = Self::new(saved.puzzle.clone());
        for text in &saved.guesses {
            if session.state.is_over() {
                return None; // guesses after a finished game
            }
            let word = Word::new(text).ok()?;
            let feedback = Feedback::evaluate(&word, &session.puzzle.word);
            session.keyboard.observe(&word, &feedback);
            session.attempts.push(Attempt { word, feedback });
            if feedback.is_win() {
                session.state = GameState::Won;
            } else if session.attempts.len() >= MAX_GUESSES {
                session.state = GameState::Lost;
            }
        }

        if !session.state.is_over() {
            for key in saved.pending.chars() {
                if !session.apply_letter(key) {
                    return None;
                }
            }
        }

        Some((session, saved.elapsed_secs))
    }
}

/// Serialized form of a session, one record per calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub date: NaiveDate,
    pub puzzle: DailyPuzzle,
    pub guesses: Vec<String>,
    pub pending: String,
    pub complete: bool,
    pub elapsed_secs: u64,
}

/// Resume a saved session, but only for the current calendar date
///
/// A snapshot from a different date is ignored (not deleted): yesterday's
/// grid must never leak into today's puzzle.
#[must_use]
pub fn resume_for(saved: Option<SavedSession>, today: NaiveDate) -> Option<(Session, u64)> {
    saved
        .filter(|s| s.date == today)
        .and_then(|s| Session::restore(&s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EquationCatalog;
    use crate::puzzle::{OverrideTable, generate};
    use crate::wordlists::loader::words_from_slice;

    fn puzzle_for(word: &str, date: NaiveDate) -> DailyPuzzle {
        let pool = words_from_slice(&[word]);
        generate(date, 0, &pool, &EquationCatalog::builtin(), &OverrideTable::default())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn session(word: &str) -> Session {
        Session::new(puzzle_for(word, today()))
    }

    fn accept_all() -> ValidGuesses {
        ValidGuesses::default()
    }

    fn type_word(s: &mut Session, word: &str) {
        for key in word.chars() {
            s.apply_letter(key);
        }
    }

    #[test]
    fn letters_fill_left_to_right() {
        let mut s = session("QUARK");
        assert!(s.apply_letter('q'));
        assert!(s.apply_letter('U'));
        assert_eq!(s.pending(), b"QU");

        assert!(s.apply_backspace());
        assert_eq!(s.pending(), b"Q");
        assert!(s.apply_backspace());
        assert!(!s.apply_backspace()); // row already empty
    }

    #[test]
    fn row_caps_at_five_letters() {
        let mut s = session("QUARK");
        type_word(&mut s, "QUARKS");
        assert_eq!(s.pending(), b"QUARK");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut s = session("QUARK");
        assert!(!s.apply_letter('1'));
        assert!(!s.apply_letter(' '));
        assert!(s.pending().is_empty());
    }

    #[test]
    fn incomplete_submission_is_ignored() {
        let mut s = session("QUARK");
        type_word(&mut s, "QUA");
        assert_eq!(s.submit_guess(&accept_all()), SubmitOutcome::Incomplete);
        assert_eq!(s.attempts().len(), 0);
        assert_eq!(s.pending(), b"QUA"); // row untouched
    }

    #[test]
    fn invalid_word_does_not_consume_an_attempt() {
        let mut s = session("QUARK");
        let valid = ValidGuesses::from_words(&words_from_slice(&["QUARK", "FORCE"]));

        type_word(&mut s, "ZZZZZ");
        assert_eq!(s.submit_guess(&valid), SubmitOutcome::NotAWord);
        assert_eq!(s.attempts().len(), 0);
        assert_eq!(s.attempts_left(), MAX_GUESSES);
        assert_eq!(s.pending(), b"ZZZZZ"); // still editable
    }

    #[test]
    fn empty_validation_set_accepts_anything() {
        let mut s = session("QUARK");
        type_word(&mut s, "ZZZZZ");
        assert!(matches!(
            s.submit_guess(&accept_all()),
            SubmitOutcome::Accepted { .. }
        ));
    }

    #[test]
    fn correct_guess_wins() {
        let mut s = session("QUARK");
        type_word(&mut s, "QUARK");

        match s.submit_guess(&accept_all()) {
            SubmitOutcome::Accepted { feedback, state } => {
                assert!(feedback.is_win());
                assert_eq!(state, GameState::Won);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(s.state().is_over());
    }

    #[test]
    fn fourth_wrong_guess_loses() {
        let mut s = session("QUARK");
        for _ in 0..MAX_GUESSES {
            assert_eq!(s.state(), GameState::InProgress);
            type_word(&mut s, "FORCE");
            assert!(matches!(
                s.submit_guess(&accept_all()),
                SubmitOutcome::Accepted { .. }
            ));
        }
        assert_eq!(s.state(), GameState::Lost);

        // No further input accepted
        assert!(!s.apply_letter('Q'));
        assert_eq!(s.submit_guess(&accept_all()), SubmitOutcome::Finished);
    }

    #[test]
    fn keyboard_tracks_finalized_guesses() {
        let mut s = session("QUARK");
        type_word(&mut s, "FORCE");
        s.submit_guess(&accept_all());

        use crate::core::LetterStatus;
        assert_eq!(s.keyboard().status(b'R'), Some(LetterStatus::Present));
        assert_eq!(s.keyboard().status(b'F'), Some(LetterStatus::Absent));
    }

    #[test]
    fn saved_round_trip_preserves_the_grid() {
        let mut s = session("QUARK");
        type_word(&mut s, "FORCE");
        s.submit_guess(&accept_all());
        type_word(&mut s, "QU");

        let saved = s.to_saved(42);
        assert_eq!(saved.guesses, vec!["FORCE".to_string()]);
        assert_eq!(saved.pending, "QU");
        assert!(!saved.complete);

        let (restored, elapsed) = Session::restore(&saved).unwrap();
        assert_eq!(elapsed, 42);
        assert_eq!(restored.attempts().len(), 1);
        assert_eq!(restored.attempts()[0].word.text(), "FORCE");
        assert_eq!(restored.attempts()[0].feedback, s.attempts()[0].feedback);
        assert_eq!(restored.pending(), b"QU");
        assert_eq!(restored.state(), GameState::InProgress);
    }

    #[test]
    fn restore_recomputes_completion() {
        let mut s = session("QUARK");
        type_word(&mut s, "QUARK");
        s.submit_guess(&accept_all());

        let saved = s.to_saved(10);
        assert!(saved.complete);

        let (restored, _) = Session::restore(&saved).unwrap();
        assert_eq!(restored.state(), GameState::Won);
    }

    #[test]
    fn restore_rejects_corrupt_snapshots() {
        let mut saved = session("QUARK").to_saved(0);
        saved.guesses = vec!["NOPE".to_string()]; // not a 5-letter word
        assert!(Session::restore(&saved).is_none());

        let mut saved = session("QUARK").to_saved(0);
        saved.guesses = vec!["FORCE".to_string(); MAX_GUESSES + 1];
        assert!(Session::restore(&saved).is_none());
    }

    #[test]
    fn resume_ignores_other_dates() {
        let mut s = session("QUARK");
        type_word(&mut s, "FORCE");
        s.submit_guess(&accept_all());
        let saved = s.to_saved(5);

        let yesterday = today().pred_opt().unwrap();
        assert!(resume_for(Some(saved.clone()), yesterday).is_none());
        assert!(resume_for(Some(saved), today()).is_some());
        assert!(resume_for(None, today()).is_none());
    }

    #[test]
    fn session_serde_round_trip() {
        let mut s = session("QUARK");
        type_word(&mut s, "FORCE");
        s.submit_guess(&accept_all());

        let saved = s.to_saved(7);
        let json = serde_json::to_string(&saved).unwrap();
        let back: SavedSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, saved);
    }
}
