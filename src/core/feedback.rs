//! Guess feedback calculation
//!
//! Comparing a finalized guess against the secret word yields one status per
//! cell. Duplicate letters follow the classic two-pass rule: exact matches
//! claim letters from the secret's pool first, then remaining letters are
//! matched left to right, and excess copies come back as `Absent`.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-cell outcome of a finalized guess
///
/// Ordered so that a later, better observation can overwrite an earlier one:
/// `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterStatus {
    /// Letter does not appear in the secret word (or all copies are used up)
    Absent,
    /// Letter appears in the secret word at a different position
    Present,
    /// Letter is in exactly the right position
    Correct,
}

/// Feedback for one finalized guess: one `LetterStatus` per cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// Calculate the feedback when `guess` is compared against `secret`
    ///
    /// # Algorithm
    /// 1. Build a multiset of remaining letter counts from `secret`
    /// 2. First pass: mark exact position matches `Correct` and decrement
    /// 3. Second pass over the rest: mark `Present` while the letter still has
    ///    remaining count, otherwise `Absent`
    ///
    /// The number of `Present` + `Correct` cells for any letter never exceeds
    /// that letter's count in `secret`.
    ///
    /// # Examples
    /// ```
    /// use physicle::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("LLAMA").unwrap();
    /// let secret = Word::new("ALLOW").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// // L(present) L(correct) A(present) M(absent) A(absent)
    /// assert_eq!(feedback.status_at(1), LetterStatus::Correct);
    /// assert_eq!(feedback.status_at(4), LetterStatus::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        // First pass: exact matches claim their letter from the pool
        // Allow: index needed to compare guess[i] with secret[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == secret.letter_at(i) {
                result[i] = LetterStatus::Correct;

                if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong-position matches consume what's left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] != LetterStatus::Correct
                && let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// All five cell statuses in position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status of a single cell (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// True when every cell is `Correct` (the guess is the secret word)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count cells with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }
}

impl fmt::Display for Feedback {
    /// Compact text form: `G` correct, `Y` present, `-` absent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            let ch = match status {
                LetterStatus::Correct => 'G',
                LetterStatus::Present => 'Y',
                LetterStatus::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn statuses(guess: &str, secret: &str) -> [LetterStatus; WORD_LENGTH] {
        *Feedback::evaluate(&word(guess), &word(secret)).statuses()
    }

    #[test]
    fn exact_match_all_correct() {
        let feedback = Feedback::evaluate(&word("QUARK"), &word("QUARK"));
        assert!(feedback.is_win());
        assert_eq!(feedback.count(LetterStatus::Correct), 5);
    }

    #[test]
    fn no_shared_letters_all_absent() {
        let feedback = Feedback::evaluate(&word("FOXED"), &word("QUARK"));
        assert_eq!(feedback.count(LetterStatus::Absent), 5);
        assert!(!feedback.is_win());
    }

    #[test]
    fn duplicate_letters_never_over_marked() {
        // ALLOW has two L's and one A. LLAMA guesses two L's and two A's:
        // pass 1 marks L at position 1 correct (pool: L=1, A=1);
        // pass 2 marks L at 0 present (L=0), A at 2 present (A=0),
        // then M and the second A run dry.
        assert_eq!(
            statuses("LLAMA", "ALLOW"),
            [
                LetterStatus::Present,
                LetterStatus::Correct,
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Absent,
            ]
        );
    }

    #[test]
    fn duplicate_letters_exact_match_takes_priority() {
        // FLOOR vs ROBOT: the O at position 3 is an exact match and must win
        // the pool entry over the earlier wrong-position O.
        assert_eq!(
            statuses("ROBOT", "FLOOR"),
            [
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Correct,
                LetterStatus::Absent,
            ]
        );
    }

    #[test]
    fn excess_copies_marked_absent() {
        // Secret has one E; guess has three. Only one may score.
        let feedback = Feedback::evaluate(&word("EERIE"), &word("FORCE"));
        let scored = feedback.count(LetterStatus::Correct) + feedback.count(LetterStatus::Present);
        assert_eq!(scored, 2); // one E plus the R
    }

    #[test]
    fn present_marks_consume_left_to_right() {
        // Guess SPEED against secret ERASE: no greens, then the second pass
        // hands ERASE's two E's to SPEED's E's in position order.
        assert_eq!(
            statuses("SPEED", "ERASE"),
            [
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Absent,
            ]
        );
    }

    #[test]
    fn win_requires_all_five() {
        let feedback = Feedback::evaluate(&word("FORGE"), &word("FORCE"));
        assert_eq!(feedback.count(LetterStatus::Correct), 4);
        assert!(!feedback.is_win());
    }

    #[test]
    fn display_compact_form() {
        let feedback = Feedback::evaluate(&word("LLAMA"), &word("ALLOW"));
        assert_eq!(feedback.to_string(), "YGY--");
    }

    #[test]
    fn status_ordering_supports_upgrades() {
        assert!(LetterStatus::Absent < LetterStatus::Present);
        assert!(LetterStatus::Present < LetterStatus::Correct);
    }

    #[test]
    fn serde_round_trip() {
        let feedback = Feedback::evaluate(&word("ROBOT"), &word("FLOOR"));
        let json = serde_json::to_string(&feedback).unwrap();
        let back: Feedback = serde_json::from_str(&json).unwrap();
        assert_eq!(back, feedback);
    }
}
