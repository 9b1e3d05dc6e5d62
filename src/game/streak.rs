//! Solve-streak tracking
//!
//! A streak counts consecutive calendar days with a winning finalized guess.
//! It is updated only on wins, using day-difference arithmetic against the
//! last solved date: a difference of exactly 1 extends the streak, 0 is a
//! no-op (already counted today), anything else resets to 1.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted streak record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakRecord {
    pub current: u32,
    pub best: u32,
    pub last_solved: Option<NaiveDate>,
}

impl StreakRecord {
    /// Fold a winning finalization on `date` into the record
    pub fn record_win(&mut self, date: NaiveDate) {
        match self.last_solved {
            Some(prev) => {
                let days = date.signed_duration_since(prev).num_days();
                match days {
                    0 => return, // today already counted
                    1 => self.current += 1,
                    _ => self.current = 1,
                }
            }
            None => self.current = 1,
        }

        self.last_solved = Some(date);
        self.best = self.best.max(self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_win_starts_a_streak() {
        let mut streak = StreakRecord::default();
        streak.record_win(date(2026, 8, 6));

        assert_eq!(streak.current, 1);
        assert_eq!(streak.best, 1);
        assert_eq!(streak.last_solved, Some(date(2026, 8, 6)));
    }

    #[test]
    fn consecutive_days_extend() {
        let mut streak = StreakRecord::default();
        streak.record_win(date(2026, 8, 6));
        streak.record_win(date(2026, 8, 7));
        streak.record_win(date(2026, 8, 8));

        assert_eq!(streak.current, 3);
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn same_day_win_is_a_no_op() {
        let mut streak = StreakRecord::default();
        streak.record_win(date(2026, 8, 6));
        streak.record_win(date(2026, 8, 6));

        assert_eq!(streak.current, 1);
        assert_eq!(streak.last_solved, Some(date(2026, 8, 6)));
    }

    #[test]
    fn gap_resets_to_one_but_best_survives() {
        let mut streak = StreakRecord::default();
        streak.record_win(date(2026, 8, 6));
        streak.record_win(date(2026, 8, 7));
        streak.record_win(date(2026, 8, 10)); // 3-day gap

        assert_eq!(streak.current, 1);
        assert_eq!(streak.best, 2);
    }

    #[test]
    fn backwards_clock_also_resets() {
        let mut streak = StreakRecord::default();
        streak.record_win(date(2026, 8, 6));
        streak.record_win(date(2026, 8, 1));

        assert_eq!(streak.current, 1);
        assert_eq!(streak.last_solved, Some(date(2026, 8, 1)));
    }

    #[test]
    fn extends_across_month_boundary() {
        let mut streak = StreakRecord::default();
        streak.record_win(date(2026, 7, 31));
        streak.record_win(date(2026, 8, 1));

        assert_eq!(streak.current, 2);
    }

    #[test]
    fn serde_round_trip() {
        let mut streak = StreakRecord::default();
        streak.record_win(date(2026, 8, 6));

        let json = serde_json::to_string(&streak).unwrap();
        let back: StreakRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, streak);
    }
}
