//! Deterministic daily seeds
//!
//! Two pure integer hashes drive puzzle generation: one picks the secret word
//! for a date, the other picks a clue equation per letter. Both fold the date
//! into `year*10000 + month0*100 + day` (month is zero-based) plus a version
//! offset; the clue seed additionally folds in the letter's ASCII code so that
//! different letters select independently. Incrementing the version changes
//! every future date's selection without changing the hashing shape.
//!
//! Integer arithmetic only. The same (date, version, letter) triple yields
//! the same seed on every run and every platform.

use chrono::{Datelike, NaiveDate};

/// Seed used to select the secret word for a date
#[inline]
#[must_use]
pub fn word_seed(date: NaiveDate, version: u32) -> i64 {
    date_key(date) + i64::from(version)
}

/// Seed used to select a clue equation for one letter on a date
///
/// Stable for a fixed (date, letter, version) triple, and independent across
/// letters because the letter code shifts the seed.
#[inline]
#[must_use]
pub fn clue_seed(date: NaiveDate, version: u32, letter: u8) -> i64 {
    date_key(date) + i64::from(version) + i64::from(letter.to_ascii_uppercase())
}

/// Turn a seed into an index over a non-empty list
///
/// # Panics
/// Panics if `len` is zero; callers guard against empty candidate lists.
#[inline]
#[must_use]
pub fn index_from_seed(seed: i64, len: usize) -> usize {
    assert!(len > 0, "cannot index into an empty list");
    usize::try_from(seed.rem_euclid(len as i64)).expect("rem_euclid of positive len is in range")
}

#[inline]
fn date_key(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month0()) * 100 + i64::from(date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn word_seed_is_stable() {
        let d = date(2025, 2, 27);
        assert_eq!(word_seed(d, 0), word_seed(d, 0));
        // year*10000 + month0*100 + day: 2025*10000 + 1*100 + 27
        assert_eq!(word_seed(d, 0), 20_250_127);
    }

    #[test]
    fn word_seed_month_is_zero_based() {
        assert_eq!(word_seed(date(2025, 1, 1), 0), 20_250_001);
        assert_eq!(word_seed(date(2025, 12, 31), 0), 20_251_131);
    }

    #[test]
    fn version_shifts_every_selection() {
        let d = date(2025, 6, 15);
        assert_eq!(word_seed(d, 3) - word_seed(d, 0), 3);
        assert_eq!(clue_seed(d, 3, b'E') - clue_seed(d, 0, b'E'), 3);
    }

    #[test]
    fn clue_seed_folds_in_letter_code() {
        let d = date(2025, 2, 27);
        assert_eq!(clue_seed(d, 0, b'A'), word_seed(d, 0) + 65);
        assert_eq!(clue_seed(d, 0, b'Z'), word_seed(d, 0) + 90);
        assert_eq!(clue_seed(d, 0, b'q'), clue_seed(d, 0, b'Q'));
    }

    #[test]
    fn different_letters_select_independently() {
        let d = date(2025, 2, 27);
        assert_ne!(clue_seed(d, 0, b'A'), clue_seed(d, 0, b'B'));
    }

    #[test]
    fn index_wraps_modulo_len() {
        assert_eq!(index_from_seed(20_250_127, 10), 7);
        assert_eq!(index_from_seed(5, 5), 0);
        assert_eq!(index_from_seed(0, 3), 0);
    }
}
