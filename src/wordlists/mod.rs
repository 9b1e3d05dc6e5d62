//! Word lists for puzzle generation and guess validation
//!
//! Provides embedded word lists compiled into the binary, plus a loader for
//! external files with fallback semantics.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};
pub use loader::{ValidGuesses, WordLists};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn guesses_count_matches_const() {
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, uppercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn guesses_are_valid_words() {
        for &word in GUESSES {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_guesses() {
        // Every candidate secret word must also be a legal guess
        let guess_set: std::collections::HashSet<_> = GUESSES.iter().collect();

        for &answer in ANSWERS {
            assert!(
                guess_set.contains(&answer),
                "Answer '{answer}' not in guess list"
            );
        }
    }

    #[test]
    fn answer_pool_is_larger_than_a_fallback_stub() {
        assert!(ANSWERS_COUNT > 100, "answer pool unexpectedly small");
        assert!(GUESSES_COUNT > ANSWERS_COUNT);
    }
}
