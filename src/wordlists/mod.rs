//! Word lists for the puzzle
//!
//! Provides the embedded default lists and the [`WordPools`] pair built from them
//! (or from files).

mod embedded;
pub mod loader;
mod pools;

pub use embedded::{SOLUTIONS, SOLUTIONS_COUNT, VALID_GUESSES, VALID_GUESSES_COUNT};
pub use pools::{ConfigError, WordPools};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn valid_count_matches_const() {
        assert_eq!(VALID_GUESSES.len(), VALID_GUESSES_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in SOLUTIONS.iter().chain(VALID_GUESSES) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_pools_are_usable() {
        let pools = WordPools::embedded();
        assert_eq!(pools.solutions().len(), SOLUTIONS_COUNT);
        assert!(pools.valid_count() >= SOLUTIONS_COUNT);
        assert!(pools.check().is_ok());
    }
}
