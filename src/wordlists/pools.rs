//! Solution and valid-guess pools
//!
//! Built once at startup and shared read-only with the session and hint engine.

use super::embedded::{SOLUTIONS, VALID_GUESSES};
use super::loader::words_from_slice;
use crate::core::Word;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// The pools cannot support a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("No solutions loaded.")]
    EmptySolutions,
    #[error("No valid guesses loaded.")]
    EmptyValidGuesses,
}

/// Immutable pair of word pools
///
/// Every solution is also a valid guess. Solution order is preserved (it decides
/// which word a daily index maps to) with duplicates dropped.
#[derive(Debug, Clone, Default)]
pub struct WordPools {
    solutions: Vec<Word>,
    valid: FxHashSet<Word>,
}

impl WordPools {
    /// Build pools from a solution list and an extra valid-guess list
    pub fn new(
        solutions: impl IntoIterator<Item = Word>,
        valid: impl IntoIterator<Item = Word>,
    ) -> Self {
        let mut valid: FxHashSet<Word> = valid.into_iter().collect();
        let mut seen = FxHashSet::default();
        let solutions: Vec<Word> = solutions
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        for word in &solutions {
            valid.insert(word.clone());
        }

        tracing::debug!(
            solutions = solutions.len(),
            valid = valid.len(),
            "word pools built"
        );

        Self { solutions, valid }
    }

    /// Pools from the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(SOLUTIONS), words_from_slice(VALID_GUESSES))
    }

    /// Solution words in pool order
    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Solution at a given index
    #[inline]
    #[must_use]
    pub fn solution(&self, index: usize) -> Option<&Word> {
        self.solutions.get(index)
    }

    /// Whether `word` is an accepted guess
    #[inline]
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// Number of accepted guesses (solutions included)
    #[inline]
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    /// Check that a game can be started from these pools
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either pool is empty.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.solutions.is_empty() {
            return Err(ConfigError::EmptySolutions);
        }
        if self.valid.is_empty() {
            return Err(ConfigError::EmptyValidGuesses);
        }
        Ok(())
    }
}
