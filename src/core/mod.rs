//! Core domain types for the puzzle
//!
//! Words and guess scoring. Everything here is pure and deterministic.

mod score;
mod word;

pub use score::{Score, TileStatus};
pub use word::{WORD_LEN, Word, WordError};

/// Number of guesses allowed per puzzle
pub const MAX_GUESSES: usize = 6;
