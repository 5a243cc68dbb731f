//! Terminal output formatting
//!
//! Display utilities for the game board, stats and command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_evaluation_result, print_stats};
