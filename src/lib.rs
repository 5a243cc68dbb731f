//! Wordle Daily
//!
//! Engine for a daily five-letter word puzzle: two-pass scoring, date-based
//! puzzle selection, candidate hints, a session state machine with saved daily
//! progress, and lifetime stats.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{Score, TileStatus, Word};
//!
//! let guess = Word::new("llama").unwrap();
//! let target = Word::new("alarm").unwrap();
//!
//! let score = Score::calculate(&guess, &target);
//! assert_eq!(score.statuses()[0], TileStatus::Absent);
//! println!("{}", score.to_emoji());
//! ```
//!
//! A [`session::Session`] ties the pieces together; it borrows
//! [`wordlists::WordPools`], owns a [`store::Store`] and reads the date from a
//! [`daily::Clock`].

// Core domain types
pub mod core;

// Daily puzzle selection
pub mod daily;

// Definition lookups
pub mod definitions;

// Game session state machine
pub mod session;

// Hints
pub mod solver;

// Lifetime statistics
pub mod stats;

// Key-value persistence
pub mod store;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
