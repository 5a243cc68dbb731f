//! Hints
//!
//! Filters the solution pool down to words consistent with the board so far and
//! ranks them by letter frequency.

mod hints;

pub use hints::{HINT_SIZE, Hint, HintEngine, OPENERS, is_consistent};
