//! Command implementations

pub mod evaluate;
pub mod play;
pub mod stats;

pub use evaluate::{EvaluationResult, GameReplay, play_with_hints, run_evaluation, summarize};
pub use play::run_play;
pub use stats::run_stats;
