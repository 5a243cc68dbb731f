//! Evaluate the hint engine as a player
//!
//! Plays every solution (or the first `limit`) by always guessing the top hint,
//! and collects the guess distribution.

use crate::core::{MAX_GUESSES, Score, Word};
use crate::solver::{Hint, HintEngine};
use crate::wordlists::WordPools;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result from playing a single target
#[derive(Debug, Clone)]
pub struct GameReplay {
    pub target: Word,
    pub guesses: Vec<Word>,
    pub solved: bool,
}

/// Statistics from playing many targets
#[derive(Debug)]
pub struct EvaluationResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// `distribution[n - 1]` counts targets solved in `n` guesses
    pub distribution: [usize; MAX_GUESSES],
    pub average_guesses: f64,
    pub total_time: Duration,
    pub hardest: Vec<(Word, usize)>,
    pub unsolved: Vec<Word>,
}

/// Play one game against `target`, guessing the best hint each turn
#[must_use]
pub fn play_with_hints(pools: &WordPools, target: &Word) -> GameReplay {
    let engine = HintEngine::new(pools.solutions());
    let mut history: Vec<(Word, Score)> = Vec::new();
    let mut guesses = Vec::new();
    let mut solved = false;

    for _ in 0..MAX_GUESSES {
        let Some(guess) = next_guess(pools, &engine.hint(&history)) else {
            break;
        };

        let score = Score::calculate(&guess, target);
        guesses.push(guess.clone());
        if score.is_perfect() {
            solved = true;
            break;
        }
        history.push((guess, score));
    }

    GameReplay {
        target: target.clone(),
        guesses,
        solved,
    }
}

fn next_guess(pools: &WordPools, hint: &Hint) -> Option<Word> {
    match hint {
        Hint::Openers(openers) => openers
            .iter()
            .filter_map(|text| Word::new(text).ok())
            .find(|word| pools.is_valid_guess(word))
            .or_else(|| pools.solutions().first().cloned()),
        Hint::Candidates { top, .. } => top.first().cloned(),
        Hint::Exhausted | Hint::GameOver => None,
    }
}

/// Play every solution in the pool (or the first `limit`)
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_evaluation(pools: &WordPools, limit: Option<usize>) -> EvaluationResult {
    let targets: Vec<&Word> = pools
        .solutions()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!(
        "🎯 Playing {} puzzles ({} valid guesses)...",
        targets.len(),
        pools.valid_count()
    );

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let replays: Vec<GameReplay> = targets
        .par_iter()
        .map(|target| {
            let replay = play_with_hints(pools, target);
            pb.inc(1);
            replay
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut result = summarize(&replays);
    result.total_time = start.elapsed();
    result
}

/// Aggregate replays into statistics
#[must_use]
pub fn summarize(replays: &[GameReplay]) -> EvaluationResult {
    let mut distribution = [0usize; MAX_GUESSES];
    let mut unsolved = Vec::new();
    let mut hardest = Vec::new();
    let mut total_guesses = 0;

    for replay in replays {
        if replay.solved {
            let used = replay.guesses.len();
            if let Some(bucket) = used.checked_sub(1).and_then(|i| distribution.get_mut(i)) {
                *bucket += 1;
            }
            total_guesses += used;
            if used >= 5 {
                hardest.push((replay.target.clone(), used));
            }
        } else {
            unsolved.push(replay.target.clone());
        }
    }

    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(10);

    let solved = replays.len() - unsolved.len();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    EvaluationResult {
        total_words: replays.len(),
        solved,
        failed: unsolved.len(),
        distribution,
        average_guesses,
        total_time: Duration::ZERO,
        hardest,
        unsolved,
    }
}
