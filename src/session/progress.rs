//! Saved progress for today's daily puzzle

use super::board::Board;
use crate::core::{MAX_GUESSES, Score, Word};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store key for the daily progress record
pub const DAILY_PROGRESS_KEY: &str = "wordle_daily_state_v1";

/// Mirror of the daily board, rewritten after every accepted daily guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgressRecord {
    pub date: NaiveDate,
    pub solution_index: usize,
    pub guesses: Vec<Word>,
    pub results: Vec<Score>,
    pub finished: bool,
    pub won: bool,
}

impl DailyProgressRecord {
    /// Fresh record for a day with nothing guessed yet
    #[must_use]
    pub const fn empty(date: NaiveDate, solution_index: usize) -> Self {
        Self {
            date,
            solution_index,
            guesses: Vec::new(),
            results: Vec::new(),
            finished: false,
            won: false,
        }
    }

    /// Snapshot of a board
    #[must_use]
    pub fn from_board(
        date: NaiveDate,
        solution_index: usize,
        board: &Board,
        finished: bool,
        won: bool,
    ) -> Self {
        let (guesses, results) = board.history().into_iter().unzip();
        Self {
            date,
            solution_index,
            guesses,
            results,
            finished,
            won,
        }
    }

    /// Whether this record belongs to `date`'s puzzle at `solution_index`
    #[must_use]
    pub fn is_for(&self, date: NaiveDate, solution_index: usize) -> bool {
        self.date == date && self.solution_index == solution_index
    }

    /// Whether the saved rows can be replayed against `target`
    ///
    /// Every result must be the real score of its guess. A win ends on its
    /// only perfect row, a loss fills the board, and an unfinished record must
    /// still leave a playable board.
    #[must_use]
    pub fn is_replayable(&self, target: &Word) -> bool {
        if self.guesses.len() != self.results.len() || self.guesses.len() > MAX_GUESSES {
            return false;
        }
        let scores_match = self
            .guesses
            .iter()
            .zip(&self.results)
            .all(|(guess, result)| Score::calculate(guess, target) == *result);
        if !scores_match {
            return false;
        }
        let perfect_rows = self.results.iter().filter(|s| s.is_perfect()).count();
        match (self.finished, self.won) {
            // only the last row may be the solve
            (true, true) => perfect_rows == 1 && self.results.last().is_some_and(|s| s.is_perfect()),
            // a loss uses every row
            (true, false) => self.guesses.len() == MAX_GUESSES && perfect_rows == 0,
            (false, _) => self.guesses.len() < MAX_GUESSES && perfect_rows == 0,
        }
    }

    /// Saved guesses paired with their scores
    #[must_use]
    pub fn rows(&self) -> Vec<(Word, Score)> {
        self.guesses
            .iter()
            .cloned()
            .zip(self.results.iter().copied())
            .collect()
    }
}
