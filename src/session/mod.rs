//! Game session state machine
//!
//! `Idle → InProgress → {Won, Lost}`. A session owns the board for the current
//! puzzle, validates and scores guesses, writes daily progress and stats to the
//! store before each call returns, and reports follow-up work (definition
//! lookups) as [`Effect`]s for the host to perform.

mod board;
mod progress;

pub use board::{Board, KeyStatus, Row};
pub use progress::{DAILY_PROGRESS_KEY, DailyProgressRecord};

use crate::core::{MAX_GUESSES, Score, TileStatus, WORD_LEN, Word, WordError};
use crate::daily::{Clock, select_index};
use crate::definitions::{Definition, DefinitionRequest};
use crate::solver::{Hint, HintEngine};
use crate::stats::StatsTracker;
use crate::store::{Store, load_record, save_record};
use crate::wordlists::{ConfigError, WordPools};
use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

/// Which puzzle a session plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The date-selected puzzle, playable once per day
    Daily,
    /// A uniformly random solution
    Random,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The puzzle being played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub mode: Mode,
    pub target: Word,
    /// Daily puzzles only
    pub solution_index: Option<usize>,
    /// Daily puzzles only
    pub date: Option<NaiveDate>,
}

/// A rejected guess; the board is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters.")]
    Incomplete,
    #[error("Already guessed.")]
    Duplicate,
    #[error("Not in word list.")]
    NotInList,
}

/// Work reported back to the host after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Daily progress was written to the store
    ProgressSaved,
    /// Stats were written to the store
    StatsSaved,
    /// Look up a definition and pass it to [`Session::deliver_definition`]
    LookupDefinition(DefinitionRequest),
}

/// A single player's game session
pub struct Session<'a, S: Store, C: Clock> {
    pools: &'a WordPools,
    store: S,
    clock: C,
    stats: StatsTracker,
    puzzle: Option<Puzzle>,
    board: Board,
    keys: KeyStatus,
    status: Status,
    message: String,
    hint: Option<Hint>,
    definition: Option<Definition>,
    generation: u64,
}

impl<'a, S: Store, C: Clock> Session<'a, S, C> {
    /// Create an idle session
    ///
    /// `stats` is usually `StatsTracker::load(&store)`.
    pub fn new(pools: &'a WordPools, stats: StatsTracker, store: S, clock: C) -> Self {
        Self {
            pools,
            store,
            clock,
            stats,
            puzzle: None,
            board: Board::default(),
            keys: KeyStatus::default(),
            status: Status::Idle,
            message: "Type a word.".to_string(),
            hint: None,
            definition: None,
            generation: 0,
        }
    }

    /// Start a session in `mode`; `rng` is only used for random puzzles
    pub fn start<R: Rng + ?Sized>(&mut self, mode: Mode, rng: &mut R) -> Vec<Effect> {
        match mode {
            Mode::Daily => self.start_daily(),
            Mode::Random => self.start_random(rng),
        }
    }

    /// Start a random puzzle
    pub fn start_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Effect> {
        self.begin();
        if let Err(err) = self.pools.check() {
            self.block(err);
            return Vec::new();
        }

        let index = rng.random_range(0..self.pools.solutions().len());
        let Some(target) = self.pools.solution(index).cloned() else {
            self.block(ConfigError::EmptySolutions);
            return Vec::new();
        };

        tracing::debug!(index, "random puzzle started");
        self.puzzle = Some(Puzzle {
            mode: Mode::Random,
            target,
            solution_index: None,
            date: None,
        });
        self.status = Status::InProgress;
        self.message = "Random game started.".to_string();
        Vec::new()
    }

    /// Start (or resume) today's puzzle
    ///
    /// A daily game already finished today, according to the stats record,
    /// comes back in its terminal state. Otherwise saved progress for today is
    /// replayed if it is valid, and a fresh board is started if not.
    pub fn start_daily(&mut self) -> Vec<Effect> {
        self.begin();
        if let Err(err) = self.pools.check() {
            self.block(err);
            return Vec::new();
        }

        let today = self.clock.today();
        let target = select_index(today, self.pools.solutions().len())
            .ok()
            .and_then(|index| Some((index, self.pools.solution(index)?.clone())));
        let Some((index, target)) = target else {
            self.block(ConfigError::EmptySolutions);
            return Vec::new();
        };

        self.puzzle = Some(Puzzle {
            mode: Mode::Daily,
            target: target.clone(),
            solution_index: Some(index),
            date: Some(today),
        });

        let saved = self.load_progress(today, index, &target);
        if let Some(record) = &saved {
            self.replay(&record.rows());
        }

        let mut effects = Vec::new();

        if let Some(outcome) = self.stats.daily_outcome(today) {
            tracing::debug!(%today, ?outcome, "daily puzzle already played");
            self.finish_state(outcome.is_win());
            self.message = if outcome.is_win() {
                "You already solved today's word!".to_string()
            } else {
                "You already played today's word.".to_string()
            };
            effects.extend(self.lookup_effect());
            return effects;
        }

        match saved {
            Some(record) if record.finished => {
                tracing::debug!(%today, won = record.won, "resumed finished daily puzzle");
                self.finish_state(record.won);
                self.message = if record.won {
                    "You already solved today's word!".to_string()
                } else {
                    format!("You already played today's word. The word was {target}.")
                };
                effects.extend(self.lookup_effect());
            }
            Some(record) => {
                tracing::debug!(%today, guesses = record.guesses.len(), "resumed daily puzzle");
                self.status = Status::InProgress;
                self.message = "Continue today's game.".to_string();
            }
            None => {
                tracing::debug!(%today, index, "fresh daily puzzle");
                self.status = Status::InProgress;
                let record = DailyProgressRecord::empty(today, index);
                effects.extend(self.persist_progress(&record));
            }
        }

        effects
    }

    /// Submit a whole row
    ///
    /// Ignored (no effects, nothing changes) unless the session is in progress.
    ///
    /// # Errors
    ///
    /// Returns `GuessError` for incomplete, repeated, or unknown words. The
    /// board and cursor are unchanged and the error text becomes the status
    /// message.
    pub fn submit_guess(&mut self, row: &str) -> Result<Vec<Effect>, GuessError> {
        if self.status != Status::InProgress {
            if self.is_daily() && self.status.is_finished() {
                self.message = "You've already played today's word. Try Random.".to_string();
            }
            return Ok(Vec::new());
        }
        let Some(puzzle) = self.puzzle.clone() else {
            return Ok(Vec::new());
        };

        let word = self.validate(row).inspect_err(|err| {
            self.message = err.to_string();
        })?;

        let score = Score::calculate(&word, &puzzle.target);
        self.board.score_current(&word, score);
        self.keys.apply(&word, score);

        let mut effects = Vec::new();
        let won = word == puzzle.target;
        if won {
            let guesses_used = self.board.cursor() + 1;
            self.status = Status::Won;
            self.message = format!("Nice! You got it in {guesses_used}.");
            effects.extend(self.finish_game(&puzzle, true, guesses_used));
        } else {
            self.board.advance();
            if self.board.is_full() {
                self.status = Status::Lost;
                self.message = format!("Out of guesses. The word was {}.", puzzle.target);
                effects.extend(self.finish_game(&puzzle, false, MAX_GUESSES));
            } else {
                self.message = "Try again.".to_string();
                effects.extend(self.persist_board(&puzzle));
            }
        }

        tracing::debug!(guess = %word, ?score, status = ?self.status, "guess accepted");
        Ok(effects)
    }

    /// Type a letter into the current row; false if it was not accepted
    pub fn type_letter(&mut self, letter: char) -> bool {
        if self.status != Status::InProgress || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.hint = None;
        self.board.push_letter(letter)
    }

    /// Delete the last typed letter; false if there was nothing to delete
    pub fn backspace(&mut self) -> bool {
        if self.status != Status::InProgress {
            return false;
        }
        self.hint = None;
        self.board.pop_letter()
    }

    /// Submit whatever has been typed into the current row
    ///
    /// # Errors
    ///
    /// Same as [`Session::submit_guess`].
    pub fn submit_current(&mut self) -> Result<Vec<Effect>, GuessError> {
        let row = self.board.current_letters().to_string();
        self.submit_guess(&row)
    }

    /// Hint for the current board
    pub fn hint(&mut self) -> Hint {
        let hint = if self.status == Status::InProgress {
            HintEngine::new(self.pools.solutions()).hint(&self.board.history())
        } else {
            Hint::GameOver
        };
        self.hint = Some(hint.clone());
        hint
    }

    /// Hand back the answer to a [`Effect::LookupDefinition`]
    ///
    /// Returns false (and keeps nothing) if the request belongs to an earlier
    /// game, the current game is not won, or there was no definition.
    pub fn deliver_definition(
        &mut self,
        request: &DefinitionRequest,
        definition: Option<Definition>,
    ) -> bool {
        if request.generation != self.generation || self.status != Status::Won {
            tracing::debug!(
                word = %request.word,
                generation = request.generation,
                current = self.generation,
                "discarding stale definition"
            );
            return false;
        }
        let Some(definition) = definition else {
            return false;
        };
        self.definition = Some(definition);
        true
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        self.puzzle.as_ref().map(|puzzle| puzzle.mode)
    }

    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    /// Target word, revealed only once the game is over
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        self.puzzle
            .as_ref()
            .filter(|_| self.status.is_finished())
            .map(|puzzle| &puzzle.target)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text of the most recent hint, cleared by typing
    #[must_use]
    pub fn hint_text(&self) -> Option<String> {
        self.hint.as_ref().map(Hint::text)
    }

    /// Best status seen for a keyboard letter
    #[must_use]
    pub fn key_status(&self, letter: char) -> Option<TileStatus> {
        self.keys.get(letter)
    }

    #[must_use]
    pub const fn definition(&self) -> Option<&Definition> {
        self.definition.as_ref()
    }

    #[must_use]
    pub const fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    fn is_daily(&self) -> bool {
        self.mode() == Some(Mode::Daily)
    }

    /// Common reset for every start: drops the old game and invalidates its lookups
    fn begin(&mut self) {
        self.generation += 1;
        self.puzzle = None;
        self.board = Board::default();
        self.keys.clear();
        self.status = Status::Idle;
        self.message = "Type a word.".to_string();
        self.hint = None;
        self.definition = None;
    }

    fn block(&mut self, err: ConfigError) {
        tracing::warn!(%err, "cannot start a game");
        self.status = Status::Idle;
        self.message = err.to_string();
    }

    fn replay(&mut self, rows: &[(Word, Score)]) {
        self.board = Board::replay(rows);
        for (word, score) in rows {
            self.keys.apply(word, *score);
        }
    }

    fn finish_state(&mut self, won: bool) {
        self.status = if won { Status::Won } else { Status::Lost };
    }

    fn validate(&self, row: &str) -> Result<Word, GuessError> {
        let row = row.trim();
        if row.chars().count() != WORD_LEN {
            return Err(GuessError::Incomplete);
        }
        let word = Word::new(row).map_err(|err| match err {
            WordError::InvalidLength(_) => GuessError::Incomplete,
            WordError::NonAscii | WordError::InvalidCharacters => GuessError::NotInList,
        })?;
        if self.board.has_guessed(&word) {
            return Err(GuessError::Duplicate);
        }
        if !self.pools.is_valid_guess(&word) {
            return Err(GuessError::NotInList);
        }
        Ok(word)
    }

    fn load_progress(
        &self,
        today: NaiveDate,
        index: usize,
        target: &Word,
    ) -> Option<DailyProgressRecord> {
        let record: DailyProgressRecord = load_record(&self.store, DAILY_PROGRESS_KEY)?;
        if !record.is_for(today, index) {
            tracing::debug!(
                saved_date = %record.date,
                saved_index = record.solution_index,
                "discarding stale daily progress"
            );
            return None;
        }
        if !record.is_replayable(target) {
            tracing::warn!(%today, "discarding inconsistent daily progress");
            return None;
        }
        Some(record)
    }

    fn finish_game(&mut self, puzzle: &Puzzle, won: bool, guesses_used: usize) -> Vec<Effect> {
        let today = puzzle.date.unwrap_or_else(|| self.clock.today());
        self.stats
            .record_game(puzzle.mode, won, guesses_used, today);

        let mut effects = Vec::new();
        match self.stats.save(&mut self.store) {
            Ok(()) => effects.push(Effect::StatsSaved),
            Err(err) => tracing::warn!(%err, "failed to save stats"),
        }
        effects.extend(self.persist_board(puzzle));
        if won {
            effects.extend(self.lookup_effect());
        }
        effects
    }

    /// Write the board as today's progress (daily mode only)
    fn persist_board(&mut self, puzzle: &Puzzle) -> Option<Effect> {
        let (Some(date), Some(index)) = (puzzle.date, puzzle.solution_index) else {
            return None;
        };
        let record = DailyProgressRecord::from_board(
            date,
            index,
            &self.board,
            self.status.is_finished(),
            self.status == Status::Won,
        );
        self.persist_progress(&record)
    }

    fn persist_progress(&mut self, record: &DailyProgressRecord) -> Option<Effect> {
        match save_record(&mut self.store, DAILY_PROGRESS_KEY, record) {
            Ok(()) => Some(Effect::ProgressSaved),
            Err(err) => {
                tracing::warn!(%err, "failed to save daily progress");
                None
            }
        }
    }

    fn lookup_effect(&self) -> Option<Effect> {
        if self.status != Status::Won {
            return None;
        }
        self.puzzle.as_ref().map(|puzzle| {
            Effect::LookupDefinition(DefinitionRequest {
                word: puzzle.target.clone(),
                generation: self.generation,
            })
        })
    }
}
