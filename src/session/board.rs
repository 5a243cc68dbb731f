//! Board and keyboard state

use crate::core::{MAX_GUESSES, Score, TileStatus, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// One board row: typed letters and, once submitted, their score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    letters: String,
    score: Option<Score>,
}

impl Row {
    /// Letters typed or submitted so far
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Score of a submitted row, `None` while unscored
    #[must_use]
    pub const fn score(&self) -> Option<Score> {
        self.score
    }

    /// Status of one tile, `None` for unscored rows
    #[must_use]
    pub fn status_at(&self, position: usize) -> Option<TileStatus> {
        self.score.map(|score| score.statuses()[position])
    }
}

/// Exactly `MAX_GUESSES` rows plus the cursor at the next unscored row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_GUESSES],
    cursor: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: std::array::from_fn(|_| Row::default()),
            cursor: 0,
        }
    }
}

impl Board {
    #[must_use]
    pub fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }

    /// Index of the row being filled in
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once every row has been used
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.cursor >= MAX_GUESSES
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current_letters(&self) -> &str {
        self.rows.get(self.cursor).map_or("", Row::letters)
    }

    /// Append a letter to the current row; false if the row is full or the board is
    pub fn push_letter(&mut self, letter: char) -> bool {
        match self.rows.get_mut(self.cursor) {
            Some(row) if row.score.is_none() && row.letters.len() < WORD_LEN => {
                row.letters.push(letter.to_ascii_uppercase());
                true
            }
            _ => false,
        }
    }

    /// Remove the last typed letter of the current row
    pub fn pop_letter(&mut self) -> bool {
        match self.rows.get_mut(self.cursor) {
            Some(row) if row.score.is_none() => row.letters.pop().is_some(),
            _ => false,
        }
    }

    /// Store a scored guess in the current row (cursor stays put)
    pub fn score_current(&mut self, word: &Word, score: Score) {
        if let Some(row) = self.rows.get_mut(self.cursor) {
            row.letters = word.text().to_string();
            row.score = Some(score);
        }
    }

    /// Move to the next row
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1).min(MAX_GUESSES);
    }

    /// Submitted guesses with their scores, in order
    #[must_use]
    pub fn history(&self) -> Vec<(Word, Score)> {
        self.rows
            .iter()
            .filter_map(|row| {
                let score = row.score?;
                Word::new(&row.letters).ok().map(|word| (word, score))
            })
            .collect()
    }

    /// Number of scored rows
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows.iter().filter(|row| row.score.is_some()).count()
    }

    /// Whether `word` was already submitted on this board
    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.rows
            .iter()
            .any(|row| row.score.is_some() && row.letters == word.text())
    }

    /// Rebuild a board from saved guesses; the cursor lands after the last one
    #[must_use]
    pub fn replay(guesses: &[(Word, Score)]) -> Self {
        let mut board = Self::default();
        for (word, score) in guesses.iter().take(MAX_GUESSES) {
            board.score_current(word, *score);
            board.advance();
        }
        board
    }
}

/// Best status seen for each letter (`Correct > Present > Absent`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatus {
    best: FxHashMap<u8, TileStatus>,
}

impl KeyStatus {
    /// Fold a scored guess into the keyboard
    pub fn apply(&mut self, word: &Word, score: Score) {
        for (&letter, &status) in word.chars().iter().zip(score.statuses()) {
            let entry = self.best.entry(letter).or_insert(status);
            if status > *entry {
                *entry = status;
            }
        }
    }

    /// Best status for `letter`, `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<TileStatus> {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .and_then(|byte| self.best.get(&byte).copied())
    }

    pub fn clear(&mut self) {
        self.best.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TileStatus::{Absent, Correct, Present};

    fn scored(guess: &str, target: &str) -> (Word, Score) {
        let guess = Word::new(guess).unwrap();
        let score = Score::calculate(&guess, &Word::new(target).unwrap());
        (guess, score)
    }

    #[test]
    fn typing_fills_current_row_only() {
        let mut board = Board::default();
        for ch in "crane!".chars().filter(char::is_ascii_alphabetic) {
            assert!(board.push_letter(ch));
        }
        assert!(!board.push_letter('x'));
        assert_eq!(board.current_letters(), "CRANE");

        assert!(board.pop_letter());
        assert_eq!(board.current_letters(), "CRAN");
        assert_eq!(board.cursor(), 0);
    }

    #[test]
    fn board_always_has_six_rows() {
        let board = Board::default();
        assert_eq!(board.rows().len(), MAX_GUESSES);
        assert!(board.rows().iter().all(|row| row.score().is_none()));
    }

    #[test]
    fn replay_restores_rows_and_cursor() {
        let guesses = vec![scored("slate", "crane"), scored("trace", "crane")];
        let board = Board::replay(&guesses);

        assert_eq!(board.cursor(), 2);
        assert_eq!(board.guesses_used(), 2);
        assert_eq!(board.history(), guesses);
        assert!(board.has_guessed(&Word::new("trace").unwrap()));
        assert!(!board.has_guessed(&Word::new("crane").unwrap()));
        assert_eq!(board.rows()[1].status_at(1), Some(Correct));
        assert_eq!(board.rows()[2].status_at(0), None);
    }

    #[test]
    fn full_board_rejects_typing() {
        let guesses: Vec<_> = ["slate", "arise", "about", "apple", "tiger", "house"]
            .iter()
            .map(|g| scored(g, "crane"))
            .collect();
        let mut board = Board::replay(&guesses);

        assert!(board.is_full());
        assert!(!board.push_letter('a'));
        assert!(!board.pop_letter());
        assert_eq!(board.current_letters(), "");
    }

    #[test]
    fn keyboard_keeps_best_status() {
        let mut keys = KeyStatus::default();
        let (word, score) = scored("trace", "crane");
        keys.apply(&word, score);

        assert_eq!(keys.get('t'), Some(Absent));
        assert_eq!(keys.get('C'), Some(Present));
        assert_eq!(keys.get('R'), Some(Correct));
        assert_eq!(keys.get('z'), None);

        let (word, score) = scored("crane", "crane");
        keys.apply(&word, score);
        assert_eq!(keys.get('C'), Some(Correct));

        // a later worse status never downgrades
        let (word, score) = scored("cycle", "crane");
        keys.apply(&word, score);
        assert_eq!(keys.get('C'), Some(Correct));

        keys.clear();
        assert_eq!(keys.get('C'), None);
    }
}
