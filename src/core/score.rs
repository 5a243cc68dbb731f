//! Guess scoring and feedback representation
//!
//! A score is the per-position verdict of a guess against the target word:
//! - Absent (letter not in word, or all copies already claimed)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::{WORD_LEN, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single tile
///
/// Ordering doubles as keyboard priority: `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStatus {
    Absent,
    Present,
    Correct,
}

impl TileStatus {
    /// Emoji square for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one status per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score([TileStatus; WORD_LEN]);

impl Score {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self([TileStatus::Correct; WORD_LEN]);

    /// Wrap a raw status array
    #[inline]
    #[must_use]
    pub const fn new(statuses: [TileStatus; WORD_LEN]) -> Self {
        Self(statuses)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[TileStatus; WORD_LEN] {
        &self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct; every unmatched target letter
    ///    goes into a leftover table
    /// 2. Second pass, left to right: a non-correct guess letter with leftover
    ///    copies is present (and consumes one), otherwise absent
    ///
    /// Surplus copies of a letter in the guess come out absent, and the leftmost
    /// copies claim present first.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Score, TileStatus::*, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("alarm").unwrap();
    ///
    /// assert_eq!(
    ///     Score::calculate(&guess, &target).statuses(),
    ///     &[Absent, Correct, Correct, Present, Present]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [TileStatus::Absent; WORD_LEN];
        let mut leftover: FxHashMap<u8, u8> = FxHashMap::default();

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = TileStatus::Correct;
            } else {
                *leftover.entry(t).or_insert(0) += 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == TileStatus::Correct {
                continue;
            }
            if let Some(count) = leftover.get_mut(&g)
                && *count > 0
            {
                result[i] = TileStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Convert score to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Score, TileStatus::*};
    ///
    /// let p = Score::new([Correct, Present, Absent, Correct, Present]);
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::TileStatus::{Absent, Correct, Present};
    use super::*;
    use proptest::prelude::*;

    fn score(guess: &str, target: &str) -> [TileStatus; WORD_LEN] {
        *Score::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).statuses()
    }

    #[test]
    fn score_perfect_constant() {
        assert!(Score::PERFECT.is_perfect());
        assert_eq!(Score::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
        assert!(!Score::new([Correct, Correct, Correct, Correct, Present]).is_perfect());
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(score("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn score_target_against_itself_is_perfect() {
        for word in ["CRANE", "SLATE", "LLAMA", "ZZZZZ", "AAAAA"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Score::calculate(&w, &w), Score::PERFECT);
        }
    }

    #[test]
    fn score_excess_duplicate_is_absent() {
        // L at 0 has no leftover L (the only L in ALARM is matched at 1).
        // M and the second A each claim the one leftover copy.
        assert_eq!(
            score("LLAMA", "ALARM"),
            [Absent, Correct, Correct, Present, Present]
        );
    }

    #[test]
    fn score_leftmost_duplicate_claims_present_first() {
        // One leftover E in the target: only the first E in the guess gets it
        assert_eq!(
            score("EERIE", "THEME"),
            [Present, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn score_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O present, second O correct
        assert_eq!(
            score("ROBOT", "FLOOR"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn score_trace_against_crane() {
        assert_eq!(
            score("TRACE", "CRANE"),
            [Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn score_case_insensitive_inputs() {
        assert_eq!(score("crane", "SLATE"), score("CRANE", "slate"));
    }

    #[test]
    fn score_serializes_as_status_names() {
        let p = Score::new([Correct, Present, Absent, Absent, Absent]);
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"["correct","present","absent","absent","absent"]"#
        );
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[A-F]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn score_is_pure(guess in word_strategy(), target in word_strategy()) {
            prop_assert_eq!(
                Score::calculate(&guess, &target),
                Score::calculate(&guess, &target)
            );
        }

        #[test]
        fn score_never_marks_more_than_target_has(guess in word_strategy(), target in word_strategy()) {
            let score = Score::calculate(&guess, &target);
            for letter in guess.distinct_letters() {
                let marked = guess
                    .chars()
                    .iter()
                    .zip(score.statuses())
                    .filter(|&(&g, &s)| g == letter && s != Absent)
                    .count();
                let available = target.chars().iter().filter(|&&t| t == letter).count();
                prop_assert!(marked <= available);
            }
        }
    }
}
