//! Hint engine
//!
//! Narrows the solution pool to the words consistent with the guesses made so
//! far and ranks them by how many letters they share with the other survivors.

use crate::core::{Score, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Suggested openers when nothing has been guessed yet
pub const OPENERS: [&str; 3] = ["CRANE", "SLATE", "ARISE"];

/// How many ranked candidates a hint shows
pub const HINT_SIZE: usize = 5;

/// Result of a hint request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// No history yet: fixed opener suggestions
    Openers(&'static [&'static str]),
    /// Best-ranked consistent candidates and how many remain in total
    Candidates { top: Vec<Word>, count: usize },
    /// No solution is consistent with the history
    Exhausted,
    /// The game is over; hints apply to a running game only
    GameOver,
}

impl Hint {
    /// Human-readable hint line
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Openers(words) => match *words {
                [first, second, last] => {
                    format!("Hint: try a strong opener like {first}, {second}, or {last}.")
                }
                _ => format!("Hint: try a strong opener like {}.", words.join(", ")),
            },
            Self::Candidates { top, count } => {
                let words: Vec<&str> = top.iter().map(Word::text).collect();
                format!("Possible words ({count}): {}", words.join(", "))
            }
            Self::Exhausted => {
                "No candidates left (based on the solutions list). Expand your lists.".to_string()
            }
            Self::GameOver => "Game over. Start a new game to get hints.".to_string(),
        }
    }
}

/// Whether `candidate` would have produced every recorded score in `history`
#[must_use]
pub fn is_consistent(candidate: &Word, history: &[(Word, Score)]) -> bool {
    history
        .iter()
        .all(|(guess, recorded)| Score::calculate(guess, candidate) == *recorded)
}

/// Hint generator over a solution pool
pub struct HintEngine<'a> {
    solutions: &'a [Word],
}

impl<'a> HintEngine<'a> {
    #[must_use]
    pub const fn new(solutions: &'a [Word]) -> Self {
        Self { solutions }
    }

    /// Produce a hint for the given guess history
    ///
    /// Re-filters the whole pool on every call. Ranking frequencies come from
    /// the filtered set, not the full pool.
    #[must_use]
    pub fn hint(&self, history: &[(Word, Score)]) -> Hint {
        if history.is_empty() {
            return Hint::Openers(&OPENERS);
        }

        let remaining = self.candidates(history);
        if remaining.is_empty() {
            tracing::debug!(guesses = history.len(), "no consistent candidates");
            return Hint::Exhausted;
        }

        let count = remaining.len();
        let top = rank_by_frequency(&remaining)
            .into_iter()
            .take(HINT_SIZE)
            .cloned()
            .collect();

        Hint::Candidates { top, count }
    }

    /// Solutions consistent with the history, in pool order
    #[must_use]
    pub fn candidates(&self, history: &[(Word, Score)]) -> Vec<&'a Word> {
        self.solutions
            .par_iter()
            .filter(|candidate| is_consistent(candidate, history))
            .collect()
    }
}

/// Sort words by descending frequency score, ties kept in input order
///
/// A word's score sums, once per distinct letter, the number of *other* words
/// in the set that contain that letter.
fn rank_by_frequency<'w>(words: &[&'w Word]) -> Vec<&'w Word> {
    let mut frequency: FxHashMap<u8, usize> = FxHashMap::default();
    for word in words {
        for letter in word.distinct_letters() {
            *frequency.entry(letter).or_insert(0) += 1;
        }
    }

    let mut scored: Vec<(usize, &'w Word)> = words
        .iter()
        .map(|&word| {
            let score = word
                .distinct_letters()
                .iter()
                // the word itself is one of the words containing each of its letters
                .map(|letter| frequency.get(letter).copied().unwrap_or(1) - 1)
                .sum();
            (score, word)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, word)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn pool() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "arise", "about", "apple", "grate", "irate"])
    }

    fn scored(guess: &str, target: &str) -> (Word, Score) {
        let guess = Word::new(guess).unwrap();
        let score = Score::calculate(&guess, &Word::new(target).unwrap());
        (guess, score)
    }

    #[test]
    fn empty_history_gives_openers() {
        let solutions = pool();
        let engine = HintEngine::new(&solutions);

        let first = engine.hint(&[]);
        assert_eq!(first, Hint::Openers(&OPENERS));
        assert_eq!(engine.hint(&[]), first);
        assert_eq!(
            first.text(),
            "Hint: try a strong opener like CRANE, SLATE, or ARISE."
        );
    }

    #[test]
    fn every_hinted_word_is_consistent() {
        let solutions = pool();
        let engine = HintEngine::new(&solutions);
        let history = vec![scored("crane", "grate"), scored("tiger", "grate")];

        let Hint::Candidates { top, count } = engine.hint(&history) else {
            panic!("expected candidates");
        };
        assert!(count >= 1);
        assert!(top.len() <= HINT_SIZE);
        assert!(top.iter().all(|w| is_consistent(w, &history)));
        assert!(top.iter().any(|w| w.text() == "GRATE"));
    }

    #[test]
    fn contradictory_history_is_exhausted() {
        let solutions = pool();
        let engine = HintEngine::new(&solutions);
        let history = vec![(Word::new("zzzzz").unwrap(), Score::PERFECT)];

        assert_eq!(engine.hint(&history), Hint::Exhausted);
        assert!(engine.candidates(&history).is_empty());
    }

    #[test]
    fn exact_match_leaves_one_candidate() {
        let solutions = pool();
        let engine = HintEngine::new(&solutions);
        let history = vec![(Word::new("irate").unwrap(), Score::PERFECT)];

        let candidates = engine.candidates(&history);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "IRATE");
        assert_eq!(
            engine.hint(&history).text(),
            "Possible words (1): IRATE"
        );
    }

    #[test]
    fn candidates_keep_pool_order() {
        let solutions = pool();
        let engine = HintEngine::new(&solutions);
        // nothing in ZZZZZ appears anywhere, so every word survives
        let history = vec![scored("zzzzz", "crane")];

        let texts: Vec<&str> = engine.candidates(&history).iter().map(|w| w.text()).collect();
        assert_eq!(
            texts,
            ["CRANE", "SLATE", "ARISE", "ABOUT", "APPLE", "GRATE", "IRATE"]
        );
    }

    #[test]
    fn ranking_counts_other_words_per_distinct_letter() {
        let words = words_from_slice(&["aabbc", "abxyz", "qqqqq"]);
        let refs: Vec<&Word> = words.iter().collect();

        // AABBC: A(1 other) + B(1) + C(0) = 2
        // ABXYZ: A(1) + B(1) + X,Y,Z(0) = 2
        // QQQQQ: 0
        let ranked: Vec<&str> = rank_by_frequency(&refs).iter().map(|w| w.text()).collect();
        assert_eq!(ranked, ["AABBC", "ABXYZ", "QQQQQ"]);
    }

    #[test]
    fn ranking_prefers_shared_letters() {
        let words = words_from_slice(&["qqqqq", "grate", "irate", "crate"]);
        let refs: Vec<&Word> = words.iter().collect();

        let ranked = rank_by_frequency(&refs);
        assert_eq!(ranked.last().map(|w| w.text()), Some("QQQQQ"));
        assert_eq!(ranked[0].text(), "GRATE");
    }

    #[test]
    fn hint_is_truncated_to_five() {
        let solutions = words_from_slice(&[
            "grate", "crate", "irate", "prate", "orate", "skate", "plate",
        ]);
        let engine = HintEngine::new(&solutions);
        let history = vec![scored("zzzzz", "grate")];

        let Hint::Candidates { top, count } = engine.hint(&history) else {
            panic!("expected candidates");
        };
        assert_eq!(count, 7);
        assert_eq!(top.len(), HINT_SIZE);
    }
}
