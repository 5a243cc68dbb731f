//! Lifetime statistics
//!
//! Counters survive across processes through the store. The last daily date and
//! outcome double as the once-per-day gate for daily puzzles.

use crate::core::MAX_GUESSES;
use crate::session::Mode;
use crate::store::{Store, StoreError, load_record, save_record};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Store key for the stats record
pub const STATS_KEY: &str = "wordle_stats_v1";

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    #[must_use]
    pub const fn from_won(won: bool) -> Self {
        if won { Self::Win } else { Self::Loss }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

/// Persisted lifetime statistics
///
/// `guess_dist[n - 1]` counts wins that took `n` guesses. Missing fields load as
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    #[serde(deserialize_with = "lenient_distribution")]
    pub guess_dist: [u32; MAX_GUESSES],
    pub total_win_guesses: u32,
    pub last_daily_date: Option<NaiveDate>,
    pub last_daily_outcome: Option<Outcome>,
}

/// Accept any-length distributions: extra buckets are dropped, missing ones are zero
fn lenient_distribution<'de, D>(deserializer: D) -> Result<[u32; MAX_GUESSES], D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<u32> = Vec::deserialize(deserializer)?;
    let mut dist = [0; MAX_GUESSES];
    for (slot, value) in dist.iter_mut().zip(raw) {
        *slot = value;
    }
    Ok(dist)
}

/// Owns the stats record and applies finished games to it
#[derive(Debug, Clone, Default)]
pub struct StatsTracker {
    record: StatsRecord,
}

impl StatsTracker {
    #[must_use]
    pub const fn new(record: StatsRecord) -> Self {
        Self { record }
    }

    /// Load from the store; a missing or unreadable record starts from zero
    #[must_use]
    pub fn load(store: &impl Store) -> Self {
        Self::new(load_record(store, STATS_KEY).unwrap_or_default())
    }

    /// Write the record to the store
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub fn save(&self, store: &mut impl Store) -> Result<(), StoreError> {
        save_record(store, STATS_KEY, &self.record)
    }

    #[must_use]
    pub const fn record(&self) -> &StatsRecord {
        &self.record
    }

    /// Apply a finished game
    ///
    /// Counters saturate at `u32::MAX`.
    ///
    /// Daily games also stamp `today` and the outcome, which closes the daily
    /// gate for that date.
    pub fn record_game(&mut self, mode: Mode, won: bool, guesses_used: usize, today: NaiveDate) {
        let stats = &mut self.record;
        stats.played = stats.played.saturating_add(1);

        if won {
            stats.wins = stats.wins.saturating_add(1);
            stats.total_win_guesses = stats
                .total_win_guesses
                .saturating_add(u32::try_from(guesses_used).unwrap_or(u32::MAX));
            if let Some(bucket) = guesses_used
                .checked_sub(1)
                .and_then(|i| stats.guess_dist.get_mut(i))
            {
                *bucket = bucket.saturating_add(1);
            }
        } else {
            stats.losses = stats.losses.saturating_add(1);
        }

        if mode == Mode::Daily {
            stats.last_daily_date = Some(today);
            stats.last_daily_outcome = Some(Outcome::from_won(won));
        }

        tracing::debug!(?mode, won, guesses_used, played = stats.played, "recorded game");
    }

    /// Outcome of the daily puzzle for `today`, if it was already played
    #[must_use]
    pub fn daily_outcome(&self, today: NaiveDate) -> Option<Outcome> {
        match (self.record.last_daily_date, self.record.last_daily_outcome) {
            (Some(date), Some(outcome)) if date == today => Some(outcome),
            _ => None,
        }
    }

    /// Share of games won, rounded to a whole percent
    #[must_use]
    pub fn win_percent(&self) -> u32 {
        if self.record.played == 0 {
            return 0;
        }
        (f64::from(self.record.wins) * 100.0 / f64::from(self.record.played)).round() as u32
    }

    /// Mean guesses per win, `None` before the first win
    #[must_use]
    pub fn average_win_guesses(&self) -> Option<f64> {
        (self.record.wins > 0)
            .then(|| f64::from(self.record.total_win_guesses) / f64::from(self.record.wins))
    }

    /// Bar width for `guesses` (1-based) as a percentage of the largest bucket
    #[must_use]
    pub fn distribution_width(&self, guesses: usize) -> u32 {
        let max = self.record.guess_dist.iter().copied().max().unwrap_or(0).max(1);
        let value = guesses
            .checked_sub(1)
            .and_then(|i| self.record.guess_dist.get(i))
            .copied()
            .unwrap_or(0);
        (f64::from(value) * 100.0 / f64::from(max)).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn win_updates_counters_and_histogram() {
        let mut stats = StatsTracker::default();
        stats.record_game(Mode::Random, true, 3, day(1));

        let record = stats.record();
        assert_eq!(record.played, 1);
        assert_eq!(record.wins, 1);
        assert_eq!(record.losses, 0);
        assert_eq!(record.total_win_guesses, 3);
        assert_eq!(record.guess_dist, [0, 0, 1, 0, 0, 0]);
        assert_eq!(record.last_daily_date, None);
    }

    #[test]
    fn loss_only_counts_loss() {
        let mut stats = StatsTracker::default();
        stats.record_game(Mode::Random, false, MAX_GUESSES, day(1));

        let record = stats.record();
        assert_eq!(record.played, 1);
        assert_eq!(record.losses, 1);
        assert_eq!(record.wins, 0);
        assert_eq!(record.guess_dist, [0; MAX_GUESSES]);
        assert_eq!(record.total_win_guesses, 0);
    }

    #[test]
    fn daily_game_stamps_gate() {
        let mut stats = StatsTracker::default();
        stats.record_game(Mode::Daily, false, MAX_GUESSES, day(2));

        assert_eq!(stats.daily_outcome(day(2)), Some(Outcome::Loss));
        assert_eq!(stats.daily_outcome(day(3)), None);

        stats.record_game(Mode::Daily, true, 2, day(3));
        assert_eq!(stats.daily_outcome(day(3)), Some(Outcome::Win));
    }

    #[test]
    fn derived_values() {
        let mut stats = StatsTracker::default();
        assert_eq!(stats.win_percent(), 0);
        assert_eq!(stats.average_win_guesses(), None);

        stats.record_game(Mode::Random, true, 2, day(1));
        stats.record_game(Mode::Random, true, 4, day(1));
        stats.record_game(Mode::Random, true, 4, day(1));
        stats.record_game(Mode::Random, false, 6, day(1));

        assert_eq!(stats.win_percent(), 75);
        assert_eq!(stats.average_win_guesses(), Some(10.0 / 3.0));
        assert_eq!(stats.distribution_width(4), 100);
        assert_eq!(stats.distribution_width(2), 50);
        assert_eq!(stats.distribution_width(1), 0);
        assert_eq!(stats.distribution_width(0), 0);
    }

    #[test]
    fn persists_through_store() {
        let mut store = MemoryStore::default();
        let mut stats = StatsTracker::load(&store);
        stats.record_game(Mode::Daily, true, 1, day(4));
        stats.save(&mut store).unwrap();

        let reloaded = StatsTracker::load(&store);
        assert_eq!(reloaded.record(), stats.record());
        assert_eq!(reloaded.daily_outcome(day(4)), Some(Outcome::Win));
    }

    #[test]
    fn partial_and_corrupt_records() {
        let mut store = MemoryStore::default();
        store
            .set(STATS_KEY, r#"{"played":3,"wins":2,"guess_dist":[1,1,0,0,0,0,9,9]}"#)
            .unwrap();
        let stats = StatsTracker::load(&store);
        assert_eq!(stats.record().played, 3);
        assert_eq!(stats.record().losses, 0);
        assert_eq!(stats.record().guess_dist, [1, 1, 0, 0, 0, 0]);

        store.set(STATS_KEY, "garbage").unwrap();
        assert_eq!(StatsTracker::load(&store).record(), &StatsRecord::default());
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut store = MemoryStore::default();
        store
            .set(
                STATS_KEY,
                r#"{"played":4294967295,"wins":4294967295,"losses":4294967295,"total_win_guesses":4294967294,"guess_dist":[4294967295,0,0,0,0,0]}"#,
            )
            .unwrap();
        let mut stats = StatsTracker::load(&store);

        stats.record_game(Mode::Daily, true, 1, day(5));
        stats.record_game(Mode::Random, false, MAX_GUESSES, day(5));

        let record = stats.record();
        assert_eq!(record.played, u32::MAX);
        assert_eq!(record.wins, u32::MAX);
        assert_eq!(record.losses, u32::MAX);
        assert_eq!(record.total_win_guesses, u32::MAX);
        assert_eq!(record.guess_dist[0], u32::MAX);
        assert_eq!(stats.daily_outcome(day(5)), Some(Outcome::Win));
        assert_eq!(stats.win_percent(), 100);
    }
}
