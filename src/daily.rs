//! Daily puzzle selection
//!
//! Every calendar date maps to one solution index. Dates are UTC calendar days;
//! the host supplies "today" through a [`Clock`] so the same date drives puzzle
//! selection, the once-per-day gate and saved-progress validation.

use crate::wordlists::ConfigError;
use chrono::{Datelike, NaiveDate, Utc};
use std::cell::Cell;

/// `num_days_from_ce()` of 1970-01-01
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Source of the current calendar date
pub trait Clock {
    /// Today's date in the reference (UTC) timezone
    fn today(&self) -> NaiveDate;
}

/// Wall clock, resolved to the UTC calendar day
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a date, adjustable for day-rollover tests
#[derive(Debug, Clone)]
pub struct FixedClock(Cell<NaiveDate>);

impl FixedClock {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(Cell::new(date))
    }

    pub fn set(&self, date: NaiveDate) {
        self.0.set(date);
    }

    /// Move the clock forward by `days`
    pub fn advance(&self, days: u64) {
        if let Some(next) = self.0.get().checked_add_days(chrono::Days::new(days)) {
            self.0.set(next);
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0.get()
    }
}

/// Days between 1970-01-01 and `date` (negative before the epoch)
#[must_use]
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}

/// Solution index for `date` in a pool of `pool_size` words
///
/// Stable for a given date and cycles through the pool with period `pool_size`.
/// Dates before the epoch still land in `0..pool_size`.
///
/// # Errors
///
/// Returns `ConfigError::EmptySolutions` if `pool_size` is zero.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::daily::select_index;
///
/// let date = NaiveDate::from_ymd_opt(1970, 1, 8).unwrap();
/// assert_eq!(select_index(date, 5).unwrap(), 2);
/// ```
pub fn select_index(date: NaiveDate, pool_size: usize) -> Result<usize, ConfigError> {
    if pool_size == 0 {
        return Err(ConfigError::EmptySolutions);
    }
    let size = i64::try_from(pool_size).unwrap_or(i64::MAX);
    let index = days_since_epoch(date).rem_euclid(size);
    // rem_euclid with a positive modulus is always in 0..size
    Ok(usize::try_from(index).unwrap_or_default())
}

/// Storage/display key for a date, `YYYY-MM-DD`
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(days_since_epoch(ymd(1970, 1, 1)), 0);
        assert_eq!(days_since_epoch(ymd(1970, 1, 2)), 1);
        assert_eq!(days_since_epoch(ymd(1969, 12, 31)), -1);
        assert_eq!(days_since_epoch(ymd(2000, 1, 1)), 10_957);
    }

    #[test]
    fn index_is_never_negative_before_epoch() {
        assert_eq!(select_index(ymd(1969, 12, 31), 5).unwrap(), 4);
        assert_eq!(select_index(ymd(1969, 12, 27), 5).unwrap(), 0);
    }

    #[test]
    fn empty_pool_is_config_error() {
        assert_eq!(
            select_index(ymd(2024, 6, 1), 0),
            Err(ConfigError::EmptySolutions)
        );
    }

    #[test]
    fn consecutive_days_walk_the_pool() {
        let start = ymd(2024, 3, 10);
        let first = select_index(start, 7).unwrap();
        let next = select_index(start.succ_opt().unwrap(), 7).unwrap();
        assert_eq!(next, (first + 1) % 7);
    }

    #[test]
    fn fixed_clock_advances() {
        let clock = FixedClock::new(ymd(2024, 2, 28));
        clock.advance(2);
        assert_eq!(clock.today(), ymd(2024, 3, 1));
        clock.set(ymd(2030, 1, 1));
        assert_eq!(clock.today(), ymd(2030, 1, 1));
    }

    #[test]
    fn date_key_format() {
        assert_eq!(date_key(ymd(2024, 3, 9)), "2024-03-09");
    }

    proptest! {
        #[test]
        fn index_stable_and_periodic(offset in -50_000i64..50_000, size in 1usize..3_000) {
            let date = ymd(1970, 1, 1) + chrono::Duration::days(offset);
            let index = select_index(date, size).unwrap();

            prop_assert!(index < size);
            prop_assert_eq!(select_index(date, size).unwrap(), index);

            let later = date + chrono::Duration::days(size as i64);
            prop_assert_eq!(select_index(later, size).unwrap(), index);
        }
    }
}
