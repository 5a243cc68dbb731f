//! Stats command

use crate::daily::{Clock, date_key, select_index};
use crate::output::print_stats;
use crate::stats::StatsTracker;
use crate::store::Store;
use crate::wordlists::WordPools;
use colored::Colorize;

/// Print lifetime stats and today's daily puzzle status
pub fn run_stats(store: &impl Store, clock: &impl Clock, pools: &WordPools) {
    let today = clock.today();
    let stats = StatsTracker::load(store);
    print_stats(&stats, today);

    match select_index(today, pools.solutions().len()) {
        Ok(index) => println!("   Puzzle:           #{index} ({})", date_key(today)),
        Err(err) => println!("   Puzzle:           {}", err.to_string().red()),
    }
}
