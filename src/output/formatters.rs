//! Formatting utilities for terminal output

use crate::core::{MAX_GUESSES, Score, TileStatus, WORD_LEN, Word};
use crate::session::Row;
use colored::{ColoredString, Colorize};

/// Render one tile with its status colour
#[must_use]
pub fn tile(letter: char, status: Option<TileStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(TileStatus::Correct) => text.black().on_green().bold(),
        Some(TileStatus::Present) => text.black().on_yellow().bold(),
        Some(TileStatus::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a board row; unfilled positions are shown as `_`
#[must_use]
pub fn render_row(row: &Row) -> String {
    let mut letters = row.letters().chars();
    (0..WORD_LEN)
        .map(|i| {
            let letter = letters.next().unwrap_or('_');
            tile(letter, row.status_at(i)).to_string()
        })
        .collect()
}

/// Spoiler-free result grid: a header line, then one emoji row per guess
///
/// `None` when there are no rows to show.
#[must_use]
pub fn share_grid(title: &str, history: &[(Word, Score)], won: bool) -> Option<String> {
    if history.is_empty() {
        return None;
    }
    let used = if won {
        history.len().to_string()
    } else {
        "X".to_string()
    };
    let mut grid = format!("{title} {used}/{MAX_GUESSES}");
    for (_, score) in history {
        grid.push('\n');
        grid.push_str(&score.to_emoji());
    }
    Some(grid)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn share_grid_lists_rows() {
        let word = |w: &str| Word::new(w).unwrap();
        let target = word("crane");
        let history: Vec<(Word, Score)> = ["trace", "crane"]
            .iter()
            .map(|g| (word(g), Score::calculate(&word(g), &target)))
            .collect();

        assert_eq!(
            share_grid("Daily 19915", &history, true).as_deref(),
            Some("Daily 19915 2/6\n⬜🟩🟩🟨🟩\n🟩🟩🟩🟩🟩")
        );
        assert_eq!(
            share_grid("Random", &history[..1], false).as_deref(),
            Some("Random X/6\n⬜🟩🟩🟨🟩")
        );
    }

    #[test]
    fn share_grid_skips_empty_board() {
        assert_eq!(share_grid("Daily 19915", &[], true), None);
        assert_eq!(share_grid("Daily 19915", &[], false), None);
    }

    #[test]
    fn empty_row_renders_placeholders() {
        colored::control::set_override(false);
        assert_eq!(render_row(&Row::default()), " _  _  _  _  _ ");
    }
}
