//! Display functions for the game and command results

use super::formatters::{create_progress_bar, render_row, share_grid, tile};
use crate::commands::EvaluationResult;
use crate::core::MAX_GUESSES;
use crate::daily::{Clock, days_since_epoch};
use crate::session::{Mode, Session, Status};
use crate::stats::{Outcome, StatsTracker};
use crate::store::Store;
use chrono::NaiveDate;
use colored::Colorize;

/// Print the board, keyboard summary and status line
pub fn print_board<S: Store, C: Clock>(session: &Session<'_, S, C>) {
    println!();
    for row in session.board().rows() {
        println!("  {}", render_row(row));
    }

    let keyboard: String = ('A'..='Z')
        .map(|letter| match session.key_status(letter) {
            Some(status) => tile(letter, Some(status)).to_string(),
            None => format!(" {letter} "),
        })
        .collect();
    println!("\n  {keyboard}");

    let message = match session.status() {
        Status::Won => session.message().green().bold(),
        Status::Lost => session.message().red().bold(),
        Status::InProgress | Status::Idle => session.message().normal(),
    };
    println!("\n  {message}");

    if let Some(hint) = session.hint_text() {
        println!("  {}", hint.bright_cyan());
    }
    if session.status().is_finished()
        && let Some(puzzle) = session.puzzle()
    {
        let title = match (puzzle.mode, puzzle.date) {
            (Mode::Daily, Some(date)) => format!("Wordle Daily {}", days_since_epoch(date)),
            _ => "Wordle Random".to_string(),
        };
        let won = session.status() == Status::Won;
        if let Some(grid) = share_grid(&title, &session.board().history(), won) {
            println!();
            for line in grid.lines() {
                println!("  {line}");
            }
        }
    }
    if let Some(definition) = session.definition() {
        println!(
            "  📖 {} {}",
            definition.text.bright_white(),
            format!("({})", definition.source).bright_black()
        );
    }
}

/// Print lifetime stats and today's daily state
pub fn print_stats(stats: &StatsTracker, today: NaiveDate) {
    let record = stats.record();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Lifetime:".bright_cyan().bold());
    println!("   Played:           {}", record.played);
    println!(
        "   Win %:            {}",
        format!("{}", stats.win_percent()).bright_yellow().bold()
    );
    println!("   Wins / losses:    {} / {}", record.wins, record.losses);
    match stats.average_win_guesses() {
        Some(avg) => println!("   Avg guesses/win:  {avg:.2}"),
        None => println!("   Avg guesses/win:  n/a"),
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guesses in 1..=MAX_GUESSES {
        let count = record.guess_dist[guesses - 1];
        let width = stats.distribution_width(guesses);
        let bar = create_progress_bar(f64::from(width), 100.0, 40);
        println!("   {guesses}: {} {count:4}", bar.green());
    }

    println!("\n📅 {}", "Daily:".bright_cyan().bold());
    println!(
        "   Today:            {today} (day {})",
        days_since_epoch(today)
    );
    let played = match stats.daily_outcome(today) {
        Some(Outcome::Win) => "solved".green(),
        Some(Outcome::Loss) => "lost".red(),
        None => "not played yet".normal(),
    };
    println!("   Today's puzzle:   {played}");
}

/// Print the result of an evaluation run
pub fn print_evaluation_result(result: &EvaluationResult) {
    println!("\n{}", "═".repeat(70));
    println!(" Evaluation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Puzzles played:      {}", result.total_words);
    if result.total_words == 0 {
        return;
    }
    println!(
        "  Solved:              {} {}",
        result.solved,
        format!(
            "({:.1}%)",
            result.solved as f64 / result.total_words as f64 * 100.0
        )
        .green()
    );
    if result.failed > 0 {
        println!(
            "  Failed:              {} {}",
            result.failed,
            format!(
                "({:.1}%)",
                result.failed as f64 / result.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", result.average_guesses).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        result.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = result.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in result.distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        let percentage = if result.solved > 0 {
            count as f64 / result.solved as f64 * 100.0
        } else {
            0.0
        };
        println!("  {} guesses: {} {count:4} ({percentage:5.1}%)", i + 1, bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words (5-6 guesses)".yellow().bold());
        for (word, guesses) in result.hardest.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.text().yellow());
        }
    }

    if !result.unsolved.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        for word in result.unsolved.iter().take(10) {
            println!("  {}", word.text().red());
        }
    }
}
