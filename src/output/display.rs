//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, keyboard_lines, remaining_phrase};
use crate::commands::{ReplayResult, ReplayStep};
use crate::core::KeyboardStatus;
use crate::game::{GameStatus, GuessOutcome, GuessRow, MAX_GUESSES};
use colored::Colorize;
use std::io::{self, Write};

const BAR_WIDTH: usize = 30;

/// Print one accepted guess with its candidate count
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome(out: &mut impl Write, outcome: &GuessOutcome) -> io::Result<()> {
    writeln!(
        out,
        "{}. {}  {}",
        outcome.guess_number,
        colored_row(&outcome.guess, &outcome.feedback),
        outcome.feedback.to_emoji()
    )?;
    writeln!(
        out,
        "   {}",
        format!("{} possible words remain", outcome.remaining).bright_black()
    )
}

/// Print the keyboard
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_keyboard(out: &mut impl Write, keyboard: &KeyboardStatus) -> io::Result<()> {
    writeln!(out)?;
    for line in keyboard_lines(keyboard) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}

/// Print the end-of-game summary: target and candidate count after each guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_game_summary(
    out: &mut impl Write,
    status: GameStatus,
    target: &str,
    rows: &[GuessRow],
    remaining_history: &[usize],
    dictionary_size: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    match status {
        GameStatus::Won => writeln!(
            out,
            "{}",
            format!("✅ Solved in {}/{MAX_GUESSES}!", rows.len())
                .green()
                .bold()
        )?,
        GameStatus::Lost => writeln!(out, "{}", "❌ Out of guesses".red().bold())?,
        GameStatus::InProgress => writeln!(out, "{}", "Game unfinished".yellow())?,
    }
    writeln!(out, "The word was {}", target.bright_yellow().bold())?;
    writeln!(out)?;

    for (i, (row, &remaining)) in rows.iter().zip(remaining_history).enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let bar = create_progress_bar(remaining as f64, dictionary_size as f64, BAR_WIDTH);
        writeln!(
            out,
            "  {} {}  After guess {}: {}",
            row.guess.text(),
            bar.green(),
            i + 1,
            remaining_phrase(remaining)
        )?;
    }
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Print the result of a replay
pub fn print_replay_result(result: &ReplayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {} ({} words in dictionary)",
        result.target.text().bright_yellow().bold(),
        result.dictionary_size
    );
    println!("{}", "─".repeat(60).cyan());

    let mut turn = 0;
    for step in &result.steps {
        match step {
            ReplayStep::Played {
                guess,
                feedback,
                candidates_before,
                candidates_after,
            } => {
                turn += 1;
                println!(
                    "\nTurn {turn}: {}  {}",
                    colored_row(guess, feedback),
                    feedback.to_emoji()
                );
                if verbose {
                    println!("  Candidates: {candidates_before} → {candidates_after}");
                }
            }
            ReplayStep::Rejected { input, error } => {
                println!("\n{} {input}: {error}", "✗".red());
            }
        }
    }

    println!();
    if verbose {
        for line in keyboard_lines(&result.keyboard) {
            println!("  {line}");
        }
        println!();
    }

    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.played())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("❌ Not solved in {MAX_GUESSES} guesses").red().bold()
        ),
        GameStatus::InProgress => println!(
            "{}",
            format!("Game unfinished after {} guesses", result.played()).yellow()
        ),
    }
    if result.ignored > 0 {
        println!("{} guess(es) after the end of the game were ignored", result.ignored);
    }
}
