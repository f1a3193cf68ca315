//! Simple interactive CLI mode
//!
//! Line-oriented game without TUI. Reads guesses and commands from any
//! `BufRead` so it can be driven by tests.

use crate::core::{Word, WordLength};
use crate::game::{GuessError, Session};
use crate::output::{print_game_summary, print_keyboard, print_outcome};
use crate::wordlists::{WordSource, load_or_embedded};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// `hint` only lists candidates below this count
const HINT_LIMIT: usize = 20;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(
    session: &mut Session,
    source: &WordSource,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    print_banner(&mut out)?;
    print_new_game(&mut out, session)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" | "r" => {
                session.restart();
                print_new_game(&mut out, session)?;
            }
            "help" | "?" => print_help(&mut out)?,
            "hint" | "h" => print_hint(&mut out, session)?,
            "4" | "5" | "6" => {
                if let Some(length) = command.parse().ok().and_then(WordLength::from_letters) {
                    switch_length(&mut out, session, source, length)?;
                }
            }
            guess => play_guess(&mut out, session, guess)?,
        }
        out.flush()?;
    }

    writeln!(out, "\n👋 Thanks for playing!\n")
}

fn play_guess(out: &mut impl Write, session: &mut Session, guess: &str) -> io::Result<()> {
    match session.submit_guess(guess) {
        Ok(outcome) => {
            print_outcome(out, &outcome)?;
            print_keyboard(out, &outcome.keyboard)?;

            if outcome.is_win || outcome.is_loss {
                print_game_summary(
                    out,
                    session.status(),
                    session.target().text(),
                    session.record(),
                    session.remaining_history(),
                    session.dictionary().len(),
                )?;
                writeln!(
                    out,
                    "Type 'new' to play again, 4/5/6 to change length, 'quit' to exit\n"
                )?;
            } else {
                writeln!(out, "{} guesses left", session.guesses_left())?;
            }
            Ok(())
        }
        Err(GuessError::GameOver) => writeln!(
            out,
            "{}",
            "The game is over. Type 'new' to play again.".yellow()
        ),
        Err(err) => writeln!(out, "{} {err}", "❌".red()),
    }
}

fn switch_length(
    out: &mut impl Write,
    session: &mut Session,
    source: &WordSource,
    length: WordLength,
) -> io::Result<()> {
    match load_or_embedded(source, length) {
        Ok(dictionary) => {
            session.change_dictionary(dictionary);
            print_new_game(out, session)
        }
        Err(err) => writeln!(out, "{} {err}", "❌".red()),
    }
}

fn print_hint(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let remaining = session.remaining();
    if remaining >= HINT_LIMIT {
        return writeln!(out, "{remaining} words still possible, too many to list");
    }

    let words: Vec<&str> = session.candidates().into_iter().map(Word::text).collect();
    writeln!(out, "Possible words: {}", words.join(", "))?;

    let constraints = session.constraints();
    for position in 0..session.length().letters() {
        writeln!(
            out,
            "  {}: {}",
            position + 1,
            constraints.allowed_letters(position)
        )?;
    }
    Ok(())
}

fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        out,
        "║                  Expanded Wordle - CLI Mode                  ║"
    )?;
    writeln!(
        out,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    print_help(out)
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Type a word to guess it. Tiles are colored:")?;
    writeln!(out, "  🟩 right letter, right spot")?;
    writeln!(out, "  🟨 in the word, wrong spot")?;
    writeln!(out, "  ⬜ not in the word (or no more copies)\n")?;
    writeln!(
        out,
        "Commands: 'new' for a new word, 4/5/6 to change length, 'hint', 'quit'\n"
    )
}

fn print_new_game(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "New game: guess the {}-letter word in {} tries ({} words)",
        session.length(),
        session.guesses_left(),
        session.dictionary().len()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}
