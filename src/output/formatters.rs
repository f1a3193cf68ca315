//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardStatus, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Color one letter tile by its status
fn tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Green) => text.black().on_green().bold(),
        Some(LetterStatus::Yellow) => text.black().on_yellow().bold(),
        Some(LetterStatus::Gray) => text.white().on_bright_black(),
        None => text.black().on_white(),
    }
}

/// Format a guess as colored letter tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| tile(char::from(letter), Some(status)).to_string())
        .collect()
}

/// Format the keyboard, one string per row, each letter colored by status
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| tile(char::from(letter), keyboard.status(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// "1 option remained" / "N options remained"
#[must_use]
pub fn remaining_phrase(count: usize) -> String {
    if count == 1 {
        "1 option remained".to_string()
    } else {
        format!("{count} options remained")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn colored_row_keeps_letters_in_order() {
        plain();
        let guess = Word::new("lolly").unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new("alloy").unwrap());
        assert_eq!(colored_row(&guess, &feedback), " L  O  L  L  Y ");
    }

    #[test]
    fn keyboard_lines_follow_layout() {
        plain();
        let lines = keyboard_lines(&KeyboardStatus::new());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" Q  W  E "));
        assert!(lines[2].starts_with("     Z "));
    }

    #[test]
    fn remaining_phrase_singular_and_plural() {
        assert_eq!(remaining_phrase(1), "1 option remained");
        assert_eq!(remaining_phrase(0), "0 options remained");
        assert_eq!(remaining_phrase(42), "42 options remained");
    }

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
}
