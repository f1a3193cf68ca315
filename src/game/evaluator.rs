//! Guess evaluation
//!
//! Colors each accepted guess against the target, keeps the guess record and
//! keyboard status, and recounts the remaining candidates.

use super::candidates::Constraints;
use super::session::GuessError;
use crate::core::{Feedback, KeyboardStatus, Word};
use crate::wordlists::Dictionary;

/// Maximum number of guesses in one game
pub const MAX_GUESSES: usize = 6;

/// Candidate lists shorter than this are written to the debug log
const LOG_CANDIDATES_BELOW: usize = 20;

/// One row of the guess record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Finalized result of one accepted guess
///
/// An owned snapshot; later guesses never change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: Word,
    pub feedback: Feedback,
    pub keyboard: KeyboardStatus,
    pub remaining: usize,
    /// 1-based row number of this guess
    pub guess_number: usize,
    pub is_win: bool,
    pub is_loss: bool,
}

/// Per-game evaluation state for a fixed target
#[derive(Debug, Clone)]
pub struct GuessEvaluator {
    target: Word,
    record: Vec<GuessRow>,
    keyboard: KeyboardStatus,
    remaining_history: Vec<usize>,
}

impl GuessEvaluator {
    /// Start a game against `target`
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            record: Vec::with_capacity(MAX_GUESSES),
            keyboard: KeyboardStatus::new(),
            remaining_history: Vec::with_capacity(MAX_GUESSES),
        }
    }

    /// Evaluate a guess of the target's length
    ///
    /// Dictionary membership is the caller's check. Coloring, keyboard update
    /// and the candidate recount all complete before the outcome is returned.
    ///
    /// # Errors
    /// - `GuessError::GameOver` once the game is won or lost
    /// - `GuessError::InvalidGuessLength` if `guess` and the target differ in length
    pub fn evaluate(
        &mut self,
        guess: Word,
        dictionary: &Dictionary,
    ) -> Result<GuessOutcome, GuessError> {
        if self.status() != GameStatus::InProgress {
            return Err(GuessError::GameOver);
        }
        if guess.len() != self.target.len() {
            return Err(GuessError::InvalidGuessLength {
                expected: self.target.len(),
                actual: guess.len(),
            });
        }

        let feedback = Feedback::calculate(&guess, &self.target);
        self.keyboard.record(&guess, &feedback);
        self.record.push(GuessRow {
            guess: guess.clone(),
            feedback: feedback.clone(),
        });

        let constraints = Constraints::from_record(self.target.len(), &self.record);
        let remaining = constraints.count(dictionary);
        self.remaining_history.push(remaining);
        self.log_candidates(&constraints, dictionary, remaining);

        let guess_number = self.record.len();
        let is_win = feedback.is_perfect();
        Ok(GuessOutcome {
            guess,
            feedback,
            keyboard: self.keyboard,
            remaining,
            guess_number,
            is_win,
            is_loss: !is_win && guess_number == MAX_GUESSES,
        })
    }

    fn log_candidates(&self, constraints: &Constraints, dictionary: &Dictionary, remaining: usize) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }

        log::debug!(
            "remaining options after guess {}: {remaining}",
            self.record.len()
        );
        if remaining < LOG_CANDIDATES_BELOW {
            let words: Vec<&str> = constraints
                .candidates(dictionary)
                .into_iter()
                .map(Word::text)
                .collect();
            log::debug!("possible remaining words: {}", words.join(", "));
        }
        for position in 0..self.target.len() {
            log::debug!(
                "position {position}: {}",
                constraints.allowed_letters(position)
            );
        }
    }

    /// Current game status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.record.last() {
            Some(row) if row.feedback.is_perfect() => GameStatus::Won,
            _ if self.record.len() >= MAX_GUESSES => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    /// The hidden word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Every accepted guess so far, oldest first
    #[must_use]
    pub fn record(&self) -> &[GuessRow] {
        &self.record
    }

    /// Keyboard status after the latest guess
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    /// Remaining candidate count after each guess, oldest first
    #[must_use]
    pub fn remaining_history(&self) -> &[usize] {
        &self.remaining_history
    }

    /// Constraints implied by the guess record
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints::from_record(self.target.len(), &self.record)
    }
}
