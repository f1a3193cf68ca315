//! Scripted replay command
//!
//! Plays a fixed list of guesses against a chosen target and collects every row.

use crate::core::{Feedback, KeyboardStatus, Word};
use crate::game::{GameStatus, GuessError, Session};
use crate::wordlists::Dictionary;

/// Configuration for a replay
pub struct ReplayConfig {
    pub target: String,
    pub guesses: Vec<String>,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(target: String, guesses: Vec<String>) -> Self {
        Self { target, guesses }
    }
}

/// What happened to one scripted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStep {
    /// Accepted and colored
    Played {
        guess: Word,
        feedback: Feedback,
        candidates_before: usize,
        candidates_after: usize,
    },
    /// Rejected; the game state did not change
    Rejected { input: String, error: GuessError },
}

/// Result of a replay
pub struct ReplayResult {
    pub target: Word,
    pub steps: Vec<ReplayStep>,
    pub status: GameStatus,
    pub keyboard: KeyboardStatus,
    pub dictionary_size: usize,
    /// Guesses left unplayed because the game had already ended
    pub ignored: usize,
}

impl ReplayResult {
    /// Number of accepted guesses
    #[must_use]
    pub fn played(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, ReplayStep::Played { .. }))
            .count()
    }
}

/// Replay `config` against `dictionary`
///
/// # Errors
///
/// Returns a `GuessError` if the target itself is not a word of `dictionary`.
///
/// # Examples
/// ```
/// use expanded_wordle::commands::{ReplayConfig, replay};
/// use expanded_wordle::core::WordLength;
/// use expanded_wordle::game::GameStatus;
/// use expanded_wordle::wordlists::loader::load_embedded;
///
/// let dictionary = load_embedded(WordLength::Five).unwrap();
/// let config = ReplayConfig::new(
///     "crane".to_string(),
///     vec!["adieu".to_string(), "story".to_string(), "crane".to_string()],
/// );
///
/// let result = replay(dictionary, &config).unwrap();
/// assert_eq!(result.status, GameStatus::Won);
/// assert_eq!(result.played(), 3);
/// ```
pub fn replay(dictionary: Dictionary, config: &ReplayConfig) -> Result<ReplayResult, GuessError> {
    let dictionary_size = dictionary.len();
    let mut session = Session::with_target(dictionary, &config.target)?;
    let mut steps = Vec::with_capacity(config.guesses.len());
    let mut ignored = 0;

    for input in &config.guesses {
        if session.is_over() {
            ignored += 1;
            continue;
        }

        let candidates_before = session.remaining();
        match session.submit_guess(input) {
            Ok(outcome) => steps.push(ReplayStep::Played {
                guess: outcome.guess,
                feedback: outcome.feedback,
                candidates_before,
                candidates_after: outcome.remaining,
            }),
            Err(error) => steps.push(ReplayStep::Rejected {
                input: input.clone(),
                error,
            }),
        }
    }

    Ok(ReplayResult {
        target: session.target().clone(),
        steps,
        status: session.status(),
        keyboard: session.keyboard(),
        dictionary_size,
        ignored,
    })
}
