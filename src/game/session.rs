//! Game session
//!
//! Owns everything one game needs: the dictionary, the RNG used to draw
//! targets, and the evaluator holding the target, guess record and keyboard.
//! Hosts drive it with discrete guesses and render the returned snapshots.

use super::candidates::Constraints;
use super::evaluator::{GameStatus, GuessEvaluator, GuessOutcome, GuessRow, MAX_GUESSES};
use crate::core::{KeyboardStatus, Word, WordLength};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Why a guess was rejected
///
/// Rejections never change the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidGuessLength { expected: usize, actual: usize },
    NotInDictionary(String),
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessLength { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
            Self::NotInDictionary(word) => write!(f, "Invalid word: {word}"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One game of guessing a hidden word
pub struct Session {
    dictionary: Dictionary,
    evaluator: GuessEvaluator,
    rng: StdRng,
}

impl Session {
    /// Start a game with a random target drawn from `dictionary`
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Start a game drawing targets from a caller-supplied RNG
    #[must_use]
    pub fn with_rng(dictionary: Dictionary, mut rng: StdRng) -> Self {
        let target = dictionary.pick_target(&mut rng).clone();
        log_new_game(&dictionary, &target);
        Self {
            evaluator: GuessEvaluator::new(target),
            dictionary,
            rng,
        }
    }

    /// Start a game against a chosen target
    ///
    /// # Errors
    /// Returns `GuessError::InvalidGuessLength` or `GuessError::NotInDictionary`
    /// if `target` is not a word of `dictionary`.
    ///
    /// # Examples
    /// ```
    /// use expanded_wordle::game::Session;
    /// use expanded_wordle::wordlists::loader::load_embedded;
    /// use expanded_wordle::core::WordLength;
    ///
    /// let dictionary = load_embedded(WordLength::Five).unwrap();
    /// let mut session = Session::with_target(dictionary, "crane").unwrap();
    ///
    /// let outcome = session.submit_guess("slate").unwrap();
    /// assert_eq!(outcome.feedback.to_string(), "--G-G");
    /// assert!(!outcome.is_win);
    /// ```
    pub fn with_target(dictionary: Dictionary, target: &str) -> Result<Self, GuessError> {
        let target = validate(&dictionary, target)?;
        log_new_game(&dictionary, &target);
        Ok(Self {
            evaluator: GuessEvaluator::new(target),
            dictionary,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Submit a completed guess
    ///
    /// # Errors
    /// - `GuessError::GameOver` once the game is won or lost
    /// - `GuessError::InvalidGuessLength` if the guess length differs from the target's
    /// - `GuessError::NotInDictionary` if the guess is not a dictionary word
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }
        let guess = validate(&self.dictionary, input)?;
        self.evaluator.evaluate(guess, &self.dictionary)
    }

    /// Discard the current game and draw a new target from the same dictionary
    pub fn restart(&mut self) {
        let target = self.dictionary.pick_target(&mut self.rng).clone();
        log_new_game(&self.dictionary, &target);
        self.evaluator = GuessEvaluator::new(target);
    }

    /// Switch to another dictionary (usually another word length) and restart
    pub fn change_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = dictionary;
        self.restart();
    }

    /// Current game status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.evaluator.status()
    }

    /// True once the game is won or lost
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// The hidden word; hosts should only reveal it once the game is over
    #[must_use]
    pub const fn target(&self) -> &Word {
        self.evaluator.target()
    }

    /// Word length of this game
    #[must_use]
    pub const fn length(&self) -> WordLength {
        self.dictionary.length()
    }

    /// The loaded dictionary
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Every accepted guess so far, oldest first
    #[must_use]
    pub fn record(&self) -> &[GuessRow] {
        self.evaluator.record()
    }

    /// Keyboard status snapshot
    #[must_use]
    pub const fn keyboard(&self) -> KeyboardStatus {
        *self.evaluator.keyboard()
    }

    /// Number of guesses still available
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        MAX_GUESSES - self.record().len()
    }

    /// Remaining candidate count after each guess, oldest first
    #[must_use]
    pub fn remaining_history(&self) -> &[usize] {
        self.evaluator.remaining_history()
    }

    /// Current candidate count; the full dictionary before the first guess
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining_history()
            .last()
            .copied()
            .unwrap_or_else(|| self.dictionary.len())
    }

    /// Constraints implied by the guesses so far
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        self.evaluator.constraints()
    }

    /// Words still consistent with every guess, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        self.constraints().candidates(&self.dictionary)
    }
}

/// Check player input against the dictionary
fn validate(dictionary: &Dictionary, input: &str) -> Result<Word, GuessError> {
    let text = input.trim();
    let expected = dictionary.length().letters();
    let actual = text.chars().count();
    if actual != expected {
        return Err(GuessError::InvalidGuessLength { expected, actual });
    }

    Word::with_length(text, dictionary.length())
        .ok()
        .filter(|word| dictionary.contains(word))
        .ok_or_else(|| GuessError::NotInDictionary(text.to_uppercase()))
}

fn log_new_game(dictionary: &Dictionary, target: &Word) {
    log::info!(
        "new {}-letter game, {} words in dictionary",
        dictionary.length(),
        dictionary.len()
    );
    log::debug!("target word: {target}");
}
