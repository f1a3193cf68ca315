//! Expanded Wordle
//!
//! Wordle with 4, 5 and 6 letter words. After every guess the game also
//! reports how many dictionary words are still consistent with the feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use expanded_wordle::core::WordLength;
//! use expanded_wordle::game::Session;
//! use expanded_wordle::wordlists::loader::load_embedded;
//!
//! let dictionary = load_embedded(WordLength::Five).unwrap();
//! let mut session = Session::with_target(dictionary, "crane").unwrap();
//!
//! let outcome = session.submit_guess("adieu").unwrap();
//! println!("{} {} words remain", outcome.feedback.to_emoji(), outcome.remaining);
//! assert!(!outcome.is_win);
//! ```

// Core domain types
pub mod core;

// Game rules: evaluation, candidate filtering, sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
