//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear rules.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use keyboard::KeyboardStatus;
pub use word::{ALPHABET_SIZE, Word, WordError, WordLength, letter_index};
