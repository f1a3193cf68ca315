//! Word lists for the game
//!
//! Provides the per-length dictionaries, loaded from `{n}letter.txt` files or
//! from the lists embedded in the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{
    FIVE_LETTER, FIVE_LETTER_COUNT, FOUR_LETTER, FOUR_LETTER_COUNT, SIX_LETTER, SIX_LETTER_COUNT,
    embedded_words,
};
pub use loader::{WordSource, load, load_or_embedded, load_with_fallback};

use crate::core::WordLength;
use std::fmt;

/// Error type for word list loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The list for `length` is missing, unreadable or empty
    DataUnavailable { length: WordLength, reason: String },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataUnavailable { length, reason } => {
                write!(f, "No {length}-letter words available: {reason}")
            }
        }
    }
}

impl std::error::Error for WordListError {}
