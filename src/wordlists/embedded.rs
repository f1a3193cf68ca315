//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

use crate::core::WordLength;

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/4letter.rs"));
include!(concat!(env!("OUT_DIR"), "/5letter.rs"));
include!(concat!(env!("OUT_DIR"), "/6letter.rs"));

/// Embedded list for a word length
#[must_use]
pub const fn embedded_words(length: WordLength) -> &'static [&'static str] {
    match length {
        WordLength::Four => FOUR_LETTER,
        WordLength::Five => FIVE_LETTER,
        WordLength::Six => SIX_LETTER,
    }
}
