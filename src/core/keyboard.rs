//! Aggregate per-letter keyboard status
//!
//! Tracks the best status seen for each letter across all guesses so far.

use super::feedback::{Feedback, LetterStatus};
use super::word::{ALPHABET_SIZE, Word, letter_index};

/// Best-seen status per letter A-Z
///
/// Precedence is Green > Yellow > Gray > unseen. A letter's status only ever
/// improves: Green is never overwritten, Yellow is applied unless the letter is
/// already Green, and Gray is applied only to letters with no status yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardStatus([Option<LetterStatus>; ALPHABET_SIZE]);

impl KeyboardStatus {
    /// Empty keyboard (every letter unseen)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one colored guess
    ///
    /// # Examples
    /// ```
    /// use expanded_wordle::core::{Feedback, KeyboardStatus, LetterStatus, Word};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let target = Word::new("alloy").unwrap();
    ///
    /// let mut keyboard = KeyboardStatus::new();
    /// keyboard.record(&guess, &Feedback::calculate(&guess, &target));
    ///
    /// // The gray fourth L does not hide the green middle L
    /// assert_eq!(keyboard.status(b'L'), Some(LetterStatus::Green));
    /// assert_eq!(keyboard.status(b'O'), Some(LetterStatus::Yellow));
    /// assert_eq!(keyboard.status(b'A'), None);
    /// ```
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            self.apply(letter, status);
        }
    }

    /// Apply a single observation for `letter`
    pub fn apply(&mut self, letter: u8, status: LetterStatus) {
        let slot = &mut self.0[letter_index(letter)];
        match status {
            LetterStatus::Green => *slot = Some(LetterStatus::Green),
            LetterStatus::Yellow => {
                if *slot != Some(LetterStatus::Green) {
                    *slot = Some(LetterStatus::Yellow);
                }
            }
            LetterStatus::Gray => {
                if slot.is_none() {
                    *slot = Some(LetterStatus::Gray);
                }
            }
        }
    }

    /// Status of an uppercase letter, `None` if not yet seen
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        if letter.is_ascii_uppercase() {
            self.0[letter_index(letter)]
        } else {
            None
        }
    }

    /// Iterate over `(letter, status)` for every letter seen so far
    pub fn seen(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'A'..=b'Z')
            .zip(self.0.iter())
            .filter_map(|(letter, status)| status.map(|s| (letter, s)))
    }

    /// Forget every letter
    pub fn clear(&mut self) {
        self.0 = [None; ALPHABET_SIZE];
    }
}
