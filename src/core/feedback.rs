//! Guess feedback calculation and representation
//!
//! Each position of a guess is colored:
//! - Gray (letter not in word, beyond copies already matched)
//! - Yellow (letter in word, wrong position)
//! - Green (letter in correct position)

use super::word::{ALPHABET_SIZE, Word, letter_index};
use std::fmt;

/// Feedback for a single letter
///
/// Ordered by precedence, so `Gray < Yellow < Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Gray,
    Yellow,
    Green,
}

impl LetterStatus {
    /// Single character code used in text output
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Gray => '-',
        }
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Build feedback from explicit statuses
    #[must_use]
    pub const fn new(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements Wordle's exact rules for repeated letters: a letter is marked
    /// Green or Yellow at most as many times as it occurs in the target.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the available pool
    /// 2. Second pass, left to right: mark present-but-wrong-position (yellows)
    ///    from what remains, everything else gray
    ///
    /// Greens must be taken first, otherwise an earlier misplaced copy could use up
    /// the count an exact match needs.
    ///
    /// # Examples
    /// ```
    /// use expanded_wordle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let target = Word::new("alloy").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_string(), "YYG-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

        let guess_letters = guess.letters();
        let target_letters = target.letters();
        let mut available: [u8; ALPHABET_SIZE] = target.letter_counts();
        let mut result: Vec<Option<LetterStatus>> = vec![None; guess_letters.len()];

        // First pass: greens
        for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
            if g == t {
                result[i] = Some(LetterStatus::Green);
                available[letter_index(g)] -= 1;
            }
        }

        // Second pass: yellows from the remaining pool, everything else gray
        for (slot, &g) in result.iter_mut().zip(guess_letters) {
            if slot.is_some() {
                continue;
            }
            let count = &mut available[letter_index(g)];
            *slot = if *count > 0 {
                *count -= 1;
                Some(LetterStatus::Yellow)
            } else {
                Some(LetterStatus::Gray)
            };
        }

        Self(result.into_iter().flatten().collect())
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for feedback with no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Green)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Gray, Green, Yellow};

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn feedback_all_gray() {
        let result = feedback("bumpy", "crane");
        assert_eq!(result.statuses(), &[Gray; 5]);
    }

    #[test]
    fn feedback_all_green() {
        let result = feedback("crane", "crane");
        assert!(result.is_perfect());
        assert_eq!(result, Feedback::new(vec![Green; 5]));
    }

    #[test]
    fn feedback_mixed() {
        // C(gray) R(gray) A(green) N(gray) E(green)
        let result = feedback("crane", "slate");
        assert_eq!(result.statuses(), &[Gray, Gray, Green, Gray, Green]);

        let result = feedback("irate", "crane");
        assert_eq!(result.statuses(), &[Gray, Green, Green, Gray, Green]);
    }

    #[test]
    fn feedback_duplicate_letters_alloy_lolly() {
        // Target ALLOY, guess LOLLY: the middle L is exact, the first L takes the
        // remaining L, so the fourth L has nothing left and stays gray.
        let result = feedback("lolly", "alloy");
        assert_eq!(result.statuses(), &[Yellow, Yellow, Green, Gray, Green]);
    }

    #[test]
    fn feedback_green_takes_priority_over_earlier_copy() {
        // Only one E in the target; the exact match at the end must win
        let result = feedback("eerie", "crane");
        assert_eq!(result.statuses(), &[Gray, Gray, Yellow, Gray, Green]);
    }

    #[test]
    fn feedback_yellow_limited_by_target_count() {
        // Two Bs in ABBEY: one exact, one yellow, the third gray
        let result = feedback("bobby", "abbey");
        assert_eq!(result.statuses(), &[Yellow, Gray, Green, Gray, Green]);
    }

    #[test]
    fn feedback_four_and_six_letters() {
        assert_eq!(feedback("bean", "bank").to_string(), "G-YY");
        assert_eq!(feedback("garden", "danger").to_string(), "YGYYGY");
    }

    #[test]
    fn feedback_green_and_yellow_never_exceed_target_counts() {
        let pairs = [
            ("lolly", "alloy"),
            ("eerie", "crane"),
            ("bobby", "abbey"),
            ("sheep", "steep"),
            ("llama", "small"),
        ];
        for (guess, target) in pairs {
            let g = Word::new(guess).unwrap();
            let t = Word::new(target).unwrap();
            let result = Feedback::calculate(&g, &t);

            let exact = g
                .letters()
                .iter()
                .zip(t.letters())
                .filter(|(a, b)| a == b)
                .count();
            let greens = result.statuses().iter().filter(|&&s| s == Green).count();
            assert_eq!(greens, exact, "{guess} vs {target}");

            let mut marked = [0u8; ALPHABET_SIZE];
            for (&letter, &status) in g.letters().iter().zip(result.statuses()) {
                if status != Gray {
                    marked[letter_index(letter)] += 1;
                }
            }
            for (m, c) in marked.iter().zip(t.letter_counts()) {
                assert!(*m <= c, "{guess} vs {target}");
            }
        }
    }

    #[test]
    fn display_and_emoji() {
        let f = Feedback::new(vec![Green, Yellow, Gray, Green]);
        assert_eq!(f.to_string(), "GY-G");
        assert_eq!(f.to_emoji(), "🟩🟨⬜🟩");
    }

    #[test]
    fn status_ordering_follows_precedence() {
        assert!(Green > Yellow);
        assert!(Yellow > Gray);
    }
}
