//! Candidate filtering
//!
//! Rebuilds, from the full guess record, the per-position letter constraints
//! implied by every colored guess and counts the dictionary words that satisfy
//! them.

use super::evaluator::GuessRow;
use crate::core::{Feedback, LetterStatus, Word, letter_index};
use crate::wordlists::Dictionary;
use rayon::prelude::*;

/// Bit set of A-Z, bit 0 = A
type LetterSet = u32;

const ALL_LETTERS: LetterSet = (1 << 26) - 1;

#[inline]
const fn bit(letter: u8) -> LetterSet {
    1 << letter_index(letter)
}

fn letters_of(set: LetterSet) -> String {
    (b'A'..=b'Z')
        .filter(|&letter| set & bit(letter) != 0)
        .map(char::from)
        .collect()
}

/// Letter constraints accumulated from colored guesses
///
/// A word satisfies the constraints iff every letter is allowed at its position
/// and every required letter occurs somewhere in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    allowed: Vec<LetterSet>,
    required: LetterSet,
}

impl Constraints {
    /// No constraints for words of `len` letters
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            allowed: vec![ALL_LETTERS; len],
            required: 0,
        }
    }

    /// Build constraints from every row of a guess record
    ///
    /// # Examples
    /// ```
    /// use expanded_wordle::core::{Feedback, Word};
    /// use expanded_wordle::game::Constraints;
    ///
    /// let guess = Word::new("bobby").unwrap();
    /// let target = Word::new("abbey").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// let constraints = Constraints::from_rows(5, [(&guess, &feedback)]);
    /// // The gray B at position 3 does not rule B out of the word
    /// assert!(constraints.allows(&target));
    /// ```
    #[must_use]
    pub fn from_rows<'a>(
        len: usize,
        rows: impl IntoIterator<Item = (&'a Word, &'a Feedback)>,
    ) -> Self {
        let mut constraints = Self::new(len);
        for (guess, feedback) in rows {
            constraints.add_row(guess, feedback);
        }
        constraints
    }

    /// Build constraints from a session's guess record
    #[must_use]
    pub fn from_record(len: usize, record: &[GuessRow]) -> Self {
        Self::from_rows(len, record.iter().map(|row| (&row.guess, &row.feedback)))
    }

    /// Fold one colored guess into the constraints
    ///
    /// - Green: the position holds exactly that letter
    /// - Yellow: the letter is not at this position but is required elsewhere
    /// - Gray: the letter is excluded from every position, unless the same row
    ///   also marks it Green or Yellow; then it is only excluded here
    pub fn add_row(&mut self, guess: &Word, feedback: &Feedback) {
        let row: Vec<(u8, LetterStatus)> = guess
            .letters()
            .iter()
            .copied()
            .zip(feedback.statuses().iter().copied())
            .collect();

        let present = row
            .iter()
            .filter(|(_, status)| *status != LetterStatus::Gray)
            .fold(0, |set, &(letter, _)| set | bit(letter));

        for (position, &(letter, status)) in row.iter().enumerate() {
            match status {
                LetterStatus::Green => self.allowed[position] &= bit(letter),
                LetterStatus::Yellow => {
                    self.allowed[position] &= !bit(letter);
                    self.required |= bit(letter);
                }
                LetterStatus::Gray if present & bit(letter) != 0 => {
                    self.allowed[position] &= !bit(letter);
                }
                LetterStatus::Gray => {
                    for allowed in &mut self.allowed {
                        *allowed &= !bit(letter);
                    }
                }
            }
        }
    }

    /// Check a word against the constraints
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        if word.len() != self.allowed.len() {
            return false;
        }

        let mut seen: LetterSet = 0;
        for (&letter, &allowed) in word.letters().iter().zip(&self.allowed) {
            if allowed & bit(letter) == 0 {
                return false;
            }
            seen |= bit(letter);
        }

        seen & self.required == self.required
    }

    /// Letters still allowed at `position`, alphabetically
    ///
    /// # Panics
    /// Panics if position is out of range
    #[must_use]
    pub fn allowed_letters(&self, position: usize) -> String {
        letters_of(self.allowed[position])
    }

    /// Letters known to be in the word, alphabetically
    #[must_use]
    pub fn required_letters(&self) -> String {
        letters_of(self.required)
    }

    /// Count dictionary words that satisfy the constraints
    #[must_use]
    pub fn count(&self, dictionary: &Dictionary) -> usize {
        dictionary
            .words()
            .par_iter()
            .filter(|word| self.allows(word))
            .count()
    }

    /// Dictionary words that satisfy the constraints, in dictionary order
    #[must_use]
    pub fn candidates<'a>(&self, dictionary: &'a Dictionary) -> Vec<&'a Word> {
        dictionary
            .words()
            .iter()
            .filter(|word| self.allows(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordLength;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary(list: &[&str]) -> Dictionary {
        let length = word(list[0]).length();
        Dictionary::new(length, list.iter().map(|w| word(w))).unwrap()
    }

    /// Constraints after playing `guesses` against `target`
    fn after(target: &str, guesses: &[&str]) -> Constraints {
        let target = word(target);
        let rows: Vec<(Word, Feedback)> = guesses
            .iter()
            .map(|g| {
                let guess = word(g);
                let feedback = Feedback::calculate(&guess, &target);
                (guess, feedback)
            })
            .collect();
        Constraints::from_rows(target.len(), rows.iter().map(|(g, f)| (g, f)))
    }

    #[test]
    fn empty_constraints_allow_everything() {
        let constraints = Constraints::new(5);
        assert!(constraints.allows(&word("crane")));
        assert!(!constraints.allows(&word("lamp")));
        assert_eq!(constraints.allowed_letters(0).len(), 26);
        assert_eq!(constraints.required_letters(), "");
    }

    #[test]
    fn green_collapses_position() {
        let constraints = after("crane", &["irate"]);
        assert_eq!(constraints.allowed_letters(1), "R");
        assert_eq!(constraints.allowed_letters(2), "A");
        assert_eq!(constraints.allowed_letters(4), "E");
    }

    #[test]
    fn yellow_excludes_position_and_requires_letter() {
        let constraints = after("crane", &["rebus"]);
        assert!(!constraints.allowed_letters(0).contains('R'));
        assert!(constraints.allowed_letters(1).contains('R'));
        assert_eq!(constraints.required_letters(), "ER");
        assert!(!constraints.allows(&word("plaid")));
    }

    #[test]
    fn gray_excludes_letter_everywhere() {
        let constraints = after("crane", &["bumpy"]);
        for position in 0..5 {
            let allowed = constraints.allowed_letters(position);
            for letter in "BUMPY".chars() {
                assert!(!allowed.contains(letter));
            }
        }
    }

    #[test]
    fn gray_duplicate_of_green_only_excluded_locally() {
        // ABBEY vs BOBBY: B is yellow at 0, green at 2 and gray at 3
        let constraints = after("abbey", &["bobby"]);
        assert!(!constraints.allowed_letters(3).contains('B'));
        assert!(constraints.allowed_letters(1).contains('B'));
        assert!(constraints.allows(&word("abbey")));

        // A naive global exclusion of B would reject the target itself
        let mut naive = Constraints::new(5);
        for allowed in &mut naive.allowed {
            *allowed &= !bit(b'B');
        }
        assert!(!naive.allows(&word("abbey")));
    }

    #[test]
    fn gray_duplicate_of_yellow_only_excluded_locally() {
        // CRANE vs EERIE: E gray at 0 and 1, green at 4
        let constraints = after("crane", &["eerie"]);
        assert!(!constraints.allowed_letters(0).contains('E'));
        assert!(!constraints.allowed_letters(1).contains('E'));
        assert_eq!(constraints.allowed_letters(4), "E");
        assert!(!constraints.allowed_letters(0).contains('I'));
        assert!(constraints.allows(&word("crane")));

        // ALLOY vs LOLLY: the gray fourth L must not exclude L elsewhere
        let constraints = after("alloy", &["lolly"]);
        assert!(constraints.allows(&word("alloy")));
        assert!(!constraints.allowed_letters(3).contains('L'));
    }

    #[test]
    fn target_always_remains_candidate() {
        let cases: [(&str, &[&str]); 4] = [
            ("alloy", &["lolly", "llama", "loyal"]),
            ("abbey", &["bobby", "ebbed", "abbot"]),
            ("sheep", &["speed", "eerie", "steep"]),
            ("crane", &["adieu", "story", "eerie"]),
        ];
        for (target, guesses) in cases {
            assert!(after(target, guesses).allows(&word(target)), "{target}");
        }
    }

    #[test]
    fn count_and_candidates_agree() {
        let dict = dictionary(&["crane", "crate", "grate", "irate", "slate", "bumpy"]);
        let constraints = after("grate", &["crane"]);

        let candidates: Vec<&str> = constraints
            .candidates(&dict)
            .into_iter()
            .map(Word::text)
            .collect();
        // IRATE keeps its I because I was never guessed
        assert_eq!(candidates, ["GRATE", "IRATE"]);
        assert_eq!(constraints.count(&dict), 2);
        assert_eq!(Constraints::new(5).count(&dict), dict.len());
    }

    #[test]
    fn more_rows_never_add_candidates() {
        let dict = crate::wordlists::loader::load_embedded(WordLength::Five).unwrap();
        let guesses = ["adieu", "story", "crane"];
        let mut previous = dict.len();
        for i in 1..=guesses.len() {
            let count = after("crane", &guesses[..i]).count(&dict);
            assert!(count <= previous);
            previous = count;
        }
        assert_eq!(previous, 1);
    }

    #[test]
    fn six_letter_words() {
        let dict = dictionary(&["garden", "danger", "ranged", "gander"]);
        let constraints = after("danger", &["garden"]);
        assert!(constraints.allows(&word("danger")));
        assert!(!constraints.allows(&word("garden")));
        assert_eq!(constraints.count(&dict), 2);
    }
}
