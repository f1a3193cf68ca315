//! The set of valid words for one word length

use super::WordListError;
use crate::core::{Word, WordLength};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Unique words of a single length
///
/// Keeps insertion order for deterministic enumeration and an index for
/// constant-time membership tests. Never empty.
#[derive(Debug, Clone)]
pub struct Dictionary {
    length: WordLength,
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from words, dropping duplicates
    ///
    /// # Errors
    /// Returns `WordListError::DataUnavailable` if no word of `length` remains.
    /// Words of another length are a caller bug and are skipped.
    ///
    /// # Examples
    /// ```
    /// use expanded_wordle::core::{Word, WordLength};
    /// use expanded_wordle::wordlists::Dictionary;
    ///
    /// let words = ["crane", "slate", "CRANE"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(WordLength::Five, words).unwrap();
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.is_valid_guess("Slate"));
    /// assert!(!dictionary.is_valid_guess("irate"));
    /// ```
    pub fn new(
        length: WordLength,
        words: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let mut ordered = Vec::new();

        for word in words {
            if word.length() != length {
                log::debug!("skipping {word}: not a {length}-letter word");
                continue;
            }
            if index.insert(word.clone()) {
                ordered.push(word);
            }
        }

        if ordered.is_empty() {
            return Err(WordListError::DataUnavailable {
                length,
                reason: "word list contains no valid words".to_string(),
            });
        }

        Ok(Self {
            length,
            words: ordered,
            index,
        })
    }

    /// Word length of every entry
    #[inline]
    #[must_use]
    pub const fn length(&self) -> WordLength {
        self.length
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; a dictionary is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Exact membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Check raw player input against the dictionary
    ///
    /// Input is trimmed and normalized to uppercase first.
    #[must_use]
    pub fn is_valid_guess(&self, candidate: &str) -> bool {
        Word::new(candidate).is_ok_and(|word| self.contains(&word))
    }

    /// Pick a target word uniformly at random
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}
