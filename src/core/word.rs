//! Word representation
//!
//! A Word stores an uppercase 4, 5 or 6 letter word along with its letter counts
//! for feedback calculation.

use std::fmt;

/// Number of letters in the A-Z alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Supported word lengths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordLength {
    Four,
    #[default]
    Five,
    Six,
}

impl WordLength {
    /// All supported lengths, shortest first
    pub const ALL: [Self; 3] = [Self::Four, Self::Five, Self::Six];

    /// Map a letter count to a supported length
    #[must_use]
    pub const fn from_letters(letters: usize) -> Option<Self> {
        match letters {
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            _ => None,
        }
    }

    /// Number of letters in a word of this length
    #[inline]
    #[must_use]
    pub const fn letters(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }

    /// File name of the word list for this length (e.g. `5letter.txt`)
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}letter.txt", self.letters())
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

/// An uppercase A-Z word of a supported length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be 4, 5 or 6 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Index of an uppercase ASCII letter in the alphabet (A = 0)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not 4, 5 or 6
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use expanded_wordle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if WordLength::from_letters(text.len()).is_none() {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut counts = [0u8; ALPHABET_SIZE];
        for b in text.bytes() {
            counts[letter_index(b)] += 1;
        }

        Ok(Self { text, counts })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the word is valid but of another length,
    /// or any error from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: WordLength) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length.letters() {
            Ok(word)
        } else {
            Err(WordError::InvalidLength(word.len()))
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The word's length as a [`WordLength`]
    #[must_use]
    pub fn length(&self) -> WordLength {
        // Constructors only admit supported lengths
        WordLength::from_letters(self.len()).unwrap_or_default()
    }

    /// How many times each letter A-Z occurs in the word
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        self.counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
