//! Word list loading utilities
//!
//! Loads per-length word lists from a directory of `{n}letter.txt` files or
//! from the lists embedded into the binary.

use super::embedded::embedded_words;
use super::{Dictionary, WordListError};
use crate::core::{Word, WordLength};
use std::fs;
use std::path::{Path, PathBuf};

/// Where word lists come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// Lists compiled into the binary
    #[default]
    Embedded,
    /// A directory holding `4letter.txt`, `5letter.txt` and `6letter.txt`
    Directory(PathBuf),
}

/// Parse word list text, one word per line
///
/// Lines are trimmed and upper-cased; blank lines are ignored. Lines of the
/// wrong length or containing anything but letters are rejected whole, never
/// truncated.
///
/// # Examples
/// ```
/// use expanded_wordle::core::WordLength;
/// use expanded_wordle::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n  Slate \nCRANES\ncr4ne\n\n", WordLength::Five);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn parse_words(content: &str, length: WordLength) -> Vec<Word> {
    let mut rejected = 0usize;

    let words: Vec<Word> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let word = Word::with_length(line, length).ok();
            if word.is_none() {
                rejected += 1;
            }
            word
        })
        .collect();

    if rejected > 0 {
        log::debug!("rejected {rejected} malformed lines from {length}-letter list");
    }

    words
}

/// Load a word list file into a dictionary
///
/// # Errors
///
/// Returns `WordListError::DataUnavailable` if the file cannot be read or holds
/// no valid word of `length`.
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    length: WordLength,
) -> Result<Dictionary, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| WordListError::DataUnavailable {
        length,
        reason: format!("cannot read {}: {e}", path.display()),
    })?;

    Dictionary::new(length, parse_words(&content, length)).map_err(|_| {
        WordListError::DataUnavailable {
            length,
            reason: format!("{} contains no valid {length}-letter words", path.display()),
        }
    })
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use expanded_wordle::core::WordLength;
/// use expanded_wordle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["lamp", "crane", "palm"], WordLength::Four);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: WordLength) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, length).ok())
        .collect()
}

/// Load the embedded list for `length`
///
/// # Errors
///
/// Returns `WordListError::DataUnavailable` if the embedded list is empty.
pub fn load_embedded(length: WordLength) -> Result<Dictionary, WordListError> {
    Dictionary::new(length, words_from_slice(embedded_words(length), length))
}

/// Load the dictionary for `length` from `source`
///
/// # Errors
///
/// Returns `WordListError::DataUnavailable` if the list is missing, unreadable
/// or empty.
pub fn load(source: &WordSource, length: WordLength) -> Result<Dictionary, WordListError> {
    let dictionary = match source {
        WordSource::Embedded => load_embedded(length)?,
        WordSource::Directory(dir) => load_from_file(dir.join(length.file_name()), length)?,
    };
    log::info!("loaded {} {length}-letter words", dictionary.len());
    Ok(dictionary)
}

/// Load from `source`, falling back to the embedded list when it is unavailable
///
/// # Errors
///
/// Returns `WordListError::DataUnavailable` only if the embedded list fails too.
pub fn load_or_embedded(
    source: &WordSource,
    length: WordLength,
) -> Result<Dictionary, WordListError> {
    load_with_fallback(source, length).map(|(dictionary, _)| dictionary)
}

/// Like [`load_or_embedded`], also returning the error that forced a fallback
///
/// Hosts that own the terminal use the returned error to tell the player,
/// since the `warn!` record may not be visible.
///
/// # Errors
///
/// Returns `WordListError::DataUnavailable` only if the embedded list fails too.
pub fn load_with_fallback(
    source: &WordSource,
    length: WordLength,
) -> Result<(Dictionary, Option<WordListError>), WordListError> {
    match load(source, length) {
        Ok(dictionary) => Ok((dictionary, None)),
        Err(err) if *source != WordSource::Embedded => {
            log::warn!("{err}; falling back to embedded word list");
            let dictionary = load(&WordSource::Embedded, length)?;
            Ok((dictionary, Some(err)))
        }
        Err(err) => Err(err),
    }
}
