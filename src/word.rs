//! Words and candidate sets.
//!
//! A [`Word`] is a fixed-capacity, stack-allocated run of lowercase ASCII
//! letters. Keeping it `Copy` lets the ranker hand words to worker threads
//! without allocation or reference counting.

use crate::error::{Result, SolverError};
use crate::MAX_WORD_LENGTH;
use std::fmt;

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Per-letter occurrence counts, indexed by `letter - b'a'`.
pub type LetterCounts = [u8; ALPHABET_SIZE];

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; MAX_WORD_LENGTH],
    len: u8,
}

impl Word {
    /// Parse a word, lowercasing it.
    ///
    /// Fails with `InvalidLetter` on anything outside `a-z`/`A-Z` and with
    /// `ShapeMismatch` if the word is empty or longer than [`MAX_WORD_LENGTH`].
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut letters = [0u8; MAX_WORD_LENGTH];
        let mut len = 0;
        for c in s.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(SolverError::InvalidLetter {
                    letter: c,
                    word: s.to_string(),
                });
            }
            if len == MAX_WORD_LENGTH {
                return Err(SolverError::ShapeMismatch {
                    expected: MAX_WORD_LENGTH,
                    found: s.chars().count(),
                });
            }
            letters[len] = c.to_ascii_lowercase() as u8;
            len += 1;
        }
        if len == 0 {
            return Err(SolverError::ShapeMismatch {
                expected: 1,
                found: 0,
            });
        }
        Ok(Self {
            letters,
            len: len as u8,
        })
    }

    /// Parse a word that must have exactly `length` letters.
    pub fn parse_with_length(s: &str, length: usize) -> Result<Self> {
        let word = Self::parse(s)?;
        if word.len() != length {
            return Err(SolverError::ShapeMismatch {
                expected: length,
                found: word.len(),
            });
        }
        Ok(word)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.letters[..self.len()]
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Histogram of every letter in the word.
    pub fn letter_counts(&self) -> LetterCounts {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &b in self.as_bytes() {
            counts[letter_index(b)] += 1;
        }
        counts
    }

    /// Histogram of the letters at positions where `skip[i]` is false.
    pub fn letter_counts_excluding(&self, skip: &[bool]) -> LetterCounts {
        let mut counts = [0u8; ALPHABET_SIZE];
        for (&b, &skipped) in self.as_bytes().iter().zip(skip) {
            if !skipped {
                counts[letter_index(b)] += 1;
            }
        }
        counts
    }
}

#[inline]
pub(crate) fn letter_index(b: u8) -> usize {
    (b - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Words not yet ruled out, all of the same length.
///
/// The set is never mutated once built; narrowing it produces a new set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    word_len: usize,
    words: Vec<Word>,
}

impl CandidateSet {
    /// Build a set of `word_len`-letter words, rejecting any other length.
    pub fn new(word_len: usize, words: Vec<Word>) -> Result<Self> {
        if let Some(bad) = words.iter().find(|w| w.len() != word_len) {
            return Err(SolverError::ShapeMismatch {
                expected: word_len,
                found: bad.len(),
            });
        }
        Ok(Self { word_len, words })
    }

    /// Build a set from a non-empty list, taking the length from its first word.
    pub fn from_words(words: Vec<Word>) -> Result<Self> {
        let word_len = words
            .first()
            .map(Word::len)
            .ok_or(SolverError::EmptyCandidateSet)?;
        Self::new(word_len, words)
    }

    /// Constructor for subsets of an already validated set.
    pub(crate) fn from_validated(word_len: usize, words: Vec<Word>) -> Self {
        Self { word_len, words }
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The single remaining word, if exactly one is left.
    pub fn only(&self) -> Option<Word> {
        match self.words.as_slice() {
            [word] => Some(*word),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
