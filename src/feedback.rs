//! Feedback tags and patterns.
//!
//! This module handles parsing the feedback a player reports for a guess,
//! computing the feedback a guess would receive against a known secret, and
//! the memoized table of every possible pattern for a word length.

use crate::error::{Result, SolverError};
use crate::word::{letter_index, Word, ALPHABET_SIZE};
use crate::MAX_WORD_LENGTH;
use itertools::Itertools;
use once_cell::sync::OnceCell;
use std::fmt;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Correct letter in correct position
    Green,
    /// Letter occurs elsewhere in the word
    Yellow,
    /// No further unaccounted occurrences of the letter
    Black,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::Green, Tag::Yellow, Tag::Black];

    /// Convert to a character for display
    pub fn to_emoji(self) -> char {
        match self {
            Tag::Green => '🟩',
            Tag::Yellow => '🟨',
            Tag::Black => '⬛',
        }
    }

    /// The canonical single-letter encoding.
    pub fn to_char(self) -> char {
        match self {
            Tag::Green => 'g',
            Tag::Yellow => 'y',
            Tag::Black => 'b',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Tag::Green),
            'y' | '1' => Some(Tag::Yellow),
            'b' | 'x' | '0' => Some(Tag::Black),
            _ => None,
        }
    }
}

/// The tags for a whole guess, positionally aligned with it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    tags: [Tag; MAX_WORD_LENGTH],
    len: u8,
}

impl Feedback {
    /// Build a pattern from a slice of tags.
    pub fn new(tags: &[Tag]) -> Result<Self> {
        if tags.is_empty() || tags.len() > MAX_WORD_LENGTH {
            return Err(SolverError::ShapeMismatch {
                expected: if tags.is_empty() { 1 } else { MAX_WORD_LENGTH },
                found: tags.len(),
            });
        }
        let mut out = [Tag::Black; MAX_WORD_LENGTH];
        out[..tags.len()].copy_from_slice(tags);
        Ok(Self {
            tags: out,
            len: tags.len() as u8,
        })
    }

    /// Every position green.
    pub fn all_green(len: usize) -> Result<Self> {
        Self::new(&vec![Tag::Green; len])
    }

    /// Parse a pattern from a string like "gybbb" or "21000".
    pub fn parse(s: &str) -> Result<Self> {
        let tags = s
            .trim()
            .chars()
            .enumerate()
            .map(|(position, tag)| {
                Tag::from_char(tag).ok_or(SolverError::InvalidFeedbackTag { tag, position })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(&tags)
    }

    /// Parse a pattern that must cover exactly `length` letters.
    pub fn parse_with_length(s: &str, length: usize) -> Result<Self> {
        let feedback = Self::parse(s)?;
        if feedback.len() != length {
            return Err(SolverError::ShapeMismatch {
                expected: length,
                found: feedback.len(),
            });
        }
        Ok(feedback)
    }

    /// Calculate the feedback a guess receives when `secret` is the answer.
    ///
    /// Greens are assigned first; the remaining occurrences of each letter in
    /// the secret are then handed out as yellows from left to right.
    pub fn compute(guess: &Word, secret: &Word) -> Result<Self> {
        if guess.len() != secret.len() {
            return Err(SolverError::ShapeMismatch {
                expected: secret.len(),
                found: guess.len(),
            });
        }
        let guess = guess.as_bytes();
        let secret = secret.as_bytes();

        let mut tags = [Tag::Black; MAX_WORD_LENGTH];
        let mut unmatched = [0u8; ALPHABET_SIZE];

        for i in 0..guess.len() {
            if guess[i] == secret[i] {
                tags[i] = Tag::Green;
            } else {
                unmatched[letter_index(secret[i])] += 1;
            }
        }

        for i in 0..guess.len() {
            if tags[i] != Tag::Green {
                let idx = letter_index(guess[i]);
                if unmatched[idx] > 0 {
                    tags[i] = Tag::Yellow;
                    unmatched[idx] -= 1;
                }
            }
        }

        Ok(Self {
            tags,
            len: guess.len() as u8,
        })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags[..self.len()]
    }

    /// Check if this pattern represents a win (all green)
    pub fn is_win(&self) -> bool {
        self.tags().iter().all(|&t| t == Tag::Green)
    }

    /// Whether the standard feedback rule could ever produce this pattern for
    /// `guess`.
    ///
    /// Yellows for a repeated letter are always handed out left to right, so a
    /// black occurrence followed by a yellow one of the same letter never
    /// happens.
    pub fn is_reachable_for(&self, guess: &Word) -> bool {
        let mut blacked = [false; ALPHABET_SIZE];
        for (&letter, &tag) in guess.as_bytes().iter().zip(self.tags()) {
            let idx = letter_index(letter);
            match tag {
                Tag::Black => blacked[idx] = true,
                Tag::Yellow if blacked[idx] => return false,
                _ => {}
            }
        }
        true
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.tags().iter().map(|t| t.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

impl fmt::Debug for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.tags().iter().map(|t| t.to_char()).collect();
        write!(f, "Feedback({s})")
    }
}

impl std::str::FromStr for Feedback {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[allow(clippy::declare_interior_mutable_const)]
const UNINIT: OnceCell<Vec<Feedback>> = OnceCell::new();
static PATTERNS: [OnceCell<Vec<Feedback>>; MAX_WORD_LENGTH + 1] = [UNINIT; MAX_WORD_LENGTH + 1];

/// Every one of the `3^len` feedback patterns for words of length `len`.
///
/// Built on first use for each length and shared read-only afterwards.
pub fn all_patterns(len: usize) -> Result<&'static [Feedback]> {
    let cell = PATTERNS
        .get(len)
        .filter(|_| len > 0)
        .ok_or(SolverError::ShapeMismatch {
            expected: MAX_WORD_LENGTH,
            found: len,
        })?;
    let patterns = cell.get_or_try_init(|| {
        std::iter::repeat(Tag::ALL)
            .take(len)
            .multi_cartesian_product()
            .map(|tags| Feedback::new(&tags))
            .collect::<Result<Vec<_>>>()
    })?;
    Ok(patterns.as_slice())
}
