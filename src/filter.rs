//! Narrowing a candidate set by one guess and its feedback.

use crate::error::{Result, SolverError};
use crate::feedback::{Feedback, Tag};
use crate::word::{letter_index, CandidateSet, Word, ALPHABET_SIZE};
use crate::MAX_WORD_LENGTH;

/// Allowed number of occurrences of one letter among the non-green positions
/// of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBound {
    pub min: u8,
    pub max: Option<u8>,
}

impl CountBound {
    fn admits(self, count: u8) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

/// A single guess/feedback observation, compiled for fast repeated matching.
#[derive(Debug, Clone)]
pub struct Constraint {
    len: usize,
    /// Letter that must sit at each position (green).
    required: [Option<u8>; MAX_WORD_LENGTH],
    /// Letter that must not sit at each position (yellow or black).
    excluded: [Option<u8>; MAX_WORD_LENGTH],
    /// Positions already settled by a green.
    green: [bool; MAX_WORD_LENGTH],
    /// Bounds for letters that were tagged yellow or black somewhere.
    bounds: [Option<CountBound>; ALPHABET_SIZE],
}

impl Constraint {
    pub fn new(guess: &Word, feedback: &Feedback) -> Result<Self> {
        if guess.len() != feedback.len() {
            return Err(SolverError::ShapeMismatch {
                expected: guess.len(),
                found: feedback.len(),
            });
        }

        let len = guess.len();
        let mut required = [None; MAX_WORD_LENGTH];
        let mut excluded = [None; MAX_WORD_LENGTH];
        let mut green = [false; MAX_WORD_LENGTH];
        let mut yellows = [0u8; ALPHABET_SIZE];
        let mut blacks = [0u8; ALPHABET_SIZE];

        for (i, (&letter, &tag)) in guess.as_bytes().iter().zip(feedback.tags()).enumerate() {
            match tag {
                Tag::Green => {
                    required[i] = Some(letter);
                    green[i] = true;
                }
                Tag::Yellow => {
                    excluded[i] = Some(letter);
                    yellows[letter_index(letter)] += 1;
                }
                Tag::Black => {
                    excluded[i] = Some(letter);
                    blacks[letter_index(letter)] += 1;
                }
            }
        }

        // A black caps the count at whatever the yellows already claim, so a
        // letter with both tags must occur exactly `yellows` times.
        let mut bounds = [None; ALPHABET_SIZE];
        for (bound, (&y, &b)) in bounds.iter_mut().zip(yellows.iter().zip(&blacks)) {
            *bound = match (y, b) {
                (0, 0) => None,
                (y, 0) => Some(CountBound { min: y, max: None }),
                (y, _) => Some(CountBound { min: y, max: Some(y) }),
            };
        }

        Ok(Self {
            len,
            required,
            excluded,
            green,
            bounds,
        })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The bound placed on `letter`, if any.
    pub fn bound(&self, letter: char) -> Option<CountBound> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        self.bounds[letter_index(letter as u8)]
    }

    /// Whether `word` is consistent with the observation.
    ///
    /// `word` must have the same length as the guess.
    pub fn matches(&self, word: &Word) -> bool {
        let letters = word.as_bytes();
        debug_assert_eq!(letters.len(), self.len);

        for (i, &letter) in letters.iter().enumerate() {
            if let Some(r) = self.required[i] {
                if letter != r {
                    return false;
                }
            }
            if self.excluded[i] == Some(letter) {
                return false;
            }
        }

        let counts = word.letter_counts_excluding(&self.green[..self.len]);
        self.bounds
            .iter()
            .zip(counts)
            .all(|(bound, count)| bound.map_or(true, |b| b.admits(count)))
    }

    /// Number of candidates consistent with the observation.
    pub fn count_matches(&self, candidates: &CandidateSet) -> usize {
        candidates.iter().filter(|w| self.matches(w)).count()
    }
}

/// The subset of `candidates` consistent with `guess` having received
/// `feedback`, in the original order.
///
/// An empty result is a valid answer: it means the feedback contradicts every
/// candidate.
pub fn filter(candidates: &CandidateSet, guess: &Word, feedback: &Feedback) -> Result<CandidateSet> {
    check_shape(candidates, guess, feedback)?;
    let constraint = Constraint::new(guess, feedback)?;
    let survivors: Vec<Word> = candidates
        .iter()
        .filter(|w| constraint.matches(w))
        .copied()
        .collect();
    log::debug!(
        "{} {:?}: {} -> {} candidates",
        guess,
        feedback,
        candidates.len(),
        survivors.len()
    );
    Ok(CandidateSet::from_validated(candidates.word_len(), survivors))
}

pub(crate) fn check_shape(candidates: &CandidateSet, guess: &Word, feedback: &Feedback) -> Result<()> {
    let expected = candidates.word_len();
    for found in [guess.len(), feedback.len()] {
        if found != expected {
            return Err(SolverError::ShapeMismatch { expected, found });
        }
    }
    Ok(())
}
