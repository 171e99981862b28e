//! Error type shared by the filter, the ranker and the glue around them.

use std::io;

/// Everything the solver can refuse to do.
///
/// None of these are retried internally: every operation is deterministic, so
/// the caller decides whether to re-prompt or give up.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("length mismatch: expected {expected} letters, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("invalid feedback tag '{tag}' at position {position} (use g, y or b)")]
    InvalidFeedbackTag { tag: char, position: usize },

    #[error("invalid letter '{letter}' in \"{word}\" (only a-z allowed)")]
    InvalidLetter { letter: char, word: String },

    #[error("no candidate words remain")]
    EmptyCandidateSet,

    #[error("dictionary contains no words")]
    EmptyDictionary,

    #[error("the session is already over")]
    SessionOver,

    #[error("malformed cache at line {line}: {reason}")]
    CacheFormat { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SolverError {
    /// True for errors caused by a single bad line of user input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SolverError::ShapeMismatch { .. }
                | SolverError::InvalidFeedbackTag { .. }
                | SolverError::InvalidLetter { .. }
        )
    }
}

pub type Result<T, E = SolverError> = std::result::Result<T, E>;
