//! # Wordle Ranker
//!
//! A multithreaded Wordle assistant.
//!
//! The solver keeps the set of dictionary words consistent with every piece of
//! feedback seen so far, and ranks possible next guesses by the expected number
//! of candidates they leave behind.

pub mod cache;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod logging;
pub mod ranker;
pub mod session;
pub mod word;

pub use dictionary::{load_dictionary, parse_dictionary};
pub use error::{Result, SolverError};
pub use feedback::{all_patterns, Feedback, Tag};
pub use filter::{filter, Constraint};
pub use ranker::{rank, rank_with_progress, score, RankEvent, Ranking, ScoredGuess};
pub use session::{GuessPool, Session, SessionConfig, SessionState, Solution};
pub use word::{CandidateSet, Word};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Longest word the solver handles. The pattern table grows as `3^len`.
pub const MAX_WORD_LENGTH: usize = 8;
