//! Ranking guesses by how far they are expected to narrow the candidates.
//!
//! For a guess `w`, every feedback pattern `p` is run through the constraint
//! filter and the number of survivors `n(w, p)` recorded. The score is
//!
//! ```text
//! score(w) = Σ_p n(w, p)² / |candidates|
//! ```
//!
//! which is the expected number of candidates left after guessing `w`, taking
//! `n(w, p) / |candidates|` as the probability of seeing `p`. It is not an
//! entropy in bits. Lower is better.

use crate::error::{Result, SolverError};
use crate::feedback::{all_patterns, Feedback};
use crate::filter::Constraint;
use crate::word::{CandidateSet, Word};
use rayon::prelude::*;
use std::sync::mpsc::Sender;

/// A guess and its expected number of remaining candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
}

/// Progress notifications emitted while a ranking is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankEvent {
    Started { total: usize },
    Scored(ScoredGuess),
    Finished,
}

/// Guesses ordered from most to least informative.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    entries: Vec<ScoredGuess>,
}

impl Ranking {
    /// Wrap entries that are already in ascending score order.
    pub fn from_sorted(entries: Vec<ScoredGuess>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].score <= w[1].score));
        Self { entries }
    }

    pub fn entries(&self) -> &[ScoredGuess] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<&ScoredGuess> {
        self.entries.first()
    }

    pub fn top(&self, n: usize) -> &[ScoredGuess] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredGuess> {
        self.entries.iter()
    }
}

/// Expected number of candidates left after guessing `guess`.
///
/// Patterns the standard feedback rule cannot produce for `guess` are skipped,
/// so every candidate is counted under exactly one pattern.
pub fn score(guess: &Word, candidates: &CandidateSet) -> Result<f64> {
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }
    if guess.len() != candidates.word_len() {
        return Err(SolverError::ShapeMismatch {
            expected: candidates.word_len(),
            found: guess.len(),
        });
    }
    let patterns = all_patterns(candidates.word_len())?;
    score_with(guess, candidates, patterns)
}

fn score_with(guess: &Word, candidates: &CandidateSet, patterns: &[Feedback]) -> Result<f64> {
    let total = candidates.len() as f64;
    let mut score = 0.0;
    for pattern in patterns.iter().filter(|p| p.is_reachable_for(guess)) {
        let n = Constraint::new(guess, pattern)?.count_matches(candidates) as f64;
        score += n * n / total;
    }
    Ok(score)
}

/// Score every eligible guess against `candidates`, best first.
///
/// Ties keep the order of `eligible`.
pub fn rank(eligible: &[Word], candidates: &CandidateSet) -> Result<Ranking> {
    rank_inner(eligible, candidates, None)
}

/// Like [`rank`], reporting each score on `progress` as it is computed.
///
/// A dropped receiver is not an error; the ranking still completes.
pub fn rank_with_progress(
    eligible: &[Word],
    candidates: &CandidateSet,
    progress: Sender<RankEvent>,
) -> Result<Ranking> {
    rank_inner(eligible, candidates, Some(progress))
}

fn rank_inner(
    eligible: &[Word],
    candidates: &CandidateSet,
    progress: Option<Sender<RankEvent>>,
) -> Result<Ranking> {
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }
    let expected = candidates.word_len();
    if let Some(bad) = eligible.iter().find(|w| w.len() != expected) {
        return Err(SolverError::ShapeMismatch {
            expected,
            found: bad.len(),
        });
    }
    let patterns = all_patterns(expected)?;

    log::debug!(
        "ranking {} guesses against {} candidates",
        eligible.len(),
        candidates.len()
    );
    if let Some(tx) = &progress {
        let _ = tx.send(RankEvent::Started {
            total: eligible.len(),
        });
    }

    let mut scored: Vec<ScoredGuess> = eligible
        .par_iter()
        .map_with(progress.clone(), |tx, word| -> Result<ScoredGuess> {
            let scored = ScoredGuess {
                word: *word,
                score: score_with(word, candidates, patterns)?,
            };
            if let Some(tx) = tx {
                let _ = tx.send(RankEvent::Scored(scored));
            }
            Ok(scored)
        })
        .collect::<Result<_>>()?;

    // Stable, so equal scores stay in eligible order.
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));

    if let Some(tx) = &progress {
        let _ = tx.send(RankEvent::Finished);
    }
    Ok(Ranking::from_sorted(scored))
}
