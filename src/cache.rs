//! CSV cache of the first-turn ranking.
//!
//! Ranking the whole dictionary against itself is by far the most expensive
//! turn and its result never changes for a given word list, so it can be
//! written once and read back on later runs. The format is a `word,score`
//! header followed by one row per word in ascending score order.

use crate::error::{Result, SolverError};
use crate::ranker::{rank, Ranking, ScoredGuess};
use crate::word::{CandidateSet, Word};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const HEADER: &str = "word,score";

/// Write `ranking` as CSV.
pub fn write_ranking<W: Write>(ranking: &Ranking, mut out: W) -> Result<()> {
    writeln!(out, "{HEADER}")?;
    for entry in ranking.iter() {
        // `{}` on f64 prints the shortest string that parses back to the same value.
        writeln!(out, "{},{}", entry.word, entry.score)?;
    }
    out.flush()?;
    Ok(())
}

/// Read a ranking written by [`write_ranking`].
///
/// Every word must have `length` letters and scores must not decrease.
pub fn read_ranking<R: BufRead>(input: R, length: usize) -> Result<Ranking> {
    let mut entries: Vec<ScoredGuess> = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        if line_no == 1 {
            if line != HEADER {
                return Err(format_error(line_no, format!("expected header \"{HEADER}\"")));
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let (word, score) = line
            .split_once(',')
            .ok_or_else(|| format_error(line_no, "expected word,score".to_string()))?;
        let word = Word::parse_with_length(word, length)
            .map_err(|e| format_error(line_no, e.to_string()))?;
        let score: f64 = score
            .trim()
            .parse()
            .map_err(|e| format_error(line_no, format!("bad score: {e}")))?;
        if !score.is_finite() || score < 0.0 {
            return Err(format_error(line_no, format!("bad score: {score}")));
        }
        if let Some(prev) = entries.last() {
            if score < prev.score {
                return Err(format_error(
                    line_no,
                    "scores are not in ascending order".to_string(),
                ));
            }
        }
        entries.push(ScoredGuess { word, score });
    }
    Ok(Ranking::from_sorted(entries))
}

fn format_error(line: usize, reason: String) -> SolverError {
    SolverError::CacheFormat { line, reason }
}

/// Rank `dictionary` against itself.
pub fn build_first_turn(dictionary: &[Word]) -> Result<Ranking> {
    let candidates = CandidateSet::from_words(dictionary.to_vec())?;
    rank(dictionary, &candidates)
}

/// Whether `ranking` scores exactly the words of `dictionary`.
pub fn covers(ranking: &Ranking, dictionary: &[Word]) -> bool {
    if ranking.len() != dictionary.len() {
        return false;
    }
    let words: FxHashSet<Word> = ranking.iter().map(|e| e.word).collect();
    dictionary.iter().all(|w| words.contains(w))
}

/// Read the cached first-turn ranking at `path`, or compute and write it.
///
/// A cache that does not cover exactly `dictionary` is treated as stale and
/// rebuilt.
pub fn load_or_build(path: impl AsRef<Path>, dictionary: &[Word]) -> Result<Ranking> {
    let path = path.as_ref();
    let length = dictionary.first().map(Word::len).ok_or(SolverError::EmptyDictionary)?;

    if path.exists() {
        let ranking = read_ranking(BufReader::new(File::open(path)?), length)?;
        if covers(&ranking, dictionary) {
            log::info!("using cached first-turn ranking from {}", path.display());
            return Ok(ranking);
        }
        log::warn!(
            "cached ranking at {} does not match the dictionary; rebuilding",
            path.display()
        );
    }

    let ranking = build_first_turn(dictionary)?;
    write_ranking(&ranking, BufWriter::new(File::create(path)?))?;
    log::info!("wrote first-turn ranking to {}", path.display());
    Ok(ranking)
}
