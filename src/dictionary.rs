//! Loading the word list.

use crate::error::{Result, SolverError};
use crate::word::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Parse whitespace-separated words of exactly `length` letters.
///
/// Words are lowercased and duplicates dropped, keeping the first occurrence.
pub fn parse_dictionary(text: &str, length: usize) -> Result<Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    for raw in text.split_whitespace() {
        let word = Word::parse_with_length(raw, length)?;
        if seen.insert(word) {
            words.push(word);
        }
    }
    if words.is_empty() {
        return Err(SolverError::EmptyDictionary);
    }
    Ok(words)
}

/// Load the dictionary from a file
pub fn load_dictionary(path: impl AsRef<Path>, length: usize) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = parse_dictionary(&text, length)?;
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
