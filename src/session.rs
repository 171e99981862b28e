//! Turn-by-turn play.
//!
//! A [`Session`] is a value: applying a guess consumes it and hands back the
//! next one, so the candidate set a ranking was computed from can never change
//! underneath it.

use crate::error::{Result, SolverError};
use crate::feedback::Feedback;
use crate::filter::filter;
use crate::ranker::{rank, rank_with_progress, RankEvent, Ranking, ScoredGuess};
use crate::word::{CandidateSet, Word};
use std::sync::mpsc::Sender;

/// Which words the ranker may propose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    /// Any dictionary word, including ones already ruled out as the answer.
    #[default]
    Dictionary,
    /// Only words that could still be the answer.
    Candidates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Stop after this many guesses.
    pub max_turns: Option<usize>,
    pub pool: GuessPool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    /// The answer is known.
    Solved(Word),
    /// No dictionary word fits the feedback seen so far.
    Exhausted,
    OutOfTurns,
}

impl SessionState {
    pub fn is_over(self) -> bool {
        self != SessionState::Playing
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Vec<Word>,
    candidates: CandidateSet,
    turns: usize,
    won_with: Option<Word>,
    config: SessionConfig,
}

/// Outcome of letting the solver play by itself.
#[derive(Debug, Clone)]
pub struct Solution {
    pub guesses: Vec<(Word, Feedback)>,
    pub state: SessionState,
}

impl Solution {
    pub fn is_win(&self) -> bool {
        self.guesses.last().map_or(false, |(_, f)| f.is_win())
    }
}

impl Session {
    pub fn new(dictionary: Vec<Word>, config: SessionConfig) -> Result<Self> {
        let candidates = CandidateSet::from_words(dictionary.clone()).map_err(|e| match e {
            SolverError::EmptyCandidateSet => SolverError::EmptyDictionary,
            e => e,
        })?;
        Ok(Self {
            dictionary,
            candidates,
            turns: 0,
            won_with: None,
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn word_len(&self) -> usize {
        self.candidates.word_len()
    }

    /// Guesses applied so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn state(&self) -> SessionState {
        if let Some(word) = self.won_with {
            return SessionState::Solved(word);
        }
        if let Some(word) = self.candidates.only() {
            return SessionState::Solved(word);
        }
        if self.candidates.is_empty() {
            return SessionState::Exhausted;
        }
        match self.config.max_turns {
            Some(max) if self.turns >= max => SessionState::OutOfTurns,
            _ => SessionState::Playing,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state().is_over()
    }

    /// The words the ranker may propose this turn.
    pub fn eligible(&self) -> &[Word] {
        match self.config.pool {
            GuessPool::Dictionary => &self.dictionary,
            GuessPool::Candidates => self.candidates.words(),
        }
    }

    pub fn rank(&self) -> Result<Ranking> {
        rank(self.eligible(), &self.candidates)
    }

    pub fn rank_with_progress(&self, progress: Sender<RankEvent>) -> Result<Ranking> {
        rank_with_progress(self.eligible(), &self.candidates, progress)
    }

    /// On the first turn, `first_turn` stands in for ranking the whole
    /// dictionary against itself.
    pub fn rank_or_cached(&self, first_turn: Option<&Ranking>) -> Result<Ranking> {
        match first_turn {
            Some(ranking) if self.turns == 0 => Ok(ranking.clone()),
            _ => self.rank(),
        }
    }

    /// Among the best-scoring guesses, prefer one that could be the answer.
    pub fn pick_guess(&self, ranking: &Ranking) -> Option<Word> {
        let best = ranking.best()?;
        let tied = ranking.iter().take_while(|e| e.score == best.score);
        let possible = tied
            .map(|e: &ScoredGuess| e.word)
            .find(|w| self.candidates.contains(w));
        Some(possible.unwrap_or(best.word))
    }

    /// Record `guess` having received `feedback` and move to the next turn.
    pub fn apply(self, guess: Word, feedback: Feedback) -> Result<Self> {
        if self.is_over() {
            return Err(SolverError::SessionOver);
        }
        let candidates = filter(&self.candidates, &guess, &feedback)?;
        let turns = self.turns + 1;
        log::info!(
            "turn {}: {} {} leaves {} of {} candidates",
            turns,
            guess,
            feedback,
            candidates.len(),
            self.candidates.len()
        );
        Ok(Self {
            candidates,
            turns,
            won_with: feedback.is_win().then_some(guess),
            ..self
        })
    }

    /// Play until the session ends, asking `respond` for the feedback to each
    /// guess.
    ///
    /// When the candidates narrow to a single word, that word is submitted as
    /// the final guess if the turn budget allows.
    pub fn solve_with<F>(self, mut respond: F) -> Result<Solution>
    where
        F: FnMut(&Word) -> Result<Feedback>,
    {
        let mut session = self;
        let mut guesses = Vec::new();

        while session.state() == SessionState::Playing {
            let ranking = session.rank()?;
            let guess = session
                .pick_guess(&ranking)
                .ok_or(SolverError::EmptyCandidateSet)?;
            let feedback = respond(&guess)?;
            guesses.push((guess, feedback));
            session = session.apply(guess, feedback)?;
        }

        if let SessionState::Solved(word) = session.state() {
            let already_won = guesses.last().map_or(false, |(_, f): &(Word, Feedback)| f.is_win());
            let budget_left = session.config.max_turns.map_or(true, |max| session.turns < max);
            if !already_won && budget_left {
                guesses.push((word, respond(&word)?));
            }
        }

        Ok(Solution {
            guesses,
            state: session.state(),
        })
    }

    /// Let the solver play against a known answer.
    pub fn solve_for_secret(self, secret: &Word) -> Result<Solution> {
        self.solve_with(|guess| Feedback::compute(guess, secret))
    }
}
