use crate::evaluation::{Mark, WORD_LENGTH, evaluate};
use crate::wordbank::WordBank;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_GUESSES: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Self::InProgress
    }
}

/// Recoverable submit failures. Neither mutates the puzzle.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("not enough letters")]
    IncompleteGuess,
    #[error("not in word list")]
    UnknownWord,
}

/// Discrete fact emitted by a successful submit, for the presentation layer
/// to render and animate; the core encodes no timing.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub row: usize,
    pub guess: String,
    pub evaluation: Vec<Mark>,
    pub status: Status,
}

/// One active puzzle: answer, submitted history, in-progress entry, status.
///
/// Invariants: `guesses` and `evaluations` stay parallel, `turn_index()` is
/// their shared length and never exceeds `MAX_GUESSES`, and `status` only
/// moves forward. Once terminal, every mutating operation is a no-op.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleState {
    answer: String,
    guesses: Vec<String>,
    evaluations: Vec<Vec<Mark>>,
    current_entry: String,
    status: Status,
}

impl PuzzleState {
    pub fn new(answer: String) -> Self {
        debug_assert_eq!(answer.len(), WORD_LENGTH);
        Self {
            answer,
            guesses: Vec::new(),
            evaluations: Vec::new(),
            current_entry: String::new(),
            status: Status::InProgress,
        }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn evaluations(&self) -> &[Vec<Mark>] {
        &self.evaluations
    }

    pub fn current_entry(&self) -> &str {
        &self.current_entry
    }

    pub fn turn_index(&self) -> usize {
        self.guesses.len()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Append a letter to the in-progress entry. No-op when the entry is
    /// full, the puzzle is over, or `ch` is not a letter.
    pub fn append_letter(&mut self, ch: char) {
        if self.is_over() || self.current_entry.len() >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return;
        }
        self.current_entry.push(ch.to_ascii_lowercase());
    }

    /// Remove the last letter of the in-progress entry. No-op when empty or
    /// the puzzle is over.
    pub fn delete_letter(&mut self) {
        if self.is_over() {
            return;
        }
        self.current_entry.pop();
    }

    /// Submit the in-progress entry. On failure the state is left
    /// byte-for-byte unchanged. A finished puzzle accepts no further
    /// guesses, whatever the entry holds, so the forward-only status
    /// invariant does not depend on the caller checking first.
    pub fn submit(&mut self, bank: &WordBank) -> Result<Reveal, SubmitError> {
        if self.is_over() || self.current_entry.len() < WORD_LENGTH {
            return Err(SubmitError::IncompleteGuess);
        }
        if !bank.contains(&self.current_entry) {
            return Err(SubmitError::UnknownWord);
        }

        let guess = std::mem::take(&mut self.current_entry);
        let evaluation = evaluate(&guess, &self.answer);
        let row = self.guesses.len();
        self.guesses.push(guess.clone());
        self.evaluations.push(evaluation.clone());

        if evaluation.iter().all(|&mark| mark == Mark::Correct) {
            self.status = Status::Won;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = Status::Lost;
        }

        Ok(Reveal {
            row,
            guess,
            evaluation,
            status: self.status,
        })
    }

    /// Restore-time validation: a snapshot is only trusted when its answer is
    /// still in the bank and its histories hold the parallel invariants.
    pub fn is_coherent(&self, bank: &WordBank) -> bool {
        bank.contains(&self.answer)
            && self.guesses.len() == self.evaluations.len()
            && self.guesses.len() <= MAX_GUESSES
            && self.current_entry.len() <= WORD_LENGTH
            && self.guesses.iter().all(|g| g.len() == WORD_LENGTH)
            && self.evaluations.iter().all(|e| e.len() == WORD_LENGTH)
    }
}
