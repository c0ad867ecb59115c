use crate::evaluation::Mark;
use crate::puzzle::PuzzleState;

const ALPHABET_SIZE: usize = 26;

/// Best feedback mark seen per letter this puzzle, for keyboard coloring.
///
/// Derived state: rebuilt in full from the guess/evaluation history, never
/// persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyFeedback {
    best: [Option<Mark>; ALPHABET_SIZE],
}

impl KeyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_puzzle(puzzle: &PuzzleState) -> Self {
        let mut keys = Self::new();
        for (guess, evaluation) in puzzle.guesses().iter().zip(puzzle.evaluations()) {
            for (letter, &mark) in guess.chars().zip(evaluation) {
                keys.apply(letter, mark);
            }
        }
        keys
    }

    /// Record a mark for a letter, keeping the stronger of old and new.
    /// A weaker mark never downgrades an earlier one.
    pub fn apply(&mut self, letter: char, mark: Mark) {
        let Some(index) = Self::index(letter) else {
            return;
        };
        match self.best[index] {
            Some(current) if current >= mark => {}
            _ => self.best[index] = Some(mark),
        }
    }

    pub fn best(&self, letter: char) -> Option<Mark> {
        Self::index(letter).and_then(|index| self.best[index])
    }

    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| (letter.to_ascii_lowercase() as u8 - b'a') as usize)
    }
}
