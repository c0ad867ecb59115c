use crate::wordbank::WordBank;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Rolling record of answers already served, so no word repeats until the
/// whole bank has cycled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsedWords {
    words: Vec<String>,
}

impl UsedWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Record a served answer. Once every bank word has been seen the record
    /// resets to empty, restarting the cycle.
    pub fn record(&mut self, word: &str, bank_len: usize) {
        if !self.contains(word) {
            self.words.push(word.to_string());
        }
        if self.words.len() >= bank_len {
            self.words.clear();
        }
    }
}

/// Draw a fresh answer: uniform over the bank minus the used set, falling
/// back to the whole bank when the pool is exhausted.
pub fn pick_answer(bank: &WordBank, used: &UsedWords) -> String {
    let pool: Vec<&String> = bank
        .words()
        .iter()
        .filter(|word| !used.contains(word))
        .collect();

    let mut rng = rand::thread_rng();
    let picked = if pool.is_empty() {
        bank.words().choose(&mut rng)
    } else {
        pool.choose(&mut rng).copied()
    };

    // The bank is guaranteed non-empty by construction.
    picked.cloned().unwrap_or_default()
}
