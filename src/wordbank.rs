use crate::evaluation::WORD_LENGTH;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("failed to read word bank: {0}")]
    Io(#[from] io::Error),
    #[error("word bank is empty after filtering")]
    Empty,
}

/// The dictionary: deduplicated lowercase five-letter words, loaded once.
///
/// Serves both as the answer pool and as the acceptability predicate for
/// submitted guesses.
#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordBank {
    pub fn embedded() -> Self {
        Self::from_str_data(EMBEDDED_WORDBANK)
            .unwrap_or_else(|_| unreachable!("embedded word bank is non-empty"))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordBankError> {
        let data = fs::read_to_string(path)?;
        Self::from_str_data(&data)
    }

    pub fn from_str_data(data: &str) -> Result<Self, WordBankError> {
        let mut words = Vec::new();
        let mut index = HashSet::new();
        for line in data.lines() {
            let word = line.trim().to_lowercase();
            if word.len() == WORD_LENGTH
                && word.chars().all(|c| c.is_ascii_lowercase())
                && index.insert(word.clone())
            {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(Self { words, index })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_filters_and_lowercases() {
        let bank = WordBank::from_str_data("CRANE\n  slate \nabc\ntoolong\ncr4ne\n").unwrap();
        assert_eq!(bank.words(), ["crane", "slate"]);
    }

    #[test]
    fn test_load_deduplicates_preserving_order() {
        let bank = WordBank::from_str_data("crane\nslate\nCrane\nslate\n").unwrap();
        assert_eq!(bank.words(), ["crane", "slate"]);
    }

    #[test]
    fn test_empty_after_filtering_is_an_error() {
        assert!(matches!(
            WordBank::from_str_data("abc\ntoolong\n"),
            Err(WordBankError::Empty)
        ));
    }

    #[test]
    fn test_contains_is_exact_membership() {
        let bank = WordBank::from_str_data("crane\nslate\n").unwrap();
        assert!(bank.contains("crane"));
        assert!(!bank.contains("CRANE"));
        assert!(!bank.contains("brain"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            WordBank::from_file("/definitely/not/here.txt"),
            Err(WordBankError::Io(_))
        ));
    }

    #[test]
    fn test_embedded_bank_is_well_formed() {
        let bank = WordBank::embedded();
        assert!(bank.len() > 1000);
        assert!(
            bank.words()
                .iter()
                .all(|w| w.len() == WORD_LENGTH && w.chars().all(|c| c.is_ascii_lowercase()))
        );
    }
}
