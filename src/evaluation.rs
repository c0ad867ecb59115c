use serde::{Deserialize, Serialize};

pub const WORD_LENGTH: usize = 5;

/// Per-letter feedback for a submitted guess.
///
/// Ordering doubles as keyboard priority: `Correct > Present > Absent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    pub fn as_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Correct),
            'Y' => Some(Self::Present),
            'X' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Evaluate `guess` against `answer`, both lowercase words of `WORD_LENGTH`.
///
/// Two passes over the guess. The first marks positional matches and consumes
/// the matched answer positions; the second scans the remaining answer
/// positions left-to-right for presence matches, consuming each position at
/// most once. Consumption is what keeps duplicate letters honest: a guess with
/// two of a letter against an answer with one gets exactly one
/// `Correct`/`Present` and one `Absent`.
pub fn evaluate(guess: &str, answer: &str) -> Vec<Mark> {
    let guess_letters: Vec<char> = guess.chars().collect();
    let mut answer_letters: Vec<Option<char>> = answer.chars().map(Some).collect();
    debug_assert_eq!(guess_letters.len(), answer_letters.len());

    let mut marks = vec![Mark::Absent; guess_letters.len()];

    // Pass 1: correct position
    for (i, &g) in guess_letters.iter().enumerate() {
        if answer_letters[i] == Some(g) {
            marks[i] = Mark::Correct;
            answer_letters[i] = None;
        }
    }

    // Pass 2: present elsewhere
    for (i, &g) in guess_letters.iter().enumerate() {
        if marks[i] == Mark::Correct {
            continue;
        }
        if let Some(slot) = answer_letters.iter_mut().find(|slot| **slot == Some(g)) {
            marks[i] = Mark::Present;
            *slot = None;
        }
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(s: &str) -> Vec<Mark> {
        s.chars().map(|c| Mark::from_char(c).unwrap()).collect()
    }

    #[test]
    fn test_guess_equals_answer_is_all_correct() {
        assert_eq!(evaluate("crane", "crane"), marks("GGGGG"));
    }

    #[test]
    fn test_disjoint_letters_are_all_absent() {
        assert_eq!(evaluate("mound", "spiky"), marks("XXXXX"));
    }

    #[test]
    fn test_rotation_is_all_present() {
        // Every guess letter exists elsewhere in the answer, none in place.
        assert_eq!(evaluate("eabcd", "abcde"), marks("YYYYY"));
    }

    #[test]
    fn test_duplicate_letter_consumed_once() {
        // Both e's and the final p match positionally; the s and h find
        // nothing. No answer letter may be counted twice.
        assert_eq!(evaluate("sheep", "creep"), marks("XXGGG"));
    }

    #[test]
    fn test_more_guess_copies_than_answer_has() {
        // Guess has three e's, answer one: the positional match wins and
        // the other two come back absent.
        assert_eq!(evaluate("geese", "bless"), marks("XXGGX"));
    }

    #[test]
    fn test_repeated_guess_letter_single_answer_occurrence() {
        assert_eq!(evaluate("apple", "appla"), marks("GGGGX"));
    }

    #[test]
    fn test_mixed_feedback() {
        assert_eq!(evaluate("allay", "lanky"), marks("YYXXG"));
    }

    #[test]
    fn test_extra_duplicates_marked_absent() {
        // Three m's guessed, answer has two: one correct, one present,
        // the third absent.
        assert_eq!(evaluate("mamma", "maxim"), marks("GGYXX"));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let first = evaluate("sheep", "creep");
        let second = evaluate("sheep", "creep");
        assert_eq!(first, second);
    }

    #[test]
    fn test_mark_priority_order() {
        assert!(Mark::Correct > Mark::Present);
        assert!(Mark::Present > Mark::Absent);
    }

    #[test]
    fn test_mark_char_round_trip() {
        for mark in [Mark::Correct, Mark::Present, Mark::Absent] {
            assert_eq!(Mark::from_char(mark.as_char()), Some(mark));
        }
        assert_eq!(Mark::from_char('Q'), None);
    }

    #[test]
    fn test_mark_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mark::Correct).unwrap(), "\"correct\"");
        assert_eq!(serde_json::to_string(&Mark::Present).unwrap(), "\"present\"");
        assert_eq!(serde_json::to_string(&Mark::Absent).unwrap(), "\"absent\"");
    }
}
