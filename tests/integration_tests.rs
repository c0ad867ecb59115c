// Integration tests for practice-wordle
// These tests drive full games through the public Session API

use practice_wordle::cli::run_plain;
use practice_wordle::storage::{STATE_KEY, StorageError};
use practice_wordle::*;
use std::io::Cursor;

fn bank() -> WordBank {
    WordBank::from_str_data("crane\nslate\nbrain\ntrain\ngrain\nstain\nplace\n").unwrap()
}

fn type_word<S: Storage>(session: &mut Session<S>, word: &str) {
    for ch in word.chars() {
        session.append_letter(ch);
    }
}

fn wrong_word<S: Storage>(session: &Session<S>) -> String {
    let answer = session.puzzle().answer();
    session
        .bank()
        .words()
        .iter()
        .find(|w| w.as_str() != answer)
        .expect("bank has more than one word")
        .clone()
}

#[test]
fn test_full_winning_game() {
    let mut session = Session::restore_or_new(bank(), MemoryStorage::new(), false);
    let answer = session.puzzle().answer().to_string();

    let wrong = wrong_word(&session);
    type_word(&mut session, &wrong);
    session.submit().unwrap().unwrap();

    type_word(&mut session, &answer);
    let reveal = session.submit().unwrap().unwrap();

    assert_eq!(reveal.status, Status::Won);
    assert_eq!(reveal.row, 1);
    assert!(reveal.evaluation.iter().all(|&m| m == Mark::Correct));
    assert_eq!(session.puzzle().turn_index(), 2);
    assert!(session.used_words().contains(&answer));
}

#[test]
fn test_full_losing_game() {
    let mut session = Session::restore_or_new(bank(), MemoryStorage::new(), false);
    let wrong = wrong_word(&session);

    for turn in 0..MAX_GUESSES {
        assert_eq!(session.puzzle().status(), Status::InProgress);
        type_word(&mut session, &wrong);
        let reveal = session.submit().unwrap().unwrap();
        assert_eq!(reveal.row, turn);
    }

    assert_eq!(session.puzzle().status(), Status::Lost);
    // Further input is ignored once the puzzle is terminal.
    type_word(&mut session, &wrong);
    assert_eq!(session.submit(), Ok(None));
    assert_eq!(session.puzzle().turn_index(), MAX_GUESSES);
}

#[test]
fn test_game_survives_process_restart() {
    let storage = MemoryStorage::new();

    let saved = {
        let mut session = Session::restore_or_new(bank(), &storage, false);
        let wrong = wrong_word(&session);
        type_word(&mut session, &wrong);
        session.submit().unwrap().unwrap();
        type_word(&mut session, "br");
        session.puzzle().clone()
    };

    let resumed = Session::restore_or_new(bank(), &storage, false);
    assert_eq!(*resumed.puzzle(), saved);
    assert_eq!(resumed.puzzle().current_entry(), "br");
    assert_eq!(resumed.keyboard(), KeyFeedback::from_puzzle(&saved));
}

#[test]
fn test_used_words_survive_process_restart() {
    let storage = MemoryStorage::new();

    let answer = {
        let mut session = Session::restore_or_new(bank(), &storage, false);
        let answer = session.puzzle().answer().to_string();
        type_word(&mut session, &answer);
        session.submit().unwrap().unwrap();
        answer
    };

    let resumed = Session::restore_or_new(bank(), &storage, false);
    assert!(resumed.used_words().contains(&answer));
}

#[test]
fn test_shuffle_records_abandoned_answer() {
    let mut session = Session::restore_or_new(bank(), MemoryStorage::new(), false);
    let abandoned = session.puzzle().answer().to_string();

    let wrong = wrong_word(&session);
    type_word(&mut session, &wrong);
    session.submit().unwrap().unwrap();

    session.new_game();
    assert!(session.used_words().contains(&abandoned));
    assert_ne!(session.puzzle().answer(), abandoned);
}

#[test]
fn test_no_answer_repeats_within_a_cycle() {
    let bank = WordBank::from_str_data("crane\nslate\nbrain\n").unwrap();
    let mut session = Session::restore_or_new(bank.clone(), MemoryStorage::new(), false);

    let mut served = Vec::new();
    for _ in 0..bank.len() {
        let answer = session.puzzle().answer().to_string();
        assert!(!served.contains(&answer));
        type_word(&mut session, &answer);
        session.submit().unwrap().unwrap();
        served.push(answer);
        session.new_game();
    }
    // The cycle is complete: the history reset and any word may come back.
    assert!(session.used_words().is_empty());
}

struct FailingStorage;

impl Storage for FailingStorage {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&self, _key: &str, _blob: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}

#[test]
fn test_broken_storage_is_not_fatal() {
    let mut session = Session::restore_or_new(bank(), FailingStorage, false);
    let answer = session.puzzle().answer().to_string();

    type_word(&mut session, &answer);
    let reveal = session.submit().unwrap().unwrap();
    assert_eq!(reveal.status, Status::Won);

    session.new_game();
    assert_eq!(session.puzzle().status(), Status::InProgress);
}

#[test]
fn test_corrupt_snapshot_starts_fresh_game() {
    let storage = MemoryStorage::new();
    storage.save(STATE_KEY, "{\"answer\": 42}").unwrap();

    let session = Session::restore_or_new(bank(), &storage, false);
    assert_eq!(session.puzzle().turn_index(), 0);
    assert!(session.bank().contains(session.puzzle().answer()));
}

#[test]
fn test_plain_interface_full_game() {
    let bank = WordBank::from_str_data("crane\n").unwrap();
    let mut session = Session::restore_or_new(bank, MemoryStorage::new(), false);

    // Short guess, unknown word, then the answer, then quit.
    let mut reader = Cursor::new("cra\nzzzzz\ncrane\nexit\n");
    run_plain(&mut session, &mut reader);

    assert_eq!(session.puzzle().status(), Status::Won);
    assert_eq!(session.puzzle().turn_index(), 1);
}

#[test]
fn test_plain_interface_shuffle_mid_game() {
    let bank = WordBank::from_str_data("crane\nslate\n").unwrap();
    let mut session = Session::restore_or_new(bank, MemoryStorage::new(), false);

    let wrong = wrong_word(&session);
    let input = format!("{wrong}\nshuffle\nexit\n");
    let mut reader = Cursor::new(input);
    run_plain(&mut session, &mut reader);

    assert_eq!(session.puzzle().turn_index(), 0);
    assert_eq!(session.used_words().len(), 1);
}

#[test]
fn test_evaluation_reachable_through_session_history() {
    let bank = WordBank::from_str_data("abcde\neabcd\n").unwrap();
    let storage = MemoryStorage::new();
    storage
        .save(
            STATE_KEY,
            "{\"answer\":\"abcde\",\"guesses\":[],\"evaluations\":[],\
             \"current_entry\":\"\",\"status\":\"in_progress\"}",
        )
        .unwrap();

    let mut session = Session::restore_or_new(bank, &storage, false);
    assert_eq!(session.puzzle().answer(), "abcde");

    type_word(&mut session, "eabcd");
    let reveal = session.submit().unwrap().unwrap();
    assert_eq!(reveal.evaluation, vec![Mark::Present; WORD_LENGTH]);
}
