use crate::keyboard::KeyFeedback;
use crate::picker::{UsedWords, pick_answer};
use crate::puzzle::{PuzzleState, Reveal, SubmitError};
use crate::storage::{STATE_KEY, Storage, USED_WORDS_KEY};
use crate::wordbank::WordBank;

/// The controller owning the single active puzzle, the used-word history and
/// the storage port. Every state-mutating intent is followed by a synchronous
/// save; storage failures are logged and the session keeps running in memory.
pub struct Session<S: Storage> {
    bank: WordBank,
    used: UsedWords,
    puzzle: PuzzleState,
    storage: S,
}

impl<S: Storage> Session<S> {
    /// Resume the saved puzzle when a coherent snapshot exists, otherwise
    /// start a fresh game. `fresh` skips the snapshot entirely.
    pub fn restore_or_new(bank: WordBank, storage: S, fresh: bool) -> Self {
        let used = Self::load_used(&storage);
        let restored = if fresh {
            None
        } else {
            Self::load_puzzle(&storage, &bank)
        };

        match restored {
            Some(puzzle) => {
                log::info!("resumed saved game at turn {}", puzzle.turn_index());
                Self {
                    bank,
                    used,
                    puzzle,
                    storage,
                }
            }
            None => {
                let puzzle = PuzzleState::new(pick_answer(&bank, &used));
                let session = Self {
                    bank,
                    used,
                    puzzle,
                    storage,
                };
                session.save_puzzle();
                session
            }
        }
    }

    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn used_words(&self) -> &UsedWords {
        &self.used
    }

    /// Keyboard coloring, rebuilt from the full guess history.
    pub fn keyboard(&self) -> KeyFeedback {
        KeyFeedback::from_puzzle(&self.puzzle)
    }

    pub fn append_letter(&mut self, ch: char) {
        self.puzzle.append_letter(ch);
        self.save_puzzle();
    }

    pub fn delete_letter(&mut self) {
        self.puzzle.delete_letter();
        self.save_puzzle();
    }

    /// Submit the in-progress entry. `Ok(None)` when the puzzle is already
    /// over (a defined no-op, not an error). On a terminal reveal the answer
    /// is recorded into the used-word history before the snapshot is saved.
    pub fn submit(&mut self) -> Result<Option<Reveal>, SubmitError> {
        if self.puzzle.is_over() {
            return Ok(None);
        }
        let reveal = self.puzzle.submit(&self.bank)?;
        if reveal.status.is_terminal() {
            self.used.record(self.puzzle.answer(), self.bank.len());
            self.save_used();
        }
        self.save_puzzle();
        Ok(Some(reveal))
    }

    /// Replace the puzzle with a freshly drawn answer. An abandoned
    /// mid-game answer (in progress, at least one submitted guess) is
    /// recorded into the history before the draw, so it cannot be re-served
    /// immediately. `next` and `shuffle` intents both land here.
    pub fn new_game(&mut self) {
        if !self.puzzle.is_over() && self.puzzle.turn_index() > 0 {
            self.used.record(self.puzzle.answer(), self.bank.len());
            self.save_used();
        }
        self.puzzle = PuzzleState::new(pick_answer(&self.bank, &self.used));
        self.save_puzzle();
    }

    fn load_puzzle(storage: &S, bank: &WordBank) -> Option<PuzzleState> {
        let blob = storage.load(STATE_KEY)?;
        match serde_json::from_str::<PuzzleState>(&blob) {
            Ok(puzzle) if puzzle.is_coherent(bank) => Some(puzzle),
            Ok(_) => {
                log::warn!("saved game no longer matches the word bank, starting fresh");
                None
            }
            Err(e) => {
                log::warn!("could not parse saved game, starting fresh: {e}");
                None
            }
        }
    }

    fn load_used(storage: &S) -> UsedWords {
        let Some(blob) = storage.load(USED_WORDS_KEY) else {
            return UsedWords::new();
        };
        serde_json::from_str(&blob).unwrap_or_else(|e| {
            log::warn!("could not parse used-word history, resetting: {e}");
            UsedWords::new()
        })
    }

    fn save_puzzle(&self) {
        match serde_json::to_string(&self.puzzle) {
            Ok(blob) => {
                if let Err(e) = self.storage.save(STATE_KEY, &blob) {
                    log::warn!("could not save game state, continuing in memory: {e}");
                }
            }
            Err(e) => log::warn!("could not serialize game state: {e}"),
        }
    }

    fn save_used(&self) {
        match serde_json::to_string(&self.used) {
            Ok(blob) => {
                if let Err(e) = self.storage.save(USED_WORDS_KEY, &blob) {
                    log::warn!("could not save used-word history: {e}");
                }
            }
            Err(e) => log::warn!("could not serialize used-word history: {e}"),
        }
    }
}
