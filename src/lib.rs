// Library interface for practice-wordle
// This allows integration tests to access internal modules

pub mod cli;
pub mod evaluation;
pub mod keyboard;
pub mod logging;
pub mod picker;
pub mod puzzle;
pub mod session;
pub mod storage;
pub mod tui;
pub mod wordbank;

// Re-export the core types for easier testing
pub use evaluation::{Mark, WORD_LENGTH, evaluate};
pub use keyboard::KeyFeedback;
pub use picker::{UsedWords, pick_answer};
pub use puzzle::{MAX_GUESSES, PuzzleState, Reveal, Status, SubmitError};
pub use session::Session;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use wordbank::{EMBEDDED_WORDBANK, WordBank, WordBankError};
