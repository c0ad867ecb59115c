use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const STATE_KEY: &str = "game_state";
pub const USED_WORDS_KEY: &str = "used_words";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage write failed: {0}")]
    Io(#[from] io::Error),
}

/// Key-value persistence port. Failures are non-fatal to the game: callers
/// log and continue in memory.
pub trait Storage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        (**self).save(key, blob)
    }
}

/// One `<key>.json` file per key under the per-user data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Storage under `<data dir>/practice-wordle`, or `None` when the
    /// platform exposes no data directory.
    pub fn in_user_data() -> Option<Self> {
        let dir = dirs::data_local_dir()?.join("practice-wordle");
        Self::new(dir).ok()
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), blob)?;
        Ok(())
    }
}

/// In-process storage: the `--no-save` fallback and the test double.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
