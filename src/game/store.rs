//! Persistence behind the engine
//!
//! The engine only talks to a [`Store`]; the file-backed store is used by the
//! binaries and the in-memory store by tests and dry runs.

use super::config::StoragePaths;
use super::high_score::{load_high_score, save_high_score};
use crate::error::GameError;
use crate::wordbank::loader::{load_from_file, save_to_file};
use crate::wordbank::{WordBank, default_bank};

/// Load/save access to the word bank and the high score
pub trait Store {
    /// Load the word bank, creating it from defaults if it does not exist yet
    ///
    /// # Errors
    /// Returns an error for unreadable or corrupt data.
    fn load_bank(&mut self) -> Result<WordBank, GameError>;

    /// Replace the stored word bank
    ///
    /// # Errors
    /// Returns an error if the bank cannot be written.
    fn save_bank(&mut self, bank: &WordBank) -> Result<(), GameError>;

    /// Load the high score, 0 if none was stored
    ///
    /// # Errors
    /// Returns an error for unreadable or corrupt data.
    fn load_high_score(&mut self) -> Result<u32, GameError>;

    /// Replace the stored high score
    ///
    /// # Errors
    /// Returns an error if the value cannot be written.
    fn save_high_score(&mut self, value: u32) -> Result<(), GameError>;
}

/// Store backed by a JSON word bank and a text high-score file
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    paths: StoragePaths,
}

impl FileStore {
    #[must_use]
    pub const fn new(paths: StoragePaths) -> Self {
        Self { paths }
    }
}

impl Store for FileStore {
    fn load_bank(&mut self) -> Result<WordBank, GameError> {
        load_from_file(&self.paths.words)
    }

    fn save_bank(&mut self, bank: &WordBank) -> Result<(), GameError> {
        save_to_file(bank, &self.paths.words)
    }

    fn load_high_score(&mut self) -> Result<u32, GameError> {
        load_high_score(&self.paths.high_score)
    }

    fn save_high_score(&mut self, value: u32) -> Result<(), GameError> {
        save_high_score(&self.paths.high_score, value)
    }
}

/// Store that keeps everything in memory
///
/// Counts writes so tests can check that saves happen only when needed.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub bank: Option<WordBank>,
    pub high_score: Option<u32>,
    pub bank_writes: usize,
    pub high_score_writes: usize,
}

impl MemoryStore {
    /// A store preloaded with `bank`
    #[must_use]
    pub fn with_bank(bank: WordBank) -> Self {
        Self {
            bank: Some(bank),
            ..Self::default()
        }
    }
}

impl Store for MemoryStore {
    fn load_bank(&mut self) -> Result<WordBank, GameError> {
        if let Some(bank) = &self.bank {
            return Ok(bank.clone());
        }
        let bank = default_bank();
        self.save_bank(&bank)?;
        Ok(bank)
    }

    fn save_bank(&mut self, bank: &WordBank) -> Result<(), GameError> {
        self.bank = Some(bank.clone());
        self.bank_writes += 1;
        Ok(())
    }

    fn load_high_score(&mut self) -> Result<u32, GameError> {
        Ok(self.high_score.unwrap_or(0))
    }

    fn save_high_score(&mut self, value: u32) -> Result<(), GameError> {
        self.high_score = Some(value);
        self.high_score_writes += 1;
        Ok(())
    }
}
