//! Error types for the engine and its stores

use crate::wordbank::BankError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`RoundEngine`](crate::game::RoundEngine) and the stores behind it
#[derive(Debug, Error)]
pub enum GameError {
    /// Word bank input failed validation
    #[error(transparent)]
    Bank(#[from] BankError),

    /// The stored word bank is not valid JSON of the expected shape
    #[error("word bank at {} is malformed: {source}", path.display())]
    MalformedWordBank {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The stored word bank parsed but breaks the bank invariants
    #[error("word bank at {} is invalid: {source}", path.display())]
    InvalidWordBank {
        path: PathBuf,
        #[source]
        source: BankError,
    },

    /// The stored high score is not a non-negative integer
    #[error("high score at {} is corrupt: {content:?}", path.display())]
    CorruptHighScore { path: PathBuf, content: String },

    /// Reading or writing a store failed
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A guess that is not a letter
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    /// A guess on a finished round while auto-advance is off
    #[error("the round is over; start the next round first")]
    RoundOver,
}

impl GameError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
