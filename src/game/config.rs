//! Engine and storage configuration

use std::path::PathBuf;

/// Default location of the word bank
pub const DEFAULT_WORDS_PATH: &str = "words.json";

/// Default location of the high score
pub const DEFAULT_HIGH_SCORE_PATH: &str = "highscore.txt";

/// Where the file store keeps its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub words: PathBuf,
    pub high_score: PathBuf,
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self {
            words: PathBuf::from(DEFAULT_WORDS_PATH),
            high_score: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
        }
    }
}

/// Behaviour switches for [`RoundEngine`](super::RoundEngine)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Start the next round as soon as one is won or lost
    pub auto_advance: bool,
    /// Category for the first round; random when `None`
    pub initial_category: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            auto_advance: true,
            initial_category: None,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_auto_advance(mut self, auto_advance: bool) -> Self {
        self.auto_advance = auto_advance;
        self
    }

    #[must_use]
    pub fn with_initial_category(mut self, category: Option<String>) -> Self {
        self.initial_category = category;
        self
    }
}
