//! Game session: the round engine and the stores it persists to

pub mod config;
mod engine;
pub mod high_score;
pub mod store;

pub use config::{EngineConfig, StoragePaths};
pub use engine::{GuessReport, RoundEngine, Statistics};
pub use store::{FileStore, MemoryStore, Store};
