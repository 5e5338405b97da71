//! Gallows
//!
//! A hangman word-guessing game with word categories, scoring and a persisted
//! word bank. The rules live in [`game::RoundEngine`]; the terminal front ends
//! only translate key presses into engine calls.
//!
//! # Quick Start
//!
//! ```rust
//! use gallows::core::GuessOutcome;
//! use gallows::game::{EngineConfig, MemoryStore, RoundEngine};
//! use gallows::wordbank::WordBank;
//!
//! let bank = WordBank::from_categories([("Животные", ["кот"])]).unwrap();
//! let mut engine = RoundEngine::open(MemoryStore::with_bank(bank), EngineConfig::default()).unwrap();
//!
//! for letter in ['к', 'о'] {
//!     engine.guess_letter(letter).unwrap();
//! }
//! let report = engine.guess_letter('т').unwrap();
//! assert_eq!(report.outcome, GuessOutcome::Won);
//! assert_eq!(engine.current_score(), 10);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Round engine and persistence
pub mod game;

// Word bank
pub mod wordbank;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

mod persist;

pub use error::GameError;
