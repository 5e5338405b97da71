//! Word bank for hangman rounds
//!
//! Categories of candidate words, the built-in defaults, and the JSON store.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{BankError, WordBank, normalize_word, split_word_list};
pub use embedded::{DEFAULT_CATEGORIES, default_bank};
