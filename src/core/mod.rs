//! Core domain types for a hangman round
//!
//! This module contains the pure game rules: round progression, scoring and the
//! gallows segment order. Nothing here touches the filesystem or the terminal.

mod alphabet;
mod gallows;
mod round;
mod score;

pub use alphabet::{CYRILLIC, keyboard_for};
pub use gallows::Segment;
pub use round::{GuessOutcome, MAX_ATTEMPTS, PLACEHOLDER, RoundState};
pub use score::{LOSS_PENALTY, ScoreState, WIN_REWARD};
