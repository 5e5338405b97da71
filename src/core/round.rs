//! Round state for a single hangman word
//!
//! A round tracks the secret word, the letters guessed so far and the number of
//! wrong guesses. It knows nothing about scoring, persistence or rendering.

use rustc_hash::FxHashSet;
use std::fmt;

/// Number of wrong guesses that loses a round
pub const MAX_ATTEMPTS: u8 = 6;

/// Marker shown in place of a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Result of submitting a letter to a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was guessed before; nothing changed
    AlreadyGuessed,
    /// The round continues
    InProgress,
    /// Every letter of the secret word has been revealed
    Won,
    /// All attempts are used up
    Lost,
}

impl GuessOutcome {
    /// Whether this outcome ends the round
    #[inline]
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyGuessed => write!(f, "already guessed"),
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// State of one round
///
/// `attempts_used` only grows when a letter that was not guessed before turns
/// out to be absent from the secret word, so it never exceeds [`MAX_ATTEMPTS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    category: String,
    secret_word: String,
    guessed_letters: FxHashSet<char>,
    attempts_used: u8,
}

impl RoundState {
    /// Create a fresh round for `secret_word` drawn from `category`
    ///
    /// The secret word is lowercased so it matches lowercased guesses.
    ///
    /// # Examples
    /// ```
    /// use gallows::core::{RoundState, MAX_ATTEMPTS};
    ///
    /// let round = RoundState::new("Животные", "КОТ");
    /// assert_eq!(round.secret_word(), "кот");
    /// assert_eq!(round.attempts_remaining(), MAX_ATTEMPTS);
    /// ```
    pub fn new(category: impl Into<String>, secret_word: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            secret_word: secret_word.into().to_lowercase(),
            guessed_letters: FxHashSet::default(),
            attempts_used: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u8 {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        MAX_ATTEMPTS - self.attempts_used
    }

    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    /// Whether `letter` occurs in the secret word
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.secret_word.contains(letter)
    }

    /// Guessed letters in alphabetical order
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed_letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Guessed letters that are not in the secret word, in alphabetical order
    #[must_use]
    pub fn missed_letters(&self) -> Vec<char> {
        self.guessed_letters()
            .into_iter()
            .filter(|&c| !self.contains(c))
            .collect()
    }

    /// Submit a letter
    ///
    /// The letter is expected to be lowercase already; the engine normalises
    /// user input before calling this. Guessing on a finished round changes
    /// nothing and reports the final outcome again.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let status = self.status();
        if status.is_final() {
            return status;
        }

        if !self.guessed_letters.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        if !self.contains(letter) {
            self.attempts_used += 1;
        }

        self.status()
    }

    /// Current outcome: `Lost` takes precedence over `Won`
    #[must_use]
    pub fn status(&self) -> GuessOutcome {
        if self.attempts_used >= MAX_ATTEMPTS {
            GuessOutcome::Lost
        } else if self.is_word_complete() {
            GuessOutcome::Won
        } else {
            GuessOutcome::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status().is_final()
    }

    fn is_word_complete(&self) -> bool {
        self.secret_word
            .chars()
            .all(|c| self.guessed_letters.contains(&c))
    }

    /// Project the secret word for display
    ///
    /// Guessed characters are shown, the rest become [`PLACEHOLDER`].
    #[must_use]
    pub fn render_word(&self) -> Vec<char> {
        self.secret_word
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&c) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// The rendered word with a space between characters
    #[must_use]
    pub fn masked_word(&self) -> String {
        let mut out = String::with_capacity(self.secret_word.len() * 2);
        for (i, c) in self.render_word().into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}
