//! Round engine
//!
//! Owns the word bank, the current round, the score and the session
//! statistics. UI adapters drive it with [`RoundEngine::guess_letter`] and
//! [`RoundEngine::start_round`] and render what the query methods return.

use super::config::EngineConfig;
use super::store::Store;
use crate::core::{GuessOutcome, RoundState, ScoreState, keyboard_for};
use crate::error::GameError;
use crate::wordbank::WordBank;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Rounds won and lost since the engine was opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_won: u32,
    pub rounds_lost: u32,
}

impl Statistics {
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_won + self.rounds_lost
    }

    /// Share of won rounds in percent, 0 before the first round ends
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played() == 0 {
            0.0
        } else {
            f64::from(self.rounds_won) / f64::from(self.rounds_played()) * 100.0
        }
    }
}

/// What happened to a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    /// The normalised letter that was applied
    pub letter: char,
    pub outcome: GuessOutcome,
    /// Secret word of the round the guess was applied to
    pub word: String,
    /// Category of the round the guess was applied to
    pub category: String,
    /// Score after the guess
    pub score: u32,
    pub high_score: u32,
    /// The guess raised the high score
    pub new_high_score: bool,
    /// A fresh round replaced the finished one
    pub next_round_started: bool,
}

/// Authoritative game state for a hangman session
pub struct RoundEngine<S: Store, R: Rng = StdRng> {
    store: S,
    rng: R,
    config: EngineConfig,
    bank: WordBank,
    score: ScoreState,
    round: RoundState,
    stats: Statistics,
}

impl<S: Store> RoundEngine<S, StdRng> {
    /// Load the bank and high score from `store` and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read, holds corrupt data, or
    /// `config.initial_category` names a category that does not exist.
    pub fn open(store: S, config: EngineConfig) -> Result<Self, GameError> {
        Self::with_rng(store, config, StdRng::from_os_rng())
    }
}

impl<S: Store, R: Rng> RoundEngine<S, R> {
    /// Like [`RoundEngine::open`] with a caller-provided random source
    ///
    /// # Errors
    ///
    /// See [`RoundEngine::open`].
    pub fn with_rng(mut store: S, config: EngineConfig, mut rng: R) -> Result<Self, GameError> {
        let bank = store.load_bank()?;
        let high_score = store.load_high_score()?;
        let round = pick_round(&bank, config.initial_category.as_deref(), &mut rng)?;

        info!(
            category = round.category(),
            high_score,
            categories = bank.category_count(),
            "engine opened"
        );

        Ok(Self {
            store,
            rng,
            config,
            bank,
            score: ScoreState::with_high_score(high_score),
            round,
            stats: Statistics::default(),
        })
    }

    /// Start a new round
    ///
    /// With `None` the category is chosen at random; otherwise the named
    /// category is used. Guesses and attempts are reset.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Bank`] if the category does not exist.
    pub fn start_round(&mut self, category: Option<&str>) -> Result<&RoundState, GameError> {
        self.round = pick_round(&self.bank, category, &mut self.rng)?;
        info!(
            category = self.round.category(),
            letters = self.round.secret_word().chars().count(),
            "round started"
        );
        Ok(&self.round)
    }

    /// Start a new round in the current category
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Bank`] if the category has vanished from the bank.
    pub fn next_round(&mut self) -> Result<&RoundState, GameError> {
        let category = self.round.category().to_string();
        self.start_round(Some(&category))
    }

    /// Submit a guessed letter
    ///
    /// The letter is lowercased first. A win adds to the score and saves a new
    /// high score; a loss takes points away. With auto-advance on, a finished
    /// round is replaced by a new one in the same category before returning.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLetter`] for non-letters,
    /// [`GameError::RoundOver`] when guessing on a finished round with
    /// auto-advance off, or a store error if saving the high score fails.
    pub fn guess_letter(&mut self, input: char) -> Result<GuessReport, GameError> {
        let letter = normalize_letter(input)?;
        if self.round.is_finished() {
            return Err(GameError::RoundOver);
        }

        let outcome = self.round.guess(letter);
        debug!(
            %letter,
            %outcome,
            attempts_used = self.round.attempts_used(),
            "guess applied"
        );

        let mut new_high_score = false;
        let saved = match outcome {
            GuessOutcome::Won => {
                self.stats.rounds_won += 1;
                new_high_score = self.score.record_win();
                info!(
                    word = self.round.secret_word(),
                    score = self.score.current(),
                    "round won"
                );
                if new_high_score {
                    self.store.save_high_score(self.score.high())
                } else {
                    Ok(())
                }
            }
            GuessOutcome::Lost => {
                self.stats.rounds_lost += 1;
                self.score.record_loss();
                info!(
                    word = self.round.secret_word(),
                    score = self.score.current(),
                    "round lost"
                );
                Ok(())
            }
            GuessOutcome::InProgress | GuessOutcome::AlreadyGuessed => Ok(()),
        };

        let report = GuessReport {
            letter,
            outcome,
            word: self.round.secret_word().to_string(),
            category: self.round.category().to_string(),
            score: self.score.current(),
            high_score: self.score.high(),
            new_high_score,
            next_round_started: outcome.is_final() && self.config.auto_advance,
        };

        if report.next_round_started {
            self.next_round()?;
        }
        saved?;

        Ok(report)
    }

    /// Add words to a category and save the bank
    ///
    /// The in-memory bank only changes once the save succeeded. Returns the
    /// number of words that were new to the category.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Bank`] for a blank category, no usable words or a
    /// word with non-letters, or a store error if saving fails.
    pub fn add_words<W: AsRef<str>>(
        &mut self,
        category: &str,
        words: &[W],
    ) -> Result<usize, GameError> {
        let mut bank = self.bank.clone();
        let added = bank.add_words(category, words)?;
        self.store.save_bank(&bank)?;
        self.bank = bank;

        info!(category = category.trim(), added, "words added");
        Ok(added)
    }

    /// The round in play
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn category(&self) -> &str {
        self.round.category()
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Category names in sorted order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.bank.categories()
    }

    /// Secret word with unguessed letters replaced by placeholders
    #[must_use]
    pub fn render_word(&self) -> Vec<char> {
        self.round.render_word()
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.round.attempts_remaining()
    }

    #[must_use]
    pub const fn current_score(&self) -> u32 {
        self.score.current()
    }

    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.score.high()
    }

    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Letters for the on-screen keyboard
    #[must_use]
    pub fn keyboard(&self) -> Vec<char> {
        keyboard_for(self.bank.all_words())
    }
}

fn pick_round<R: Rng + ?Sized>(
    bank: &WordBank,
    category: Option<&str>,
    rng: &mut R,
) -> Result<RoundState, GameError> {
    let category = match category {
        Some(name) => name,
        None => bank.choose_category(rng)?,
    };
    let word = bank.choose_word(category, rng)?;
    debug!(category, word, "secret word chosen");
    Ok(RoundState::new(category, word))
}

/// Lowercase a guessed character
///
/// Non-letters and letters whose lowercase form is more than one character
/// are rejected.
fn normalize_letter(input: char) -> Result<char, GameError> {
    if !input.is_alphabetic() {
        return Err(GameError::InvalidLetter(input));
    }
    let mut lower = input.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(GameError::InvalidLetter(input)),
    }
}
