//! Built-in word bank
//!
//! Written out to disk the first time the game runs without a word bank file.

use super::WordBank;

/// Default categories and their words
pub const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Животные",
        &[
            "тигр", "слон", "жираф", "кенгуру", "кот", "собака", "конь", "гиена", "лев", "зебра",
        ],
    ),
    (
        "Города",
        &[
            "москва", "париж", "токио", "берлин", "пермь", "дубай", "мадрид", "рим", "лондон",
        ],
    ),
    (
        "Технологии",
        &[
            "компьютер",
            "смартфон",
            "интернет",
            "сайт",
            "приложение",
            "система",
        ],
    ),
];

/// Build the default bank
///
/// # Panics
/// Will not panic - the constants above are non-empty lowercase words.
#[must_use]
pub fn default_bank() -> WordBank {
    WordBank::from_categories(
        DEFAULT_CATEGORIES
            .iter()
            .map(|&(name, words)| (name, words.iter().copied())),
    )
    .expect("built-in word bank is valid")
}
