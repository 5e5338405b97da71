//! Category → words mapping

use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation failures for word bank contents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("category name must not be empty")]
    EmptyCategoryName,

    #[error("no words given")]
    NoWords,

    #[error("word '{0}' must contain only letters")]
    InvalidWord(String),

    #[error("category '{0}' has no words")]
    EmptyCategory(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("word bank has no categories")]
    NoCategories,
}

/// Words to guess, grouped by category
///
/// Serialises as a plain JSON object of `category: [words]`. Every category
/// holds at least one lowercase alphabetic word; the only way in is
/// [`WordBank::from_categories`], which enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordBank {
    categories: BTreeMap<String, Vec<String>>,
}

/// Trim and lowercase a word, rejecting anything that is not purely letters
///
/// Returns `Ok(None)` for blank input.
///
/// # Errors
/// Returns [`BankError::InvalidWord`] if the word contains non-alphabetic characters.
pub fn normalize_word(raw: &str) -> Result<Option<String>, BankError> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() {
        return Ok(None);
    }
    if !word.chars().all(char::is_alphabetic) {
        return Err(BankError::InvalidWord(word));
    }
    Ok(Some(word))
}

/// Split comma-separated user input into raw word entries
///
/// # Examples
/// ```
/// use gallows::wordbank::split_word_list;
///
/// assert_eq!(split_word_list("тигр, слон,,жираф"), vec!["тигр", " слон", "", "жираф"]);
/// ```
#[must_use]
pub fn split_word_list(input: &str) -> Vec<&str> {
    input.split(',').collect()
}

impl WordBank {
    /// Build a bank from raw category data, normalising every word
    ///
    /// Category names are trimmed; entries whose names collide after trimming
    /// are merged in order, skipping repeated words.
    ///
    /// # Errors
    /// Returns a [`BankError`] if the bank is empty, a category name is blank,
    /// a category has no words, or a word contains non-letters.
    pub fn from_categories<I, C, W, S>(categories: I) -> Result<Self, BankError>
    where
        I: IntoIterator<Item = (C, W)>,
        C: Into<String>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = BTreeMap::new();
        for (name, words) in categories {
            let name: String = name.into();
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(BankError::EmptyCategoryName);
            }

            let mut normalized: Vec<String> = Vec::new();
            for raw in words {
                if let Some(word) = normalize_word(raw.as_ref())? {
                    if !normalized.contains(&word) {
                        normalized.push(word);
                    }
                }
            }
            if normalized.is_empty() {
                return Err(BankError::EmptyCategory(name));
            }

            // Names that only differ by surrounding whitespace share one category
            let existing: &mut Vec<String> = bank.entry(name).or_default();
            for word in normalized {
                if !existing.contains(&word) {
                    existing.push(word);
                }
            }
        }

        if bank.is_empty() {
            return Err(BankError::NoCategories);
        }
        Ok(Self { categories: bank })
    }

    /// Category names in sorted order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Words of a category, in insertion order
    #[must_use]
    pub fn words(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Every word across all categories
    pub fn all_words(&self) -> impl Iterator<Item = &str> {
        self.categories.values().flatten().map(String::as_str)
    }

    /// Append words to a category, creating it if needed
    ///
    /// Each entry is trimmed and lowercased; blank entries are dropped and
    /// words already present in the category are skipped. Nothing is changed
    /// if any entry is rejected. Returns the number of words actually added.
    ///
    /// # Errors
    /// Returns [`BankError::EmptyCategoryName`] for a blank category,
    /// [`BankError::NoWords`] if no word remains after normalisation, or
    /// [`BankError::InvalidWord`] for an entry containing non-letters.
    pub fn add_words<S: AsRef<str>>(
        &mut self,
        category: &str,
        words: &[S],
    ) -> Result<usize, BankError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(BankError::EmptyCategoryName);
        }

        let mut incoming: Vec<String> = Vec::new();
        for raw in words {
            if let Some(word) = normalize_word(raw.as_ref())? {
                incoming.push(word);
            }
        }
        if incoming.is_empty() {
            return Err(BankError::NoWords);
        }

        let entry = self.categories.entry(category.to_string()).or_default();
        let before = entry.len();
        for word in incoming {
            if !entry.contains(&word) {
                entry.push(word);
            }
        }
        Ok(entry.len() - before)
    }

    /// Pick a category uniformly at random
    ///
    /// # Errors
    /// Returns [`BankError::NoCategories`] for an empty bank.
    pub fn choose_category<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, BankError> {
        self.categories()
            .choose(rng)
            .ok_or(BankError::NoCategories)
    }

    /// Pick a word from `category` uniformly at random
    ///
    /// # Errors
    /// Returns [`BankError::UnknownCategory`] if the category does not exist, or
    /// [`BankError::EmptyCategory`] if it has no words.
    pub fn choose_word<R: Rng + ?Sized>(
        &self,
        category: &str,
        rng: &mut R,
    ) -> Result<&str, BankError> {
        let words = self
            .words(category)
            .ok_or_else(|| BankError::UnknownCategory(category.to_string()))?;
        words
            .choose(rng)
            .map(String::as_str)
            .ok_or_else(|| BankError::EmptyCategory(category.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_bank() -> WordBank {
        WordBank::from_categories([
            ("Животные", vec!["тигр", "Слон"]),
            ("Города", vec!["москва"]),
        ])
        .unwrap()
    }

    #[test]
    fn from_categories_normalizes_words() {
        let bank = sample_bank();
        assert_eq!(bank.words("Животные").unwrap(), &["тигр", "слон"]);
        assert_eq!(bank.category_count(), 2);
        assert_eq!(bank.total_words(), 3);
    }

    #[test]
    fn from_categories_rejects_empty_category() {
        let err = WordBank::from_categories([("Пусто", Vec::<&str>::new())]).unwrap_err();
        assert_eq!(err, BankError::EmptyCategory("Пусто".to_string()));
    }

    #[test]
    fn from_categories_merges_names_equal_after_trim() {
        let bank = WordBank::from_categories([
            ("Животные", vec!["кот", "лев"]),
            (" Животные ", vec!["Лев", "тигр"]),
        ])
        .unwrap();

        assert_eq!(bank.category_count(), 1);
        assert_eq!(bank.words("Животные").unwrap(), &["кот", "лев", "тигр"]);
    }

    #[test]
    fn from_categories_rejects_empty_bank() {
        let err = WordBank::from_categories(Vec::<(&str, Vec<&str>)>::new()).unwrap_err();
        assert_eq!(err, BankError::NoCategories);
    }

    #[test]
    fn normalize_word_trims_and_lowercases() {
        assert_eq!(normalize_word("  ЖИРАФ "), Ok(Some("жираф".to_string())));
        assert_eq!(normalize_word("   "), Ok(None));
        assert_eq!(
            normalize_word("сайт.ру"),
            Err(BankError::InvalidWord("сайт.ру".to_string()))
        );
    }

    #[test]
    fn add_words_appends_to_existing_category() {
        let mut bank = sample_bank();
        let added = bank.add_words("Животные", &["жираф", " ЗЕБРА "]).unwrap();

        assert_eq!(added, 2);
        assert_eq!(
            bank.words("Животные").unwrap(),
            &["тигр", "слон", "жираф", "зебра"]
        );
    }

    #[test]
    fn add_words_creates_category() {
        let mut bank = sample_bank();
        bank.add_words(" Фрукты ", &["яблоко"]).unwrap();

        assert!(bank.contains_category("Фрукты"));
        assert_eq!(bank.words("Фрукты").unwrap(), &["яблоко"]);
    }

    #[test]
    fn add_words_skips_duplicates() {
        let mut bank = sample_bank();
        let added = bank.add_words("Города", &["МОСКВА", "париж"]).unwrap();
        assert_eq!(added, 1);
        assert_eq!(bank.words("Города").unwrap(), &["москва", "париж"]);
    }

    #[test]
    fn add_words_rejects_blank_category() {
        let mut bank = sample_bank();
        let before = bank.clone();
        assert_eq!(
            bank.add_words("  ", &["кот"]),
            Err(BankError::EmptyCategoryName)
        );
        assert_eq!(bank, before);
    }

    #[test]
    fn add_words_rejects_blank_word_list() {
        let mut bank = sample_bank();
        let before = bank.clone();
        assert_eq!(
            bank.add_words("Животные", &split_word_list(" , ,")),
            Err(BankError::NoWords)
        );
        assert_eq!(bank, before);
    }

    #[test]
    fn add_words_is_all_or_nothing() {
        let mut bank = sample_bank();
        let before = bank.clone();
        assert!(bank.add_words("Животные", &["жираф", "к0т"]).is_err());
        assert_eq!(bank, before);
    }

    #[test]
    fn choose_word_stays_in_category() {
        let bank = sample_bank();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = bank.choose_word("Животные", &mut rng).unwrap();
            assert!(["тигр", "слон"].contains(&word));
        }
    }

    #[test]
    fn choose_word_unknown_category() {
        let bank = sample_bank();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            bank.choose_word("Планеты", &mut rng),
            Err(BankError::UnknownCategory("Планеты".to_string()))
        );
    }

    #[test]
    fn choose_category_covers_all_categories() {
        let bank = sample_bank();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..100 {
            seen.insert(bank.choose_category(&mut rng).unwrap().to_string());
        }
        assert_eq!(seen.len(), 2);
    }
}
