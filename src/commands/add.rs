//! Add words to the bank from the command line

use crate::game::{RoundEngine, Store};
use crate::wordbank::split_word_list;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;

/// Outcome of an add command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddResult {
    pub category: String,
    pub added: usize,
    pub total: usize,
}

/// Add comma-separated `words` to `category` and save the bank
///
/// # Errors
///
/// Returns an error if validation fails or the bank cannot be saved.
pub fn add_words<S: Store, R: Rng>(
    engine: &mut RoundEngine<S, R>,
    category: &str,
    words: &str,
) -> Result<AddResult> {
    let added = engine
        .add_words(category, &split_word_list(words))
        .with_context(|| format!("could not add words to '{}'", category.trim()))?;

    let category = category.trim().to_string();
    let total = engine.bank().words(&category).map_or(0, <[String]>::len);
    Ok(AddResult {
        category,
        added,
        total,
    })
}

/// Print the result of an add command
pub fn print_add_result(result: &AddResult) {
    if result.added == 0 {
        println!(
            "{}",
            format!("All words are already in {}", result.category).yellow()
        );
    } else {
        println!(
            "{}",
            format!(
                "✓ Added {} word(s) to {} ({} total)",
                result.added, result.category, result.total
            )
            .green()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EngineConfig, MemoryStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine() -> RoundEngine<MemoryStore, StdRng> {
        RoundEngine::with_rng(
            MemoryStore::default(),
            EngineConfig::default(),
            StdRng::seed_from_u64(5),
        )
        .unwrap()
    }

    #[test]
    fn adds_to_new_category() {
        let mut engine = engine();
        let result = add_words(&mut engine, " Фрукты ", "яблоко, груша, ").unwrap();

        assert_eq!(
            result,
            AddResult {
                category: "Фрукты".to_string(),
                added: 2,
                total: 2,
            }
        );
    }

    #[test]
    fn reports_duplicates_as_zero_added() {
        let mut engine = engine();
        let result = add_words(&mut engine, "Животные", "кот, ТИГР").unwrap();
        assert_eq!(result.added, 0);
        assert_eq!(result.total, 10);
    }

    #[test]
    fn empty_input_is_an_error() {
        let mut engine = engine();
        assert!(add_words(&mut engine, "Животные", " , ").is_err());
        assert!(add_words(&mut engine, "", "кот").is_err());
    }
}
