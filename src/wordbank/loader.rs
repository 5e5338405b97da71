//! Word bank loading and saving
//!
//! The bank is stored as pretty-printed UTF-8 JSON so it can be edited by hand.

use super::{WordBank, default_bank};
use crate::error::GameError;
use crate::persist::replace_file;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Load the word bank from `path`
///
/// A missing file is not an error: the built-in bank is written to `path` and
/// returned. Words read from disk are normalised the same way as added words.
///
/// # Errors
///
/// Returns [`GameError::MalformedWordBank`] if the file is not a JSON object of
/// string arrays, [`GameError::InvalidWordBank`] if it breaks the bank
/// invariants, and [`GameError::Io`] if the file cannot be read or the
/// defaults cannot be written.
///
/// # Examples
/// ```no_run
/// use gallows::wordbank::loader::load_from_file;
///
/// let bank = load_from_file("words.json").unwrap();
/// println!("Loaded {} categories", bank.category_count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, GameError> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "word bank not found, writing defaults");
            let bank = default_bank();
            save_to_file(&bank, path)?;
            return Ok(bank);
        }
        Err(e) => return Err(GameError::io(path, e)),
    };

    let bank = parse(&content).map_err(|e| match e {
        ParseError::Json(source) => GameError::MalformedWordBank {
            path: path.to_path_buf(),
            source,
        },
        ParseError::Bank(source) => GameError::InvalidWordBank {
            path: path.to_path_buf(),
            source,
        },
    })?;

    info!(
        path = %path.display(),
        categories = bank.category_count(),
        words = bank.total_words(),
        "loaded word bank"
    );
    Ok(bank)
}

/// Write the whole bank to `path`, replacing any previous copy
///
/// # Errors
///
/// Returns [`GameError::Io`] if the file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(bank: &WordBank, path: P) -> Result<(), GameError> {
    let path = path.as_ref();
    let mut json = to_json(bank);
    json.push('\n');
    replace_file(path, json.as_bytes())?;
    info!(path = %path.display(), categories = bank.category_count(), "saved word bank");
    Ok(())
}

/// Render the bank as pretty-printed JSON
///
/// # Panics
/// Will not panic - a map of strings to string lists always serialises.
#[must_use]
pub fn to_json(bank: &WordBank) -> String {
    serde_json::to_string_pretty(bank).expect("word bank is always serialisable")
}

#[derive(Debug)]
enum ParseError {
    Json(serde_json::Error),
    Bank(super::BankError),
}

fn parse(content: &str) -> Result<WordBank, ParseError> {
    let raw: BTreeMap<String, Vec<String>> =
        serde_json::from_str(content).map_err(ParseError::Json)?;
    WordBank::from_categories(raw).map_err(ParseError::Bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::BankError;

    #[test]
    fn parse_accepts_original_format() {
        let bank = parse(r#"{"Животные": ["тигр", "Слон"], "Города": ["рим"]}"#).unwrap();
        assert_eq!(bank.category_count(), 2);
        assert_eq!(bank.words("Животные").unwrap(), &["тигр", "слон"]);
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        assert!(matches!(
            parse(r#"{"Животные": "тигр"}"#),
            Err(ParseError::Json(_))
        ));
        assert!(matches!(parse("not json"), Err(ParseError::Json(_))));
    }

    #[test]
    fn parse_rejects_empty_category() {
        assert!(matches!(
            parse(r#"{"Животные": []}"#),
            Err(ParseError::Bank(BankError::EmptyCategory(_)))
        ));
    }

    #[test]
    fn parse_rejects_empty_bank() {
        assert!(matches!(
            parse("{}"),
            Err(ParseError::Bank(BankError::NoCategories))
        ));
    }

    #[test]
    fn json_keeps_cyrillic_readable() {
        let json = to_json(&default_bank());
        assert!(json.contains("\"Животные\""));
        assert!(json.contains("\"кенгуру\""));
    }

    #[test]
    fn json_round_trips_through_parse() {
        let bank = default_bank();
        let reparsed = parse(&to_json(&bank)).unwrap();
        assert_eq!(reparsed, bank);
    }
}
