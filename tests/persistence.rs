//! Integration tests for the on-disk word bank and high score.

use gallows::GameError;
use gallows::game::high_score::{load_high_score, save_high_score};
use gallows::game::{EngineConfig, FileStore, RoundEngine, StoragePaths, Store};
use gallows::wordbank::loader::{load_from_file, save_to_file};
use gallows::wordbank::{DEFAULT_CATEGORIES, WordBank, default_bank};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Temporary directory removed on drop
struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("gallows-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    fn join(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }

    fn paths(&self) -> StoragePaths {
        StoragePaths {
            words: self.join("words.json"),
            high_score: self.join("highscore.txt"),
        }
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn bank_survives_save_and_load() {
    let dir = TempDir::new();
    let path = dir.join("words.json");
    let bank = WordBank::from_categories([
        ("Животные", vec!["кот", "лев"]),
        ("Города", vec!["рим"]),
    ])
    .unwrap();

    save_to_file(&bank, &path).unwrap();
    let loaded = load_from_file(&path).unwrap();

    assert_eq!(loaded, bank);
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("Животные"), "file should keep Cyrillic unescaped");
}

#[test]
fn missing_bank_is_created_from_defaults() {
    let dir = TempDir::new();
    let path = dir.join("nested").join("words.json");

    let bank = load_from_file(&path).unwrap();

    assert_eq!(bank, default_bank());
    assert_eq!(bank.category_count(), DEFAULT_CATEGORIES.len());
    assert!(path.exists());
    assert_eq!(load_from_file(&path).unwrap(), bank);
}

#[test]
fn hand_edited_words_are_normalised() {
    let dir = TempDir::new();
    let path = dir.join("words.json");
    fs::write(&path, r#"{"Животные": [" КОТ ", "кот", "Лев"]}"#).unwrap();

    let bank = load_from_file(&path).unwrap();
    assert_eq!(bank.words("Животные").unwrap(), &["кот", "лев"]);
}

#[test]
fn categories_differing_by_whitespace_keep_all_words() {
    let dir = TempDir::new();
    let path = dir.join("words.json");
    fs::write(
        &path,
        r#"{"Животные": ["кот", "лев"], "Животные ": ["тигр"]}"#,
    )
    .unwrap();

    let bank = load_from_file(&path).unwrap();
    assert_eq!(bank.category_count(), 1);
    assert_eq!(bank.words("Животные").unwrap(), &["кот", "лев", "тигр"]);

    save_to_file(&bank, &path).unwrap();
    assert_eq!(load_from_file(&path).unwrap(), bank);
}

#[test]
fn malformed_bank_is_reported() {
    let dir = TempDir::new();
    let path = dir.join("words.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_from_file(&path).unwrap_err();
    assert!(matches!(err, GameError::MalformedWordBank { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn bank_with_empty_category_is_rejected() {
    let dir = TempDir::new();
    let path = dir.join("words.json");
    fs::write(&path, r#"{"Животные": ["кот"], "Пусто": []}"#).unwrap();

    let err = load_from_file(&path).unwrap_err();
    assert!(matches!(err, GameError::InvalidWordBank { .. }));
}

#[test]
fn high_score_defaults_to_zero() {
    let dir = TempDir::new();
    assert_eq!(load_high_score(dir.join("highscore.txt")).unwrap(), 0);
}

#[test]
fn high_score_round_trips() {
    let dir = TempDir::new();
    let path = dir.join("highscore.txt");

    save_high_score(&path, 40).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "40");
    assert_eq!(load_high_score(&path).unwrap(), 40);

    fs::write(&path, " 15\n").unwrap();
    assert_eq!(load_high_score(&path).unwrap(), 15);
}

#[test]
fn corrupt_high_score_is_reported() {
    let dir = TempDir::new();
    let path = dir.join("highscore.txt");

    for content in ["abc", "-5", ""] {
        fs::write(&path, content).unwrap();
        let err = load_high_score(&path).unwrap_err();
        assert!(
            matches!(err, GameError::CorruptHighScore { .. }),
            "{content:?} should be corrupt"
        );
    }
}

#[test]
fn file_store_keeps_data_between_sessions() {
    let dir = TempDir::new();
    let bank = WordBank::from_categories([("Животные", ["кот"])]).unwrap();
    let mut store = FileStore::new(dir.paths());
    store.save_bank(&bank).unwrap();

    {
        let mut engine = RoundEngine::with_rng(
            FileStore::new(dir.paths()),
            EngineConfig::default(),
            StdRng::seed_from_u64(5),
        )
        .unwrap();
        for letter in ['к', 'о', 'т'] {
            engine.guess_letter(letter).unwrap();
        }
        engine.add_words("Города", &["Рим", "Осло"]).unwrap();
    }

    let engine = RoundEngine::with_rng(
        FileStore::new(dir.paths()),
        EngineConfig::default(),
        StdRng::seed_from_u64(6),
    )
    .unwrap();
    assert_eq!(engine.high_score(), 10);
    assert_eq!(engine.current_score(), 0);
    assert_eq!(engine.bank().words("Города").unwrap(), &["рим", "осло"]);
    assert_eq!(engine.bank().words("Животные").unwrap(), &["кот"]);
}

#[test]
fn failed_bank_save_leaves_engine_unchanged() {
    let dir = TempDir::new();
    let blocker = dir.join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let bank = WordBank::from_categories([("Животные", ["кот"])]).unwrap();
    let store = SeededFileStore {
        bank: bank.clone(),
        files: FileStore::new(StoragePaths {
            words: blocker.join("words.json"),
            high_score: dir.join("highscore.txt"),
        }),
    };
    let mut engine =
        RoundEngine::with_rng(store, EngineConfig::default(), StdRng::seed_from_u64(7)).unwrap();

    let err = engine.add_words("Животные", &["лев"]).unwrap_err();
    assert!(matches!(err, GameError::Io { .. }));
    assert_eq!(engine.bank(), &bank);
}

/// Starts from an in-memory bank and writes through to disk
struct SeededFileStore {
    bank: WordBank,
    files: FileStore,
}

impl Store for SeededFileStore {
    fn load_bank(&mut self) -> Result<WordBank, GameError> {
        Ok(self.bank.clone())
    }

    fn save_bank(&mut self, bank: &WordBank) -> Result<(), GameError> {
        self.files.save_bank(bank)
    }

    fn load_high_score(&mut self) -> Result<u32, GameError> {
        self.files.load_high_score()
    }

    fn save_high_score(&mut self, value: u32) -> Result<(), GameError> {
        self.files.save_high_score(value)
    }
}
