//! Gallows - CLI
//!
//! Hangman with word categories, scoring and a persisted word bank, in a
//! full-screen TUI or a simple line mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gallows::{
    commands::{add_words, print_add_result, run_categories, run_simple, run_stats},
    game::{
        EngineConfig, FileStore, RoundEngine, StoragePaths,
        config::{DEFAULT_HIGH_SCORE_PATH, DEFAULT_WORDS_PATH},
    },
};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "gallows",
    about = "Hangman: guess the word letter by letter before the figure is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word bank file (JSON object of category -> words)
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// High score file
    #[arg(long, global = true, default_value = DEFAULT_HIGH_SCORE_PATH)]
    high_score: PathBuf,

    /// Stay on a finished round until you ask for the next one
    #[arg(short, long, global = true)]
    pause: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Category for the first round (random if omitted)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Simple CLI mode (line-based, without TUI)
    Simple {
        /// Category for the first round (random if omitted)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add words to a category, creating it if needed
    Add {
        /// Category name
        category: String,

        /// Comma-separated words, e.g. "тигр, слон"
        words: String,
    },

    /// List categories with their word counts
    Categories,

    /// Show the high score and word bank summary
    Stats,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = FileStore::new(StoragePaths {
        words: cli.words,
        high_score: cli.high_score,
    });

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { category: None });

    let config = EngineConfig::default().with_auto_advance(!cli.pause);
    let config = match &command {
        Commands::Play { category } | Commands::Simple { category } => {
            config.with_initial_category(category.clone())
        }
        _ => config,
    };

    let mut engine = RoundEngine::open(store, config)?;

    match command {
        Commands::Play { .. } => run_play_command(engine),
        Commands::Simple { .. } => run_simple(&mut engine),
        Commands::Add { category, words } => {
            let result = add_words(&mut engine, &category, &words)?;
            print_add_result(&result);
            Ok(())
        }
        Commands::Categories => {
            run_categories(&engine);
            Ok(())
        }
        Commands::Stats => {
            run_stats(&engine);
            Ok(())
        }
    }
}

fn run_play_command(engine: RoundEngine<FileStore>) -> Result<()> {
    use gallows::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
