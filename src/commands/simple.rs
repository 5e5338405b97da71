//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Letters are guessed one per line; lines
//! starting with ':' are commands.

use crate::error::GameError;
use crate::game::{RoundEngine, Store};
use crate::output::{print_categories, print_guess_report, print_round, print_statistics};
use crate::wordbank::split_word_list;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// One parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess(char),
    Quit,
    NewRound,
    RandomRound,
    ListCategories,
    Category(String),
    AddWords { category: String, words: String },
    Stats,
    Help,
    Invalid(String),
}

/// Parse a line of input, `None` for blank lines
///
/// # Examples
/// ```
/// use gallows::commands::simple::{LineCommand, parse_line};
///
/// assert_eq!(parse_line(" к "), Some(LineCommand::Guess('к')));
/// assert_eq!(parse_line(":q"), Some(LineCommand::Quit));
/// assert_eq!(parse_line(""), None);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Option<LineCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(command) = line.strip_prefix(':') else {
        let mut chars = line.chars();
        return Some(match (chars.next(), chars.next()) {
            (Some(letter), None) => LineCommand::Guess(letter),
            _ => LineCommand::Invalid("Guess one letter at a time".to_string()),
        });
    };

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, rest)| (name, rest.trim()));

    Some(match name {
        "q" | "quit" | "exit" => LineCommand::Quit,
        "n" | "new" => LineCommand::NewRound,
        "r" | "random" => LineCommand::RandomRound,
        "s" | "stats" => LineCommand::Stats,
        "h" | "help" => LineCommand::Help,
        "c" | "cat" | "category" if rest.is_empty() => LineCommand::ListCategories,
        "c" | "cat" | "category" => LineCommand::Category(rest.to_string()),
        "a" | "add" => match rest.split_once(':') {
            Some((category, words)) => LineCommand::AddWords {
                category: category.trim().to_string(),
                words: words.to_string(),
            },
            None => LineCommand::Invalid("Usage: :add CATEGORY: word, word, ...".to_string()),
        },
        other => LineCommand::Invalid(format!("Unknown command ':{other}' (try :help)")),
    })
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or the engine cannot persist
/// the high score or the word bank.
pub fn run_simple<S: Store, R: Rng>(engine: &mut RoundEngine<S, R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Gallows - Simple Mode         ║");
    println!("╚══════════════════════════════════════╝\n");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_round(engine.round());
        if engine.round().is_finished() {
            println!("{}", "Round over - type :new to continue.".bright_black());
        }

        print!("Letter: ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let Some(command) = parse_line(&line) else {
            continue;
        };

        match command {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::Guess(letter) => match engine.guess_letter(letter) {
                Ok(report) => print_guess_report(&report),
                Err(e @ (GameError::InvalidLetter(_) | GameError::RoundOver)) => {
                    println!("{}", format!("❌ {e}").red());
                }
                Err(e) => return Err(e.into()),
            },
            LineCommand::NewRound => {
                engine.next_round()?;
                println!("\n🔄 New round!");
            }
            LineCommand::RandomRound => {
                engine.start_round(None)?;
                println!("\n🔄 New round in a random category!");
            }
            LineCommand::ListCategories => print_categories(engine.bank()),
            LineCommand::Category(name) => match engine.start_round(Some(&name)) {
                Ok(_) => println!("\n🔄 Category set to {}", name.bright_yellow()),
                Err(GameError::Bank(e)) => println!("{}", format!("❌ {e}").red()),
                Err(e) => return Err(e.into()),
            },
            LineCommand::AddWords { category, words } => {
                match engine.add_words(&category, &split_word_list(&words)) {
                    Ok(added) => println!(
                        "{}",
                        format!("✓ Added {added} word(s) to {category}").green()
                    ),
                    Err(GameError::Bank(e)) => println!("{}", format!("❌ {e}").red()),
                    Err(e) => return Err(e.into()),
                }
            }
            LineCommand::Stats => print_statistics(
                engine.current_score(),
                engine.high_score(),
                Some(engine.category()),
                engine.statistics(),
                engine.bank(),
            ),
            LineCommand::Help => print_help(),
            LineCommand::Invalid(message) => println!("{}", format!("❌ {message}").red()),
        }
    }
}

fn print_help() {
    println!("Type a letter and press Enter to guess it.");
    println!("Commands:");
    println!("  :new              new round in the same category");
    println!("  :random           new round in a random category");
    println!("  :cat [NAME]       list categories, or switch to NAME");
    println!("  :add CAT: w1, w2  add words to a category");
    println!("  :stats            show score and statistics");
    println!("  :quit             exit\n");
}
