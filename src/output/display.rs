//! Display functions for command results

use super::formatters::{attempts_bar, drawn_segments, gallows_art, spaced_upper};
use crate::core::{GuessOutcome, RoundState, WIN_REWARD};
use crate::game::{GuessReport, Statistics};
use crate::wordbank::WordBank;
use colored::Colorize;

/// Print the gallows, the masked word and the guessed letters
pub fn print_round(round: &RoundState) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Category: {}", round.category().bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    for line in gallows_art(round.attempts_used()) {
        println!("   {line}");
    }

    println!(
        "\n   Word:  {}",
        spaced_upper(&round.render_word()).bright_white().bold()
    );
    println!(
        "   Tries: {} ({} left)",
        attempts_bar(round.attempts_remaining()).red(),
        round.attempts_remaining()
    );

    let missed = round.missed_letters();
    if !missed.is_empty() {
        println!("   Miss:  {}", spaced_upper(&missed).bright_black());
        println!("   Drawn: {}", drawn_segments(round.attempts_used()).bright_black());
    }
    println!();
}

/// Print the effect of a guess
pub fn print_guess_report(report: &GuessReport) {
    let letter = report.letter.to_uppercase().to_string();
    match report.outcome {
        GuessOutcome::AlreadyGuessed => {
            println!("{}", format!("⚠ You already tried '{letter}'").yellow());
        }
        GuessOutcome::InProgress => {}
        GuessOutcome::Won => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!(
                "{}",
                format!("🎉 You guessed it: {}", report.word.to_uppercase())
                    .bright_green()
                    .bold()
            );
            println!(
                "   Score: {} (+{WIN_REWARD})",
                report.score.to_string().bright_cyan()
            );
            if report.new_high_score {
                println!("   {}", "🏆 New high score!".bright_yellow().bold());
            }
            println!("{}", "═".repeat(40).bright_cyan());
        }
        GuessOutcome::Lost => {
            println!("\n{}", "═".repeat(40).red());
            println!(
                "{}",
                format!("💀 Out of tries! The word was: {}", report.word.to_uppercase())
                    .red()
                    .bold()
            );
            println!("   Score: {}", report.score.to_string().bright_cyan());
            println!("{}", "═".repeat(40).red());
        }
    }
}

/// Print categories with their word counts
pub fn print_categories(bank: &WordBank) {
    println!("\n📚 {}", "Categories:".bright_cyan().bold());
    for category in bank.categories() {
        let count = bank.words(category).map_or(0, <[String]>::len);
        println!("   • {category} ({count} words)");
    }
    println!();
}

/// Print score, high score and bank summary
pub fn print_statistics(
    score: u32,
    high_score: u32,
    category: Option<&str>,
    stats: Statistics,
    bank: &WordBank,
) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Current score:    {}", score.to_string().bright_yellow());
    println!(
        "   High score:       {}",
        high_score.to_string().bright_yellow().bold()
    );
    if let Some(category) = category {
        println!("   Current category: {category}");
    }
    if stats.rounds_played() > 0 {
        println!(
            "   Rounds:           {} won / {} lost ({:.0}%)",
            stats.rounds_won,
            stats.rounds_lost,
            stats.win_rate()
        );
    }
    println!("   Categories:       {}", bank.category_count());
    println!("   Words:            {}", bank.total_words());
    println!();
}
