//! Score and word bank summaries

use crate::game::{RoundEngine, Store};
use crate::output::{print_categories, print_statistics};
use rand::Rng;

/// Print the stored high score and a summary of the word bank
pub fn run_stats<S: Store, R: Rng>(engine: &RoundEngine<S, R>) {
    print_statistics(
        engine.current_score(),
        engine.high_score(),
        None,
        engine.statistics(),
        engine.bank(),
    );
}

/// Print every category with its word count
pub fn run_categories<S: Store, R: Rng>(engine: &RoundEngine<S, R>) {
    print_categories(engine.bank());
}
