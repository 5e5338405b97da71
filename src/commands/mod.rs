//! Command implementations

pub mod add;
pub mod simple;
pub mod stats;

pub use add::{AddResult, add_words, print_add_result};
pub use simple::run_simple;
pub use stats::{run_categories, run_stats};
