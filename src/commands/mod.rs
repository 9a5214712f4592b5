//! Command implementations

pub mod benchmark;
pub mod game;
pub mod query;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use game::new_game;
pub use query::{
    ExistsResult, ScrambleResult, WordListResult, palindrome_words, prefix_words, scramble_word,
    search_words, sub_words, suffix_words, word_exists,
};
pub use simple::run_simple;
