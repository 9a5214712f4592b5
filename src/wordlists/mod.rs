//! Word lists for the puzzle engine
//!
//! Provides the embedded dictionary compiled into the binary and source
//! selection for loading a custom list instead.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty(), "blank entry in embedded list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn has_default_game_words() {
        assert!(WORDS.iter().any(|w| w.len() == 6));
        assert!(WORDS.iter().any(|w| w.len() == 3));
    }

    #[test]
    fn contains_palindromes() {
        for word in ["level", "radar", "noon"] {
            assert!(WORDS.contains(&word), "missing '{word}'");
        }
    }
}
