//! Dictionary query commands
//!
//! Scramble, existence, prefix/suffix, pattern search, palindromes and
//! sub-words. Each returns a plain result for `output::display` to print.

use crate::core::{DictionaryIndex, JumbleError};
use crate::engine::{SearchCriteria, SearchService, SubWordFinder, scramble};

/// A titled list of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListResult {
    pub title: String,
    pub words: Vec<String>,
}

impl WordListResult {
    fn new(title: String, words: Vec<&str>) -> Self {
        Self {
            title,
            words: words.into_iter().map(str::to_string).collect(),
        }
    }
}

/// A word and one scramble of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleResult {
    pub word: String,
    pub scramble: String,
}

/// Whether a word is in the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistsResult {
    pub word: String,
    pub exists: bool,
}

/// Scramble the letters of `word`
///
/// # Errors
/// Returns [`JumbleError::InvalidInput`] if `word` is blank.
pub fn scramble_word(word: &str) -> Result<ScrambleResult, JumbleError> {
    let scrambled = scramble(word, &mut rand::rng())?;
    Ok(ScrambleResult {
        word: word.to_string(),
        scramble: scrambled,
    })
}

#[must_use]
pub fn word_exists(dictionary: &DictionaryIndex, word: &str) -> ExistsResult {
    ExistsResult {
        word: word.to_string(),
        exists: dictionary.exists(word),
    }
}

/// # Errors
/// Returns [`JumbleError::InvalidInput`] if `prefix` is blank or numeric.
pub fn prefix_words(
    dictionary: &DictionaryIndex,
    prefix: &str,
) -> Result<WordListResult, JumbleError> {
    let words = dictionary.words_by_prefix(prefix)?;
    Ok(WordListResult::new(
        format!("Words starting with '{prefix}'"),
        words,
    ))
}

/// # Errors
/// Returns [`JumbleError::InvalidInput`] if `suffix` is blank or numeric.
pub fn suffix_words(
    dictionary: &DictionaryIndex,
    suffix: &str,
) -> Result<WordListResult, JumbleError> {
    let words = dictionary.words_by_suffix(suffix)?;
    Ok(WordListResult::new(
        format!("Words ending with '{suffix}'"),
        words,
    ))
}

/// # Errors
/// Returns [`JumbleError::InvalidInput`] for missing or malformed criteria.
pub fn search_words(
    dictionary: &DictionaryIndex,
    criteria: SearchCriteria,
) -> Result<WordListResult, JumbleError> {
    let words = SearchService::new(dictionary).search_words(criteria)?;
    Ok(WordListResult::new(describe(criteria), words))
}

#[must_use]
pub fn palindrome_words(dictionary: &DictionaryIndex) -> WordListResult {
    let words = SearchService::new(dictionary).retrieve_palindrome_words();
    WordListResult::new("Palindromes".to_string(), words)
}

#[must_use]
pub fn sub_words(dictionary: &DictionaryIndex, word: &str, min_length: usize) -> WordListResult {
    let words = SubWordFinder::new(dictionary).find(word, min_length);
    WordListResult {
        title: format!("Words made from '{word}' (min length {min_length})"),
        words,
    }
}

fn describe(criteria: SearchCriteria) -> String {
    let mut parts = Vec::new();
    if let Some(c) = criteria.start {
        parts.push(format!("start '{c}'"));
    }
    if let Some(c) = criteria.end {
        parts.push(format!("end '{c}'"));
    }
    if let Some(n) = criteria.length {
        parts.push(format!("length {n}"));
    }
    format!("Words with {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> DictionaryIndex {
        DictionaryIndex::from_lines(["deed", "dead", "eye", "dye", "yield", "bee"])
    }

    #[test]
    fn scramble_word_result() {
        let result = scramble_word("deed").unwrap();
        assert_eq!(result.word, "deed");
        assert_ne!(result.scramble, "deed");
        assert!(scramble_word(" ").is_err());
    }

    #[test]
    fn exists_result() {
        let dict = dictionary();
        assert!(word_exists(&dict, "Eye").exists);
        assert!(!word_exists(&dict, "eyes").exists);
    }

    #[test]
    fn prefix_and_suffix_results() {
        let dict = dictionary();
        assert_eq!(prefix_words(&dict, "de").unwrap().words, vec!["deed", "dead"]);
        assert_eq!(suffix_words(&dict, "ye").unwrap().words, vec!["eye", "dye"]);
        assert!(prefix_words(&dict, "").is_err());
    }

    #[test]
    fn search_title_lists_criteria() {
        let dict = dictionary();
        let result = search_words(&dict, SearchCriteria::new(Some('d'), None, Some(4))).unwrap();
        assert_eq!(result.title, "Words with start 'd', length 4");
        assert_eq!(result.words, vec!["deed", "dead"]);
    }

    #[test]
    fn palindrome_result() {
        let dict = dictionary();
        assert_eq!(palindrome_words(&dict).words, vec!["deed", "eye"]);
    }

    #[test]
    fn sub_words_result() {
        let dict = dictionary();
        let result = sub_words(&dict, "dyed", 3);
        assert_eq!(result.words, vec!["dye"]);
    }
}
