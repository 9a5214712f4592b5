//! Sub-word derivation
//!
//! A sub-word of a seed is any dictionary word whose letters form a
//! sub-multiset of the seed's letters. The finder scans only the length
//! buckets that can qualify and compares signatures componentwise.

use crate::core::{DictionaryIndex, LetterSignature};
use rayon::prelude::*;

/// Default minimum sub-word length
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Finds every dictionary word buildable from a seed word's letters
#[derive(Debug, Clone, Copy)]
pub struct SubWordFinder<'a> {
    dictionary: &'a DictionaryIndex,
}

impl<'a> SubWordFinder<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a DictionaryIndex) -> Self {
        Self { dictionary }
    }

    /// All sub-words of `seed` with at least `min_length` characters
    ///
    /// The result is sorted lexicographically and free of duplicates. A blank
    /// seed, a seed shorter than `min_length`, or a `min_length` of zero yield
    /// an empty list. The seed itself, and any of its anagrams, are included
    /// when they are in the dictionary.
    ///
    /// # Examples
    /// ```
    /// use word_jumble::core::DictionaryIndex;
    /// use word_jumble::engine::SubWordFinder;
    ///
    /// let dict = DictionaryIndex::from_lines(["yellow", "yell", "low", "owl", "wool", "ye"]);
    /// let finder = SubWordFinder::new(&dict);
    /// assert_eq!(finder.find("yellow", 3), vec!["low", "owl", "yell", "yellow"]);
    /// ```
    #[must_use]
    pub fn find(&self, seed: &str, min_length: usize) -> Vec<String> {
        let seed = seed.trim();
        let seed_length = seed.chars().count();
        if seed.is_empty() || min_length == 0 || seed_length < min_length {
            tracing::debug!(seed, min_length, "no sub-words possible");
            return Vec::new();
        }

        let pool = LetterSignature::of(seed);
        let dictionary = self.dictionary;
        let mut found: Vec<&'a str> = (min_length..=seed_length)
            .into_par_iter()
            .flat_map_iter(move |length| {
                dictionary
                    .signed_words_with_length(length)
                    .filter(move |(_, sig)| sig.fits_within(&pool))
                    .map(|(word, _)| word)
            })
            .collect();

        found.sort_unstable();
        found.dedup();
        tracing::debug!(seed, min_length, count = found.len(), "derived sub-words");
        found.into_iter().map(str::to_string).collect()
    }

    /// Sub-words with the default minimum length of three
    #[must_use]
    pub fn find_default(&self, seed: &str) -> Vec<String> {
        self.find(seed, DEFAULT_MIN_LENGTH)
    }
}
