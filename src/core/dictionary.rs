//! Dictionary index
//!
//! Loads a word list once and precomputes the lookup structures every other
//! component reads from: an exact-match set, length/first-letter/last-letter
//! buckets and a letter signature per word. The index is never mutated after
//! construction, so it can be shared freely by reference.

use super::{JumbleError, LetterSignature};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An immutable, indexed word list
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: Vec<String>,
    signatures: Vec<Option<LetterSignature>>,
    lookup: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<usize>>,
    by_first: FxHashMap<char, Vec<usize>>,
    by_last: FxHashMap<char, Vec<usize>>,
}

impl DictionaryIndex {
    /// Build an index from individual lines
    ///
    /// Blank lines are skipped and exact duplicates collapse onto their first
    /// occurrence. Words are otherwise kept exactly as given.
    ///
    /// # Examples
    /// ```
    /// use word_jumble::core::DictionaryIndex;
    ///
    /// let dict = DictionaryIndex::from_lines(["level", "", "Eye", "level"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.exists("eye"));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for line in lines {
            let word = line.as_ref();
            if word.trim().is_empty() || seen.contains(word) {
                continue;
            }
            seen.insert(word.to_string());
            index.push(word);
        }

        tracing::debug!(
            words = index.words.len(),
            lengths = index.by_length.len(),
            first_letters = index.by_first.len(),
            last_letters = index.by_last.len(),
            "dictionary indexed"
        );
        index
    }

    /// Build an index from any line-oriented reader
    ///
    /// # Errors
    /// Returns [`JumbleError::Load`] if reading fails or the data is not UTF-8.
    pub fn from_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Self, JumbleError> {
        let lines = reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| JumbleError::Load {
                path: origin.to_path_buf(),
                source,
            })?;
        Ok(Self::from_lines(lines))
    }

    /// Load a newline-delimited UTF-8 word list from disk
    ///
    /// # Errors
    /// Returns [`JumbleError::Load`] if the file cannot be opened or read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, JumbleError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| JumbleError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_reader(BufReader::new(file), path)?;
        tracing::info!(path = %path.display(), words = index.len(), "loaded word list");
        Ok(index)
    }

    /// Index the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let index = Self::from_lines(crate::wordlists::WORDS);
        tracing::info!(words = index.len(), "loaded embedded word list");
        index
    }

    fn push(&mut self, word: &str) {
        let id = self.words.len();
        let length = word.chars().count();

        self.by_length.entry(length).or_default().push(id);
        if let Some(first) = word.chars().next() {
            self.by_first.entry(fold(first)).or_default().push(id);
        }
        if let Some(last) = word.chars().next_back() {
            self.by_last.entry(fold(last)).or_default().push(id);
        }

        self.lookup.insert(word.to_lowercase());
        self.signatures.push(LetterSignature::of_letters(word));
        self.words.push(word.to_string());
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Case-insensitive exact match; blank input is never found
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        !word.trim().is_empty() && self.lookup.contains(&word.to_lowercase())
    }

    /// All words with exactly `length` characters
    #[must_use]
    pub fn words_with_length(&self, length: usize) -> Vec<&str> {
        self.resolve(self.by_length.get(&length))
    }

    /// All words starting with `letter` (case-insensitive)
    #[must_use]
    pub fn words_starting_with(&self, letter: char) -> Vec<&str> {
        self.resolve(self.by_first.get(&fold(letter)))
    }

    /// All words ending with `letter` (case-insensitive)
    #[must_use]
    pub fn words_ending_with(&self, letter: char) -> Vec<&str> {
        self.resolve(self.by_last.get(&fold(letter)))
    }

    /// Case-insensitive prefix search
    ///
    /// # Errors
    /// Returns [`JumbleError::InvalidInput`] if `prefix` is blank or purely numeric.
    pub fn words_by_prefix(&self, prefix: &str) -> Result<Vec<&str>, JumbleError> {
        let needle = affix_needle(prefix, "prefix")?;
        let Some(first) = needle.chars().next() else {
            return Ok(Vec::new());
        };
        Ok(self
            .words_starting_with(first)
            .into_iter()
            .filter(|w| w.to_lowercase().starts_with(&needle))
            .collect())
    }

    /// Case-insensitive suffix search
    ///
    /// # Errors
    /// Returns [`JumbleError::InvalidInput`] if `suffix` is blank or purely numeric.
    pub fn words_by_suffix(&self, suffix: &str) -> Result<Vec<&str>, JumbleError> {
        let needle = affix_needle(suffix, "suffix")?;
        let Some(last) = needle.chars().next_back() else {
            return Ok(Vec::new());
        };
        Ok(self
            .words_ending_with(last)
            .into_iter()
            .filter(|w| w.to_lowercase().ends_with(&needle))
            .collect())
    }

    /// Letter-frequency signature of an arbitrary word
    #[must_use]
    pub fn signature(word: &str) -> LetterSignature {
        LetterSignature::of(word)
    }

    /// Uniformly pick one word of exactly `length` characters
    ///
    /// Returns `None` when the dictionary has no word of that length.
    pub fn pick_random_word<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&str> {
        self.by_length
            .get(&length)
            .and_then(|ids| ids.choose(rng))
            .map(|&id| self.words[id].as_str())
    }

    /// Words of `length` that consist purely of letters, with their signatures
    pub(crate) fn signed_words_with_length(
        &self,
        length: usize,
    ) -> impl Iterator<Item = (&str, &LetterSignature)> {
        self.by_length
            .get(&length)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .filter_map(|&id| {
                self.signatures[id]
                    .as_ref()
                    .map(|sig| (self.words[id].as_str(), sig))
            })
    }

    /// Every word length present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    fn resolve(&self, ids: Option<&Vec<usize>>) -> Vec<&str> {
        ids.map_or_else(Vec::new, |ids| {
            ids.iter().map(|&id| self.words[id].as_str()).collect()
        })
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn affix_needle(affix: &str, what: &str) -> Result<String, JumbleError> {
    if affix.trim().is_empty() {
        tracing::debug!(affix, what, "rejected blank affix");
        return Err(JumbleError::invalid(format!("{what} must not be blank")));
    }
    if affix.chars().all(char::is_numeric) {
        tracing::debug!(affix, what, "rejected numeric affix");
        return Err(JumbleError::invalid(format!("{what} must not be numeric")));
    }
    Ok(affix.to_lowercase())
}
