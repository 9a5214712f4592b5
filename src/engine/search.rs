//! Pattern search and palindrome extraction

use crate::core::{DictionaryIndex, JumbleError};
use rand::Rng;

/// Conjunctive search criteria; at least one must be set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub start: Option<char>,
    pub end: Option<char>,
    pub length: Option<usize>,
}

impl SearchCriteria {
    #[must_use]
    pub const fn new(start: Option<char>, end: Option<char>, length: Option<usize>) -> Self {
        Self { start, end, length }
    }

    /// Reject missing criteria, non-letter characters and a zero length
    ///
    /// Letters are normalised to lowercase.
    fn validated(self) -> Result<Self, JumbleError> {
        if self.start.is_none() && self.end.is_none() && self.length.is_none() {
            return Err(JumbleError::invalid(
                "at least one of startChar, endChar or length is required",
            ));
        }
        if self.length == Some(0) {
            return Err(JumbleError::invalid("length must be at least 1"));
        }
        Ok(Self {
            start: self.start.map(|c| letter(c, "startChar")).transpose()?,
            end: self.end.map(|c| letter(c, "endChar")).transpose()?,
            length: self.length,
        })
    }

    fn matches(&self, word: &str) -> bool {
        let mut chars = word.chars();
        let first = chars.next().map(|c| c.to_ascii_lowercase());
        let last = chars.next_back().map(|c| c.to_ascii_lowercase()).or(first);

        self.start.is_none_or(|c| first == Some(c))
            && self.end.is_none_or(|c| last == Some(c))
            && self.length.is_none_or(|n| word.chars().count() == n)
    }
}

fn letter(c: char, what: &str) -> Result<char, JumbleError> {
    if c.is_ascii_alphabetic() {
        Ok(c.to_ascii_lowercase())
    } else {
        Err(JumbleError::invalid(format!(
            "{what} must be a single letter a-z, got {c:?}"
        )))
    }
}

/// True if `word` reads the same in both directions and has at least two characters
///
/// Comparison is case-sensitive.
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars.len() >= 2 && chars.iter().eq(chars.iter().rev())
}

/// Dictionary-backed search queries
#[derive(Debug, Clone, Copy)]
pub struct SearchService<'a> {
    dictionary: &'a DictionaryIndex,
}

impl<'a> SearchService<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a DictionaryIndex) -> Self {
        Self { dictionary }
    }

    /// Words matching every criterion that is set
    ///
    /// The narrowest available bucket (first letter, then last letter, then
    /// length) seeds the scan; all criteria are then applied to it.
    ///
    /// # Errors
    /// Returns [`JumbleError::InvalidInput`] if no criterion is set, a letter
    /// criterion is not `a`-`z`, or the length is zero.
    ///
    /// # Examples
    /// ```
    /// use word_jumble::core::DictionaryIndex;
    /// use word_jumble::engine::{SearchCriteria, SearchService};
    ///
    /// let dict = DictionaryIndex::from_lines(["apple", "axe", "bee", "eye"]);
    /// let search = SearchService::new(&dict);
    /// let words = search.search_words(SearchCriteria::new(None, Some('e'), None)).unwrap();
    /// assert_eq!(words, vec!["apple", "axe", "bee", "eye"]);
    /// ```
    pub fn search_words(&self, criteria: SearchCriteria) -> Result<Vec<&'a str>, JumbleError> {
        let criteria = criteria.validated().inspect_err(|err| {
            tracing::debug!(?criteria, %err, "rejected search criteria");
        })?;

        let bucket = match criteria {
            SearchCriteria { start: Some(c), .. } => self.dictionary.words_starting_with(c),
            SearchCriteria { end: Some(c), .. } => self.dictionary.words_ending_with(c),
            SearchCriteria { length: Some(n), .. } => self.dictionary.words_with_length(n),
            SearchCriteria { .. } => Vec::new(),
        };

        let words: Vec<&str> = bucket.into_iter().filter(|w| criteria.matches(w)).collect();
        tracing::debug!(?criteria, count = words.len(), "search");
        Ok(words)
    }

    /// Every dictionary word of two or more characters that is a palindrome
    #[must_use]
    pub fn retrieve_palindrome_words(&self) -> Vec<&'a str> {
        self.dictionary.words().filter(|w| is_palindrome(w)).collect()
    }

    /// Uniformly pick a word of exactly `length` characters, if one exists
    pub fn pick_random_word<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&'a str> {
        self.dictionary.pick_random_word(length, rng)
    }
}
