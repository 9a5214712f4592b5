//! Letter-frequency signatures
//!
//! A signature counts how often each letter `a`-`z` occurs in a word. Sub-word
//! derivation reduces to a componentwise comparison of two signatures.

use std::fmt;

const ALPHABET: usize = 26;

/// Count of each letter `a`-`z` in a word, case-folded
///
/// Counts saturate at `u16::MAX` occurrences of a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSignature([u16; ALPHABET]);

impl LetterSignature {
    /// Build the signature of `word`
    ///
    /// ASCII letters are case-folded; every other character is ignored.
    ///
    /// # Examples
    /// ```
    /// use word_jumble::core::LetterSignature;
    ///
    /// let sig = LetterSignature::of("Yellow");
    /// assert_eq!(sig.count(b'l'), 2);
    /// assert_eq!(sig.count(b'y'), 1);
    /// assert_eq!(sig.total(), 6);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = [0u16; ALPHABET];
        for byte in word.bytes().filter(u8::is_ascii_alphabetic) {
            let slot = &mut counts[usize::from(byte.to_ascii_lowercase() - b'a')];
            *slot = slot.saturating_add(1);
        }
        Self(counts)
    }

    /// Signature of `word`, or `None` if it holds anything besides ASCII letters
    ///
    /// Such words cannot be checked letter-for-letter and are never offered
    /// as sub-words.
    #[must_use]
    pub fn of_letters(word: &str) -> Option<Self> {
        if !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic()) {
            Some(Self::of(word))
        } else {
            None
        }
    }

    /// Occurrences of `letter` (either case)
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u16 {
        if letter.is_ascii_alphabetic() {
            self.0[(letter.to_ascii_lowercase() - b'a') as usize]
        } else {
            0
        }
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }

    /// Number of different letters present
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.0.iter().filter(|&&c| c > 0).count()
    }

    /// True if every letter of `self` is available in `pool`, respecting multiplicity
    ///
    /// # Examples
    /// ```
    /// use word_jumble::core::LetterSignature;
    ///
    /// let pool = LetterSignature::of("yellow");
    /// assert!(LetterSignature::of("well").fits_within(&pool));
    /// assert!(!LetterSignature::of("wool").fits_within(&pool)); // only one 'o'
    /// ```
    #[inline]
    #[must_use]
    pub fn fits_within(&self, pool: &Self) -> bool {
        self.0.iter().zip(pool.0.iter()).all(|(need, have)| need <= have)
    }

    /// The raw 26-entry count vector
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &[u16; ALPHABET] {
        &self.0
    }
}

impl fmt::Display for LetterSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, &count) in (b'a'..=b'z').zip(self.0.iter()) {
            for _ in 0..count {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}
