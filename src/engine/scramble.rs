//! Letter scrambling

use crate::core::JumbleError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Produce a random permutation of `word`'s characters that differs from `word`
///
/// Single-character words and words made of one repeated character have no
/// distinct arrangement and are returned unchanged. Everything else is
/// reshuffled until the result differs, which terminates with probability 1.
///
/// # Errors
/// Returns [`JumbleError::InvalidInput`] if `word` is blank.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_jumble::engine::scramble;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mixed = scramble("elephant", &mut rng).unwrap();
/// assert_ne!(mixed, "elephant");
/// assert_eq!(mixed.len(), 8);
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Result<String, JumbleError> {
    if word.trim().is_empty() {
        tracing::debug!(word, "rejected blank word");
        return Err(JumbleError::invalid("word must not be blank"));
    }

    let mut letters: Vec<char> = word.chars().collect();
    if !has_distinct_arrangement(&letters) {
        return Ok(word.to_string());
    }

    let mut attempts = 0usize;
    loop {
        attempts += 1;
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if candidate != word {
            tracing::trace!(word, attempts, "scrambled");
            return Ok(candidate);
        }
    }
}

/// False for one character, or the same character repeated
fn has_distinct_arrangement(letters: &[char]) -> bool {
    letters
        .split_first()
        .is_some_and(|(first, rest)| rest.iter().any(|c| c != first))
}
