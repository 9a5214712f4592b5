//! Puzzle construction

use super::{GameState, SearchService, SubWordFinder, scramble};
use crate::core::{DictionaryIndex, JumbleError};
use rand::Rng;

/// Shortest word a puzzle can be built around
pub const MIN_GAME_LENGTH: usize = 3;

/// Default length of the word a puzzle is built around
pub const DEFAULT_GAME_LENGTH: usize = 6;

/// Builds puzzles from the dictionary
///
/// The sole entry point for creating a [`GameState`].
#[derive(Debug, Clone, Copy)]
pub struct GameEngine<'a> {
    dictionary: &'a DictionaryIndex,
}

impl<'a> GameEngine<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a DictionaryIndex) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a DictionaryIndex {
        self.dictionary
    }

    /// Create a puzzle around a random word of `length` letters
    ///
    /// # Errors
    /// - [`JumbleError::InvalidInput`] if `length < 3`, `min_length == 0`
    ///   or `min_length > length`
    /// - [`JumbleError::NoWordAvailable`] if no word has that length
    pub fn create_game(&self, length: usize, min_length: usize) -> Result<GameState, JumbleError> {
        self.create_game_with_rng(length, min_length, &mut rand::rng())
    }

    /// [`Self::create_game`] with an explicit random source
    ///
    /// # Errors
    /// Same as [`Self::create_game`].
    pub fn create_game_with_rng<R: Rng + ?Sized>(
        &self,
        length: usize,
        min_length: usize,
        rng: &mut R,
    ) -> Result<GameState, JumbleError> {
        validate(length, min_length).inspect_err(|err| {
            tracing::debug!(length, min_length, %err, "rejected game parameters");
        })?;

        let Some(original) = SearchService::new(self.dictionary).pick_random_word(length, rng)
        else {
            tracing::debug!(length, "no word of requested length");
            return Err(JumbleError::NoWordAvailable { length });
        };

        let sub_words = SubWordFinder::new(self.dictionary).find(original, min_length);
        let scrambled = scramble(original, rng)?;

        tracing::debug!(
            length,
            min_length,
            sub_words = sub_words.len(),
            "created game"
        );
        Ok(GameState::new(original, scrambled, sub_words))
    }
}

fn validate(length: usize, min_length: usize) -> Result<(), JumbleError> {
    if length < MIN_GAME_LENGTH {
        return Err(JumbleError::invalid(format!(
            "length={length}, expected at least {MIN_GAME_LENGTH}"
        )));
    }
    if min_length == 0 {
        return Err(JumbleError::invalid("minLength must be a positive integer"));
    }
    if min_length > length {
        return Err(JumbleError::invalid(format!(
            "minLength={min_length} must not exceed length={length}"
        )));
    }
    Ok(())
}
