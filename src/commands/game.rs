//! New game command

use crate::core::JumbleError;
use crate::engine::{GameEngine, GameSnapshot};

/// Create a puzzle and return its opening snapshot
///
/// # Errors
/// Propagates [`GameEngine::create_game`] errors.
pub fn new_game(
    engine: &GameEngine<'_>,
    length: usize,
    min_length: usize,
) -> Result<GameSnapshot, JumbleError> {
    engine
        .create_game(length, min_length)
        .map(|state| state.snapshot())
}
