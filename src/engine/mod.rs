//! Word algorithms and the puzzle state machine
//!
//! Every component borrows the shared [`crate::core::DictionaryIndex`]; none of
//! them mutate it.

mod game;
mod scramble;
mod search;
mod state;
mod subwords;

pub use game::{DEFAULT_GAME_LENGTH, GameEngine, MIN_GAME_LENGTH};
pub use scramble::scramble;
pub use search::{SearchCriteria, SearchService, is_palindrome};
pub use state::{GameGuessResult, GameSnapshot, GameState, GameStatus, GuessOutcome};
pub use subwords::{DEFAULT_MIN_LENGTH, SubWordFinder};
