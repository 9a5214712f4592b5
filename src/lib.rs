//! Word Jumble
//!
//! A word-jumble puzzle engine: an indexed dictionary, letter scrambling,
//! sub-word discovery and a small game state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use word_jumble::core::DictionaryIndex;
//! use word_jumble::engine::{GameEngine, GuessOutcome};
//!
//! let dictionary = DictionaryIndex::from_lines(["titans", "tint", "ant", "sat"]);
//! let engine = GameEngine::new(&dictionary);
//!
//! let mut game = engine.create_game(6, 3).unwrap();
//! assert_eq!(game.total_words(), 4);
//!
//! let result = game.submit_guess("tint");
//! assert_eq!(result.outcome, GuessOutcome::CorrectMore);
//! ```

// Core domain types
pub mod core;

// Scrambling, sub-words, search and game logic
pub mod engine;

// Id-keyed storage for open games
pub mod store;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
