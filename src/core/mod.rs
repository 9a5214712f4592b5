//! Core domain types for the word engine
//!
//! The dictionary index and the letter signatures it precomputes. Everything
//! else in the crate reads from these; nothing here depends on the engine.

mod dictionary;
mod error;
mod signature;

pub use dictionary::DictionaryIndex;
pub use error::JumbleError;
pub use signature::LetterSignature;
