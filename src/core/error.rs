//! Error type shared by the dictionary and the puzzle engine

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced by the word engine
///
/// `InvalidInput` and `NoWordAvailable` are recoverable and map to user-facing
/// messages. `Load` means the engine has no dictionary and cannot start.
#[derive(Debug)]
pub enum JumbleError {
    /// A required parameter was blank, malformed or out of range
    InvalidInput(String),
    /// The request was valid but the dictionary has no word of this length
    NoWordAvailable { length: usize },
    /// The word list resource could not be read
    Load { path: PathBuf, source: io::Error },
}

impl JumbleError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether the caller can report this and carry on
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Load { .. })
    }
}

impl fmt::Display for JumbleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "Invalid input: {message}"),
            Self::NoWordAvailable { length } => {
                write!(f, "Cannot find a {length}-letter word to create a game")
            }
            Self::Load { path, source } => {
                write!(f, "Failed to load word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for JumbleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_invalid_input() {
        let err = JumbleError::invalid("startChar must be a letter");
        assert_eq!(err.to_string(), "Invalid input: startChar must be a letter");
        assert!(err.is_recoverable());
    }

    #[test]
    fn display_no_word_available() {
        let err = JumbleError::NoWordAvailable { length: 12 };
        assert_eq!(
            err.to_string(),
            "Cannot find a 12-letter word to create a game"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn load_error_is_fatal_and_keeps_source() {
        let err = JumbleError::Load {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(!err.is_recoverable());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.txt"));
    }
}
