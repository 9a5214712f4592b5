//! Dictionary source selection
//!
//! Resolves the `--dictionary` setting to a loaded [`DictionaryIndex`].

use crate::core::{DictionaryIndex, JumbleError};
use std::path::PathBuf;

/// Where the word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The list compiled into the binary
    Embedded,
    /// A newline-delimited UTF-8 file
    File(PathBuf),
}

impl DictionarySource {
    /// Parse a CLI value: `embedded` (or empty) or a path
    ///
    /// # Examples
    /// ```
    /// use word_jumble::wordlists::loader::DictionarySource;
    ///
    /// assert_eq!(DictionarySource::from_arg("embedded"), DictionarySource::Embedded);
    /// assert!(matches!(DictionarySource::from_arg("words.txt"), DictionarySource::File(_)));
    /// ```
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value.trim() {
            "" | "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load and index the word list
    ///
    /// # Errors
    /// Returns [`JumbleError::Load`] if a file source cannot be read.
    pub fn load(&self) -> Result<DictionaryIndex, JumbleError> {
        match self {
            Self::Embedded => Ok(DictionaryIndex::embedded()),
            Self::File(path) => DictionaryIndex::load(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_embedded() {
        assert_eq!(DictionarySource::from_arg(""), DictionarySource::Embedded);
        assert_eq!(
            DictionarySource::from_arg(" embedded "),
            DictionarySource::Embedded
        );
    }

    #[test]
    fn parses_path() {
        assert_eq!(
            DictionarySource::from_arg("data/words.txt"),
            DictionarySource::File(PathBuf::from("data/words.txt"))
        );
    }

    #[test]
    fn loads_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbeta\n\ngamma").unwrap();

        let source = DictionarySource::File(file.path().to_path_buf());
        let dict = source.load().unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.exists("BETA"));
    }

    #[test]
    fn missing_file_is_load_error() {
        let source = DictionarySource::File(PathBuf::from("/nope/words.txt"));
        assert!(matches!(source.load(), Err(JumbleError::Load { .. })));
    }

    #[test]
    fn loads_embedded_source() {
        let dict = DictionarySource::Embedded.load().unwrap();
        assert_eq!(dict.len(), crate::wordlists::WORDS_COUNT);
    }
}
