//! Dictionary sources for word ladders
//!
//! A dictionary answers two questions: does a word exist, and what are all the
//! words. Sources are static for the duration of a search.

mod embedded;
pub mod loader;
pub mod stream;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordList;
pub use stream::FileDictionary;

use crate::core::Word;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A read-only source of dictionary words
pub trait Dictionary {
    /// Exact, case-sensitive membership test
    ///
    /// # Errors
    /// Returns `DictionaryError` if the underlying source cannot be read.
    fn contains(&self, word: &str) -> Result<bool, DictionaryError>;

    /// Visit every entry exactly once, in source order
    ///
    /// Each call starts a fresh pass over the source.
    ///
    /// # Errors
    /// Returns `DictionaryError` if the underlying source cannot be read.
    fn scan<F: FnMut(&Word)>(&self, visit: F) -> Result<(), DictionaryError>;

    /// Entries as an in-memory slice, when the source holds them
    ///
    /// Lets the neighbor scan run in parallel instead of through `scan`.
    fn as_slice(&self) -> Option<&[Word]> {
        None
    }
}

/// Failure to read a word list
#[derive(Debug)]
pub struct DictionaryError {
    path: PathBuf,
    source: io::Error,
}

impl DictionaryError {
    pub(crate) fn new(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the word list that failed
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to read word list {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
