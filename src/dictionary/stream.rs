//! Streaming file dictionary
//!
//! Re-reads the word list from disk on every query. Nothing is cached, so each
//! membership check and each scan is a full pass over the file.

use super::{Dictionary, DictionaryError};
use crate::core::Word;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A dictionary backed directly by a newline-delimited file
#[derive(Debug, Clone)]
pub struct FileDictionary {
    path: PathBuf,
}

impl FileDictionary {
    /// Create a dictionary over the given file
    ///
    /// The file is not opened until the first query.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<BufReader<File>, DictionaryError> {
        File::open(&self.path)
            .map(BufReader::new)
            .map_err(|e| DictionaryError::new(&self.path, e))
    }
}

impl Dictionary for FileDictionary {
    fn contains(&self, word: &str) -> Result<bool, DictionaryError> {
        if word.is_empty() {
            return Ok(false);
        }

        for line in self.open()?.lines() {
            let line = line.map_err(|e| DictionaryError::new(&self.path, e))?;
            if line == word {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn scan<F: FnMut(&Word)>(&self, mut visit: F) -> Result<(), DictionaryError> {
        for line in self.open()?.lines() {
            let line = line.map_err(|e| DictionaryError::new(&self.path, e))?;
            if let Ok(word) = Word::new(line) {
                visit(&word);
            }
        }
        Ok(())
    }
}
