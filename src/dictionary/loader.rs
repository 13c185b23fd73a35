//! In-memory word lists
//!
//! Loads a word list once, from a file or the embedded constant, and serves
//! membership checks from a hash index.

use super::{Dictionary, DictionaryError, WORDS};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// A dictionary held entirely in memory
///
/// Scans walk the entries in their original order; duplicates are kept so a
/// scan sees exactly what the source file contains.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a word list from already validated words
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// Build a word list from string slices, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use word_ladder::dictionary::WordList;
    ///
    /// let words = WordList::from_slice(&["cat", "", "cot"]);
    /// assert_eq!(words.len(), 2);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::from_words(slice.iter().filter_map(|&s| Word::new(s).ok()).collect())
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(WORDS)
    }

    /// Load words from a file, one per line
    ///
    /// Blank lines are skipped; every other line is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if the file cannot be opened or read.
    ///
    /// # Examples
    /// ```no_run
    /// use word_ladder::dictionary::WordList;
    ///
    /// let words = WordList::load_from_file("words.txt").unwrap();
    /// println!("Loaded {} words", words.len());
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DictionaryError::new(path, e))?;

        let words = content
            .lines()
            .filter_map(|line| Word::new(line).ok())
            .collect();

        Ok(Self::from_words(words))
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the list has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.index.contains(word))
    }

    fn scan<F: FnMut(&Word)>(&self, visit: F) -> Result<(), DictionaryError> {
        self.words.iter().for_each(visit);
        Ok(())
    }

    fn as_slice(&self) -> Option<&[Word]> {
        Some(&self.words)
    }
}
