//! Dead-end memo
//!
//! Words whose every child was explored without reaching the goal. The memo is
//! keyed by word alone, not by the path that led to it, and belongs to one
//! search session.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Set of words proven not to lead to the goal
#[derive(Debug, Clone, Default)]
pub struct DeadEnds {
    words: FxHashSet<Word>,
}

impl DeadEnds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Record a dead end; returns false if it was already recorded
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
