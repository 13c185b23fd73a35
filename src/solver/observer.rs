//! Search progress hooks
//!
//! The search engines never print. They report what they are doing through a
//! `SearchObserver`, and callers decide what to show.

use super::tree::{NodeId, SearchTree};
use crate::core::Word;

/// Counters kept by the depth-first explorer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExploreStats {
    /// Visits so far, including skipped dead ends and the goal itself
    pub nodes_processed: usize,
    /// Words recorded as dead ends
    pub dead_ends: usize,
    /// Visits cut short because the word was already a dead end
    pub dead_ends_skipped: usize,
}

/// Receives search events as they happen
///
/// Every method has an empty default, so observers only implement what they
/// care about.
pub trait SearchObserver {
    /// Called before each node visit, after the counters are updated
    fn on_visit(&mut self, _stats: &ExploreStats, _tree: &SearchTree, _node: NodeId) {}

    /// Called once per expanded node with the number of children found
    fn on_expand(&mut self, _word: &Word, _children: usize) {}

    /// Called when a word is recorded as a dead end
    fn on_dead_end(&mut self, _word: &Word) {}

    /// Called each time the greedy builder accepts a word
    fn on_trail_step(&mut self, _word: &Word, _trail: &[Word]) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl SearchObserver for SilentObserver {}

