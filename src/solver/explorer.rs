//! Memoized depth-first explorer
//!
//! Grows a search tree from the start word, always trying the child closest to
//! the goal first. A word whose subtree is exhausted becomes a dead end, and
//! later visits to that word from any parent stop immediately.
//!
//! The first ladder found is returned; it is not necessarily the shortest.

use super::dead_ends::DeadEnds;
use super::neighbors::neighbors;
use super::observer::{ExploreStats, SearchObserver};
use super::tree::{NodeId, SearchTree};
use crate::core::Word;
use crate::dictionary::{Dictionary, DictionaryError};
use rustc_hash::FxHashSet;

/// How an exploration ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreOutcome {
    /// Ladder from start to goal, both included
    Found(Vec<Word>),
    /// Every reachable word became a dead end
    Exhausted,
}

/// Pending work for one node on the depth-first stack
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    next_child: usize,
}

/// Depth-first search session
///
/// Owns its tree and dead-end memo, so separate sessions never share state.
pub struct Explorer<'d, D: Dictionary> {
    dictionary: &'d D,
    tree: SearchTree,
    dead_ends: DeadEnds,
    stats: ExploreStats,
}

impl<'d, D: Dictionary> Explorer<'d, D> {
    /// Create a session with an empty dead-end memo
    #[must_use]
    pub fn new(dictionary: &'d D, start: Word, goal: Word) -> Self {
        Self::with_dead_ends(dictionary, start, goal, DeadEnds::new())
    }

    /// Create a session seeded with an existing dead-end memo
    #[must_use]
    pub fn with_dead_ends(dictionary: &'d D, start: Word, goal: Word, dead_ends: DeadEnds) -> Self {
        let stats = ExploreStats {
            dead_ends: dead_ends.len(),
            ..ExploreStats::default()
        };

        Self {
            dictionary,
            tree: SearchTree::new(start, goal),
            dead_ends,
            stats,
        }
    }

    #[must_use]
    pub const fn stats(&self) -> ExploreStats {
        self.stats
    }

    #[must_use]
    pub const fn tree(&self) -> &SearchTree {
        &self.tree
    }

    #[must_use]
    pub const fn dead_ends(&self) -> &DeadEnds {
        &self.dead_ends
    }

    /// Give back the dead-end memo, dropping the tree
    #[must_use]
    pub fn into_dead_ends(self) -> DeadEnds {
        self.dead_ends
    }

    /// Explore until the goal is reached or nothing is left to try
    ///
    /// Visiting order matches a recursive depth-first walk; an explicit stack
    /// keeps long ladders off the call stack.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if a neighbor scan fails.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::dictionary::WordList;
    /// use word_ladder::solver::{ExploreOutcome, Explorer, SilentObserver};
    ///
    /// let dict = WordList::from_slice(&["cat", "cot", "cog", "dog"]);
    /// let start = Word::new("cat").unwrap();
    /// let goal = Word::new("dog").unwrap();
    ///
    /// let mut explorer = Explorer::new(&dict, start, goal);
    /// let outcome = explorer.run(&mut SilentObserver).unwrap();
    ///
    /// let ExploreOutcome::Found(path) = outcome else { panic!("no ladder") };
    /// let texts: Vec<&str> = path.iter().map(|w| w.text()).collect();
    /// assert_eq!(texts, ["cat", "cot", "cog", "dog"]);
    /// ```
    pub fn run<O: SearchObserver>(
        &mut self,
        observer: &mut O,
    ) -> Result<ExploreOutcome, DictionaryError> {
        let mut stack: Vec<Frame> = Vec::new();

        if let Some(outcome) = self.visit(self.tree.root(), &mut stack, observer)? {
            return Ok(outcome);
        }

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let next = self
                .tree
                .node(node)
                .children()
                .and_then(|children| children.get(frame.next_child))
                .copied();

            match next {
                Some(child) => {
                    frame.next_child += 1;
                    if let Some(outcome) = self.visit(child, &mut stack, observer)? {
                        return Ok(outcome);
                    }
                }
                None => {
                    stack.pop();
                    self.mark_dead(node, observer);
                }
            }
        }

        Ok(ExploreOutcome::Exhausted)
    }

    /// Enter a node: count it, check for the goal and dead ends, expand it
    fn visit<O: SearchObserver>(
        &mut self,
        id: NodeId,
        stack: &mut Vec<Frame>,
        observer: &mut O,
    ) -> Result<Option<ExploreOutcome>, DictionaryError> {
        self.stats.nodes_processed += 1;
        observer.on_visit(&self.stats, &self.tree, id);

        let node = self.tree.node(id);
        if node.word() == self.tree.goal() {
            return Ok(Some(ExploreOutcome::Found(self.tree.path_words(id))));
        }

        if self.dead_ends.contains(node.word().text()) {
            self.stats.dead_ends_skipped += 1;
            return Ok(None);
        }

        if !node.is_expanded() {
            self.expand(id, observer)?;
        }

        stack.push(Frame {
            node: id,
            next_child: 0,
        });
        Ok(None)
    }

    fn expand<O: SearchObserver>(
        &mut self,
        id: NodeId,
        observer: &mut O,
    ) -> Result<(), DictionaryError> {
        let found = {
            let on_path: FxHashSet<&str> = self
                .tree
                .lineage(id)
                .map(|step| self.tree.node(step).word().text())
                .collect();
            let word = self.tree.node(id).word().text();

            neighbors(self.dictionary, word, |candidate| on_path.contains(candidate))?
        };

        let count = self.tree.attach_children(id, found);
        observer.on_expand(self.tree.node(id).word(), count);
        Ok(())
    }

    fn mark_dead<O: SearchObserver>(&mut self, id: NodeId, observer: &mut O) {
        let word = self.tree.node(id).word();
        if self.dead_ends.insert(word.clone()) {
            self.stats.dead_ends = self.dead_ends.len();
            observer.on_dead_end(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance;
    use crate::dictionary::WordList;
    use crate::solver::SilentObserver;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(path: &[Word]) -> Vec<&str> {
        path.iter().map(Word::text).collect()
    }

    fn explore(entries: &[&str], start: &str, goal: &str) -> ExploreOutcome {
        let dict = WordList::from_slice(entries);
        Explorer::new(&dict, word(start), word(goal))
            .run(&mut SilentObserver)
            .unwrap()
    }

    /// Records the order of expansions and dead-end marks
    #[derive(Default)]
    struct EventLog {
        events: Vec<(char, String)>,
        visits: usize,
    }

    impl SearchObserver for EventLog {
        fn on_visit(&mut self, stats: &ExploreStats, _tree: &SearchTree, _node: NodeId) {
            self.visits += 1;
            assert_eq!(stats.nodes_processed, self.visits);
        }

        fn on_expand(&mut self, word: &Word, _children: usize) {
            self.events.push(('e', word.to_string()));
        }

        fn on_dead_end(&mut self, word: &Word) {
            self.events.push(('d', word.to_string()));
        }
    }

    #[test]
    fn finds_classic_ladder() {
        let outcome = explore(&["cat", "cot", "cog", "dog"], "cat", "dog");

        let ExploreOutcome::Found(path) = outcome else {
            panic!("expected a ladder");
        };
        assert_eq!(texts(&path), ["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn adjacent_goal_is_immediate() {
        let outcome = explore(&["cat", "bat"], "cat", "bat");
        assert_eq!(outcome, ExploreOutcome::Found(vec![word("cat"), word("bat")]));
    }

    #[test]
    fn start_equal_to_goal() {
        let outcome = explore(&["cat"], "cat", "cat");
        assert_eq!(outcome, ExploreOutcome::Found(vec![word("cat")]));
    }

    #[test]
    fn disconnected_words_exhaust() {
        let dict = WordList::from_slice(&["cat", "cot", "dog", "dig"]);
        let mut explorer = Explorer::new(&dict, word("cat"), word("dog"));

        let outcome = explorer.run(&mut SilentObserver).unwrap();

        assert_eq!(outcome, ExploreOutcome::Exhausted);
        assert!(explorer.dead_ends().contains("cat"));
        assert!(explorer.dead_ends().contains("cot"));
        assert!(!explorer.dead_ends().contains("dog"));
    }

    #[test]
    fn counts_skipped_dead_ends() {
        // cab is reached both around the cycle and directly from cat
        let dict = WordList::from_slice(&["cat", "cot", "cab", "cob", "zzz"]);
        let mut explorer = Explorer::new(&dict, word("cat"), word("zzz"));

        assert_eq!(explorer.run(&mut SilentObserver).unwrap(), ExploreOutcome::Exhausted);

        let stats = explorer.stats();
        assert_eq!(stats.dead_ends, 4);
        assert!(stats.dead_ends_skipped > 0);
        assert!(stats.nodes_processed >= explorer.tree().len() - stats.dead_ends_skipped);
    }

    #[test]
    fn closer_children_are_tried_first() {
        // Both bat and cot lead to the goal; cot is closer to dog
        let outcome = explore(&["cat", "bat", "bog", "cot", "cog", "dog", "bag"], "cat", "dog");

        let ExploreOutcome::Found(path) = outcome else {
            panic!("expected a ladder");
        };
        assert_eq!(path[1].text(), "cot");
    }

    #[test]
    fn path_never_repeats_an_ancestor() {
        let dict = WordList::embedded();
        let mut explorer = Explorer::new(&dict, word("cold"), word("zzzz"));
        let mut log = EventLog::default();
        let _ = explorer.run(&mut log).unwrap();

        let tree = explorer.tree();
        for id in tree.ids() {
            let word = tree.node(id).word();
            let repeats = tree.lineage(id).skip(1).any(|a| tree.node(a).word() == word);
            assert!(!repeats, "'{word}' appears among its own ancestors");
        }
    }

    #[test]
    fn dead_words_are_never_expanded_again() {
        let dict = WordList::from_slice(&[
            "cat", "cot", "cab", "cob", "hat", "hot", "hob", "hab", "zzz",
        ]);
        let mut explorer = Explorer::new(&dict, word("cat"), word("zzz"));
        let mut log = EventLog::default();
        explorer.run(&mut log).unwrap();

        let mut dead: FxHashSet<String> = FxHashSet::default();
        for (kind, word) in &log.events {
            match kind {
                'e' => assert!(!dead.contains(word), "'{word}' expanded after becoming a dead end"),
                'd' => assert!(dead.insert(word.clone()), "'{word}' marked dead twice"),
                _ => unreachable!(),
            }
        }
        assert_eq!(dead.len(), explorer.dead_ends().len());
    }

    #[test]
    fn injected_dead_ends_block_search() {
        let dict = WordList::from_slice(&["cat", "cot", "cog", "dog"]);
        let mut memo = DeadEnds::new();
        memo.insert(word("cot"));

        let mut explorer = Explorer::with_dead_ends(&dict, word("cat"), word("dog"), memo);
        assert_eq!(explorer.stats().dead_ends, 1);
        assert_eq!(explorer.run(&mut SilentObserver).unwrap(), ExploreOutcome::Exhausted);
        assert_eq!(explorer.stats().dead_ends_skipped, 1);
    }

    #[test]
    fn fresh_sessions_are_independent() {
        let dict = WordList::from_slice(&["cat", "cot", "cog", "dog", "zzz"]);

        let mut first = Explorer::new(&dict, word("cat"), word("zzz"));
        assert_eq!(first.run(&mut SilentObserver).unwrap(), ExploreOutcome::Exhausted);
        assert!(first.into_dead_ends().contains("cot"));

        let mut second = Explorer::new(&dict, word("cat"), word("dog"));
        assert!(matches!(
            second.run(&mut SilentObserver).unwrap(),
            ExploreOutcome::Found(_)
        ));
    }

    #[test]
    fn embedded_dictionary_ladders_are_valid() {
        let dict = WordList::embedded();

        for (start, goal) in [("cold", "warm"), ("head", "tail"), ("cat", "dog")] {
            let mut explorer = Explorer::new(&dict, word(start), word(goal));
            let ExploreOutcome::Found(path) = explorer.run(&mut SilentObserver).unwrap() else {
                panic!("no ladder from {start} to {goal}");
            };

            assert_eq!(path.first().map(Word::text), Some(start));
            assert_eq!(path.last().map(Word::text), Some(goal));
            for pair in path.windows(2) {
                assert_eq!(distance(pair[0].text(), pair[1].text()), 1);
            }
        }
    }

    /// Breadth-first reachability over the whole word graph, ignoring memos
    fn connected(entries: &[String], start: &str, goal: &str) -> bool {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut queue = VecDeque::from([start]);
        seen.insert(start);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                return true;
            }
            for next in entries {
                if distance(current, next) == 1 && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }

    fn random_dictionary(rng: &mut StdRng) -> Vec<String> {
        let alphabet = ['a', 'b', 'c'];
        let size = rng.random_range(2..=14);
        let mut entries: Vec<String> = Vec::new();

        while entries.len() < size {
            let entry: String = (0..3)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }
        entries
    }

    #[test]
    fn dead_end_memo_never_hides_a_ladder() {
        // A word memoized as dead under one path might still reach the goal
        // under another. Compare against plain reachability to catch that.
        let mut rng = StdRng::seed_from_u64(0x1add_e5);

        for _ in 0..500 {
            let entries = random_dictionary(&mut rng);
            let start = entries[0].clone();
            let goal = entries[entries.len() - 1].clone();

            let refs: Vec<&str> = entries.iter().map(String::as_str).collect();
            let outcome = explore(&refs, &start, &goal);
            let reachable = connected(&entries, &start, &goal);

            match outcome {
                ExploreOutcome::Found(path) => {
                    assert!(reachable);
                    assert_eq!(path[0].text(), start);
                    assert_eq!(path[path.len() - 1].text(), goal);
                    for pair in path.windows(2) {
                        assert_eq!(distance(pair[0].text(), pair[1].text()), 1);
                    }
                }
                ExploreOutcome::Exhausted => {
                    assert!(!reachable, "memo hid a ladder {start} -> {goal} in {entries:?}");
                }
            }
        }
    }
}
