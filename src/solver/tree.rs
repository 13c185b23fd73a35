//! Search tree arena
//!
//! Nodes live in a single vector and refer to each other by index. A node knows
//! its parent for path reconstruction; it never owns it.

use crate::core::{Word, distance};

/// Handle to a node in a `SearchTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One step of a candidate ladder
#[derive(Debug, Clone)]
pub struct SearchNode {
    word: Word,
    parent: Option<NodeId>,
    children: Option<Vec<NodeId>>,
    distance_to_goal: usize,
}

impl SearchNode {
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in visiting order, or `None` until the node is expanded
    #[inline]
    #[must_use]
    pub fn children(&self) -> Option<&[NodeId]> {
        self.children.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    /// Distance from this word to the goal, fixed at creation
    #[inline]
    #[must_use]
    pub const fn distance_to_goal(&self) -> usize {
        self.distance_to_goal
    }
}

/// Lazily grown tree of candidate ladders rooted at the start word
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    goal: Word,
}

impl SearchTree {
    const ROOT: NodeId = NodeId(0);

    /// Create a tree holding only the root
    #[must_use]
    pub fn new(root: Word, goal: Word) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            goal,
        };
        tree.push(root, None);
        tree
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        Self::ROOT
    }

    #[inline]
    #[must_use]
    pub const fn goal(&self) -> &Word {
        &self.goal
    }

    /// Get a node by handle
    ///
    /// # Panics
    /// Panics if the handle came from a different tree.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Number of nodes created so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node handles in creation order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Walk from a node up to the root, starting with the node itself
    pub fn lineage(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        std::iter::successors(Some(id), |&current| self.nodes[current.0].parent)
    }

    /// Node handles from the root down to `id`
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path: Vec<NodeId> = self.lineage(id).collect();
        path.reverse();
        path
    }

    /// Words from the root down to `id`
    #[must_use]
    pub fn path_words(&self, id: NodeId) -> Vec<Word> {
        self.path(id)
            .into_iter()
            .map(|step| self.nodes[step.0].word.clone())
            .collect()
    }

    /// Populate a node's children, ordered by distance to the goal
    ///
    /// The sort is stable, so equally distant words keep dictionary order.
    /// Returns the number of children created.
    pub(crate) fn attach_children(&mut self, id: NodeId, words: Vec<Word>) -> usize {
        debug_assert!(!self.nodes[id.0].is_expanded(), "node expanded twice");

        let mut children: Vec<NodeId> = words
            .into_iter()
            .map(|word| self.push(word, Some(id)))
            .collect();
        children.sort_by_key(|child| self.nodes[child.0].distance_to_goal);

        let count = children.len();
        self.nodes[id.0].children = Some(children);
        count
    }

    fn push(&mut self, word: Word, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let distance_to_goal = distance(word.text(), self.goal.text());
        self.nodes.push(SearchNode {
            word,
            parent,
            children: None,
            distance_to_goal,
        });
        id
    }
}
