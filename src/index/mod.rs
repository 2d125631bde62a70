// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prefix index (trie) over the target word.
//!
//! Nodes live in an arena owned by the [`PrefixIndex`] and are addressed by
//! [`NodeId`] handles, so the tree needs no shared ownership. Word completion
//! is an explicit flag on the node rather than a sentinel child edge.
//!
//! The index is built once and is read-only while searching. It is `Sync`,
//! so one index may be shared by concurrent searches.

mod node;

use node::Node;

/// Handle to a node inside a [`PrefixIndex`].
///
/// Only meaningful for the index that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    const ROOT: NodeId = NodeId(0);
}

/// A trie mapping symbol sequences to a terminal marker.
///
/// # Example
///
/// ```
/// use boggle_search::PrefixIndex;
///
/// let index = PrefixIndex::from_word("EAR");
/// let e = index.step(index.root(), 'E').unwrap();
/// let a = index.step(e, 'A').unwrap();
/// let r = index.step(a, 'R').unwrap();
/// assert!(index.is_terminal(r));
/// assert!(index.step(r, 'S').is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
}

impl PrefixIndex {
    /// Create an index containing only the root (the empty prefix).
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Create an index holding `word`.
    ///
    /// An empty word is accepted and stores nothing: the root stays
    /// non-terminal, so no search over this index can succeed.
    pub fn from_word(word: &str) -> Self {
        let mut index = Self::new();
        index.insert(word);
        index
    }

    /// Insert `word`, creating missing edges and marking the final node terminal.
    ///
    /// Inserting the same word again changes nothing. The empty word is a no-op.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current = NodeId::ROOT;
        for symbol in word.chars() {
            current = match self.step(current, symbol) {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(Node::default());
                    self.nodes[current.0].children.insert(symbol, child);
                    child
                }
            };
        }
        self.nodes[current.0].terminal = true;
    }

    /// Entry point for traversal.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Child of `node` along `symbol`, or `None` when there is no such edge.
    pub fn step(&self, node: NodeId, symbol: char) -> Option<NodeId> {
        self.nodes[node.0].children.get(&symbol).copied()
    }

    /// True iff the prefix ending at `node` is a complete stored word.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0].terminal
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Length of the longest stored word.
    ///
    /// Nodes are only appended below existing ones, so a depth-first walk
    /// from the root reaches every node.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(self.nodes[id.0].children.values().map(|&c| (c, depth + 1)));
        }
        deepest
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}
