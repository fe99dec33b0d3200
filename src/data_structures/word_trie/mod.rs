// Copyright (c) 2025 T9 Decoder Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Trie Implementation
//!
//! This module provides the dictionary-membership structure used by the T9
//! decoder: a character-indexed prefix tree with a terminal flag on every node
//! where a complete word ends.
//!
//! The trie is built once from a word list and is read-only afterwards. All
//! query methods take `&self`, so a finished trie can be wrapped in an `Arc`
//! and read from many threads without locking.
//!
//! # Example
//!
//! ```
//! use t9_decoder_lib::data_structures::WordTrie;
//!
//! let trie = WordTrie::from_words(["cab", "cat", "act"]);
//!
//! assert!(trie.contains("cat", true));
//! assert!(trie.contains("ca", false));
//! assert!(!trie.contains("ca", true));
//! ```

mod node;

pub use node::NodeId;
use node::TrieNode;

/// Prefix tree of dictionary words.
///
/// Nodes are stored in a flat arena and linked by [`NodeId`]. The root sits at
/// [`NodeId::ROOT`], carries no character and is never terminal: empty words
/// are skipped on insertion.
#[derive(Debug, Clone)]
pub struct WordTrie {
    /// Arena of nodes, root first
    nodes: Vec<TrieNode>,

    /// Number of distinct words stored
    word_count: usize,
}

impl WordTrie {
    /// Creates a new empty `WordTrie` containing only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            word_count: 0,
        }
    }

    /// Builds a trie containing exactly the given words.
    ///
    /// Empty entries are ignored and duplicates collapse onto the same path.
    /// No character-set validation happens here; any character may be stored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(words);
        tracing::debug!(
            words = trie.len(),
            nodes = trie.node_count(),
            "Built word trie"
        );
        trie
    }

    /// Inserts a word into the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// `true` if the word was not present before, `false` if it was already
    /// stored or is empty.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        let mut current = NodeId::ROOT;
        for c in word.chars() {
            let existing = self.nodes[current.index()].children.get(&c).copied();
            current = match existing {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::new(c));
                    self.nodes[current.index()].children.insert(c, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current.index()];
        if node.is_terminal {
            return false;
        }
        node.is_terminal = true;
        self.word_count += 1;
        true
    }

    /// Determines whether the trie contains a given prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The character path to walk from the root.
    /// * `exact` - Whether the path must end at a complete word.
    ///
    /// # Returns
    ///
    /// `false` as soon as a character has no matching child. Otherwise `true`
    /// when `exact` is `false`, or the terminal flag of the last node.
    pub fn contains<P>(&self, prefix: P, exact: bool) -> bool
    where
        P: AsRef<str>,
    {
        match self.find(prefix.as_ref()) {
            Some(node) => !exact || node.is_terminal(),
            None => false,
        }
    }

    /// Checks whether `word` is a complete dictionary word.
    pub fn contains_word<W: AsRef<str>>(&self, word: W) -> bool {
        self.contains(word, true)
    }

    /// Checks whether any stored word starts with `prefix`.
    pub fn contains_prefix<P: AsRef<str>>(&self, prefix: P) -> bool {
        self.contains(prefix, false)
    }

    /// Returns a read-only handle to the root for co-traversal.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            trie: self,
            id: NodeId::ROOT,
        }
    }

    /// Walks `prefix` from the root and returns the node it ends at.
    pub fn find(&self, prefix: &str) -> Option<NodeRef<'_>> {
        prefix
            .chars()
            .try_fold(self.root(), |node, c| node.child(c))
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for WordTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTrie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Self::from_words(words)
    }
}

/// Read-only handle to a node of a [`WordTrie`].
///
/// Handles borrow the trie, so they cannot outlive it and the trie cannot be
/// modified while any handle exists.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    trie: &'a WordTrie,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// Arena index of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Character on the edge leading to this node, `None` for the root.
    pub fn character(&self) -> Option<char> {
        self.trie.node(self.id).character
    }

    /// Returns true if a dictionary word ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.trie.node(self.id).is_terminal
    }

    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<NodeRef<'a>> {
        let trie = self.trie;
        trie.node(self.id)
            .children
            .get(&c)
            .map(|&id| NodeRef { trie, id })
    }

    /// Iterates over the children of this node in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeRef<'a>)> + 'a {
        let trie = self.trie;
        trie.node(self.id)
            .children
            .iter()
            .map(move |(&c, &id)| (c, NodeRef { trie, id }))
    }

    /// Returns true if no child hangs below this node.
    pub fn is_leaf(&self) -> bool {
        self.trie.node(self.id).children.is_empty()
    }
}
