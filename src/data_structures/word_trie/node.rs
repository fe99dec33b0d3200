// Copyright (c) 2025 T9 Decoder Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the word trie.
//!
//! Nodes live in a flat arena owned by [`WordTrie`](super::WordTrie) and refer
//! to their children by index, so the tree has no shared ownership and no
//! back-references.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Child links of a node, keyed by the character that leads to them.
pub(crate) type ChildMap = HashMap<char, NodeId, FnvBuildHasher>;

/// Index of a node inside the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node always sits at index 0.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the word trie.
///
/// Each node represents one character of a word path. Terminal nodes mark the
/// end of a complete dictionary word.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    /// Character on the edge leading here, `None` for the root
    pub(crate) character: Option<char>,

    /// Whether a word ends exactly at this node
    pub(crate) is_terminal: bool,

    /// Map of characters to child nodes
    pub(crate) children: ChildMap,
}

impl TrieNode {
    /// Creates the character-less root node.
    pub(crate) fn root() -> Self {
        Self::with_character(None)
    }

    /// Creates a non-terminal node reached through `character`.
    pub(crate) fn new(character: char) -> Self {
        Self::with_character(Some(character))
    }

    fn with_character(character: Option<char>) -> Self {
        Self {
            character,
            is_terminal: false,
            children: ChildMap::with_hasher(FnvBuildHasher::default()),
        }
    }
}
