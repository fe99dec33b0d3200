//! Data structures for the T9 decoder.
//!
//! This module contains the dictionary-membership structures the decoder
//! searches against. They are built once and then shared read-only.

pub mod word_trie;

// Re-export common data structures
pub use word_trie::{NodeId, NodeRef, WordTrie};
