//! T9 Decoder Library
//!
//! This library maps telephone-keypad digit sequences to every dictionary
//! word they could spell. The core is a prefix tree of dictionary words and a
//! depth-first search that walks the digit string and the tree together,
//! pruning any letter path no word continues.
//!
//! # Architecture
//!
//! - [`data_structures`]: the word trie, built once and read-only afterwards
//! - [`t9`]: the keypad table and the decoder
//! - [`dictionary`]: word list loading
//! - [`cli`]: query input and result rendering for the binary
//! - [`config`] and [`error`]: configuration layering and error types
//!
//! Results are not ranked; every match is returned.

pub mod cli;
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod t9;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::WordTrie;
pub use t9::{decode, T9Decoder};

/// Version information for the T9 decoder.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
