// Copyright (c) 2025 T9 Decoder Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! T9 keypad decoding.
//!
//! # Example
//!
//! ```
//! use t9_decoder_lib::data_structures::WordTrie;
//! use t9_decoder_lib::t9;
//!
//! let trie = WordTrie::from_words(["cab", "cat", "act"]);
//! assert_eq!(t9::decode(&trie, "228"), vec!["act", "cat"]);
//! assert_eq!(t9::decode(&trie, "222"), vec!["cab"]);
//! assert_eq!(t9::encode("cab").as_deref(), Some("222"));
//! ```
//!
//! There is no ranking: every dictionary word on the typed keys is returned.

mod decoder;
pub mod keypad;

pub use decoder::{decode, T9Decoder};
pub use keypad::{digit_for, encode, letters_for};
