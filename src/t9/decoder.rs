// Copyright (c) 2025 T9 Decoder Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Digit-sequence to word search.
//!
//! The search walks the digit string and the trie together. At each position
//! it tries the letters of the current key in keypad order and only descends
//! where the trie has a matching child, so whole letter subtrees are dropped
//! the moment no dictionary word shares the prefix.

use std::sync::Arc;
use std::time::Instant;

use super::keypad;
use crate::data_structures::{NodeRef, WordTrie};

/// Returns every word in `trie` whose keypad encoding is exactly `digits`.
///
/// Words come out in depth-first order with each key's letters tried in
/// keypad order. An empty sequence, a `0` or `1`, or any non-digit character
/// yields no words.
pub fn decode(trie: &WordTrie, digits: &str) -> Vec<String> {
    let mut results = Vec::new();
    if digits.is_empty() {
        return results;
    }

    let digits: Vec<char> = digits.chars().collect();
    let mut prefix = String::with_capacity(digits.len());
    let mut stack: Vec<(NodeRef<'_>, usize)> = vec![(trie.root(), 0)];

    while let Some((node, depth)) = stack.pop() {
        // Keypad letters are ASCII, so the prefix holds one byte per level.
        if let Some(c) = node.character() {
            prefix.truncate(depth - 1);
            prefix.push(c);
        }

        if depth == digits.len() {
            if node.is_terminal() {
                results.push(prefix.clone());
            }
            continue;
        }

        let Some(letters) = keypad::letters_for(digits[depth]) else {
            continue;
        };

        // Reversed so the first letter of the key is popped first.
        for &letter in letters.iter().rev() {
            if let Some(child) = node.child(letter) {
                stack.push((child, depth + 1));
            }
        }
    }

    results
}

fn decode_logged(trie: &WordTrie, digits: &str) -> Vec<String> {
    let started = Instant::now();
    let words = decode(trie, digits);
    tracing::debug!(
        digits,
        matches = words.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "Decoded digit sequence"
    );
    words
}

/// Decoder bound to one finished dictionary.
///
/// Cloning is cheap; clones share the same trie.
#[derive(Debug, Clone)]
pub struct T9Decoder {
    trie: Arc<WordTrie>,
    workers: usize,
}

impl T9Decoder {
    /// Creates a decoder that batches across all available CPUs.
    pub fn new(trie: Arc<WordTrie>) -> Self {
        Self::with_workers(trie, num_cpus::get())
    }

    /// Creates a decoder that uses at most `workers` threads per batch.
    pub fn with_workers(trie: Arc<WordTrie>, workers: usize) -> Self {
        Self {
            trie,
            workers: workers.max(1),
        }
    }

    /// The dictionary this decoder searches.
    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    /// Maximum number of threads used by [`decode_batch`](Self::decode_batch).
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Decodes a single digit sequence.
    pub fn decode(&self, digits: &str) -> Vec<String> {
        decode_logged(&self.trie, digits)
    }

    /// Decodes many sequences, splitting them across worker threads.
    ///
    /// Results are returned in the same order as `queries`.
    pub fn decode_batch<S>(&self, queries: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        let workers = self.workers.min(queries.len());
        if workers <= 1 {
            return queries.iter().map(|q| self.decode(q.as_ref())).collect();
        }

        let chunk_size = (queries.len() + workers - 1) / workers;
        let trie: &WordTrie = &self.trie;
        tracing::debug!(
            queries = queries.len(),
            workers,
            chunk_size,
            "Decoding batch"
        );

        // Workers report through the caller's subscriber and span.
        let dispatch = tracing::dispatcher::get_default(|current| current.clone());
        let span = tracing::Span::current();

        std::thread::scope(|scope| {
            let handles: Vec<_> = queries
                .chunks(chunk_size)
                .map(|chunk| {
                    let dispatch = &dispatch;
                    let span = &span;
                    scope.spawn(move || {
                        tracing::dispatcher::with_default(dispatch, || {
                            span.in_scope(|| {
                                chunk
                                    .iter()
                                    .map(|q| decode_logged(trie, q.as_ref()))
                                    .collect::<Vec<_>>()
                            })
                        })
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    /// Counts per-query decode events.
    struct DecodeEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for DecodeEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().fields().field("matches").is_some() {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn trie(words: &[&str]) -> WordTrie {
        WordTrie::from_words(words.iter().copied())
    }

    #[test]
    fn test_anagrams_on_same_keys() {
        let trie = trie(&["cab", "cat", "act"]);
        assert_eq!(decode(&trie, "228"), vec!["act", "cat"]);
        assert_eq!(decode(&trie, "222"), vec!["cab"]);
    }

    #[test]
    fn test_single_word() {
        let trie = trie(&["hello"]);
        assert_eq!(decode(&trie, "43556"), vec!["hello"]);
        assert!(decode(&trie, "4355").is_empty());
        assert!(decode(&trie, "435566").is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(decode(&WordTrie::new(), "228").is_empty());
        assert!(decode(&trie(&["a"]), "").is_empty());
    }

    #[test]
    fn test_keys_without_letters_match_nothing() {
        let trie = trie(&["ad", "be"]);
        assert_eq!(decode(&trie, "23"), vec!["ad", "be"]);
        assert!(decode(&trie, "203").is_empty());
        assert!(decode(&trie, "123").is_empty());
        assert!(decode(&trie, "2x3").is_empty());
        assert!(decode(&trie, "2 3").is_empty());
    }

    #[test]
    fn test_prefix_words_need_full_length() {
        let trie = trie(&["go", "good", "home", "gone", "hood"]);
        assert_eq!(decode(&trie, "46"), vec!["go"]);
        assert_eq!(decode(&trie, "4663"), vec!["gone", "good", "home", "hood"]);
    }

    #[test]
    fn test_order_follows_keypad_letters() {
        let trie = trie(&["s", "p", "r", "q"]);
        assert_eq!(decode(&trie, "7"), vec!["p", "q", "r", "s"]);
    }

    #[test]
    fn test_uppercase_words_are_not_reachable() {
        let trie = trie(&["Hello", "hello"]);
        assert_eq!(decode(&trie, "43556"), vec!["hello"]);
    }

    #[test]
    fn test_long_sequence_does_not_recurse() {
        let word = "a".repeat(10_000);
        let digits = "2".repeat(10_000);
        let trie = WordTrie::from_words([word.as_str()]);
        assert_eq!(decode(&trie, &digits), vec![word]);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let trie = Arc::new(trie(&["cab", "cat", "act", "hello", "good", "home"]));
        let decoder = T9Decoder::with_workers(Arc::clone(&trie), 3);
        let queries = vec!["228", "43556", "4663", "0", "", "228", "99"];

        let batch = decoder.decode_batch(&queries);
        let sequential: Vec<_> = queries.iter().map(|q| decode(&trie, q)).collect();
        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_batch_edge_sizes() {
        let decoder = T9Decoder::with_workers(Arc::new(trie(&["hello"])), 0);
        assert_eq!(decoder.workers(), 1);

        let empty: Vec<String> = Vec::new();
        assert!(decoder.decode_batch(&empty).is_empty());
        assert_eq!(decoder.decode_batch(&["43556"]), vec![vec!["hello".to_string()]]);
    }

    #[test]
    fn test_every_batch_query_is_logged() {
        let decoder = T9Decoder::with_workers(Arc::new(trie(&["cab", "cat", "act"])), 1);
        let queries = ["228", "222", "9", "228", "2", "0"];

        for workers in [1, 3] {
            let count = Arc::new(AtomicUsize::new(0));
            let subscriber =
                tracing_subscriber::registry().with(DecodeEvents(Arc::clone(&count)));
            let decoder = T9Decoder::with_workers(Arc::clone(&decoder.trie), workers);

            tracing::subscriber::with_default(subscriber, || decoder.decode_batch(&queries));
            assert_eq!(count.load(Ordering::SeqCst), queries.len(), "workers = {workers}");
        }
    }
}
