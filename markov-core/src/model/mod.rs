//! Top-level module for the Markov chain model.
//!
//! This module provides:
//! - The frequency trie and its nodes (`FrequencyTrie`, `Node`)
//! - Training over token sequences
//! - Deterministic generation with backoff (`Generator`)
//! - Binary persistence (`codec`)

/// Node of the frequency trie.
///
/// Holds an occurrence count and the sorted map of following words.
pub mod node;

/// Fixed-order frequency trie (`order >= 1`).
///
/// Handles path counting, prefix lookup and most-frequent continuation.
pub mod trie;

/// Training: counting every window of `order + 1` words.
mod trainer;

/// Deterministic generation over a trained trie.
///
/// Keeps a bounded chain of recent words and backs off by dropping the
/// oldest one whenever the chain is unknown.
pub mod generator;

/// Binary encoding of trained models, based on `postcard`.
pub mod codec;
