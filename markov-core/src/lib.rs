//! Word-level Markov chain text generation library.
//!
//! This crate provides a fixed-order Markov chain over words, including:
//! - A frequency trie counting every word sequence of up to `order + 1` words
//! - Training from tokenized text
//! - Deterministic generation, always picking the most frequent next word
//!   and backing off to shorter contexts when needed
//! - Compact binary persistence of trained models
//!
//! ```
//! use markov_core::{extract_words, FrequencyTrie};
//!
//! let mut model = FrequencyTrie::new(1)?;
//! model.train(&extract_words("a b a b a c"));
//!
//! assert_eq!(model.extend(&["a"], 2)?, vec!["b", "a"]);
//! # Ok::<(), markov_core::Error>(())
//! ```

/// Error type shared by the whole crate.
pub mod error;

/// Frequency trie, training, generation and persistence.
pub mod model;

/// Whitespace tokenizer.
pub mod tokenizer;

/// File helpers (reading words, attaching paths to I/O errors).
pub mod io;

pub use error::{Error, Result};
pub use model::codec;
pub use model::generator::Generator;
pub use model::node::Node;
pub use model::trie::{FrequencyTrie, MAX_ORDER};
pub use tokenizer::{extract_words, read_words};
