//! Whitespace tokenizer.
//!
//! Turns raw text into the lowercase word sequence consumed by training
//! and generation.

use std::io::Read;

use crate::error::Result;

/// Splits `text` into lowercase words.
///
/// - Splits on any Unicode whitespace
/// - Never yields empty words
pub fn extract_words(text: &str) -> Vec<String> {
	text.split_whitespace()
		.map(str::to_lowercase)
		.collect()
}

/// Reads `reader` to the end and splits its content into lowercase words.
///
/// # Errors
/// Returns [`crate::Error::Stream`] if reading fails or the content is not UTF-8.
pub fn read_words<R: Read>(mut reader: R) -> Result<Vec<String>> {
	let mut contents = String::new();
	reader.read_to_string(&mut contents)?;
	Ok(extract_words(&contents))
}
