use std::collections::VecDeque;
use std::io::Read;

use log::{debug, trace};

use super::trie::FrequencyTrie;
use crate::error::{Error, Result};
use crate::tokenizer::read_words;

/// Deterministic word generator over a trained [`FrequencyTrie`].
///
/// # Responsibilities
/// - Keep the chain of the last `order` words as lookup context
/// - Emit the most frequent continuation of the chain
/// - Back off by dropping the oldest chain word when the chain is unknown
///
/// The generator only borrows the trie, so any number of generators can
/// run over the same trained model.
///
/// Iterating yields one word per step and stops for good once the chain
/// has been backed off to nothing.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
	trie: &'a FrequencyTrie,
	chain: VecDeque<String>,
}

impl<'a> Generator<'a> {
	/// Creates a generator whose chain holds the last `order` words of `seed`.
	pub fn new<S: AsRef<str>>(trie: &'a FrequencyTrie, seed: &[S]) -> Self {
		let start = seed.len() - seed.len().min(trie.order());
		let chain = seed[start..].iter().map(|word| word.as_ref().to_owned()).collect();
		Self { trie, chain }
	}

	/// Current lookup context, oldest word first.
	pub fn chain(&self) -> impl Iterator<Item = &str> {
		self.chain.iter().map(String::as_str)
	}

	/// Generates the next word.
	///
	/// The whole chain is looked up as an exact path from the root. On a
	/// miss the oldest word is dropped and the lookup is retried, until a
	/// word is found or the chain is empty.
	///
	/// Returns `None` when no continuation exists at any backoff level.
	pub fn next_word(&mut self) -> Option<String> {
		loop {
			if self.chain.is_empty() {
				return None;
			}

			if let Some(word) = self.trie.best_next_word(&self.chain) {
				let word = word.to_owned();
				self.chain.push_back(word.clone());
				if self.chain.len() > self.trie.order() {
					self.chain.pop_front();
				}
				return Some(word);
			}

			let dropped = self.chain.pop_front();
			trace!("no continuation, backing off past {:?}", dropped);
		}
	}

	/// Generates exactly `extension_size` words.
	///
	/// # Errors
	/// Returns [`Error::Exhausted`] if the chain runs out before enough
	/// words were generated. Partial output is discarded.
	pub fn extend(self, extension_size: usize) -> Result<Vec<String>> {
		let generated: Vec<String> = self.take(extension_size).collect();

		if generated.len() < extension_size {
			debug!("generation exhausted after {} of {} words", generated.len(), extension_size);
			return Err(Error::Exhausted { generated: generated.len(), requested: extension_size });
		}
		Ok(generated)
	}
}

impl Iterator for Generator<'_> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		self.next_word()
	}
}

impl FrequencyTrie {
	/// Continues `seed` with `extension_size` generated words.
	///
	/// # Notes
	/// - The result never includes the seed itself.
	/// - An `extension_size` of 0 succeeds without looking at the model.
	///
	/// # Errors
	/// Returns [`Error::Exhausted`] if no continuation is found even after
	/// backing off to an empty chain.
	pub fn extend<S: AsRef<str>>(&self, seed: &[S], extension_size: usize) -> Result<Vec<String>> {
		Generator::new(self, seed).extend(extension_size)
	}

	/// Tokenizes everything `reader` yields and continues it.
	///
	/// # Errors
	/// Returns an error if the reader fails, or [`Error::Exhausted`] as
	/// [`FrequencyTrie::extend`] does.
	pub fn extend_from_reader<R: Read>(
		&self,
		reader: R,
		extension_size: usize,
	) -> Result<Vec<String>> {
		let seed = read_words(reader)?;
		self.extend(&seed, extension_size)
	}
}
