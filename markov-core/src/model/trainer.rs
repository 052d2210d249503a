use std::io::Read;

use log::debug;

use super::trie::FrequencyTrie;
use crate::error::Result;
use crate::tokenizer::read_words;

impl FrequencyTrie {
	/// Adds a tokenized text to the model.
	///
	/// A window of up to `order + 1` words starts at every token, and each
	/// window is recorded with [`FrequencyTrie::increment_path`].
	///
	/// # Notes
	/// - Windows near the end of the text are shorter and only create
	///   shallower paths.
	/// - Training twice on the same text doubles every count.
	pub fn train<S: AsRef<str>>(&mut self, tokens: &[S]) {
		let window = self.window();

		for start in 0..tokens.len() {
			let end = tokens.len().min(start.saturating_add(window));
			self.increment_path(&tokens[start..end]);
		}

		debug!("trained {} windows of up to {} words", tokens.len(), window);
	}

	/// Tokenizes everything `reader` yields and trains on it.
	///
	/// # Errors
	/// Returns an error if the reader fails or yields invalid UTF-8.
	pub fn train_from_reader<R: Read>(&mut self, reader: R) -> Result<()> {
		let tokens = read_words(reader)?;
		self.train(&tokens);
		Ok(())
	}
}
