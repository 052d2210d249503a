use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::tokenizer::read_words;

/// Builds a closure turning an `io::Error` into an [`Error::Io`] naming `path`.
pub(crate) fn with_path(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
	move |err| Error::Io { path: path.to_path_buf(), err }
}

/// Reads a whole file into memory.
pub(crate) fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
	let path = path.as_ref();
	fs::read(path).map_err(with_path(path))
}

/// Reads a text file and returns its lowercase words.
///
/// - Reads the entire file into memory
/// - Splits on any whitespace
///
/// # Errors
/// Returns [`Error::Io`] naming the file if it cannot be opened or read.
pub fn read_words_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
	let path = path.as_ref();
	let file = File::open(path).map_err(with_path(path))?;

	read_words(BufReader::new(file)).map_err(|err| match err {
		Error::Stream(err) => Error::Io { path: path.to_path_buf(), err },
		other => other,
	})
}
