//! Error types for the Markov chain library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for training, persistence and generation.
#[derive(Error, Debug)]
pub enum Error {
	/// A chain of order 0 can never be extended
	#[error("Chain order must be positive")]
	InvalidOrder,

	/// Chains longer than `MAX_ORDER` words are not supported
	#[error("Chain order {order} is too large (maximum {max})")]
	OrderTooLarge { order: usize, max: usize },

	/// I/O error with file context
	#[error("I/O error for {path}: {err}")]
	Io {
		path: PathBuf,
		#[source]
		err: std::io::Error,
	},

	/// I/O error on a reader or writer without a known path
	#[error("I/O error: {0}")]
	Stream(#[from] std::io::Error),

	/// The persisted bytes could not be decoded (truncated, bad length, bad varint)
	#[error("Malformed model data: {0}")]
	Codec(#[from] postcard::Error),

	/// The persisted bytes decoded, but do not describe a valid model
	#[error("Invalid model: {0}")]
	Format(String),

	/// No continuation was found, even after backing off to an empty chain
	#[error("Cannot continue the text: generated {generated} of {requested} words")]
	Exhausted { generated: usize, requested: usize },
}

impl Error {
	/// Returns `true` when generation ran out of continuations.
	///
	/// This is an expected outcome of a small training corpus rather than
	/// a failure of the program, and callers usually report it differently.
	pub fn is_exhausted(&self) -> bool {
		matches!(self, Error::Exhausted { .. })
	}
}

/// Result type alias for Markov chain operations.
pub type Result<T> = std::result::Result<T, Error>;
