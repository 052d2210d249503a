use std::collections::BTreeMap;
use std::fmt;

use super::node::Node;
use crate::error::{Error, Result};

/// Largest accepted chain order.
///
/// Saving, loading and dumping walk the trie recursively, one stack frame
/// per word of a path, so the depth has to stay small.
pub const MAX_ORDER: usize = 255;

/// Word-level Markov chain model stored as a frequency trie.
///
/// Every path from the root spells a word sequence seen during training,
/// and each node counts the occurrences of its path. The root counts the
/// number of training windows.
///
/// # Responsibilities
/// - Count word sequences of up to `order + 1` words
/// - Look up the words that followed a given prefix
/// - Pick the most frequent continuation of a prefix, deterministically
///
/// # Invariants
/// - `order` is always in `1..=MAX_ORDER`
/// - No path is deeper than `order + 1` words
/// - Counts never decrease
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTrie {
	/// Number of preceding words used as context (must be >= 1)
	order: usize,

	/// Unlabeled root, its count is the number of trained windows
	root: Node,
}

impl FrequencyTrie {
	/// Creates an empty trie of the given order.
	///
	/// # Errors
	/// - [`Error::InvalidOrder`] if `order` is 0.
	/// - [`Error::OrderTooLarge`] if `order` is above [`MAX_ORDER`].
	pub fn new(order: usize) -> Result<Self> {
		if order == 0 {
			return Err(Error::InvalidOrder);
		}
		if order > MAX_ORDER {
			return Err(Error::OrderTooLarge { order, max: MAX_ORDER });
		}
		Ok(Self { order, root: Node::default() })
	}

	/// Checks a decoded order, returning the deepest allowed path.
	pub(crate) fn check_decoded_order(order: usize) -> Result<usize> {
		if order == 0 || order > MAX_ORDER {
			return Err(Error::Format(format!("chain order {order} is outside 1..={MAX_ORDER}")));
		}
		Ok(order.saturating_add(1))
	}

	/// Rebuilds a trie from decoded parts, checking its invariants.
	pub(crate) fn from_parts(order: usize, root: Node) -> Result<Self> {
		let max_depth = Self::check_decoded_order(order)?;
		root.validate(0, max_depth).map_err(Error::Format)?;
		Ok(Self { order, root })
	}

	/// Longest path recorded by training.
	pub(crate) fn window(&self) -> usize {
		self.order.saturating_add(1)
	}

	/// Returns the order of the model.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Returns the root node.
	pub fn root(&self) -> &Node {
		&self.root
	}

	/// Returns the number of training windows recorded so far.
	pub fn root_count(&self) -> u32 {
		self.root.count()
	}

	/// Returns `true` if nothing was trained yet.
	pub fn is_empty(&self) -> bool {
		self.root.children().is_empty()
	}

	/// Returns the node reached by following `path` exactly from the root.
	pub fn node<I>(&self, path: I) -> Option<&Node>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		path.into_iter()
			.try_fold(&self.root, |node, word| node.child(word.as_ref()))
	}

	/// Records one occurrence of `words` and of each of its prefixes.
	///
	/// Walks from the root along `words`, creating missing nodes with a
	/// count of 0, and increments the root and every visited node.
	///
	/// # Notes
	/// - Only the first `order + 1` words are used.
	pub fn increment_path<I>(&mut self, words: I)
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let window = self.window();
		let mut node = &mut self.root;
		node.increment();

		for word in words.into_iter().take(window) {
			node = node.child_or_insert(word.as_ref());
			node.increment();
		}
	}

	/// Returns the words that followed `prefix`, with their nodes.
	///
	/// An empty prefix returns the children of the root.
	/// Returns `None` if some word of the prefix has no matching child.
	pub fn lookup_children<I>(&self, prefix: I) -> Option<&BTreeMap<String, Node>>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		self.node(prefix).map(Node::children)
	}

	/// Returns the most frequent word observed right after `prefix`.
	///
	/// Returns `None` if the prefix is unknown or was never followed by a
	/// word. Ties are broken in favour of the lexicographically smallest
	/// word (see [`Node::best_child`]).
	pub fn best_next_word<I>(&self, prefix: I) -> Option<&str>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		self.node(prefix)?.best_child()
	}

	/// Writes a nested, human-readable dump of the whole trie.
	///
	/// Used for inspection only; the format is not meant to be parsed.
	pub fn dump(&self, out: &mut impl std::io::Write) -> std::io::Result<()> {
		write!(out, "{self}")
	}
}

impl fmt::Display for FrequencyTrie {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.root.write_tree(f, 0)
	}
}
