use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A node of the frequency trie.
///
/// A `Node` stands for the word sequence spelled by the path from the root
/// to it, and counts how many times that exact sequence was seen during
/// training.
///
/// Conceptually, the children of a node at depth `d` are the outgoing edges
/// of a Markov chain state made of `d` words, weighted by their number of
/// observations.
///
/// ## Invariants
/// - Children are kept in ascending lexicographic order of their word
/// - Every child has a count of at least 1 (it is created when incremented)
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
	/// Number of occurrences of the path ending at this node.
	count: u32,
	/// Following words, indexed by the word itself.
	/// Example: { "cat" => Node(3), "dog" => Node(1) }
	children: BTreeMap<String, Node>,
}

impl Node {
	/// Assembles a decoded node.
	pub(crate) fn from_parts(count: u32, children: BTreeMap<String, Node>) -> Self {
		Self { count, children }
	}

	/// Number of times the path ending here was observed.
	pub fn count(&self) -> u32 {
		self.count
	}

	/// Words observed right after this path, in ascending key order.
	pub fn children(&self) -> &BTreeMap<String, Node> {
		&self.children
	}

	/// Returns the child reached through `word`, if any.
	pub fn child(&self, word: &str) -> Option<&Node> {
		self.children.get(word)
	}

	/// Returns the child reached through `word`, creating it with a
	/// count of 0 when it does not exist yet.
	pub(crate) fn child_or_insert(&mut self, word: &str) -> &mut Node {
		self.children.entry(word.to_owned()).or_default()
	}

	/// Records one more occurrence of this path.
	pub(crate) fn increment(&mut self) {
		self.count = self.count.saturating_add(1);
	}

	/// Returns the most frequent following word.
	///
	/// Children are scanned in ascending key order and a candidate only
	/// replaces the current best when its count is strictly greater, so the
	/// lexicographically smallest word wins a tie.
	///
	/// Returns `None` if the node has no children.
	pub fn best_child(&self) -> Option<&str> {
		let mut best = None;
		let mut max_count = 0;

		for (word, child) in &self.children {
			if child.count > max_count {
				best = Some(word.as_str());
				max_count = child.count;
			}
		}

		best
	}

	/// Checks the invariants of the subtree rooted at this node.
	///
	/// `depth` is the depth of this node, `max_depth` the deepest allowed.
	pub(crate) fn validate(&self, depth: usize, max_depth: usize) -> Result<(), String> {
		for (word, child) in &self.children {
			if depth + 1 > max_depth {
				return Err(format!("path through {word:?} is deeper than {max_depth} words"));
			}
			if child.count == 0 {
				return Err(format!("word {word:?} at depth {} has a zero count", depth + 1));
			}
			child.validate(depth + 1, max_depth)?;
		}
		Ok(())
	}

	/// Writes the subtree rooted at this node in a nested, indented form.
	pub(crate) fn write_tree(&self, f: &mut impl fmt::Write, indent: usize) -> fmt::Result {
		let pad = " ".repeat(indent);

		writeln!(f, "{pad}{}", self.count)?;
		for (word, child) in &self.children {
			writeln!(f, "{pad}{word}: {{")?;
			child.write_tree(f, indent + 2)?;
			writeln!(f, "{pad}}}")?;
		}
		Ok(())
	}
}
