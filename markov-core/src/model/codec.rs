//! Binary persistence of trained models.
//!
//! A model is stored with `postcard` as:
//! - the format version
//! - the chain order
//! - the root node, depth first: its count, its number of children, then
//!   every `(word, child)` pair in ascending word order
//!
//! Children are kept in a sorted map, so encoding the same model always
//! yields the same bytes.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::node::Node;
use super::trie::FrequencyTrie;
use crate::error::{Error, Result};
use crate::io::{read_bytes, with_path};

/// Version written at the start of every encoded model.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct ModelRef<'a> {
	format_version: u32,
	order: usize,
	root: &'a Node,
}

impl<'a> From<&'a FrequencyTrie> for ModelRef<'a> {
	fn from(trie: &'a FrequencyTrie) -> Self {
		Self { format_version: FORMAT_VERSION, order: trie.order(), root: trie.root() }
	}
}

/// Decodes a node whose subtree may hold at most `depth` more levels.
///
/// Decoding stops at the first word past that depth, so nesting in the
/// input never goes deeper than the declared order allows.
#[derive(Clone, Copy)]
struct NodeSeed {
	depth: usize,
}

impl<'de> DeserializeSeed<'de> for NodeSeed {
	type Value = Node;

	fn deserialize<D: Deserializer<'de>>(
		self,
		deserializer: D,
	) -> std::result::Result<Node, D::Error> {
		deserializer.deserialize_struct("Node", &["count", "children"], self)
	}
}

impl<'de> Visitor<'de> for NodeSeed {
	type Value = Node;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "a trie node at most {} levels deep", self.depth)
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Node, A::Error> {
		let count = seq
			.next_element::<u32>()?
			.ok_or_else(|| de::Error::invalid_length(0, &self))?;
		let children = seq
			.next_element_seed(ChildrenSeed { depth: self.depth })?
			.ok_or_else(|| de::Error::invalid_length(1, &self))?;
		Ok(Node::from_parts(count, children))
	}
}

/// Decodes the sorted children of a node, see [`NodeSeed`].
#[derive(Clone, Copy)]
struct ChildrenSeed {
	depth: usize,
}

impl<'de> DeserializeSeed<'de> for ChildrenSeed {
	type Value = BTreeMap<String, Node>;

	fn deserialize<D: Deserializer<'de>>(
		self,
		deserializer: D,
	) -> std::result::Result<Self::Value, D::Error> {
		deserializer.deserialize_map(self)
	}
}

impl<'de> Visitor<'de> for ChildrenSeed {
	type Value = BTreeMap<String, Node>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("children in ascending word order")
	}

	fn visit_map<A: MapAccess<'de>>(
		self,
		mut map: A,
	) -> std::result::Result<Self::Value, A::Error> {
		let mut children = BTreeMap::new();

		while let Some(word) = map.next_key::<String>()? {
			if self.depth == 0 {
				return Err(de::Error::custom(format_args!("path through {word:?} is too deep")));
			}
			if children.keys().next_back().is_some_and(|last: &String| *last >= word) {
				return Err(de::Error::custom(format_args!(
					"word {word:?} is duplicated or out of order"
				)));
			}
			let child = map.next_value_seed(NodeSeed { depth: self.depth - 1 })?;
			children.insert(word, child);
		}

		Ok(children)
	}
}

/// Encodes a model into a byte vector.
pub fn to_bytes(trie: &FrequencyTrie) -> Result<Vec<u8>> {
	Ok(postcard::to_stdvec(&ModelRef::from(trie))?)
}

/// Encodes a model into `writer`.
///
/// The writer is flushed before returning.
pub fn write_to<W: Write>(trie: &FrequencyTrie, writer: W) -> Result<()> {
	let mut writer = postcard::to_io(&ModelRef::from(trie), writer)?;
	writer.flush()?;
	Ok(())
}

/// Decodes a model previously produced by [`to_bytes`] or [`write_to`].
///
/// # Errors
/// - [`Error::Codec`] if the data is truncated, a length does not match
///   the data, a count does not fit an unsigned 32-bit integer, words are
///   duplicated or unsorted, or a path is deeper than `order + 1` words.
/// - [`Error::Format`] if the version is unknown, the order is 0 or above
///   [`MAX_ORDER`](crate::model::trie::MAX_ORDER), a word has a zero count, or bytes remain
///   after the model.
pub fn from_bytes(bytes: &[u8]) -> Result<FrequencyTrie> {
	let mut deserializer = postcard::Deserializer::from_bytes(bytes);

	let format_version = u32::deserialize(&mut deserializer)?;
	if format_version != FORMAT_VERSION {
		return Err(Error::Format(format!(
			"unsupported format version {} (expected {})",
			format_version, FORMAT_VERSION
		)));
	}

	let order = usize::deserialize(&mut deserializer)?;
	let max_depth = FrequencyTrie::check_decoded_order(order)?;
	let root = NodeSeed { depth: max_depth }.deserialize(&mut deserializer)?;

	let rest = deserializer.finalize()?;
	if !rest.is_empty() {
		return Err(Error::Format(format!("{} unexpected trailing bytes", rest.len())));
	}

	FrequencyTrie::from_parts(order, root)
}

/// Writes a model to `path`, replacing any existing file.
pub fn save<P: AsRef<Path>>(trie: &FrequencyTrie, path: P) -> Result<()> {
	let path = path.as_ref();
	let file = File::create(path).map_err(with_path(path))?;
	write_to(trie, BufWriter::new(file))
}

/// Reads a model from `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<FrequencyTrie> {
	from_bytes(&read_bytes(path)?)
}
