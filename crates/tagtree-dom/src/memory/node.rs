//! Arena node representation

use std::collections::BTreeMap;
use std::fmt;

/// Handle to a node in a [`MemoryDocument`](crate::MemoryDocument).
///
/// A handle carries the arena index and the identity of the document that
/// created it, so a handle from one document is never mistaken for a node of
/// another. Copying a handle does not copy the node. Two handles are equal
/// exactly when they refer to the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
	pub(crate) document: u64,
	pub(crate) index: usize,
}

impl NodeId {
	/// Arena index of this node.
	pub fn index(self) -> usize {
		self.index
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.index)
	}
}

/// Type of node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
	/// Element node
	Element,
	/// Text content
	Text,
}

#[derive(Debug, Clone)]
pub(crate) enum NodeData {
	Element {
		tag_name: String,
		attributes: BTreeMap<String, String>,
		children: Vec<NodeId>,
	},
	Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
	pub(crate) parent: Option<NodeId>,
	pub(crate) data: NodeData,
}

impl Node {
	pub(crate) fn element(tag_name: String) -> Self {
		Self {
			parent: None,
			data: NodeData::Element {
				tag_name,
				attributes: BTreeMap::new(),
				children: Vec::new(),
			},
		}
	}

	pub(crate) fn text(text: String) -> Self {
		Self {
			parent: None,
			data: NodeData::Text(text),
		}
	}

	pub(crate) fn kind(&self) -> NodeKind {
		match self.data {
			NodeData::Element { .. } => NodeKind::Element,
			NodeData::Text(_) => NodeKind::Text,
		}
	}

	pub(crate) fn children(&self) -> &[NodeId] {
		match &self.data {
			NodeData::Element { children, .. } => children,
			NodeData::Text(_) => &[],
		}
	}
}
