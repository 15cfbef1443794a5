//! In-memory document
//!
//! [`MemoryDocument`] is an arena-backed [`DomHost`]. It follows DOM
//! semantics closely enough that code built against it behaves the same in a
//! browser:
//!
//! - names are validated and, in HTML mode, ASCII-lowercased
//! - appending a node that already has a parent moves it
//! - appending a node into itself or its own subtree is rejected
//! - handles created by another document are rejected
//!
//! Nodes are never freed. A detached node stays addressable until the
//! document is dropped. Tree walks use an explicit stack, so nesting depth is
//! bounded by memory only.

pub(crate) mod names;
mod node;

pub use node::{NodeId, NodeKind};

use crate::config::{DocumentConfig, DocumentMode};
use crate::content::{Content, ContentItem};
use crate::error::{DomError, Result};
use crate::host::DomHost;
use crate::render;
use names::is_valid_name;
use node::{Node, NodeData};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(0);

fn next_document_id() -> u64 {
	NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Arena-backed DOM implementation.
///
/// A clone keeps the identity of its source, so handles obtained before
/// cloning address the copied nodes in the clone.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
	id: u64,
	nodes: Vec<Node>,
	config: DocumentConfig,
}

impl Default for MemoryDocument {
	fn default() -> Self {
		Self::with_config(DocumentConfig::default())
	}
}

impl MemoryDocument {
	/// Creates an empty HTML document with default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty document with the given configuration.
	pub fn with_config(config: DocumentConfig) -> Self {
		Self {
			id: next_document_id(),
			nodes: Vec::new(),
			config,
		}
	}

	/// Returns the document configuration.
	pub fn config(&self) -> &DocumentConfig {
		&self.config
	}

	/// Number of nodes ever created in this document.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns `true` if no node has been created yet.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Returns `true` if `id` was created by this document.
	pub fn contains(&self, id: NodeId) -> bool {
		self.get(id).is_some()
	}

	/// Type of the node, or `None` for an unknown handle.
	pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
		self.get(id).map(Node::kind)
	}

	/// Tag name of an element.
	pub fn tag_name(&self, id: NodeId) -> Option<&str> {
		match &self.get(id)?.data {
			NodeData::Element { tag_name, .. } => Some(tag_name),
			NodeData::Text(_) => None,
		}
	}

	/// Value of one attribute of an element.
	///
	/// `name` is normalized like [`DomHost::set_attribute`] does, so lookups are
	/// case-insensitive in HTML mode.
	pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
		let name = self.normalize_name(name);
		self.element_attributes(id)?
			.get(name.as_str())
			.map(String::as_str)
	}

	/// All attributes of an element in name order. Empty for text nodes.
	pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.element_attributes(id)
			.into_iter()
			.flatten()
			.map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Children of a node in order. Empty for text nodes.
	pub fn children(&self, id: NodeId) -> &[NodeId] {
		self.get(id).map(Node::children).unwrap_or(&[])
	}

	/// Parent of a node, if attached.
	pub fn parent(&self, id: NodeId) -> Option<NodeId> {
		self.get(id)?.parent
	}

	/// Data of a text node.
	pub fn text(&self, id: NodeId) -> Option<&str> {
		match &self.get(id)?.data {
			NodeData::Text(text) => Some(text),
			NodeData::Element { .. } => None,
		}
	}

	/// Concatenated text of all descendant text nodes, in tree order.
	pub fn text_content(&self, id: NodeId) -> String {
		let mut out = String::new();
		let mut stack = vec![id];
		while let Some(current) = stack.pop() {
			match self.get(current).map(|n| &n.data) {
				Some(NodeData::Text(text)) => out.push_str(text),
				Some(NodeData::Element { children, .. }) => {
					stack.extend(children.iter().rev());
				}
				None => {}
			}
		}
		out
	}

	/// Detaches `child` from `parent`.
	///
	/// # Errors
	///
	/// Returns [`DomError::HierarchyRequest`] if `child` is not a child of `parent`.
	pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
		self.node(parent)?;
		self.node(child)?;
		if self.parent(child) != Some(parent) {
			return Err(DomError::HierarchyRequest(format!(
				"{child} is not a child of {parent}"
			)));
		}
		self.detach(child);
		Ok(())
	}

	/// Copies the subtree rooted at `id` into fresh, detached nodes.
	///
	/// Use this to place the same content under several parents; passing the
	/// same handle twice moves it instead.
	pub fn deep_clone(&mut self, id: NodeId) -> Result<NodeId> {
		let root = self.shallow_copy(id)?;
		let mut stack = vec![(id, root)];
		while let Some((source, target)) = stack.pop() {
			let children = self.children(source).to_vec();
			for child in children {
				let copy = self.shallow_copy(child)?;
				self.attach(target, copy);
				stack.push((child, copy));
			}
		}
		Ok(root)
	}

	/// Deep structural equality of two subtrees.
	///
	/// Compares tag names, attributes, text and children in order. Node
	/// identity and parents are ignored.
	pub fn structurally_equal(&self, a: NodeId, b: NodeId) -> bool {
		let mut stack = vec![(a, b)];
		while let Some((a, b)) = stack.pop() {
			let (Some(left), Some(right)) = (self.get(a), self.get(b)) else {
				return false;
			};
			match (&left.data, &right.data) {
				(NodeData::Text(x), NodeData::Text(y)) if x == y => {}
				(
					NodeData::Element {
						tag_name: tag_a,
						attributes: attrs_a,
						children: children_a,
					},
					NodeData::Element {
						tag_name: tag_b,
						attributes: attrs_b,
						children: children_b,
					},
				) if tag_a == tag_b && attrs_a == attrs_b && children_a.len() == children_b.len() => {
					stack.extend(children_a.iter().copied().zip(children_b.iter().copied()));
				}
				_ => return false,
			}
		}
		true
	}

	/// Serializes the subtree rooted at `id` with the configured options.
	pub fn render(&self, id: NodeId) -> Result<String> {
		render::render_to_string(self, id, &self.config.render)
	}

	fn get(&self, id: NodeId) -> Option<&Node> {
		if id.document != self.id {
			return None;
		}
		self.nodes.get(id.index)
	}

	fn node(&self, id: NodeId) -> Result<&Node> {
		self.get(id).ok_or(DomError::UnknownNode(id))
	}

	fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
		if id.document != self.id {
			return Err(DomError::UnknownNode(id));
		}
		self.nodes.get_mut(id.index).ok_or(DomError::UnknownNode(id))
	}

	fn element_attributes(&self, id: NodeId) -> Option<&BTreeMap<String, String>> {
		match &self.get(id)?.data {
			NodeData::Element { attributes, .. } => Some(attributes),
			NodeData::Text(_) => None,
		}
	}

	fn push(&mut self, node: Node) -> NodeId {
		let id = NodeId {
			document: self.id,
			index: self.nodes.len(),
		};
		self.nodes.push(node);
		id
	}

	/// Pushes a detached copy of `id` without its children.
	fn shallow_copy(&mut self, id: NodeId) -> Result<NodeId> {
		let copy = match &self.node(id)?.data {
			NodeData::Text(text) => Node::text(text.clone()),
			NodeData::Element {
				tag_name,
				attributes,
				..
			} => Node {
				parent: None,
				data: NodeData::Element {
					tag_name: tag_name.clone(),
					attributes: attributes.clone(),
					children: Vec::new(),
				},
			},
		};
		Ok(self.push(copy))
	}

	fn normalize_name(&self, name: &str) -> String {
		match self.config.mode {
			DocumentMode::Html => name.to_ascii_lowercase(),
			DocumentMode::Xml => name.to_owned(),
		}
	}

	/// Returns `true` if `candidate` is `node` or one of its ancestors.
	fn is_inclusive_ancestor(&self, candidate: NodeId, node: NodeId) -> bool {
		let mut current = Some(node);
		while let Some(id) = current {
			if id == candidate {
				return true;
			}
			current = self.parent(id);
		}
		false
	}

	/// Unlinks `child` from its parent. `child` must belong to this document.
	fn detach(&mut self, child: NodeId) {
		let Some(old_parent) = self.nodes[child.index].parent.take() else {
			return;
		};
		if let NodeData::Element { children, .. } = &mut self.nodes[old_parent.index].data {
			children.retain(|c| *c != child);
		}
	}

	/// Links a detached `child` under an element `parent`. Both must belong
	/// to this document.
	fn attach(&mut self, parent: NodeId, child: NodeId) {
		self.nodes[child.index].parent = Some(parent);
		if let NodeData::Element { children, .. } = &mut self.nodes[parent.index].data {
			children.push(child);
		}
	}
}

impl DomHost for MemoryDocument {
	type Node = NodeId;
	type Error = DomError;

	fn create_element(&mut self, tag_name: &str) -> Result<NodeId> {
		if self.config.validate_names && !is_valid_name(tag_name) {
			return Err(DomError::InvalidElementName(tag_name.to_owned()));
		}
		let name = self.normalize_name(tag_name);
		Ok(self.push(Node::element(name)))
	}

	fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<()> {
		let id = *node;
		if self.config.validate_names && !is_valid_name(name) {
			return Err(DomError::InvalidAttributeName(name.to_owned()));
		}
		let name = self.normalize_name(name);
		match &mut self.node_mut(id)?.data {
			NodeData::Element { attributes, .. } => {
				attributes.insert(name, value.to_owned());
				Ok(())
			}
			NodeData::Text(_) => Err(DomError::NotAnElement(id)),
		}
	}

	fn create_text_node(&mut self, text: &str) -> NodeId {
		self.push(Node::text(text.to_owned()))
	}

	fn append_child(&mut self, parent: &NodeId, child: NodeId) -> Result<()> {
		let parent = *parent;
		if self.node(parent)?.kind() != NodeKind::Element {
			return Err(DomError::HierarchyRequest(format!(
				"{parent} is a text node and cannot have children"
			)));
		}
		self.node(child)?;
		if self.is_inclusive_ancestor(child, parent) {
			return Err(DomError::HierarchyRequest(format!(
				"{child} is {parent} or one of its ancestors"
			)));
		}

		if let Some(old_parent) = self.parent(child) {
			tracing::trace!(%child, from = %old_parent, to = %parent, "moving attached node");
			self.detach(child);
		}
		self.attach(parent, child);
		Ok(())
	}
}

impl From<NodeId> for ContentItem<NodeId> {
	fn from(node: NodeId) -> Self {
		Self::Element(node)
	}
}

impl From<NodeId> for Content<NodeId> {
	fn from(node: NodeId) -> Self {
		Self::Single(ContentItem::Element(node))
	}
}
