//! Element tree construction
//!
//! [`build`] is the core operation: it creates one element on a [`DomHost`],
//! sets its attributes, attaches its content in order and returns it.
//! [`ElementBuilder`] and the [`html`] helpers are a fluent front end that
//! collect the same three inputs and hand them to [`build`].
//!
//! ## Example
//!
//! ```
//! use tagtree_dom::MemoryDocument;
//! use tagtree_dom::builder::html::{a, li, ul};
//!
//! let mut doc = MemoryDocument::new();
//! let link = a().attr("href", "/about").text("About").build(&mut doc)?;
//! let item = li().child(link).build(&mut doc)?;
//! let list = ul().class("nav").child(item).build(&mut doc)?;
//!
//! assert_eq!(
//!     doc.render(list)?,
//!     "<ul class=\"nav\"><li><a href=\"/about\">About</a></li></ul>"
//! );
//! # Ok::<(), tagtree_dom::DomError>(())
//! ```

pub mod html;

use crate::attributes::AttributeMap;
use crate::content::{Content, ContentItem};
use crate::host::DomHost;
use std::borrow::Cow;

/// Builds one element on `host`.
///
/// 1. Creates an element named `tag_name`.
/// 2. Sets every entry of `attributes` on it.
/// 3. Attaches each content item in order: text becomes a fresh text node,
///    nodes are attached as they are (and moved if already attached).
///
/// The returned node is detached; attaching it elsewhere is up to the caller.
///
/// # Errors
///
/// Any failure of a host primitive aborts the call and is returned unchanged.
/// Nodes created before the failure are left to the host.
pub fn build<H, C>(
	host: &mut H,
	tag_name: &str,
	attributes: &AttributeMap,
	content: C,
) -> Result<H::Node, H::Error>
where
	H: DomHost + ?Sized,
	C: Into<Content<H::Node>>,
{
	let content = content.into();
	tracing::debug!(
		tag = tag_name,
		attributes = attributes.len(),
		children = content.len(),
		"building element"
	);

	let node = host
		.create_element(tag_name)
		.inspect_err(|e| tracing::debug!(tag = tag_name, error = %e, "element creation failed"))?;

	for (name, value) in attributes {
		host.set_attribute(&node, name, value).inspect_err(|e| {
			tracing::debug!(tag = tag_name, attribute = name, error = %e, "setting attribute failed")
		})?;
	}

	for item in content {
		let child = match item {
			ContentItem::Element(child) => child,
			ContentItem::Text(text) => host.create_text_node(&text),
		};
		host.append_child(&node, child)
			.inspect_err(|e| tracing::debug!(tag = tag_name, error = %e, "appending child failed"))?;
	}

	Ok(node)
}

/// Fluent collector for the inputs of [`build`].
///
/// The builder holds no host, so builders for nested elements can be
/// prepared independently and finished in any order.
///
/// ## Example
///
/// ```
/// use tagtree_dom::{MemoryDocument, element};
///
/// let mut doc = MemoryDocument::new();
/// let p = element("p")
///     .id("intro")
///     .text("A simple paragraph")
///     .build(&mut doc)?;
///
/// assert_eq!(doc.render(p)?, "<p id=\"intro\">A simple paragraph</p>");
/// # Ok::<(), tagtree_dom::DomError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder<N> {
	tag: Cow<'static, str>,
	attributes: AttributeMap,
	content: Vec<ContentItem<N>>,
}

/// Starts an [`ElementBuilder`] for `tag`.
pub fn element<N>(tag: impl Into<Cow<'static, str>>) -> ElementBuilder<N> {
	ElementBuilder::new(tag)
}

impl<N> ElementBuilder<N> {
	/// Create a builder for `tag` with no attributes and no content
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attributes: AttributeMap::new(),
			content: Vec::new(),
		}
	}

	/// Tag name that will be created
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Attributes collected so far
	pub fn attributes(&self) -> &AttributeMap {
		&self.attributes
	}

	/// Set an attribute
	///
	/// Setting the same name again overwrites the previous value.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attributes.insert(name, value);
		self
	}

	/// Merge a whole attribute map
	pub fn attrs(mut self, attributes: AttributeMap) -> Self {
		for (name, value) in &attributes {
			self.attributes.insert(name.to_owned(), value.to_owned());
		}
		self
	}

	/// Set the class attribute
	///
	/// Use space-separated values for multiple classes.
	pub fn class(self, class: impl Into<Cow<'static, str>>) -> Self {
		self.attr("class", class)
	}

	/// Set the id attribute
	pub fn id(self, id: impl Into<Cow<'static, str>>) -> Self {
		self.attr("id", id)
	}

	/// Append a text child
	pub fn text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
		self.content.push(ContentItem::Text(text.into()));
		self
	}

	/// Append an already-built node
	pub fn child(mut self, node: N) -> Self {
		self.content.push(ContentItem::Element(node));
		self
	}

	/// Append content (a single item or a sequence)
	pub fn content(mut self, content: impl Into<Content<N>>) -> Self {
		self.content.extend(content.into());
		self
	}

	/// Create the element on `host`
	///
	/// # Errors
	///
	/// Propagates the first host failure unchanged.
	pub fn build<H>(self, host: &mut H) -> Result<N, H::Error>
	where
		H: DomHost<Node = N> + ?Sized,
	{
		build(host, &self.tag, &self.attributes, self.content)
	}
}
