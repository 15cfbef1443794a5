//! Browser host
//!
//! [`WebDocument`] implements [`DomHost`] on top of `web_sys::Document`.
//! Exceptions thrown by the browser (for example `InvalidCharacterError` for
//! a bad tag name) are converted into [`WebDomError::Js`].

use crate::content::{Content, ContentItem};
use crate::host::DomHost;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures raised by the browser DOM.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebDomError {
	/// Window object not available
	#[error("Window object not available")]
	NoWindow,

	/// Document object not available
	#[error("Document object not available")]
	NoDocument,

	/// Exception thrown by a DOM call
	#[error("DOM exception: {0}")]
	Js(String),
}

impl From<JsValue> for WebDomError {
	fn from(value: JsValue) -> Self {
		let message = value
			.as_string()
			.unwrap_or_else(|| format!("{value:?}"));
		Self::Js(message)
	}
}

/// [`DomHost`] backed by a browser document.
#[derive(Debug, Clone)]
pub struct WebDocument {
	document: web_sys::Document,
}

impl WebDocument {
	/// Wraps an existing document.
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}

	/// Uses `window.document`.
	///
	/// # Errors
	///
	/// Returns [`WebDomError::NoWindow`] or [`WebDomError::NoDocument`] when
	/// not running in a browser window.
	pub fn global() -> Result<Self, WebDomError> {
		let window = web_sys::window().ok_or(WebDomError::NoWindow)?;
		let document = window.document().ok_or(WebDomError::NoDocument)?;
		Ok(Self::new(document))
	}

	/// Returns the underlying `web_sys::Document`.
	pub fn inner(&self) -> &web_sys::Document {
		&self.document
	}
}

impl DomHost for WebDocument {
	type Node = web_sys::Node;
	type Error = WebDomError;

	fn create_element(&mut self, tag_name: &str) -> Result<web_sys::Node, WebDomError> {
		let element = self.document.create_element(tag_name)?;
		Ok(element.into())
	}

	fn set_attribute(
		&mut self,
		node: &web_sys::Node,
		name: &str,
		value: &str,
	) -> Result<(), WebDomError> {
		use wasm_bindgen::JsCast;

		let element = node
			.dyn_ref::<web_sys::Element>()
			.ok_or_else(|| WebDomError::Js("node is not an element".to_string()))?;
		element.set_attribute(name, value)?;
		Ok(())
	}

	fn create_text_node(&mut self, text: &str) -> web_sys::Node {
		self.document.create_text_node(text).into()
	}

	fn append_child(
		&mut self,
		parent: &web_sys::Node,
		child: web_sys::Node,
	) -> Result<(), WebDomError> {
		parent.append_child(&child)?;
		Ok(())
	}
}

impl From<web_sys::Node> for ContentItem<web_sys::Node> {
	fn from(node: web_sys::Node) -> Self {
		Self::Element(node)
	}
}

impl From<web_sys::Element> for ContentItem<web_sys::Node> {
	fn from(element: web_sys::Element) -> Self {
		Self::Element(element.into())
	}
}

impl From<web_sys::Node> for Content<web_sys::Node> {
	fn from(node: web_sys::Node) -> Self {
		Self::Single(ContentItem::Element(node))
	}
}
