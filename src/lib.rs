//! # Tagtree
//!
//! Declarative construction of DOM element trees.
//!
//! A single call creates an element, sets its attributes and attaches its
//! children, each of which is either plain text or an already-built node:
//!
//! ```
//! use tagtree::prelude::*;
//!
//! let mut doc = MemoryDocument::new();
//! let item = build(&mut doc, "li", &attrs! {}, "First item")?;
//! let list = build(&mut doc, "ul", &attrs! {}, item)?;
//!
//! assert_eq!(doc.render(list)?, "<ul><li>First item</li></ul>");
//! # Ok::<(), tagtree::dom::DomError>(())
//! ```
//!
//! ## Hosts
//!
//! The builder talks to a host through the [`DomHost`](dom::DomHost) trait.
//! Two hosts are provided:
//!
//! - [`MemoryDocument`](dom::MemoryDocument) - an arena-backed document that
//!   renders to an HTML string. Works on every target.
//! - `WebDocument` - the browser's `document`, available on `wasm32` only.
//!
//! ## Feature Flags
//!
//! - `dom` (default) - the element builder and both hosts

#[cfg(feature = "dom")]
pub mod dom;

/// Commonly used items
#[cfg(feature = "dom")]
pub mod prelude {
	pub use crate::dom::builder::html::*;
	pub use crate::dom::{
		AttributeMap, Content, ContentItem, DomHost, ElementBuilder, MemoryDocument, NodeId,
		attrs, build, children, element,
	};

	#[cfg(target_arch = "wasm32")]
	pub use crate::dom::WebDocument;
}
