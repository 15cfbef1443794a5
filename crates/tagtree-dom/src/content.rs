//! Element content
//!
//! [`ContentItem`] distinguishes text from already-built nodes statically, and
//! [`Content`] distinguishes a single item from an ordered sequence. The
//! builder never inspects values at runtime to tell them apart.

use std::borrow::Cow;

/// One unit of child content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem<N> {
	/// Raw text, wrapped in a fresh text node when attached.
	Text(Cow<'static, str>),
	/// An already-built node, attached by reference.
	Element(N),
}

impl<N> ContentItem<N> {
	/// Creates a text item.
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(text.into())
	}

	/// Creates an element item.
	pub fn element(node: N) -> Self {
		Self::Element(node)
	}

	/// Returns the text if this is a text item.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::Element(_) => None,
		}
	}
}

impl<N> From<&'static str> for ContentItem<N> {
	fn from(text: &'static str) -> Self {
		Self::Text(Cow::Borrowed(text))
	}
}

impl<N> From<String> for ContentItem<N> {
	fn from(text: String) -> Self {
		Self::Text(Cow::Owned(text))
	}
}

impl<N> From<Cow<'static, str>> for ContentItem<N> {
	fn from(text: Cow<'static, str>) -> Self {
		Self::Text(text)
	}
}

/// The content of an element: one item or an ordered sequence of items.
///
/// An empty sequence means "no children".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<N> {
	/// A single item, equivalent to a one-element sequence.
	Single(ContentItem<N>),
	/// Items attached in order.
	Sequence(Vec<ContentItem<N>>),
}

impl<N> Content<N> {
	/// Content with no children.
	pub fn empty() -> Self {
		Self::Sequence(Vec::new())
	}

	/// Number of children this content produces.
	pub fn len(&self) -> usize {
		match self {
			Self::Single(_) => 1,
			Self::Sequence(items) => items.len(),
		}
	}

	/// Returns `true` if this content produces no children.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Normalizes into an ordered sequence.
	pub fn into_items(self) -> Vec<ContentItem<N>> {
		match self {
			Self::Single(item) => vec![item],
			Self::Sequence(items) => items,
		}
	}
}

impl<N> Default for Content<N> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<N> IntoIterator for Content<N> {
	type Item = ContentItem<N>;
	type IntoIter = std::vec::IntoIter<ContentItem<N>>;

	fn into_iter(self) -> Self::IntoIter {
		self.into_items().into_iter()
	}
}

impl<N> From<ContentItem<N>> for Content<N> {
	fn from(item: ContentItem<N>) -> Self {
		Self::Single(item)
	}
}

impl<N> From<Vec<ContentItem<N>>> for Content<N> {
	fn from(items: Vec<ContentItem<N>>) -> Self {
		Self::Sequence(items)
	}
}

impl<N, const K: usize> From<[ContentItem<N>; K]> for Content<N> {
	fn from(items: [ContentItem<N>; K]) -> Self {
		Self::Sequence(items.into())
	}
}

impl<N> From<()> for Content<N> {
	fn from(_: ()) -> Self {
		Self::empty()
	}
}

impl<N> From<&'static str> for Content<N> {
	fn from(text: &'static str) -> Self {
		Self::Single(text.into())
	}
}

impl<N> From<String> for Content<N> {
	fn from(text: String) -> Self {
		Self::Single(text.into())
	}
}

impl<N> FromIterator<ContentItem<N>> for Content<N> {
	fn from_iter<I: IntoIterator<Item = ContentItem<N>>>(iter: I) -> Self {
		Self::Sequence(iter.into_iter().collect())
	}
}

/// Builds a `Vec<ContentItem<_>>` from text and node values.
///
/// Each argument is converted with `ContentItem::from`, so string literals,
/// `String`s and host node handles can be mixed freely.
///
/// ```
/// use tagtree_dom::{ContentItem, DomHost, MemoryDocument, NodeId, children};
///
/// let mut doc = MemoryDocument::new();
/// let em = doc.create_element("em")?;
/// let items: Vec<ContentItem<NodeId>> = children!["plain ", em, String::from(" tail")];
/// assert_eq!(items.len(), 3);
/// # Ok::<(), tagtree_dom::DomError>(())
/// ```
#[macro_export]
macro_rules! children {
	() => {
		::std::vec::Vec::new()
	};
	($($item:expr),+ $(,)?) => {
		::std::vec![$($crate::ContentItem::from($item)),+]
	};
}
