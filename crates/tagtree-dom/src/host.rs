//! DOM host abstraction
//!
//! [`DomHost`] is the seam between the tree-building logic and whatever
//! actually owns the nodes. The builder only ever creates nodes, sets
//! attributes on nodes it just created, and appends children. Nothing else
//! is required from a host.

/// Node construction primitives provided by a document implementation.
///
/// Implementations decide what a node handle is (an arena index, a
/// `web_sys::Node`, ...) and which names they accept. Errors are reported
/// through [`DomHost::Error`] and are propagated unchanged by the builder.
pub trait DomHost {
	/// Handle to a node owned by this host.
	type Node;

	/// Failure raised by the host primitives.
	type Error: std::error::Error;

	/// Creates a new, detached element with the given tag name.
	fn create_element(&mut self, tag_name: &str) -> Result<Self::Node, Self::Error>;

	/// Sets `name` to `value` on `node`, replacing any previous value.
	fn set_attribute(
		&mut self,
		node: &Self::Node,
		name: &str,
		value: &str,
	) -> Result<(), Self::Error>;

	/// Creates a new, detached text node.
	fn create_text_node(&mut self, text: &str) -> Self::Node;

	/// Appends `child` as the last child of `parent`.
	///
	/// A child that already has a parent is moved.
	fn append_child(&mut self, parent: &Self::Node, child: Self::Node) -> Result<(), Self::Error>;
}
